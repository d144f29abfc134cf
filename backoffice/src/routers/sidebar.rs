use std::time::Instant;

use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::header::{HeaderEvent, HeaderIntent};
use crate::widgets::outlet::{OutletEvent, OutletIntent};
use crate::widgets::sidebar::{
    SidebarCtx, SidebarEffect, SidebarEvent, SidebarIntent,
};

/// Route a sidebar event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: SidebarEvent) -> Task<AppEvent> {
    match event {
        SidebarEvent::Intent(event) => route_intent_event(app, event),
        SidebarEvent::Effect(effect) => route_effect_event(app, effect),
    }
}

fn route_intent_event(app: &mut App, event: SidebarIntent) -> Task<AppEvent> {
    // Ticks are sampled against the frame instant set by the window router.
    if !matches!(event, SidebarIntent::Tick) {
        app.state.now = Instant::now();
    }
    let ctx = SidebarCtx {
        now: app.state.now,
        mode: app.state.screen_class().mode(),
    };

    app.widgets
        .sidebar
        .reduce(event, &ctx)
        .map(AppEvent::Sidebar)
}

fn route_effect_event(app: &mut App, event: SidebarEffect) -> Task<AppEvent> {
    use SidebarEffect as E;

    match event {
        E::Toggled => routers::header::route(
            app,
            HeaderEvent::Intent(HeaderIntent::DismissProfileMenu),
        ),
        E::Navigate { path } => Task::done(AppEvent::Outlet(
            OutletEvent::Intent(OutletIntent::Navigate { path }),
        )),
        E::SignOut => Task::done(AppEvent::SignOut),
    }
}
