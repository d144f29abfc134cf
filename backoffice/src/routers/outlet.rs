use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::outlet::{
    OutletCtx, OutletEffect, OutletEvent, OutletIntent,
};

/// Route an outlet event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: OutletEvent) -> Task<AppEvent> {
    match event {
        OutletEvent::Intent(event) => route_intent_event(app, event),
        OutletEvent::Effect(effect) => route_effect_event(effect),
    }
}

fn route_intent_event(app: &mut App, event: OutletIntent) -> Task<AppEvent> {
    let ctx = OutletCtx {
        routes: &app.config.routes,
    };
    let task = app.widgets.outlet.reduce(event, &ctx).map(AppEvent::Outlet);

    log::debug!(
        "outlet at {:?}, {} pages cached",
        app.widgets.outlet.active_path(),
        app.widgets.outlet.loaded_count()
    );

    task
}

fn route_effect_event(event: OutletEffect) -> Task<AppEvent> {
    use OutletEffect as E;

    match event {
        E::RouteMissing { path } => {
            log::warn!("no route registered for {path}");
            Task::none()
        },
    }
}
