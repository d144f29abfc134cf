use std::time::Instant;

use iced::{Task, window};

use super::{App, AppEvent};
use crate::routers;
use crate::widgets::outlet::{OutletEvent, OutletIntent};

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => open_landing_page(app),
        AppEvent::Sidebar(event) => routers::sidebar::route(app, event),
        AppEvent::Header(event) => routers::header::route(app, event),
        AppEvent::Outlet(event) => routers::outlet::route(app, event),
        AppEvent::SignOut => {
            log::info!("signing out {}", app.config.profile.username);
            iced::exit()
        },
        AppEvent::Frame(now) => routers::window::handle_frame(app, now),
        AppEvent::Window(window::Event::Opened { size, .. })
        | AppEvent::Window(window::Event::Resized(size)) => {
            routers::window::handle_resize(app, size, Instant::now())
        },
        AppEvent::Window(_) => Task::none(),
    }
}

fn open_landing_page(app: &App) -> Task<AppEvent> {
    let Some(path) = app.config.routes.first_path() else {
        log::warn!("route table is empty, nothing to show");
        return Task::none();
    };

    Task::done(AppEvent::Outlet(OutletEvent::Intent(OutletIntent::Navigate {
        path: path.to_string(),
    })))
}
