use backoffice_layout::RouteTable;
use iced::Task;

use super::event::{OutletEffect, OutletEvent, OutletIntent};
use super::services::PageLoader;
use super::state::OutletState;

/// Read-only context for outlet reduction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OutletCtx<'a> {
    pub(crate) routes: &'a RouteTable,
}

/// Reduce an outlet intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut OutletState,
    loader: &dyn PageLoader,
    event: OutletIntent,
    ctx: &OutletCtx<'_>,
) -> Task<OutletEvent> {
    match event {
        OutletIntent::Navigate { path } => {
            if state.active_path() == Some(path.as_str()) {
                return Task::none();
            }

            let page = state.activate(&path, loader, ctx.routes);
            if page.is_not_found() {
                Task::done(OutletEvent::Effect(OutletEffect::RouteMissing {
                    path,
                }))
            } else {
                Task::none()
            }
        },
    }
}
