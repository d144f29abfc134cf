pub(crate) mod event;
pub(crate) mod model;
mod reducer;
pub(crate) mod services;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{OutletEffect, OutletEvent, OutletIntent};
use self::model::OutletViewModel;
pub(crate) use self::reducer::OutletCtx;
use self::services::PageLoader;
use self::state::OutletState;

/// Content area rendering the page for the active route.
pub(crate) struct OutletWidget {
    state: OutletState,
    loader: Box<dyn PageLoader>,
}

impl OutletWidget {
    pub(crate) fn new(loader: Box<dyn PageLoader>) -> Self {
        Self {
            state: OutletState::default(),
            loader,
        }
    }

    /// Reduce an outlet intent into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: OutletIntent,
        ctx: &OutletCtx<'_>,
    ) -> Task<OutletEvent> {
        reducer::reduce(&mut self.state, self.loader.as_ref(), event, ctx)
    }

    pub(crate) fn vm(&self, inset: f32) -> OutletViewModel<'_> {
        OutletViewModel {
            page: self.state.active_page(),
            inset,
        }
    }

    /// Path of the page currently shown, if any.
    pub(crate) fn active_path(&self) -> Option<&str> {
        self.state.active_path()
    }

    pub(crate) fn loaded_count(&self) -> usize {
        self.state.loaded_count()
    }
}
