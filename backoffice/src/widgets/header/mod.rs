pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use backoffice_layout::ScreenClass;
use iced::Task;

pub(crate) use self::event::{HeaderEffect, HeaderEvent, HeaderIntent};
use self::model::HeaderViewModel;
use self::state::HeaderState;
use crate::config::Profile;

/// Inputs the shell supplies when building the header view model.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderVmCtx<'a> {
    pub(crate) title: &'a str,
    pub(crate) profile: &'a Profile,
    pub(crate) screen_class: ScreenClass,
    pub(crate) inset: f32,
}

/// Top bar with the panel toggle, page title and profile menu.
pub(crate) struct HeaderWidget {
    state: HeaderState,
}

impl HeaderWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: HeaderState::default(),
        }
    }

    /// Reduce a header intent into state updates and effect events.
    pub(crate) fn reduce(&mut self, event: HeaderIntent) -> Task<HeaderEvent> {
        reducer::reduce(&mut self.state, event)
    }

    pub(crate) fn vm<'a>(&self, ctx: HeaderVmCtx<'a>) -> HeaderViewModel<'a> {
        HeaderViewModel {
            title: ctx.title,
            profile: ctx.profile,
            screen_class: ctx.screen_class,
            inset: ctx.inset,
            is_profile_menu_open: self.state.is_profile_menu_open(),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_profile_menu_open(&self) -> bool {
        self.state.is_profile_menu_open()
    }
}
