pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use std::time::{Duration, Instant};

use backoffice_layout::{LayoutMode, RouteTable};
use iced::Task;

pub(crate) use self::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use self::model::SidebarViewModel;
pub(crate) use self::reducer::SidebarCtx;
use self::state::SidebarState;

/// Inputs the shell supplies when building the sidebar view model.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarVmCtx<'a> {
    pub(crate) routes: &'a RouteTable,
    pub(crate) active_path: Option<&'a str>,
    pub(crate) mode: LayoutMode,
    pub(crate) now: Instant,
    pub(crate) panel_width: f32,
    pub(crate) interactive: bool,
}

/// Sidebar widget owning the open/closed store and the panel motion.
pub(crate) struct SidebarWidget {
    state: SidebarState,
}

impl SidebarWidget {
    /// Construct the sidebar in its configured initial state.
    pub(crate) fn new(initially_open: bool, transition: Duration) -> Self {
        Self {
            state: SidebarState::new(initially_open, transition),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SidebarIntent,
        ctx: &SidebarCtx,
    ) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm<'a>(
        &'a self,
        ctx: SidebarVmCtx<'a>,
    ) -> SidebarViewModel<'a> {
        SidebarViewModel {
            routes: ctx.routes,
            active_path: ctx.active_path,
            collapsed_groups: self.state.collapsed_groups(),
            mode: ctx.mode,
            progress: self.progress(ctx.now),
            panel_width: ctx.panel_width,
            interactive: ctx.interactive,
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.state.is_open()
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> backoffice_layout::PanelPhase {
        self.state.motion().phase()
    }

    /// Return whether a transition is running and needs frames.
    pub(crate) fn is_animating(&self) -> bool {
        self.state.motion().is_animating()
    }

    /// Return whether an overlay panel must stay in the widget tree.
    pub(crate) fn is_mounted(&self) -> bool {
        self.state.motion().is_mounted()
    }

    /// Eased open progress at `now`.
    pub(crate) fn progress(&self, now: Instant) -> f32 {
        self.state.motion().progress(now)
    }

    #[cfg(test)]
    pub(crate) fn is_group_collapsed(&self, label: &str) -> bool {
        self.state.collapsed_groups().contains(label)
    }
}
