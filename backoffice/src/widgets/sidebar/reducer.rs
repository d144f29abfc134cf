use std::time::Instant;

use backoffice_layout::LayoutMode;
use iced::Task;

use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use super::state::SidebarState;

/// Read-only context for sidebar reduction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarCtx {
    pub(crate) now: Instant,
    pub(crate) mode: LayoutMode,
}

/// Reduce a sidebar intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut SidebarState,
    event: SidebarIntent,
    ctx: &SidebarCtx,
) -> Task<SidebarEvent> {
    match event {
        SidebarIntent::Toggle => toggle(state, ctx),
        SidebarIntent::Navigate { path } => {
            let navigate =
                Task::done(SidebarEvent::Effect(SidebarEffect::Navigate {
                    path,
                }));

            // The overlay covers the page, so leaving it open would hide
            // the destination.
            if ctx.mode == LayoutMode::Compact && state.is_open() {
                Task::batch([navigate, toggle(state, ctx)])
            } else {
                navigate
            }
        },
        SidebarIntent::ToggleGroup { label } => {
            let collapsed = state.toggle_group(&label);
            log::debug!("sidebar group '{label}' collapsed={collapsed}");
            Task::none()
        },
        SidebarIntent::SignOut => {
            Task::done(SidebarEvent::Effect(SidebarEffect::SignOut))
        },
        SidebarIntent::Tick => {
            if let Some(phase) = state.tick(ctx.now) {
                log::debug!("sidebar transition settled: {phase:?}");
            }
            Task::none()
        },
    }
}

fn toggle(state: &mut SidebarState, ctx: &SidebarCtx) -> Task<SidebarEvent> {
    let is_open = state.toggle(ctx.now);
    log::info!("sidebar toggled: is_open={is_open} mode={:?}", ctx.mode);
    Task::done(SidebarEvent::Effect(SidebarEffect::Toggled))
}
