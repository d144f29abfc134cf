use std::time::Instant;

use backoffice_layout::ViewportChange;
use iced::{Size, Task};

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

/// Record a window size and re-classify the viewport, throttled.
pub(crate) fn handle_resize(
    app: &mut App,
    size: Size,
    now: Instant,
) -> Task<AppEvent> {
    app.state.window_size = size;
    if let Some(change) = app.state.viewport.observe(size.width, now) {
        log_class_change(change);
    }
    Task::none()
}

/// Advance the clock: flush a throttled resize and step the transition.
pub(crate) fn handle_frame(app: &mut App, now: Instant) -> Task<AppEvent> {
    app.state.now = now;
    if let Some(change) = app.state.viewport.flush(now) {
        log_class_change(change);
    }

    if app.widgets.sidebar.is_animating() {
        routers::sidebar::route(
            app,
            SidebarEvent::Intent(SidebarIntent::Tick),
        )
    } else {
        Task::none()
    }
}

fn log_class_change(change: ViewportChange) {
    log::info!(
        "screen class {} -> {} at {}px",
        change.previous,
        change.current,
        change.width
    );
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use backoffice_layout::LayoutMode;
    use iced::Size;

    use super::{handle_frame, handle_resize};
    use crate::app::App;
    use crate::routers;
    use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

    fn size(width: f32) -> Size {
        Size {
            width,
            height: 800.0,
        }
    }

    #[test]
    fn given_resize_burst_when_frame_passes_interval_then_last_width_applies()
    {
        let (mut app, _) = App::new();
        let now = Instant::now();

        let _ = handle_resize(&mut app, size(900.0), now);
        let _ = handle_resize(&mut app, size(375.0), now);
        assert_eq!(app.frame_layout().mode, LayoutMode::Regular);
        assert!(app.state.viewport.has_pending());

        let _ = handle_frame(&mut app, now + Duration::from_millis(60));
        assert_eq!(app.frame_layout().mode, LayoutMode::Compact);
        assert!(!app.state.viewport.has_pending());
        assert_eq!(app.state.viewport.width(), 375.0);
    }

    #[test]
    fn given_resize_within_interval_when_frame_is_early_then_width_stays_pending()
     {
        let (mut app, _) = App::new();
        let now = Instant::now();

        let _ = handle_resize(&mut app, size(900.0), now);
        let _ = handle_resize(&mut app, size(375.0), now);
        let _ = handle_frame(&mut app, now + Duration::from_millis(10));
        assert!(app.state.viewport.has_pending());
        assert_eq!(app.frame_layout().mode, LayoutMode::Regular);
    }

    #[test]
    fn given_running_toggle_when_frames_advance_then_animation_settles_after_duration()
     {
        let (mut app, _) = App::new();
        let duration = app.config.layout.transition();
        let was_open = app.widgets.sidebar.is_open();

        let _ = routers::sidebar::route(
            &mut app,
            SidebarEvent::Intent(SidebarIntent::Toggle),
        );
        let toggled_at = app.state.now;
        assert!(app.widgets.sidebar.is_animating());

        let _ = handle_frame(&mut app, toggled_at + duration / 2);
        assert!(app.widgets.sidebar.is_animating());

        let _ = handle_frame(
            &mut app,
            toggled_at + duration + Duration::from_millis(1),
        );
        assert!(!app.widgets.sidebar.is_animating());
        assert_eq!(app.widgets.sidebar.is_open(), !was_open);
    }

    #[test]
    fn given_phone_overlay_closing_when_laid_out_then_panel_is_mounted_but_inert()
     {
        let (mut app, _) = App::new();
        let now = Instant::now();
        let _ = handle_resize(&mut app, size(375.0), now);
        if !app.widgets.sidebar.is_open() {
            let _ = routers::sidebar::route(
                &mut app,
                SidebarEvent::Intent(SidebarIntent::Toggle),
            );
            let settled_at = app.state.now + Duration::from_secs(1);
            let _ = handle_frame(&mut app, settled_at);
        }

        let _ = routers::sidebar::route(
            &mut app,
            SidebarEvent::Intent(SidebarIntent::Toggle),
        );
        let frame = app.frame_layout();
        assert_eq!(frame.mode, LayoutMode::Compact);
        assert!(frame.panel_mounted);
        assert!(!frame.panel_interactive);
    }
}
