use std::time::Duration;

use iced::{Subscription, window};

use crate::app::{App, AppEvent};

/// Frame pacing while a transition runs or a resize is throttled.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));

    let mut subs = vec![win_subs];

    if wants_frames(app) {
        subs.push(iced::time::every(FRAME_INTERVAL).map(AppEvent::Frame));
    }

    Subscription::batch(subs)
}

fn wants_frames(app: &App) -> bool {
    app.widgets.sidebar.is_animating() || app.state.viewport.has_pending()
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use iced::Size;

    use super::wants_frames;
    use crate::app::App;
    use crate::routers;
    use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

    #[test]
    fn given_idle_shell_when_subscribing_then_no_frames_are_requested() {
        let (app, _) = App::new();
        assert!(!wants_frames(&app));
    }

    #[test]
    fn given_throttled_resize_when_subscribing_then_frames_run_until_flushed() {
        let (mut app, _) = App::new();
        let now = Instant::now();
        let size = |width| Size {
            width,
            height: 800.0,
        };

        let _ = routers::window::handle_resize(&mut app, size(900.0), now);
        let _ = routers::window::handle_resize(&mut app, size(375.0), now);
        assert!(wants_frames(&app));

        let _ = routers::window::handle_frame(
            &mut app,
            now + Duration::from_millis(60),
        );
        assert!(!wants_frames(&app));
    }

    #[test]
    fn given_sidebar_transition_when_subscribing_then_frames_run_until_settled()
    {
        let (mut app, _) = App::new();
        let _ = routers::sidebar::route(
            &mut app,
            SidebarEvent::Intent(SidebarIntent::Toggle),
        );
        assert!(wants_frames(&app));

        let settled_at = app.state.now + Duration::from_secs(1);
        let _ = routers::window::handle_frame(&mut app, settled_at);
        assert!(!wants_frames(&app));
    }
}
