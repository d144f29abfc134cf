use std::time::Instant;

use backoffice_layout::{Breakpoints, ScreenClass, ViewportTracker};
use iced::Size;

/// Window geometry and the clock the view samples transitions against.
pub(crate) struct State {
    pub(crate) window_size: Size,
    pub(crate) viewport: ViewportTracker,
    /// Last instant the app observed; views never read the clock directly.
    pub(crate) now: Instant,
}

impl State {
    pub(crate) fn new(window_size: Size, breakpoints: Breakpoints) -> Self {
        Self {
            window_size,
            viewport: ViewportTracker::new(breakpoints, window_size.width),
            now: Instant::now(),
        }
    }

    pub(crate) fn screen_class(&self) -> ScreenClass {
        self.viewport.class()
    }
}
