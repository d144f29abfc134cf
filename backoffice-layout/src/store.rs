/// Open/closed flag of the navigation panel.
///
/// The shell owns a single instance and passes it down; [`toggle`] is the
/// only mutation path.
///
/// [`toggle`]: SidebarStore::toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarStore {
    is_open: bool,
}

impl SidebarStore {
    /// Create a store with the given initial state.
    pub fn new(initially_open: bool) -> Self {
        Self {
            is_open: initially_open,
        }
    }

    /// Return whether the panel is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Flip the open flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        log::debug!("sidebar store toggled: is_open={}", self.is_open);
        self.is_open
    }
}

impl Default for SidebarStore {
    fn default() -> Self {
        Self::new(true)
    }
}
