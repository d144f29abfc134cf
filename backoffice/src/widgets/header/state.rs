/// Header runtime state.
#[derive(Debug, Default)]
pub(super) struct HeaderState {
    profile_menu_open: bool,
}

impl HeaderState {
    pub(super) fn is_profile_menu_open(&self) -> bool {
        self.profile_menu_open
    }

    pub(super) fn set_profile_menu_open(&mut self, open: bool) {
        self.profile_menu_open = open;
    }
}
