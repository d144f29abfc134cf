use backoffice_layout::ScreenClass;

use crate::config::Profile;

/// Read-only header snapshot for the view layer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderViewModel<'a> {
    pub(crate) title: &'a str,
    pub(crate) profile: &'a Profile,
    pub(crate) screen_class: ScreenClass,
    /// Left padding that keeps the header clear of the panel track.
    pub(crate) inset: f32,
    pub(crate) is_profile_menu_open: bool,
}
