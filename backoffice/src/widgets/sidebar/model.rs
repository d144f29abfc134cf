use std::collections::BTreeSet;
use std::f32::consts::PI;

use backoffice_layout::{LayoutMode, RouteTable};

/// Labels fainter than this are not laid out at all.
const LABEL_MIN_ALPHA: f32 = 0.05;

/// Read-only sidebar snapshot for the view layer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewModel<'a> {
    pub(crate) routes: &'a RouteTable,
    pub(crate) active_path: Option<&'a str>,
    pub(crate) collapsed_groups: &'a BTreeSet<String>,
    pub(crate) mode: LayoutMode,
    /// Eased open progress, `1.0` when fully open.
    pub(crate) progress: f32,
    pub(crate) panel_width: f32,
    /// Whether rows and buttons accept presses.
    pub(crate) interactive: bool,
}

impl SidebarViewModel<'_> {
    /// Opacity of link labels and group headers.
    pub(crate) fn label_alpha(&self) -> f32 {
        self.progress
    }

    /// Opacity of the panel surface and icons.
    ///
    /// The compact overlay fades as a whole; the regular rail keeps its
    /// icons visible while collapsed.
    pub(crate) fn panel_alpha(&self) -> f32 {
        match self.mode {
            LayoutMode::Compact => self.progress,
            LayoutMode::Regular => 1.0,
        }
    }

    pub(crate) fn shows_labels(&self) -> bool {
        self.label_alpha() > LABEL_MIN_ALPHA
    }

    /// Chevron rotation: pointing left when open, right when closed.
    pub(crate) fn toggle_rotation(&self) -> f32 {
        (1.0 - self.progress) * PI
    }

    /// Rail mode has no group headers, so every group shows its icons.
    pub(crate) fn is_group_expanded(&self, label: &str) -> bool {
        !self.shows_labels() || !self.collapsed_groups.contains(label)
    }

    pub(crate) fn is_active(&self, path: &str) -> bool {
        self.active_path == Some(path)
    }

    /// `intent` when the panel takes input, nothing while it fades out.
    pub(crate) fn press<T>(&self, intent: T) -> Option<T> {
        self.interactive.then_some(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vm<'a>(
        routes: &'a RouteTable,
        collapsed: &'a BTreeSet<String>,
        mode: LayoutMode,
        progress: f32,
    ) -> SidebarViewModel<'a> {
        SidebarViewModel {
            routes,
            active_path: Some("/users"),
            collapsed_groups: collapsed,
            mode,
            progress,
            panel_width: 250.0,
            interactive: true,
        }
    }

    #[test]
    fn given_collapsed_rail_when_rendering_then_labels_hide_and_icons_stay() {
        let routes = RouteTable::default();
        let collapsed = BTreeSet::new();
        let vm = vm(&routes, &collapsed, LayoutMode::Regular, 0.0);
        assert!(!vm.shows_labels());
        assert_eq!(vm.panel_alpha(), 1.0);
        assert!((vm.toggle_rotation() - PI).abs() < 1e-6);
    }

    #[test]
    fn given_compact_overlay_midway_when_rendering_then_panel_fades() {
        let routes = RouteTable::default();
        let collapsed = BTreeSet::new();
        let vm = vm(&routes, &collapsed, LayoutMode::Compact, 0.5);
        assert_eq!(vm.panel_alpha(), 0.5);
        assert!(vm.shows_labels());
    }

    #[test]
    fn given_fading_overlay_when_pressed_then_no_intent_is_produced() {
        let routes = RouteTable::default();
        let collapsed = BTreeSet::new();
        let mut fading = vm(&routes, &collapsed, LayoutMode::Compact, 0.3);
        fading.interactive = false;
        let live = vm(&routes, &collapsed, LayoutMode::Compact, 0.3);

        assert_eq!(fading.press("/orders"), None);
        assert_eq!(live.press("/orders"), Some("/orders"));
    }

    #[test]
    fn given_collapsed_group_when_open_then_group_hides_entries_only_with_labels()
     {
        let routes = RouteTable::default();
        let collapsed = BTreeSet::from([String::from("Management")]);
        let open = vm(&routes, &collapsed, LayoutMode::Regular, 1.0);
        let rail = vm(&routes, &collapsed, LayoutMode::Regular, 0.0);
        assert!(!open.is_group_expanded("Management"));
        assert!(open.is_group_expanded("Overview"));
        assert!(rail.is_group_expanded("Management"));
        assert!(open.is_active("/users"));
        assert_eq!(open.toggle_rotation(), 0.0);
    }
}
