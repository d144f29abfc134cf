use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use backoffice_layout::{PanelMotion, PanelPhase, SidebarStore};

/// Internal runtime state for the navigation panel.
#[derive(Debug)]
pub(super) struct SidebarState {
    store: SidebarStore,
    motion: PanelMotion,
    collapsed_groups: BTreeSet<String>,
}

impl SidebarState {
    pub(super) fn new(initially_open: bool, transition: Duration) -> Self {
        Self {
            store: SidebarStore::new(initially_open),
            motion: PanelMotion::new(initially_open, transition),
            collapsed_groups: BTreeSet::new(),
        }
    }

    pub(super) fn is_open(&self) -> bool {
        self.store.is_open()
    }

    pub(super) fn motion(&self) -> &PanelMotion {
        &self.motion
    }

    pub(super) fn collapsed_groups(&self) -> &BTreeSet<String> {
        &self.collapsed_groups
    }

    /// Flip the store and start the matching transition.
    pub(super) fn toggle(&mut self, now: Instant) -> bool {
        let is_open = self.store.toggle();
        self.motion.retarget(is_open, now);
        is_open
    }

    pub(super) fn tick(&mut self, now: Instant) -> Option<PanelPhase> {
        self.motion.tick(now)
    }

    /// Collapse or expand a group. Returns whether it is now collapsed.
    pub(super) fn toggle_group(&mut self, label: &str) -> bool {
        if self.collapsed_groups.remove(label) {
            false
        } else {
            self.collapsed_groups.insert(label.to_string());
            true
        }
    }
}
