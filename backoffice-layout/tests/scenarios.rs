use std::time::{Duration, Instant};

use backoffice_layout::{
    Breakpoints, LayoutConstants, LayoutGeometry, LayoutMode, PanelMotion,
    PanelPhase, PanelWidth, SidebarStore, ViewportTracker,
};

fn geometry_for(width: f32, is_open: bool) -> LayoutGeometry {
    let class = Breakpoints::default().classify(width);
    LayoutConstants::default().resolve(class, is_open)
}

#[test]
fn given_desktop_width_and_open_panel_when_resolved_then_panel_takes_wide_column()
 {
    let geometry = geometry_for(1920.0, true);
    assert_eq!(geometry.grid_template.to_string(), "250px 1fr");
    assert_eq!(geometry.panel_width.to_string(), "250px");
}

#[test]
fn given_desktop_width_and_closed_panel_when_resolved_then_rail_shifts_regions()
 {
    let geometry = geometry_for(1920.0, false);
    assert_eq!(geometry.grid_template.to_string(), "250px 1fr");
    assert_eq!(geometry.panel_width.to_string(), "100px");
    assert_eq!(geometry.header_margin().to_string(), "-150px");
    assert_eq!(geometry.content_margin().to_string(), "-170px");
}

#[test]
fn given_phone_width_and_closed_panel_when_resolved_then_panel_is_hidden() {
    let geometry = geometry_for(375.0, false);
    assert!(!geometry.panel_visible);
    assert_eq!(geometry.panel_width, PanelWidth::Hidden);
    assert_eq!(geometry.grid_template.to_string(), "0 1fr");
}

#[test]
fn given_phone_width_and_open_panel_when_resolved_then_panel_overlays_full_width()
 {
    let geometry = geometry_for(375.0, true);
    assert!(geometry.panel_visible);
    assert_eq!(geometry.panel_width, PanelWidth::Full);
    assert_eq!(geometry.panel_width.to_px(375.0), 375.0);
    assert_eq!(geometry.grid_template.to_string(), "0 1fr");
    assert_eq!(geometry.header_inset(), 0.0);
}

#[test]
fn given_store_and_motion_when_toggled_twice_then_layout_returns_to_start() {
    let start = Instant::now();
    let constants = LayoutConstants::default();
    let class = Breakpoints::default().classify(1440.0);
    let mut store = SidebarStore::new(true);
    let mut motion = PanelMotion::new(store.is_open(), constants.transition());
    let initial = constants.resolve(class, store.is_open());

    motion.retarget(store.toggle(), start);
    let halfway = start + Duration::from_millis(50);
    motion.retarget(store.toggle(), halfway);

    let settled = halfway + constants.transition();
    assert_eq!(motion.tick(settled), Some(PanelPhase::Open));
    assert_eq!(constants.resolve(class, store.is_open()), initial);
}

#[test]
fn given_window_shrinking_to_phone_when_tracked_then_layout_switches_to_overlay()
 {
    let start = Instant::now();
    let constants = LayoutConstants::default();
    let mut tracker = ViewportTracker::new(Breakpoints::default(), 1920.0);
    let store = SidebarStore::new(false);

    let rail = constants.resolve(tracker.class(), store.is_open());
    assert!(rail.panel_visible);

    let change = tracker
        .observe(375.0, start)
        .expect("class should change");
    assert_eq!(change.current.mode(), LayoutMode::Compact);

    let overlay = constants.resolve(tracker.class(), store.is_open());
    assert!(!overlay.panel_visible);
}
