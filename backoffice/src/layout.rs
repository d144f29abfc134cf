use backoffice_layout::{
    LayoutConstants, LayoutGeometry, LayoutMode, ScreenClass,
};

/// What the shell needs to know about the panel to place it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PanelSnapshot {
    pub(crate) is_open: bool,
    pub(crate) animating: bool,
    pub(crate) mounted: bool,
    /// Eased open progress, `1.0` when fully open.
    pub(crate) progress: f32,
}

/// Pixel placement of the shell regions for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FrameLayout {
    pub(crate) geometry: LayoutGeometry,
    pub(crate) mode: LayoutMode,
    pub(crate) panel_mounted: bool,
    /// False while a closing overlay fades out; it must not take input.
    pub(crate) panel_interactive: bool,
    pub(crate) panel_px: f32,
}

/// Resolve the frame layout from the settled geometry and the panel motion.
///
/// The regular rail interpolates widths and margins between the collapsed
/// and expanded geometries. The compact overlay keeps full width and stays
/// mounted until its closing transition ends.
pub(crate) fn frame_layout(
    constants: &LayoutConstants,
    class: ScreenClass,
    panel: PanelSnapshot,
    available_width: f32,
) -> FrameLayout {
    let mode = class.mode();
    let geometry = match mode {
        LayoutMode::Regular if panel.animating => LayoutGeometry::blend(
            &constants.resolve(class, false),
            &constants.resolve(class, true),
            panel.progress,
        ),
        _ => constants.resolve(class, panel.is_open),
    };

    let panel_px = match mode {
        LayoutMode::Compact => available_width.max(0.0),
        LayoutMode::Regular => geometry.panel_width.to_px(available_width),
    };

    FrameLayout {
        geometry,
        mode,
        panel_mounted: geometry.panel_visible || panel.mounted,
        panel_interactive: geometry.panel_visible,
        panel_px,
    }
}
