use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::breakpoint::{LayoutMode, ScreenClass};
use crate::error::LayoutError;

/// One column of the page grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Track {
    /// Fixed width in logical pixels.
    Px(f32),
    /// Fraction of the remaining space.
    Fr(u16),
}

impl Track {
    /// Width of a fixed track, zero for fractional tracks.
    pub fn fixed_px(self) -> f32 {
        match self {
            Track::Px(px) => px,
            Track::Fr(_) => 0.0,
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Track::Px(px) if *px == 0.0 => f.write_str("0"),
            Track::Px(px) => write!(f, "{px}px"),
            Track::Fr(fr) => write!(f, "{fr}fr"),
        }
    }
}

/// Two-column page grid: panel column, then content column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTemplate {
    pub columns: [Track; 2],
}

impl GridTemplate {
    fn new(panel: Track, content: Track) -> Self {
        Self {
            columns: [panel, content],
        }
    }

    /// Width reserved for the panel column.
    pub fn panel_track(&self) -> Track {
        self.columns[0]
    }

    /// Number of columns in the template.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

impl fmt::Display for GridTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.columns[0], self.columns[1])
    }
}

/// Rendered width of the navigation panel.
///
/// Variants are ordered by size, so `Hidden < Fixed(_) < Full`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum PanelWidth {
    Hidden,
    Fixed(f32),
    Full,
}

impl PanelWidth {
    /// Resolve against the available width.
    pub fn to_px(self, available: f32) -> f32 {
        match self {
            PanelWidth::Hidden => 0.0,
            PanelWidth::Fixed(px) => px.min(available.max(0.0)),
            PanelWidth::Full => available.max(0.0),
        }
    }
}

impl fmt::Display for PanelWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelWidth::Hidden => f.write_str("0"),
            PanelWidth::Fixed(px) => write!(f, "{px}px"),
            PanelWidth::Full => f.write_str("100%"),
        }
    }
}

/// Horizontal offset applied to a region's leading edge.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Offset(pub f32);

impl Offset {
    pub const ZERO: Offset = Offset(0.0);

    pub fn px(self) -> f32 {
        self.0
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}px", self.0)
        }
    }
}

/// Layout values derived from `(ScreenClass, is_open)`.
///
/// Never stored as mutable state: call [`LayoutConstants::resolve`] again
/// whenever either input may have changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutGeometry {
    pub panel_width: PanelWidth,
    /// Offset of the content region.
    pub start_margin: Offset,
    /// Offset of the header.
    pub end_margin: Offset,
    pub grid_template: GridTemplate,
    pub panel_visible: bool,
}

impl LayoutGeometry {
    /// Offset applied to the header.
    pub fn header_margin(&self) -> Offset {
        self.end_margin
    }

    /// Offset applied to the content region.
    pub fn content_margin(&self) -> Offset {
        self.start_margin
    }

    /// Leading inset of the content region in pixels.
    pub fn content_inset(&self) -> f32 {
        let track = self.grid_template.panel_track().fixed_px();
        (track + self.start_margin.px()).max(0.0)
    }

    /// Leading inset of the header in pixels.
    pub fn header_inset(&self) -> f32 {
        let track = self.grid_template.panel_track().fixed_px();
        (track + self.end_margin.px()).max(0.0)
    }

    /// Interpolate pixel values between two geometries.
    ///
    /// `t` is clamped to `[0, 1]`. Grid template and visibility are taken
    /// from `to`; widths that are not both fixed snap to `to`.
    pub fn blend(from: &Self, to: &Self, t: f32) -> Self {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };

        let panel_width = match (from.panel_width, to.panel_width) {
            (PanelWidth::Fixed(a), PanelWidth::Fixed(b)) => {
                PanelWidth::Fixed(lerp(a, b, t))
            },
            (_, target) => target,
        };

        Self {
            panel_width,
            start_margin: Offset(lerp(
                from.start_margin.px(),
                to.start_margin.px(),
                t,
            )),
            end_margin: Offset(lerp(
                from.end_margin.px(),
                to.end_margin.px(),
                t,
            )),
            grid_template: to.grid_template,
            panel_visible: to.panel_visible,
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Configurable widths and rail offsets used by the resolver.
///
/// The collapsed offsets are design constants, not derived from the widths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConstants {
    pub expanded_width: f32,
    pub collapsed_width: f32,
    pub collapsed_content_offset: f32,
    pub collapsed_header_offset: f32,
    pub transition_ms: u64,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            expanded_width: 250.0,
            collapsed_width: 100.0,
            collapsed_content_offset: -170.0,
            collapsed_header_offset: -150.0,
            transition_ms: 200,
        }
    }
}

impl LayoutConstants {
    /// Map a screen class and open flag to concrete layout values.
    pub fn resolve(&self, class: ScreenClass, is_open: bool) -> LayoutGeometry {
        match class.mode() {
            LayoutMode::Compact => LayoutGeometry {
                panel_width: if is_open {
                    PanelWidth::Full
                } else {
                    PanelWidth::Hidden
                },
                start_margin: Offset::ZERO,
                end_margin: Offset::ZERO,
                grid_template: GridTemplate::new(Track::Px(0.0), Track::Fr(1)),
                panel_visible: is_open,
            },
            LayoutMode::Regular => {
                let grid_template = GridTemplate::new(
                    Track::Px(self.expanded_width),
                    Track::Fr(1),
                );

                if is_open {
                    LayoutGeometry {
                        panel_width: PanelWidth::Fixed(self.expanded_width),
                        start_margin: Offset::ZERO,
                        end_margin: Offset::ZERO,
                        grid_template,
                        panel_visible: true,
                    }
                } else {
                    LayoutGeometry {
                        panel_width: PanelWidth::Fixed(self.collapsed_width),
                        start_margin: Offset(self.collapsed_content_offset),
                        end_margin: Offset(self.collapsed_header_offset),
                        grid_template,
                        panel_visible: true,
                    }
                }
            },
        }
    }

    /// Duration of panel transitions.
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Check that widths are usable and the rail is narrower than the panel.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (name, width) in [
            ("expanded_width", self.expanded_width),
            ("collapsed_width", self.collapsed_width),
        ] {
            if !width.is_finite() || width <= 0.0 {
                return Err(LayoutError::Constants {
                    message: format!("{name} must be finite and positive"),
                });
            }
        }

        if self.expanded_width <= self.collapsed_width {
            return Err(LayoutError::Constants {
                message: format!(
                    "expanded_width {} must exceed collapsed_width {}",
                    self.expanded_width, self.collapsed_width
                ),
            });
        }

        if !self.collapsed_content_offset.is_finite()
            || !self.collapsed_header_offset.is_finite()
        {
            return Err(LayoutError::Constants {
                message: String::from("collapsed offsets must be finite"),
            });
        }

        Ok(())
    }
}

/// Resolve with the default constants.
pub fn resolve(class: ScreenClass, is_open: bool) -> LayoutGeometry {
    LayoutConstants::default().resolve(class, is_open)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPACT: ScreenClass = ScreenClass::Small;
    const REGULAR: ScreenClass = ScreenClass::Large;

    #[test]
    fn given_compact_class_when_resolved_then_visibility_follows_open_flag() {
        assert!(!resolve(COMPACT, false).panel_visible);
        assert!(resolve(COMPACT, true).panel_visible);
        assert_eq!(resolve(COMPACT, true).panel_width, PanelWidth::Full);
        assert_eq!(resolve(COMPACT, false).panel_width, PanelWidth::Hidden);
    }

    #[test]
    fn given_compact_class_when_resolved_then_margins_are_zero() {
        for is_open in [true, false] {
            let geometry = resolve(COMPACT, is_open);
            assert_eq!(geometry.header_margin(), Offset::ZERO);
            assert_eq!(geometry.content_margin(), Offset::ZERO);
            assert_eq!(geometry.content_inset(), 0.0);
            assert_eq!(geometry.grid_template.to_string(), "0 1fr");
        }
    }

    #[test]
    fn given_regular_class_when_resolved_then_grid_has_two_columns() {
        for class in ScreenClass::ALL
            .into_iter()
            .filter(|class| class.mode() == LayoutMode::Regular)
        {
            for is_open in [true, false] {
                let geometry = resolve(class, is_open);
                assert_eq!(geometry.grid_template.column_count(), 2);
                assert_eq!(geometry.grid_template.to_string(), "250px 1fr");
                assert!(geometry.panel_visible);
            }
        }
    }

    #[test]
    fn given_regular_class_when_resolved_then_expanded_panel_is_wider() {
        let expanded = resolve(REGULAR, true).panel_width;
        let collapsed = resolve(REGULAR, false).panel_width;
        assert!(expanded > collapsed);
        assert_eq!(collapsed.to_string(), "100px");
    }

    #[test]
    fn given_collapsed_rail_when_resolved_then_header_and_content_shift() {
        let geometry = resolve(REGULAR, false);
        assert_eq!(geometry.header_margin().to_string(), "-150px");
        assert_eq!(geometry.content_margin().to_string(), "-170px");
        assert_eq!(geometry.header_inset(), 100.0);
        assert_eq!(geometry.content_inset(), 80.0);
    }

    #[test]
    fn given_same_inputs_when_resolved_twice_then_geometry_is_identical() {
        for class in ScreenClass::ALL {
            for is_open in [true, false] {
                assert_eq!(resolve(class, is_open), resolve(class, is_open));
            }
        }
    }

    #[test]
    fn given_rail_geometries_when_blended_halfway_then_values_are_midpoints() {
        let open = resolve(REGULAR, true);
        let closed = resolve(REGULAR, false);
        let mid = LayoutGeometry::blend(&closed, &open, 0.5);
        assert_eq!(mid.panel_width, PanelWidth::Fixed(175.0));
        assert_eq!(mid.start_margin, Offset(-85.0));
        assert_eq!(mid.end_margin, Offset(-75.0));
        assert_eq!(mid.grid_template, open.grid_template);
    }

    #[test]
    fn given_out_of_range_factor_when_blended_then_factor_is_clamped() {
        let open = resolve(REGULAR, true);
        let closed = resolve(REGULAR, false);
        assert_eq!(LayoutGeometry::blend(&closed, &open, 3.0), open);
        assert_eq!(
            LayoutGeometry::blend(&closed, &open, -1.0).panel_width,
            closed.panel_width
        );
    }

    #[test]
    fn given_rail_wider_than_panel_when_validated_then_error_is_returned() {
        let constants = LayoutConstants {
            collapsed_width: 300.0,
            ..LayoutConstants::default()
        };
        assert!(matches!(
            constants.validate(),
            Err(LayoutError::Constants { .. })
        ));
        assert!(LayoutConstants::default().validate().is_ok());
    }

    #[test]
    fn given_custom_constants_when_resolved_then_values_are_used() {
        let constants = LayoutConstants {
            expanded_width: 280.0,
            collapsed_width: 72.0,
            collapsed_content_offset: -208.0,
            collapsed_header_offset: -208.0,
            transition_ms: 120,
        };
        let geometry = constants.resolve(REGULAR, false);
        assert_eq!(geometry.grid_template.to_string(), "280px 1fr");
        assert_eq!(geometry.panel_width.to_string(), "72px");
        assert_eq!(geometry.header_inset(), 72.0);
        assert_eq!(constants.transition(), Duration::from_millis(120));
    }
}
