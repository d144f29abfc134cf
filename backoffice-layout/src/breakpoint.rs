use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Discrete viewport size category, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScreenClass {
    ExtraSmall,
    Small,
    MediumSmall,
    Medium,
    Large,
    ExtraLarge,
}

impl ScreenClass {
    /// All classes in ascending order.
    pub const ALL: [ScreenClass; 6] = [
        ScreenClass::ExtraSmall,
        ScreenClass::Small,
        ScreenClass::MediumSmall,
        ScreenClass::Medium,
        ScreenClass::Large,
        ScreenClass::ExtraLarge,
    ];

    /// Layout policy family used by the geometry resolver.
    pub fn mode(self) -> LayoutMode {
        match self {
            ScreenClass::ExtraSmall
            | ScreenClass::Small
            | ScreenClass::MediumSmall => LayoutMode::Compact,
            ScreenClass::Medium
            | ScreenClass::Large
            | ScreenClass::ExtraLarge => LayoutMode::Regular,
        }
    }

    /// Short tag, handy for logs and badges.
    pub fn tag(self) -> &'static str {
        match self {
            ScreenClass::ExtraSmall => "xs",
            ScreenClass::Small => "sm",
            ScreenClass::MediumSmall => "md-sm",
            ScreenClass::Medium => "md",
            ScreenClass::Large => "lg",
            ScreenClass::ExtraLarge => "xl",
        }
    }
}

impl fmt::Display for ScreenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Panel presentation family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// Mobile tiers: the panel is an overlay shown or hidden in full.
    Compact,
    /// Desktop tiers: the panel reserves a column and collapses to a rail.
    Regular,
}

/// Minimum width, in logical pixels, at which each class starts.
///
/// Widths below `small` are [`ScreenClass::ExtraSmall`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub small: f32,
    pub medium_small: f32,
    pub medium: f32,
    pub large: f32,
    pub extra_large: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            small: 480.0,
            medium_small: 640.0,
            medium: 768.0,
            large: 1024.0,
            extra_large: 1280.0,
        }
    }
}

impl Breakpoints {
    /// Classify a viewport width.
    ///
    /// Total over `f32`: NaN and non-positive widths fall back to the smallest
    /// class, unbounded widths to the largest.
    pub fn classify(&self, width: f32) -> ScreenClass {
        if width.is_nan() {
            return ScreenClass::ExtraSmall;
        }

        let thresholds = self.thresholds();
        let index = thresholds
            .iter()
            .take_while(|&&threshold| width >= threshold)
            .count();

        ScreenClass::ALL[index]
    }

    /// Check that thresholds are finite, positive and strictly increasing.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let thresholds = self.thresholds();

        if let Some(bad) =
            thresholds.iter().find(|t| !t.is_finite() || **t <= 0.0)
        {
            return Err(LayoutError::Breakpoints {
                message: format!("threshold {bad} must be finite and positive"),
            });
        }

        for pair in thresholds.windows(2) {
            if pair[0] >= pair[1] {
                return Err(LayoutError::Breakpoints {
                    message: format!(
                        "threshold {} must be below {}",
                        pair[0], pair[1]
                    ),
                });
            }
        }

        Ok(())
    }

    fn thresholds(&self) -> [f32; 5] {
        [
            self.small,
            self.medium_small,
            self.medium,
            self.large,
            self.extra_large,
        ]
    }
}
