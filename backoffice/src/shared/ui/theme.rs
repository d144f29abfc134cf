use iced::theme::Palette;
use iced::{Color, Theme};

/// Hex color palette for the shell chrome.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) surface: String,
    pub(crate) overlay: String,
    pub(crate) accent: String,
    pub(crate) dim_accent: String,
    pub(crate) success: String,
    pub(crate) warning: String,
    pub(crate) danger: String,
    pub(crate) dim_foreground: String,
    pub(crate) border: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#E2E8F0"),
            background: String::from("#111827"),
            surface: String::from("#0B1120"),
            overlay: String::from("#1F2937"),
            accent: String::from("#4FA6ED"),
            dim_accent: String::from("#2F638F"),
            success: String::from("#98C379"),
            warning: String::from("#E5C07B"),
            danger: String::from("#E06C75"),
            dim_foreground: String::from("#6B7280"),
            border: String::from("#374151"),
        }
    }
}

/// Parsed palette ready for `iced` styles.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) overlay: Color,
    pub(crate) accent: Color,
    pub(crate) dim_accent: Color,
    pub(crate) success: Color,
    pub(crate) warning: Color,
    pub(crate) danger: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) border: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: parse_hex_color(&p.foreground),
            background: parse_hex_color(&p.background),
            surface: parse_hex_color(&p.surface),
            overlay: parse_hex_color(&p.overlay),
            accent: parse_hex_color(&p.accent),
            dim_accent: parse_hex_color(&p.dim_accent),
            success: parse_hex_color(&p.success),
            warning: parse_hex_color(&p.warning),
            danger: parse_hex_color(&p.danger),
            dim_foreground: parse_hex_color(&p.dim_foreground),
            border: parse_hex_color(&p.border),
        }
    }
}

/// Parse `#RRGGBB` into a color, falling back to black.
pub(crate) fn parse_hex_color(value: &str) -> Color {
    let hex = value.trim().trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|part| u8::from_str_radix(part, 16).ok())
    };

    match (hex.len(), channel(0..2), channel(2..4), channel(4..6)) {
        (6, Some(r), Some(g), Some(b)) => Color::from_rgb8(r, g, b),
        _ => {
            log::warn!("invalid hex color '{value}', using black");
            Color::BLACK
        },
    }
}

/// Return `color` with its alpha scaled by `factor`.
pub(crate) fn with_alpha(mut color: Color, factor: f32) -> Color {
    color.a = (color.a * factor).clamp(0.0, 1.0);
    color
}

/// Application theme shared by every widget.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        let raw_palette = ColorPalette::default();

        Self {
            id: String::from("backoffice-dark"),
            iced_palette: IcedColorPalette::from(&raw_palette),
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.success,
            danger: palette.danger,
            warning: palette.warning,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Holds the current theme.
#[derive(Debug, Clone, Default)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}
