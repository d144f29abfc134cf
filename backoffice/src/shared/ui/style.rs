use iced::Background;
use iced::widget::{container, scrollable};

use super::theme::{IcedColorPalette, ThemeProps, with_alpha};

const NAV_ROW_ACTIVE_ALPHA: f32 = 0.7;
const NAV_ROW_HOVER_ALPHA: f32 = 0.6;

pub(crate) fn thin_scroll_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let radius = iced::border::Radius::from(0.0);

        style.vertical_rail.border.radius = radius;
        style.vertical_rail.scroller.border.radius = radius;

        let scroller_color = match style.vertical_rail.scroller.background {
            Background::Color(color) => color,
            _ => palette.dim_foreground,
        };
        style.vertical_rail.scroller.background =
            Background::Color(with_alpha(scroller_color, 0.7));

        style
    }
}

/// Background of a navigation row.
pub(crate) fn nav_row_style(
    palette: &IcedColorPalette,
    is_active: bool,
    is_hovered: bool,
) -> iced::widget::button::Style {
    let background = if is_active {
        Some(with_alpha(palette.dim_accent, NAV_ROW_ACTIVE_ALPHA).into())
    } else if is_hovered {
        Some(with_alpha(palette.overlay, NAV_ROW_HOVER_ALPHA).into())
    } else {
        None
    };

    iced::widget::button::Style {
        background,
        text_color: palette.foreground,
        border: iced::Border {
            radius: iced::border::Radius::new(4.0),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Surface of the navigation panel.
pub(crate) fn panel_style(
    theme: ThemeProps<'_>,
    opacity: f32,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_theme: &iced::Theme| container::Style {
        background: Some(with_alpha(palette.surface, opacity).into()),
        text_color: Some(with_alpha(palette.foreground, opacity)),
        border: iced::Border {
            width: 1.0,
            color: with_alpha(palette.border, opacity),
            radius: iced::border::Radius::from(0.0),
        },
        ..Default::default()
    }
}

/// Floating menu surface.
pub(crate) fn menu_panel_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_theme: &iced::Theme| container::Style {
        background: Some(palette.overlay.into()),
        text_color: Some(palette.foreground),
        border: iced::Border {
            width: 0.25,
            color: palette.border,
            radius: iced::border::Radius::new(4.0),
        },
        ..Default::default()
    }
}
