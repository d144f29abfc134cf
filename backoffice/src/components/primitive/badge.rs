use iced::widget::{container, text};
use iced::{Border, Color, Element};

use crate::shared::ui::theme::{IcedColorPalette, ThemeProps, with_alpha};

const BADGE_TEXT_SIZE: f32 = 11.0;
const BADGE_PADDING_X: f32 = 8.0;
const BADGE_PADDING_Y: f32 = 2.0;
const BADGE_RADIUS: f32 = 9.0;
const BADGE_FILL_ALPHA: f32 = 0.25;

/// Color family of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BadgeVariant {
    Neutral,
    Accent,
}

/// Props for rendering a badge.
#[derive(Debug, Clone)]
pub(crate) struct BadgeProps<'a> {
    pub(crate) label: String,
    pub(crate) variant: BadgeVariant,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a small rounded label.
pub(crate) fn view<'a, Message: 'a>(
    props: BadgeProps<'a>,
) -> Element<'a, Message> {
    let tone = variant_color(props.variant, props.theme.theme.iced_palette());
    let fill = with_alpha(tone, BADGE_FILL_ALPHA);

    container(text(props.label).size(BADGE_TEXT_SIZE))
        .padding([BADGE_PADDING_Y, BADGE_PADDING_X])
        .style(move |_| iced::widget::container::Style {
            background: Some(fill.into()),
            text_color: Some(tone),
            border: Border {
                width: 1.0,
                color: tone,
                radius: BADGE_RADIUS.into(),
            },
            ..Default::default()
        })
        .into()
}

fn variant_color(variant: BadgeVariant, palette: &IcedColorPalette) -> Color {
    match variant {
        BadgeVariant::Neutral => palette.dim_foreground,
        BadgeVariant::Accent => palette.accent,
    }
}
