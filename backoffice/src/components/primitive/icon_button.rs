use iced::widget::{button, container, svg};
use iced::{Element, Length, Radians, Rotation, alignment};

use crate::shared::ui::theme::ThemeProps;

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
    /// Clockwise icon rotation in radians.
    pub(crate) rotation: f32,
    pub(crate) enabled: bool,
}

const ICON_BUTTON_PADDING: f32 = 0.0;

/// Render a square, borderless icon button that highlights on hover.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let base_color = palette.dim_foreground;
    let hover_color = palette.accent;

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .rotation(Rotation::Floating(Radians(props.rotation)))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press_maybe(props.enabled.then_some(IconButtonEvent::Pressed))
        .padding(ICON_BUTTON_PADDING)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(|_, _| iced::widget::button::Style::default())
        .into()
}
