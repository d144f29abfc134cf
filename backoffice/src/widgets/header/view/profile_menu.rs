use iced::widget::{Space, button, column, container, mouse_area, text};
use iced::{Element, Length, Theme, alignment};

use super::HEADER_HEIGHT;
use crate::shared::ui::style::menu_panel_style;
use crate::shared::ui::theme::{ThemeProps, with_alpha};
use crate::widgets::header::event::HeaderIntent;
use crate::widgets::header::model::HeaderViewModel;

const MENU_WIDTH: f32 = 200.0;
const MENU_MARGIN: f32 = 8.0;
const MENU_PADDING: f32 = 8.0;
const ITEM_HEIGHT: f32 = 32.0;
const ITEM_HOVER_ALPHA: f32 = 0.6;

/// Props for the profile drop-down overlay.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProfileMenuProps<'a> {
    pub(crate) vm: HeaderViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the profile menu anchored under the header's right edge.
/// Pressing anywhere outside the menu dismisses it.
pub(crate) fn view(
    props: ProfileMenuProps<'_>,
) -> Element<'_, HeaderIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();

    let username = text(props.vm.profile.username.as_str())
        .size(13.0)
        .color(palette.dim_foreground);

    let divider = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(move |_| container::Style {
            background: Some(palette.border.into()),
            ..Default::default()
        });

    let sign_out = button(
        container(text("Sign out").color(palette.danger))
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(HeaderIntent::SignOut)
    .width(Length::Fill)
    .height(Length::Fixed(ITEM_HEIGHT))
    .padding([0.0, MENU_PADDING])
    .style(move |_, status| button::Style {
        background: matches!(status, button::Status::Hovered)
            .then(|| with_alpha(palette.dim_accent, ITEM_HOVER_ALPHA).into()),
        text_color: palette.foreground,
        ..Default::default()
    });

    let menu = container(
        column![
            container(username).padding([4.0, MENU_PADDING]),
            divider,
            sign_out
        ]
        .spacing(4.0),
    )
    .padding(MENU_PADDING / 2.0)
    .width(Length::Fixed(MENU_WIDTH))
    .style(menu_panel_style(props.theme));

    let positioned_menu = container(menu)
        .padding(iced::Padding {
            top: HEADER_HEIGHT,
            right: MENU_MARGIN,
            ..iced::Padding::ZERO
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top);

    let dismiss_layer = mouse_area(
        container(text("")).width(Length::Fill).height(Length::Fill),
    )
    .on_press(HeaderIntent::DismissProfileMenu)
    .on_right_press(HeaderIntent::DismissProfileMenu);

    iced::widget::stack!(dismiss_layer, positioned_menu)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
