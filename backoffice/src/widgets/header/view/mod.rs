pub(crate) mod profile_menu;

use backoffice_layout::LayoutMode;
use iced::widget::text::Wrapping;
use iced::widget::{Space, button, container, row, svg, text};
use iced::{Border, Element, Length, Theme, alignment};

use crate::components::primitive::badge::{self, BadgeProps, BadgeVariant};
use crate::components::primitive::icon_button::{self, IconButtonProps};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::theme::{ThemeProps, with_alpha};
use crate::widgets::header::event::HeaderIntent;
use crate::widgets::header::model::HeaderViewModel;

pub(crate) const HEADER_HEIGHT: f32 = 56.0;
const HEADER_PADDING_X: f32 = 16.0;
const MENU_BUTTON_SIZE: f32 = 32.0;
const MENU_ICON_SIZE: f32 = 20.0;
const AVATAR_SIZE: f32 = 30.0;
const AVATAR_TEXT_SIZE: f32 = 12.0;
const CHIP_HOVER_ALPHA: f32 = 0.5;

/// Props for the header bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderViewProps<'a> {
    pub(crate) vm: HeaderViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the header bar. The left padding follows the panel track.
pub(crate) fn view(
    props: HeaderViewProps<'_>,
) -> Element<'_, HeaderIntent, Theme, iced::Renderer> {
    let vm = props.vm;
    let palette = props.theme.theme.iced_palette().clone();

    let menu_button = icon_button::view(IconButtonProps {
        icon: icons::MENU,
        theme: props.theme,
        size: MENU_BUTTON_SIZE,
        icon_size: MENU_ICON_SIZE,
        rotation: 0.0,
        enabled: true,
    })
    .map(|_| HeaderIntent::ToggleSidebar);

    let title = text(vm.title)
        .font(props.fonts.heading.font_type)
        .size(props.fonts.heading.size)
        .wrapping(Wrapping::None)
        .color(palette.foreground);

    let badge_variant = match vm.screen_class.mode() {
        LayoutMode::Compact => BadgeVariant::Accent,
        LayoutMode::Regular => BadgeVariant::Neutral,
    };
    let class_badge = badge::view(BadgeProps {
        label: vm.screen_class.tag().to_string(),
        variant: badge_variant,
        theme: props.theme,
    });

    let content = row![
        menu_button,
        title,
        Space::new().width(Length::Fill),
        class_badge,
        profile_chip(props),
    ]
    .spacing(12.0)
    .align_y(alignment::Vertical::Center)
    .width(Length::Fill);

    let padding = iced::Padding {
        left: vm.inset + HEADER_PADDING_X,
        right: HEADER_PADDING_X,
        ..iced::Padding::ZERO
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding(padding)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(palette.background.into()),
            text_color: Some(palette.foreground),
            ..Default::default()
        })
        .into()
}

fn profile_chip(
    props: HeaderViewProps<'_>,
) -> Element<'_, HeaderIntent, Theme, iced::Renderer> {
    let vm = props.vm;
    let palette = props.theme.theme.iced_palette().clone();
    let accent = palette.accent;

    let picture: Element<'_, HeaderIntent, Theme, iced::Renderer> =
        match vm.profile.avatar_svg() {
            Some(path) => svg::Svg::new(svg::Handle::from_path(path))
                .width(Length::Fixed(AVATAR_SIZE))
                .height(Length::Fixed(AVATAR_SIZE))
                .into(),
            None => text(vm.profile.initials())
                .size(AVATAR_TEXT_SIZE)
                .color(palette.background)
                .into(),
        };

    let avatar = container(picture)
        .width(Length::Fixed(AVATAR_SIZE))
        .height(Length::Fixed(AVATAR_SIZE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(accent.into()),
            border: Border {
                radius: (AVATAR_SIZE / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let mut chip = row![avatar]
        .spacing(8.0)
        .align_y(alignment::Vertical::Center);

    // Phones only get the avatar.
    if vm.screen_class.mode() == LayoutMode::Regular {
        chip = chip.push(
            text(vm.profile.username.as_str())
                .size(props.fonts.ui.size)
                .wrapping(Wrapping::None),
        );
    }

    let is_open = vm.is_profile_menu_open;
    button(chip)
        .on_press(HeaderIntent::ToggleProfileMenu)
        .padding([4.0, 8.0])
        .style(move |_, status| {
            let background = if is_open
                || matches!(status, button::Status::Hovered)
            {
                Some(with_alpha(palette.overlay, CHIP_HOVER_ALPHA).into())
            } else {
                None
            };

            button::Style {
                background,
                text_color: palette.foreground,
                border: Border {
                    radius: 6.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}
