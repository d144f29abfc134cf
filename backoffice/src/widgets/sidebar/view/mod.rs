pub(crate) mod nav_list;

use iced::widget::text::Wrapping;
use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Element, Length, Theme, alignment};

use super::event::SidebarIntent;
use super::model::SidebarViewModel;
use crate::components::primitive::icon_button::{self, IconButtonProps};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::style::{nav_row_style, panel_style};
use crate::shared::ui::theme::{ThemeProps, with_alpha};

const TOP_BAR_HEIGHT: f32 = 56.0;
const TOGGLE_BUTTON_SIZE: f32 = 32.0;
const TOGGLE_ICON_SIZE: f32 = 18.0;
const LOGO_SIZE: f32 = 24.0;
const BAR_PADDING_X: f32 = 16.0;
const FOOTER_HEIGHT: f32 = 48.0;
const FOOTER_ICON_SIZE: f32 = 18.0;
const SEPARATOR_HEIGHT: f32 = 1.0;
const BRAND: &str = "Backoffice";

/// Props for the sidebar view aggregator.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewProps<'a> {
    pub(crate) vm: SidebarViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the navigation panel at the width the shell resolved for it.
pub(crate) fn view(
    props: SidebarViewProps<'_>,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    let vm = props.vm;
    let palette = props.theme.theme.iced_palette().clone();

    let top_bar = top_bar(props);

    let separator = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(SEPARATOR_HEIGHT))
        .style(move |_| container::Style {
            background: Some(palette.border.into()),
            ..Default::default()
        });

    let nav = nav_list::view(nav_list::NavListProps {
        vm,
        theme: props.theme,
    });

    let content = column![top_bar, separator, nav, sign_out_row(props)]
        .width(Length::Fill)
        .height(Length::Fill);

    container(content)
        .width(Length::Fixed(vm.panel_width))
        .height(Length::Fill)
        .clip(true)
        .style(panel_style(props.theme, vm.panel_alpha()))
        .into()
}

fn top_bar(
    props: SidebarViewProps<'_>,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    let vm = props.vm;
    let palette = props.theme.theme.iced_palette();

    let toggle = icon_button::view(IconButtonProps {
        icon: icons::CHEVRON_LEFT,
        theme: props.theme,
        size: TOGGLE_BUTTON_SIZE,
        icon_size: TOGGLE_ICON_SIZE,
        rotation: vm.toggle_rotation(),
        enabled: vm.interactive,
    })
    .map(|_| SidebarIntent::Toggle);

    let mut bar = row![].align_y(alignment::Vertical::Center).spacing(12.0);

    if vm.shows_labels() {
        let accent = palette.accent;
        let logo = svg::Svg::new(svg::Handle::from_memory(icons::LOGO))
            .width(Length::Fixed(LOGO_SIZE))
            .height(Length::Fixed(LOGO_SIZE))
            .opacity(vm.label_alpha())
            .style(move |_, _| svg::Style {
                color: Some(accent),
            });
        let brand = text(BRAND)
            .font(props.fonts.heading.font_type)
            .size(props.fonts.heading.size)
            .wrapping(Wrapping::None)
            .color(with_alpha(palette.foreground, vm.label_alpha()));

        bar = bar
            .push(logo)
            .push(brand)
            .push(Space::new().width(Length::Fill));
    }

    let align_x = if vm.shows_labels() {
        alignment::Horizontal::Left
    } else {
        alignment::Horizontal::Center
    };

    container(bar.push(toggle))
        .width(Length::Fill)
        .height(Length::Fixed(TOP_BAR_HEIGHT))
        .padding([0.0, BAR_PADDING_X])
        .align_x(align_x)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn sign_out_row(
    props: SidebarViewProps<'_>,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    let vm = props.vm;
    let palette = props.theme.theme.iced_palette().clone();
    let danger = palette.danger;

    let icon = svg::Svg::new(svg::Handle::from_memory(icons::LOGOUT))
        .width(Length::Fixed(FOOTER_ICON_SIZE))
        .height(Length::Fixed(FOOTER_ICON_SIZE))
        .opacity(vm.panel_alpha())
        .style(move |_, _| svg::Style {
            color: Some(danger),
        });

    let mut content = row![icon]
        .spacing(12.0)
        .align_y(alignment::Vertical::Center);

    if vm.shows_labels() {
        content = content.push(
            text("Sign out")
                .font(props.fonts.ui.font_type)
                .size(props.fonts.ui.size)
                .wrapping(Wrapping::None)
                .color(with_alpha(palette.foreground, vm.label_alpha())),
        );
    }

    let align_x = if vm.shows_labels() {
        alignment::Horizontal::Left
    } else {
        alignment::Horizontal::Center
    };

    button(
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(align_x)
            .align_y(alignment::Vertical::Center),
    )
    .on_press_maybe(vm.press(SidebarIntent::SignOut))
    .padding([0.0, BAR_PADDING_X + 8.0])
    .width(Length::Fill)
    .height(Length::Fixed(FOOTER_HEIGHT))
    .style(move |_, status| {
        nav_row_style(
            &palette,
            false,
            matches!(status, button::Status::Hovered),
        )
    })
    .into()
}
