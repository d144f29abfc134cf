use std::f32::consts::FRAC_PI_2;

use backoffice_layout::RouteEntry;
use iced::widget::text::Wrapping;
use iced::widget::{
    Column, Space, button, container, row, scrollable, svg, text,
};
use iced::{Element, Length, Radians, Rotation, Theme, alignment};

use crate::shared::ui::icons;
use crate::shared::ui::style::{nav_row_style, thin_scroll_style};
use crate::shared::ui::theme::{ThemeProps, with_alpha};
use crate::widgets::sidebar::event::SidebarIntent;
use crate::widgets::sidebar::model::SidebarViewModel;

const ROW_HEIGHT: f32 = 40.0;
const ROW_PADDING_X: f32 = 16.0;
const ROW_GAP: f32 = 12.0;
const ROW_SPACING: f32 = 2.0;
const GROUP_SPACING: f32 = 12.0;
const ICON_SIZE: f32 = 20.0;
const LABEL_SIZE: f32 = 14.0;
const GROUP_LABEL_SIZE: f32 = 11.0;
const GROUP_CHEVRON_SIZE: f32 = 12.0;
const LIST_PADDING: f32 = 8.0;

/// Props for the grouped navigation list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavListProps<'a> {
    pub(crate) vm: SidebarViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render route groups as a scrollable list of navigation rows.
pub(crate) fn view(
    props: NavListProps<'_>,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    let vm = props.vm;
    let palette = props.theme.theme.iced_palette().clone();

    let mut list = Column::new()
        .spacing(GROUP_SPACING)
        .padding(LIST_PADDING)
        .width(Length::Fill);

    for group in vm.routes.groups() {
        let mut section =
            Column::new().spacing(ROW_SPACING).width(Length::Fill);

        if vm.shows_labels() {
            section =
                section.push(group_header(&group.label, vm, props.theme));
        }

        if vm.is_group_expanded(&group.label) {
            for entry in &group.entries {
                section = section.push(entry_row(entry, vm, props.theme));
            }
        }

        list = list.push(section);
    }

    scrollable(list)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(thin_scroll_style(palette))
        .into()
}

fn group_header<'a>(
    label: &'a str,
    vm: SidebarViewModel<'a>,
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let palette = theme.theme.iced_palette();
    let alpha = vm.label_alpha();
    let color = with_alpha(palette.dim_foreground, alpha);
    let rotation = if vm.is_group_expanded(label) {
        0.0
    } else {
        -FRAC_PI_2
    };

    let title = text(label.to_uppercase())
        .size(GROUP_LABEL_SIZE)
        .wrapping(Wrapping::None)
        .color(color);

    let chevron =
        svg::Svg::new(svg::Handle::from_memory(icons::CHEVRON_DOWN))
            .width(Length::Fixed(GROUP_CHEVRON_SIZE))
            .height(Length::Fixed(GROUP_CHEVRON_SIZE))
            .rotation(Rotation::Floating(Radians(rotation)))
            .style(move |_, _| svg::Style { color: Some(color) });

    let content = row![title, Space::new().width(Length::Fill), chevron]
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill);

    button(content)
        .on_press_maybe(vm.press(SidebarIntent::ToggleGroup {
            label: label.to_string(),
        }))
        .padding([4.0, ROW_PADDING_X])
        .width(Length::Fill)
        .style(|_, _| button::Style::default())
        .into()
}

fn entry_row<'a>(
    entry: &'a RouteEntry,
    vm: SidebarViewModel<'a>,
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let palette = theme.theme.iced_palette().clone();
    let is_active = vm.is_active(&entry.path);
    let icon_color = if is_active {
        palette.accent
    } else {
        palette.dim_foreground
    };

    let icon = svg::Svg::new(svg::Handle::from_memory(icons::route_icon(
        entry.icon.as_deref(),
    )))
    .width(Length::Fixed(ICON_SIZE))
    .height(Length::Fixed(ICON_SIZE))
    .opacity(vm.panel_alpha())
    .style(move |_, _| svg::Style {
        color: Some(icon_color),
    });

    let mut content = row![icon]
        .spacing(ROW_GAP)
        .align_y(alignment::Vertical::Center);

    let align_x = if vm.shows_labels() {
        content = content.push(
            text(entry.name.as_str())
                .size(LABEL_SIZE)
                .wrapping(Wrapping::None)
                .color(with_alpha(palette.foreground, vm.label_alpha())),
        );
        alignment::Horizontal::Left
    } else {
        alignment::Horizontal::Center
    };

    let content = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align_x)
        .align_y(alignment::Vertical::Center);

    button(content)
        .on_press_maybe(vm.press(SidebarIntent::Navigate {
            path: entry.path.clone(),
        }))
        .padding([0.0, ROW_PADDING_X])
        .width(Length::Fill)
        .height(Length::Fixed(ROW_HEIGHT))
        .style(move |_, status| {
            nav_row_style(
                &palette,
                is_active,
                matches!(status, button::Status::Hovered),
            )
        })
        .into()
}
