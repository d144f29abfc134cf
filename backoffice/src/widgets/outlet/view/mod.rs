use iced::widget::{Space, column, container, scrollable, text};
use iced::{Border, Element, Length, Theme};

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::style::thin_scroll_style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::outlet::event::OutletIntent;
use crate::widgets::outlet::model::{OutletViewModel, Page, PageBody};

const CONTENT_PADDING: f32 = 24.0;
const CARD_PADDING: f32 = 20.0;
const CARD_RADIUS: f32 = 8.0;
const BREADCRUMB_SIZE: f32 = 12.0;

/// Props for the content outlet.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OutletViewProps<'a> {
    pub(crate) vm: OutletViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the active page, padded clear of the panel track.
pub(crate) fn view(
    props: OutletViewProps<'_>,
) -> Element<'_, OutletIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();

    let body: Element<'_, OutletIntent, Theme, iced::Renderer> =
        match props.vm.page {
            Some(page) => page_card(page, props),
            None => Space::new().into(),
        };

    let padding = iced::Padding {
        top: CONTENT_PADDING,
        right: CONTENT_PADDING,
        bottom: CONTENT_PADDING,
        left: props.vm.inset + CONTENT_PADDING,
    };

    scrollable(container(body).width(Length::Fill).padding(padding))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(thin_scroll_style(palette))
        .into()
}

fn page_card<'a>(
    page: &'a Page,
    props: OutletViewProps<'a>,
) -> Element<'a, OutletIntent, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette().clone();

    let breadcrumb = text(page.group.as_deref().unwrap_or(page.path.as_str()))
        .size(BREADCRUMB_SIZE)
        .color(palette.dim_foreground);

    let title = text(page.title.as_str())
        .font(props.fonts.heading.font_type)
        .size(props.fonts.heading.size);

    let message = match &page.body {
        PageBody::Route { summary } => text(summary.as_str()),
        PageBody::NotFound => {
            text(format!("No page is registered for {}.", page.path))
                .color(palette.warning)
        },
    }
    .size(props.fonts.ui.size);

    container(column![breadcrumb, title, message].spacing(8.0))
        .width(Length::Fill)
        .padding(CARD_PADDING)
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            text_color: Some(palette.foreground),
            border: Border {
                width: 1.0,
                color: palette.border,
                radius: CARD_RADIUS.into(),
            },
            ..Default::default()
        })
        .into()
}
