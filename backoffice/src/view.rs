use iced::widget::{Space, Stack, column, container, opaque};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::shared::ui::theme::{ThemeProps, with_alpha};
use crate::widgets::header::view::profile_menu;
use crate::widgets::header::{self, HeaderEvent, HeaderVmCtx};
use crate::widgets::outlet::{self, OutletEvent};
use crate::widgets::sidebar::{self, SidebarEvent, SidebarVmCtx};

const HEADER_SEPARATOR_HEIGHT: f32 = 1.0;
const SEPARATOR_ALPHA: f32 = 0.6;

/// Render the root application view.
///
/// Header and outlet share the base layer and are padded clear of the panel
/// track; the panel itself floats above them so it can overlap the content
/// while it collapses or covers the page on narrow screens.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props: ThemeProps<'_> = ThemeProps::new(theme);
    let frame = app.frame_layout();

    let outlet_vm = app.widgets.outlet.vm(frame.geometry.content_inset());
    let header_vm = app.widgets.header.vm(HeaderVmCtx {
        title: outlet_vm.title(),
        profile: &app.config.profile,
        screen_class: app.state.screen_class(),
        inset: frame.geometry.header_inset(),
    });

    let header_bar = header::view::view(header::view::HeaderViewProps {
        vm: header_vm,
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|event| AppEvent::Header(HeaderEvent::Intent(event)));

    let palette = theme_props.theme.iced_palette();
    let separator_color = with_alpha(palette.border, SEPARATOR_ALPHA);
    let separator = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_SEPARATOR_HEIGHT))
        .style(move |_| container::Style {
            background: Some(separator_color.into()),
            ..Default::default()
        });

    let page = outlet::view::view(outlet::view::OutletViewProps {
        vm: outlet_vm,
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|event| AppEvent::Outlet(OutletEvent::Intent(event)));

    let base = column![header_bar, separator, page]
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![base.into()];

    if frame.panel_mounted {
        let sidebar_vm = app.widgets.sidebar.vm(SidebarVmCtx {
            routes: &app.config.routes,
            active_path: app.widgets.outlet.active_path(),
            mode: frame.mode,
            now: app.state.now,
            panel_width: frame.panel_px,
            interactive: frame.panel_interactive,
        });

        let panel = sidebar::view::view(sidebar::view::SidebarViewProps {
            vm: sidebar_vm,
            theme: theme_props,
            fonts: &app.fonts,
        })
        .map(|event| AppEvent::Sidebar(SidebarEvent::Intent(event)));

        // A fading overlay lets presses through to the page below.
        if frame.panel_interactive {
            layers.push(opaque(panel));
        } else {
            layers.push(panel);
        }
    }

    if header_vm.is_profile_menu_open {
        layers.push(
            profile_menu::view(profile_menu::ProfileMenuProps {
                vm: header_vm,
                theme: theme_props,
            })
            .map(|event| AppEvent::Header(HeaderEvent::Intent(event))),
        );
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
