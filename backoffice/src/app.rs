#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use std::time::Instant;

use iced::{Element, Size, Subscription, Task, Theme, window};

use crate::config::{ShellConfig, load_initial_config};
use crate::layout::{FrameLayout, PanelSnapshot, frame_layout};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeManager;
use crate::state::State;
use crate::widgets::header::{HeaderEvent, HeaderWidget};
use crate::widgets::outlet::services::RoutePageLoader;
use crate::widgets::outlet::{OutletEvent, OutletWidget};
use crate::widgets::sidebar::{SidebarEvent, SidebarWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 320.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Navigation panel
    Sidebar(SidebarEvent),
    // Header bar
    Header(HeaderEvent),
    // Content outlet
    Outlet(OutletEvent),
    // Cross-widget workflows
    SignOut,
    // Direct operations
    Frame(Instant),
    Window(window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) sidebar: SidebarWidget,
    pub(crate) header: HeaderWidget,
    pub(crate) outlet: OutletWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) fonts: FontsConfig,
    pub(crate) config: ShellConfig,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = load_initial_config();
        let window_size = Size {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        };
        let state = State::new(window_size, config.breakpoints);

        log::info!(
            "starting shell: class={} sidebar_open={} routes={}",
            state.screen_class(),
            config.sidebar.initially_open,
            config.routes.entries().count()
        );

        let widgets = Widgets {
            sidebar: SidebarWidget::new(
                config.sidebar.initially_open,
                config.layout.transition(),
            ),
            header: HeaderWidget::new(),
            outlet: OutletWidget::new(Box::new(RoutePageLoader)),
        };

        let app = App {
            theme_manager: ThemeManager::default(),
            fonts: FontsConfig::default(),
            config,
            state,
            widgets,
        };

        (app, Task::done(AppEvent::IcedReady))
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        match self.widgets.outlet.vm(0.0).title() {
            "" => String::from("Backoffice"),
            title => format!("{title} · Backoffice"),
        }
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }

    /// Place the shell regions for the current class and panel motion.
    pub(crate) fn frame_layout(&self) -> FrameLayout {
        let sidebar = &self.widgets.sidebar;
        let panel = PanelSnapshot {
            is_open: sidebar.is_open(),
            animating: sidebar.is_animating(),
            mounted: sidebar.is_mounted(),
            progress: sidebar.progress(self.state.now),
        };

        frame_layout(
            &self.config.layout,
            self.state.screen_class(),
            panel,
            self.state.window_size.width,
        )
    }
}
