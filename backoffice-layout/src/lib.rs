//! Responsive layout engine for the backoffice shell.
//!
//! The crate is UI-agnostic: it turns a viewport width and the sidebar toggle
//! state into plain layout values that a renderer applies to its widgets.
//!
//! The flow on every frame:
//! 1. [`ViewportTracker`] classifies resize events into a [`ScreenClass`];
//! 2. [`SidebarStore`] holds the open/closed flag, changed only by
//!    [`SidebarStore::toggle`];
//! 3. [`LayoutConstants::resolve`] derives a fresh [`LayoutGeometry`] from
//!    both inputs;
//! 4. [`PanelMotion`] turns toggles into timed transitions the renderer
//!    samples with [`PanelMotion::progress`].
//!
//! # Quick Example
//!
//! ```
//! use backoffice_layout::{Breakpoints, LayoutConstants, SidebarStore};
//!
//! let breakpoints = Breakpoints::default();
//! let constants = LayoutConstants::default();
//! let mut store = SidebarStore::new(true);
//!
//! let class = breakpoints.classify(1920.0);
//! let geometry = constants.resolve(class, store.is_open());
//! assert_eq!(geometry.grid_template.to_string(), "250px 1fr");
//!
//! store.toggle();
//! let geometry = constants.resolve(class, store.is_open());
//! assert_eq!(geometry.panel_width.to_string(), "100px");
//! ```

mod breakpoint;
mod error;
mod geometry;
mod motion;
mod routes;
mod store;
mod viewport;

pub use breakpoint::{Breakpoints, LayoutMode, ScreenClass};
pub use error::LayoutError;
pub use geometry::{
    GridTemplate, LayoutConstants, LayoutGeometry, Offset, PanelWidth, Track,
    resolve,
};
pub use motion::{PanelMotion, PanelPhase, ease_in_out};
pub use routes::{RouteEntry, RouteGroup, RouteTable};
pub use store::SidebarStore;
pub use viewport::{ViewportChange, ViewportTracker};
