/// Intent events handled by the outlet widget.
#[derive(Debug, Clone)]
pub(crate) enum OutletIntent {
    Navigate { path: String },
}

/// Effect events produced by the outlet reducer.
#[derive(Debug, Clone)]
pub(crate) enum OutletEffect {
    RouteMissing { path: String },
}

/// Outlet event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum OutletEvent {
    /// Intent event reduced by the outlet widget.
    Intent(OutletIntent),
    /// External effect orchestrated by app-level routing.
    Effect(OutletEffect),
}
