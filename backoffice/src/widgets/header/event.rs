/// Intent events handled by the header widget.
#[derive(Debug, Clone)]
pub(crate) enum HeaderIntent {
    ToggleSidebar,
    ToggleProfileMenu,
    DismissProfileMenu,
    SignOut,
}

/// Effect events produced by the header reducer.
#[derive(Debug, Clone)]
pub(crate) enum HeaderEffect {
    ToggleSidebar,
    SignOut,
}

/// Header event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum HeaderEvent {
    /// Intent event reduced by the header widget.
    Intent(HeaderIntent),
    /// External effect orchestrated by app-level routing.
    Effect(HeaderEffect),
}
