pub(crate) const LOGO: &[u8] = include_bytes!("../../../../assets/svg/logo.svg");
pub(crate) const MENU: &[u8] = include_bytes!("../../../../assets/svg/menu.svg");
pub(crate) const CHEVRON_LEFT: &[u8] =
    include_bytes!("../../../../assets/svg/chevron-left.svg");
pub(crate) const CHEVRON_DOWN: &[u8] =
    include_bytes!("../../../../assets/svg/chevron-down.svg");
pub(crate) const LOGOUT: &[u8] =
    include_bytes!("../../../../assets/svg/logout.svg");

const DASHBOARD: &[u8] = include_bytes!("../../../../assets/svg/dashboard.svg");
const CHART: &[u8] = include_bytes!("../../../../assets/svg/chart.svg");
const USERS: &[u8] = include_bytes!("../../../../assets/svg/users.svg");
const CART: &[u8] = include_bytes!("../../../../assets/svg/cart.svg");
const BOX: &[u8] = include_bytes!("../../../../assets/svg/box.svg");
const SETTINGS: &[u8] = include_bytes!("../../../../assets/svg/settings.svg");
const DOT: &[u8] = include_bytes!("../../../../assets/svg/dot.svg");

/// Resolve a route icon name to embedded SVG bytes.
pub(crate) fn route_icon(name: Option<&str>) -> &'static [u8] {
    match name {
        Some("dashboard") => DASHBOARD,
        Some("chart") => CHART,
        Some("users") => USERS,
        Some("cart") => CART,
        Some("box") => BOX,
        Some("settings") => SETTINGS,
        _ => DOT,
    }
}

#[cfg(test)]
mod tests {
    use super::{DOT, USERS, route_icon};

    #[test]
    fn given_unknown_or_missing_icon_when_resolved_then_dot_is_used() {
        assert_eq!(route_icon(None), DOT);
        assert_eq!(route_icon(Some("rocket")), DOT);
        assert_eq!(route_icon(Some("users")), USERS);
    }
}
