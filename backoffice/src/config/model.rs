use std::path::Path;

use backoffice_layout::{
    Breakpoints, LayoutConstants, RouteEntry, RouteGroup, RouteTable,
};
use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Signed-in user shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Profile {
    pub(crate) username: String,
    /// Path to an SVG picture. Anything else falls back to initials.
    pub(crate) avatar: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            username: String::from("admin"),
            avatar: None,
        }
    }
}

impl Profile {
    /// The avatar file when it is an SVG the header can draw.
    pub(crate) fn avatar_svg(&self) -> Option<&Path> {
        let path = Path::new(self.avatar.as_deref()?.trim());
        path.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
            .then_some(path)
    }

    /// Up to two uppercase initials for the avatar placeholder.
    pub(crate) fn initials(&self) -> String {
        let initials: String = self
            .username
            .split(|c: char| c.is_whitespace() || c == '.' || c == '_')
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect();

        if initials.is_empty() {
            String::from("?")
        } else {
            initials
        }
    }
}

/// Sidebar startup behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct SidebarConfig {
    pub(crate) initially_open: bool,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            initially_open: true,
        }
    }
}

/// On-disk shell configuration; every section is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ShellConfig {
    pub(crate) layout: LayoutConstants,
    pub(crate) breakpoints: Breakpoints,
    pub(crate) sidebar: SidebarConfig,
    pub(crate) profile: Profile,
    pub(crate) routes: RouteTable,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConstants::default(),
            breakpoints: Breakpoints::default(),
            sidebar: SidebarConfig::default(),
            profile: Profile::default(),
            routes: default_routes(),
        }
    }
}

impl ShellConfig {
    /// Check every section that feeds the layout engine.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;
        self.breakpoints.validate()?;
        self.routes.validate()?;
        Ok(())
    }
}

fn default_routes() -> RouteTable {
    RouteTable::new(vec![
        RouteGroup {
            label: String::from("Overview"),
            entries: vec![
                RouteEntry::new("/", "Dashboard", Some("dashboard")),
                RouteEntry::new("/analytics", "Analytics", Some("chart")),
            ],
        },
        RouteGroup {
            label: String::from("Management"),
            entries: vec![
                RouteEntry::new("/users", "Users", Some("users")),
                RouteEntry::new("/orders", "Orders", Some("cart")),
                RouteEntry::new("/products", "Products", Some("box")),
            ],
        },
        RouteGroup {
            label: String::from("System"),
            entries: vec![RouteEntry::new(
                "/settings",
                "Settings",
                Some("settings"),
            )],
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_config_when_validated_then_it_is_accepted() {
        let config = ShellConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.routes.first_path(), Some("/"));
    }

    #[test]
    fn given_usernames_when_initials_requested_then_two_letters_at_most() {
        let profile = |name: &str| Profile {
            username: String::from(name),
            avatar: None,
        };
        assert_eq!(profile("jane.doe").initials(), "JD");
        assert_eq!(profile("root").initials(), "R");
        assert_eq!(profile("a b c").initials(), "AB");
        assert_eq!(profile("").initials(), "?");
    }

    #[test]
    fn given_avatar_paths_when_resolved_then_only_svg_files_are_drawn() {
        let profile = |avatar: Option<&str>| Profile {
            username: String::from("ops"),
            avatar: avatar.map(String::from),
        };
        assert_eq!(
            profile(Some("/srv/avatars/ops.SVG")).avatar_svg(),
            Some(Path::new("/srv/avatars/ops.SVG"))
        );
        assert_eq!(profile(Some("https://cdn/ops.png")).avatar_svg(), None);
        assert_eq!(profile(Some("")).avatar_svg(), None);
        assert_eq!(profile(None).avatar_svg(), None);
    }

    #[test]
    fn given_invalid_layout_when_validated_then_layout_error_is_returned() {
        let mut config = ShellConfig::default();
        config.layout.collapsed_width = 400.0;
        assert!(matches!(config.validate(), Err(ConfigError::Layout(_))));
    }
}
