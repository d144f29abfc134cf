use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::model::ShellConfig;

/// Return the path to the shell config file.
fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("backoffice")
            .join("shell.json");
    }
    std::env::temp_dir().join("backoffice").join("shell.json")
}

/// Load and validate the config at `path`. A missing file yields defaults.
pub(crate) fn load_config(path: &Path) -> Result<ShellConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(ShellConfig::default());
        },
        Err(err) => return Err(err.into()),
    };

    parse_config(&content)
}

fn parse_config(content: &str) -> Result<ShellConfig, ConfigError> {
    let mut config: ShellConfig = serde_json::from_str(content)?;
    if config.routes.is_empty() {
        log::warn!("config has no routes, using the built-in table");
        config.routes = ShellConfig::default().routes;
    }
    config.validate()?;
    Ok(config)
}

/// Load the user config, falling back to defaults on error.
pub(crate) fn load_initial_config() -> ShellConfig {
    let path = config_path();
    match load_config(&path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!(
                "failed to load config from {}, using defaults: {err}",
                path.display()
            );
            ShellConfig::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_partial_json_when_parsed_then_missing_sections_use_defaults() {
        let json = serde_json::json!({
            "layout": { "collapsed_width": 64 },
            "profile": { "username": "ops" }
        });

        let config =
            parse_config(&json.to_string()).expect("should deserialize");
        assert_eq!(config.layout.collapsed_width, 64.0);
        assert_eq!(config.layout.expanded_width, 250.0);
        assert_eq!(config.profile.username, "ops");
        assert!(config.sidebar.initially_open);
        assert_eq!(config.routes, ShellConfig::default().routes);
    }

    #[test]
    fn given_custom_routes_when_parsed_then_table_replaces_defaults() {
        let json = serde_json::json!({
            "routes": [
                {
                    "label": "Billing",
                    "entries": [
                        { "path": "/invoices", "name": "Invoices", "icon": "box" }
                    ]
                }
            ]
        });

        let config =
            parse_config(&json.to_string()).expect("should deserialize");
        assert_eq!(config.routes.groups().len(), 1);
        assert_eq!(config.routes.first_path(), Some("/invoices"));
    }

    #[test]
    fn given_empty_route_table_when_parsed_then_built_in_routes_are_used() {
        let json = serde_json::json!({
            "routes": [ { "label": "Empty", "entries": [] } ]
        });

        let config =
            parse_config(&json.to_string()).expect("should deserialize");
        assert!(!config.routes.is_empty());
        assert_eq!(config.routes, ShellConfig::default().routes);
    }

    #[test]
    fn given_unordered_breakpoints_when_parsed_then_validation_fails() {
        let json = serde_json::json!({
            "breakpoints": { "small": 900, "medium_small": 640 }
        });

        let result = parse_config(&json.to_string());
        assert!(matches!(result, Err(ConfigError::Layout(_))));
    }

    #[test]
    fn given_malformed_json_when_parsed_then_json_error_is_returned() {
        let result = parse_config("{ not json");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn given_missing_file_when_loaded_then_defaults_are_returned() {
        let path = std::env::temp_dir()
            .join("backoffice-config-test-missing")
            .join("shell.json");
        let config = load_config(&path).expect("missing file is not an error");
        assert_eq!(config, ShellConfig::default());
    }
}
