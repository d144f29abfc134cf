use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// A navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub path: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl RouteEntry {
    pub fn new(
        path: impl Into<String>,
        name: impl Into<String>,
        icon: Option<&str>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            icon: icon.map(String::from),
        }
    }
}

/// Labelled, ordered group of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteGroup {
    pub label: String,
    #[serde(default)]
    pub entries: Vec<RouteEntry>,
}

/// Ordered route groups supplied by configuration. Read-only to the layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    groups: Vec<RouteGroup>,
}

impl RouteTable {
    pub fn new(groups: Vec<RouteGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[RouteGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|group| group.entries.is_empty())
    }

    /// Iterate entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.groups.iter().flat_map(|group| group.entries.iter())
    }

    /// Look up an entry and its group by path.
    pub fn find(&self, path: &str) -> Option<(&RouteGroup, &RouteEntry)> {
        self.groups.iter().find_map(|group| {
            group
                .entries
                .iter()
                .find(|entry| entry.path == path)
                .map(|entry| (group, entry))
        })
    }

    /// Path of the first entry, used as the landing route.
    pub fn first_path(&self) -> Option<&str> {
        self.entries().next().map(|entry| entry.path.as_str())
    }

    /// Reject blank labels, blank paths and duplicate paths.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen = HashSet::new();

        for group in &self.groups {
            if group.label.trim().is_empty() {
                return Err(LayoutError::Routes {
                    message: String::from("group label must not be blank"),
                });
            }

            for entry in &group.entries {
                if entry.path.trim().is_empty() {
                    return Err(LayoutError::Routes {
                        message: format!(
                            "entry '{}' in '{}' has a blank path",
                            entry.name, group.label
                        ),
                    });
                }
                if !seen.insert(entry.path.as_str()) {
                    return Err(LayoutError::Routes {
                        message: format!("duplicate path '{}'", entry.path),
                    });
                }
            }
        }

        Ok(())
    }
}
