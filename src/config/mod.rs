//! Configuration loading and management

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::query::SortDirection;

fn default_page_size() -> usize {
    8
}

/// List defaults for one view (catalog, products, requests, users,
/// tickets)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Records per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Column to sort by when the view mounts; `None` keeps source order
    #[serde(default)]
    pub default_sort: Option<String>,

    /// Direction for the default sort
    #[serde(default)]
    pub default_direction: SortDirection,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            default_sort: None,
            default_direction: SortDirection::Ascending,
        }
    }
}

/// Complete per-view configuration for the portal's list screens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// View name → list defaults, in declaration order
    pub views: IndexMap<String, ViewConfig>,
}

impl PortalConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file '{}'", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check structural constraints the type system cannot express
    pub fn validate(&self) -> Result<()> {
        for (name, view) in &self.views {
            if view.page_size == 0 {
                bail!("view '{}': page_size must be at least 1", name);
            }
        }
        Ok(())
    }

    /// The configuration for one view, falling back to the stock defaults
    /// for unknown names
    pub fn view(&self, name: &str) -> ViewConfig {
        self.views.get(name).cloned().unwrap_or_default()
    }
}

impl Default for PortalConfig {
    /// The five stock list views with the defaults the portal ships with
    fn default() -> Self {
        let mut views = IndexMap::new();
        views.insert(
            "catalog".to_string(),
            ViewConfig {
                page_size: 8,
                default_sort: Some("name".to_string()),
                default_direction: SortDirection::Ascending,
            },
        );
        views.insert("products".to_string(), ViewConfig::default());
        views.insert(
            "requests".to_string(),
            ViewConfig {
                page_size: 8,
                default_sort: Some("submitted_at".to_string()),
                default_direction: SortDirection::Descending,
            },
        );
        views.insert("users".to_string(), ViewConfig::default());
        views.insert(
            "tickets".to_string(),
            ViewConfig {
                page_size: 8,
                default_sort: Some("updated_at".to_string()),
                default_direction: SortDirection::Descending,
            },
        );
        Self { views }
    }
}
