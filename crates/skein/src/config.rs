//! Application configuration.
//!
//! Configuration is deserialized from TOML by the CLI; this module only
//! defines the typed sections and their defaults.

use serde::Deserialize;

use crate::layout::{DEFAULT_ROW_SPACING, LayoutStrategy};

/// Application configuration loaded from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Layout configuration section
    pub layout: LayoutConfig,
}

/// Layout configuration section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Lattice strategy used when the document declares no branches and
    /// carries no coordinates of its own.
    pub strategy: LayoutStrategy,

    /// Vertical distance between branch rows, and the default step between
    /// chained nodes when an edge declares no length.
    pub row_spacing: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            strategy: LayoutStrategy::default(),
            row_spacing: DEFAULT_ROW_SPACING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.layout.strategy, LayoutStrategy::Square);
        assert_eq!(config.layout.row_spacing, 120.0);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"layout": {"strategy": "hexagonal"}}"#).expect("parse");
        assert_eq!(config.layout.strategy, LayoutStrategy::Hexagonal);
        assert_eq!(config.layout.row_spacing, 120.0);
    }

    #[test]
    fn test_rectangular_alias() {
        let config: AppConfig =
            serde_json::from_str(r#"{"layout": {"strategy": "rectangular"}}"#).expect("parse");
        assert_eq!(config.layout.strategy, LayoutStrategy::Square);
    }
}
