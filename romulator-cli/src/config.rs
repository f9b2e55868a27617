//! Screen geometry configuration.

use std::path::Path;

use anyhow::{Context, Result};
use romulator_screen::Geometry;
use serde::Deserialize;

use crate::cli::GeometryArgs;

/// Display geometry of the text-mode peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenConfig {
    pub rows: usize,
    pub columns: usize,
    pub char_width: usize,
    pub char_height: usize,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            rows: 24,
            columns: 80,
            char_width: 8,
            char_height: 8,
        }
    }
}

impl ScreenConfig {
    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid screen config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config '{}'", path.display()))?;
        Self::from_json(&json).with_context(|| format!("In config '{}'", path.display()))
    }

    /// Defaults, then the config file, then command-line flags.
    pub fn resolve(path: Option<&Path>, overrides: &GeometryArgs) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply(overrides);
        tracing::debug!(?config, "resolved screen config");
        Ok(config)
    }

    pub fn apply(&mut self, overrides: &GeometryArgs) {
        if let Some(rows) = overrides.rows {
            self.rows = rows;
        }
        if let Some(columns) = overrides.columns {
            self.columns = columns;
        }
        if let Some(width) = overrides.char_width {
            self.char_width = width;
        }
        if let Some(height) = overrides.char_height {
            self.char_height = height;
        }
    }
}

impl From<ScreenConfig> for Geometry {
    fn from(config: ScreenConfig) -> Self {
        Geometry {
            rows: config.rows,
            columns: config.columns,
            char_width: config.char_width,
            char_height: config.char_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ScreenConfig::from_json(r#"{ "rows": 16, "columns": 32 }"#).unwrap();
        assert_eq!(config.rows, 16);
        assert_eq!(config.columns, 32);
        assert_eq!(config.char_width, 8);
        assert_eq!(config.char_height, 8);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(ScreenConfig::from_json(r#"{ "colour": true }"#).is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "rows": 16, "columns": 32 }}"#).unwrap();

        let overrides = GeometryArgs {
            columns: Some(40),
            ..GeometryArgs::default()
        };
        let config = ScreenConfig::resolve(Some(file.path()), &overrides).unwrap();
        assert_eq!(config.rows, 16);
        assert_eq!(config.columns, 40);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = ScreenConfig::resolve(Some(&missing), &GeometryArgs::default()).unwrap_err();
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_into_geometry() {
        let geometry = Geometry::from(ScreenConfig::default());
        assert_eq!(geometry, Geometry::new(24, 80));
    }
}
