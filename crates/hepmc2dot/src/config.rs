//! Render configuration for the transcoder.
//!
//! Settings are loaded from a TOML file; every field has a default so a
//! missing file or empty table renders with untouched coordinates.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Distance, in input length units, that a final-state particle's track is
/// drawn past its production vertex before the dummy terminal node.
pub const DUMMY_TRACK_LENGTH: f64 = 200.0;

/// Render settings for a conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Multiplier applied to vertex positions in the output coordinates.
    pub scale: f64,
    /// When set, vertices whose absolute barcode exceeds this value are
    /// dropped from the output, as are edges ending at such vertices.
    pub vertex_threshold: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            vertex_threshold: None,
        }
    }
}

impl RenderConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Toml)
    }

    /// Returns true if a record with this barcode is filtered out by the
    /// threshold.
    pub fn skips(&self, barcode: i64) -> bool {
        self.vertex_threshold
            .is_some_and(|threshold| barcode.unsigned_abs() > threshold)
    }
}

/// Errors loading render configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[source] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Toml(#[source] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.scale, 1.0);
        assert_eq!(config.vertex_threshold, None);
    }

    #[test]
    fn test_from_toml() {
        let config = RenderConfig::from_toml("scale = 50.0\nvertex_threshold = 200000\n").unwrap();
        assert_eq!(config.scale, 50.0);
        assert_eq!(config.vertex_threshold, Some(200000));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = RenderConfig::from_toml("").unwrap();
        assert_eq!(config.scale, 1.0);
        assert_eq!(config.vertex_threshold, None);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = RenderConfig::from_toml("scale = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_threshold_filtering() {
        let config = RenderConfig {
            scale: 1.0,
            vertex_threshold: Some(1000),
        };
        assert!(!config.skips(999));
        assert!(!config.skips(-1000));
        assert!(config.skips(1001));
        assert!(config.skips(-1001));

        assert!(!RenderConfig::default().skips(i64::MIN));
    }
}
