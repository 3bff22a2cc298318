//! BetterUi configuration file handling
//!
//! Optional `better_ui.toml`:
//!
//! ```toml
//! [behaviour]
//! fade_duration_ms = 300
//!
//! [defaults]
//! variant = "primary"
//! size = "md"
//! ```
//!
//! Enumerated values go through the option validation gate, so a bad
//! `variant` in the file is reported with the full allowed set.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tokens::{Size, Variant};

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "better_ui.toml";

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error when reading the file
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// TOML parsing or validation error
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BetterUiConfig {
    pub behaviour: BehaviourConfig,
    pub defaults: DefaultsConfig,
}

/// Client-side behaviour timings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BehaviourConfig {
    /// Opacity transition length before a dismissed banner is removed
    pub fade_duration_ms: u64,
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            fade_duration_ms: 300,
        }
    }
}

/// Defaults applied to components that do not set an option explicitly
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub variant: Variant,
    pub size: Size,
}

impl BetterUiConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `better_ui.toml` from a directory
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        Self::load(&dir.join(CONFIG_FILE_NAME))
    }

    /// Dismiss fade duration
    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.behaviour.fade_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BetterUiConfig::default();
        assert_eq!(config.fade_duration(), Duration::from_millis(300));
        assert_eq!(config.defaults.variant, Variant::Primary);
        assert_eq!(config.defaults.size, Size::Md);
    }

    #[test]
    fn test_parse_partial_file() {
        let config = BetterUiConfig::from_toml_str(
            r#"
            [defaults]
            variant = "dark"
            "#,
        )
        .unwrap();
        assert_eq!(config.defaults.variant, Variant::Dark);
        assert_eq!(config.defaults.size, Size::Md);
        assert_eq!(config.behaviour.fade_duration_ms, 300);
    }

    #[test]
    fn test_invalid_option_rejected() {
        let err = BetterUiConfig::from_toml_str(
            r#"
            [defaults]
            size = "huge"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("must be one of: xs, sm, md, lg, xl"));
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = BetterUiConfig::load(Path::new("/nonexistent/better_ui.toml")).unwrap();
        assert_eq!(config, BetterUiConfig::default());
    }
}
