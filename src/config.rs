//! Configuration for building a color matcher.
//!
//! A matcher needs two decisions: which palette to match against and how
//! 3-digit hex codes are widened.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use color_name::{ColorMatcher, MatcherConfig};
//! use std::path::Path;
//!
//! // Load from file
//! let config = MatcherConfig::from_json_file(Path::new("color_name.json"))?;
//! let matcher = ColorMatcher::from_config(&config)?;
//!
//! // Or use defaults: built-in palette, concatenating shorthand
//! let matcher = ColorMatcher::from_config(&MatcherConfig::default())?;
//! # Ok::<(), color_name::MatchError>(())
//! ```
//!
//! Every field is optional in the JSON form:
//!
//! ```json
//! { "palette_path": "palettes/brand.json", "shorthand": "expand" }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{color::ShorthandMode, names::PaletteStore, MatchError, Result};

/// Matcher configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Palette file in the `[hex, category, name]` JSON format.
    /// The built-in table is used when unset.
    pub palette_path: Option<PathBuf>,

    /// Rule for widening 3-digit hex codes
    pub shorthand: ShorthandMode,
}

impl MatcherConfig {
    /// Check that the configuration can be used to build a matcher
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.palette_path {
            if path.as_os_str().is_empty() {
                return Err(MatchError::ConfigError {
                    message: "palette_path is empty".to_string(),
                    source: None,
                });
            }
            if !path.is_file() {
                return Err(MatchError::ConfigError {
                    message: format!("palette file {} does not exist", path.display()),
                    source: None,
                });
            }
        }
        Ok(())
    }

    /// Load the configured palette, or the built-in one
    pub fn load_palette(&self) -> Result<PaletteStore> {
        match &self.palette_path {
            Some(path) => PaletteStore::from_json_file(path),
            None => Ok(PaletteStore::default()),
        }
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MatchError::config(format!("cannot read config {}", path.display()), e)
        })?;
        serde_json::from_str(&content).map_err(|e| {
            MatchError::config(format!("invalid config {}", path.display()), e)
        })
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| MatchError::config("cannot serialize config", e))?;
        std::fs::write(path, json).map_err(|e| {
            MatchError::config(format!("cannot write config {}", path.display()), e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatcherConfig::default();
        assert_eq!(config.palette_path, None);
        assert_eq!(config.shorthand, ShorthandMode::Concatenate);
        assert!(config.validate().is_ok());
        assert!(!config.load_palette().unwrap().is_empty());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: MatcherConfig = serde_json::from_str(r#"{"shorthand": "expand"}"#).unwrap();
        assert_eq!(config.shorthand, ShorthandMode::Expand);
        assert_eq!(config.palette_path, None);

        let config: MatcherConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MatcherConfig::default());
    }

    #[test]
    fn test_validate_missing_palette_file() {
        let config = MatcherConfig {
            palette_path: Some(PathBuf::from("no/such/palette.json")),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(MatchError::ConfigError { .. })));

        let config = MatcherConfig {
            palette_path: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = MatcherConfig {
            palette_path: Some(dir.path().join("palette.json")),
            shorthand: ShorthandMode::Expand,
        };

        config.to_json_file(&path).unwrap();
        assert_eq!(MatcherConfig::from_json_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"shorthand": "sideways"}"#).unwrap();

        let err = MatcherConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(err, MatchError::ConfigError { .. }));
    }
}
