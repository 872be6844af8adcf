//! Store configuration via `termstore.toml`
//!
//! Every field has a default, so an empty file is a valid configuration.
//! Values are validated eagerly on load.

use serde::{Deserialize, Serialize};
use std::path::Path;
use termstore_core::{Error, Result};

/// Conventional config file name
pub const CONFIG_FILE_NAME: &str = "termstore.toml";

/// Store configuration loaded from `termstore.toml`.
///
/// # Example
///
/// ```toml
/// first_nid = 1
/// track_dependents = true
/// initial_capacity = 1024
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// First native identity handed out by the store. Must be non-zero.
    #[serde(default = "default_first_nid")]
    pub first_nid: u64,
    /// Maintain the anchor to dependents index on every commit.
    /// When off, dependent lookups scan the registry.
    #[serde(default = "default_track_dependents")]
    pub track_dependents: bool,
    /// Pre-sized capacity of the component registry
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

fn default_first_nid() -> u64 {
    1
}

fn default_track_dependents() -> bool {
    true
}

fn default_initial_capacity() -> usize {
    1024
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            first_nid: default_first_nid(),
            track_dependents: default_track_dependents(),
            initial_capacity: default_initial_capacity(),
        }
    }
}

impl StoreConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# termstore configuration
#
# First native identity handed out to new components (default: 1).
# Zero is reserved for "no reference" and is rejected.
first_nid = 1

# Keep an index from anchor components (concepts, refex targets) to the
# descriptions, relationships, media and refex members that point at them
# (default: true). When false, dependent lookups scan every component.
track_dependents = true

# Initial capacity of the component registry (default: 1024).
# Raise it before a bulk import.
initial_capacity = 1024
"#
    }

    /// Parse and validate config text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the text is not valid TOML for this
    /// structure or a value is out of range.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: StoreConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate config from a file path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read, `Error::Config` if it
    /// cannot be parsed or holds invalid values.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.first_nid == 0 {
            return Err(Error::Config(
                "first_nid must be non-zero; 0 is the unassigned identity".to_string(),
            ));
        }
        Ok(())
    }
}
