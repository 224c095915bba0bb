use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::alphabet::Format;

/// Input size limit used when no configuration sets one (100 MiB).
pub const DEFAULT_MAX_SIZE: usize = 100 * 1024 * 1024;

/// Directory name under the platform config dir.
const CONFIG_DIR_NAME: &str = "base32-codec";
/// File name inside the user config directory.
const USER_CONFIG_FILE: &str = "config.toml";
/// Project-local override in the working directory.
const LOCAL_CONFIG_FILE: &str = "base32-codec.toml";

/// Global settings for base32-codec.
///
/// Fields are optional so a later file can override just the keys it sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Format used when the caller does not pick one
    #[serde(default)]
    pub default_format: Option<Format>,
    /// Maximum input size in bytes (0 = unlimited)
    #[serde(default)]
    pub max_size: Option<usize>,
}

/// Configuration loaded from TOML files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl CodecConfig {
    /// Parses configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in settings bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../defaults.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Path of the per-user configuration file, if the platform has one.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(USER_CONFIG_FILE))
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in settings (from library)
    /// 2. `~/.config/base32-codec/config.toml` (user overrides)
    /// 3. `./base32-codec.toml` (project-local overrides)
    ///
    /// Later files override earlier ones key by key. A file that fails to
    /// parse is reported and skipped.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        let candidates = Self::user_config_path()
            .into_iter()
            .chain(std::iter::once(PathBuf::from(LOCAL_CONFIG_FILE)));

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(overrides) => {
                    tracing::debug!(path = %path.display(), "loaded config overrides");
                    config.merge(overrides);
                }
                Err(e) => {
                    eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                }
            }
        }

        Ok(config)
    }

    /// Merges another configuration into this one.
    ///
    /// Keys set in `other` win; unset keys keep their current value.
    pub fn merge(&mut self, other: CodecConfig) {
        if let Some(format) = other.settings.default_format {
            self.settings.default_format = Some(format);
        }
        if let Some(max_size) = other.settings.max_size {
            self.settings.max_size = Some(max_size);
        }
    }

    /// Format to use when none is given explicitly.
    pub fn default_format(&self) -> Format {
        self.settings.default_format.unwrap_or_default()
    }

    /// Effective input size limit (0 = unlimited).
    pub fn max_size(&self) -> usize {
        self.settings.max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }
}
