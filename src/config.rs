// Configuration management
//
// Handles magnifier configuration and settings persistence.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::filter::FilterKind;

/// Default configuration file path
const CONFIG_FILE: &str = "magnify_config.toml";

/// Magnifier configuration
///
/// Stores all user-configurable settings for the magnifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagnifierConfig {
    /// Scaling settings
    pub scaling: ScalingConfig,

    /// Window settings
    pub window: WindowConfig,

    /// Export settings
    pub export: ExportConfig,
}

/// Scaling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalingConfig {
    /// Active magnification filter
    pub filter: FilterKind,
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Enable VSync
    pub vsync: bool,
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Export directory
    pub directory: PathBuf,

    /// Include timestamp in filename
    pub include_timestamp: bool,
}

impl Default for MagnifierConfig {
    fn default() -> Self {
        MagnifierConfig {
            scaling: ScalingConfig {
                filter: FilterKind::Hq4x,
            },
            window: WindowConfig { vsync: true },
            export: ExportConfig {
                directory: PathBuf::from("exports"),
                include_timestamp: true,
            },
        }
    }
}

impl MagnifierConfig {
    /// Load configuration from file or create default
    ///
    /// If the configuration file doesn't exist, creates a default configuration
    /// and saves it to the file.
    ///
    /// # Returns
    ///
    /// The loaded or default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use magnify_rs::config::MagnifierConfig;
    ///
    /// let config = MagnifierConfig::load_or_default();
    /// ```
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| {
            let config = Self::default();
            // Try to save the default config, but don't fail if we can't
            let _ = config.save();
            config
        })
    }

    /// Load configuration from file
    ///
    /// # Returns
    ///
    /// Result containing the configuration or an error
    pub fn load() -> Result<Self, io::Error> {
        let contents = fs::read_to_string(CONFIG_FILE)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save configuration to file
    ///
    /// # Returns
    ///
    /// Result indicating success or error
    ///
    /// # Example
    ///
    /// ```no_run
    /// use magnify_rs::config::MagnifierConfig;
    ///
    /// let config = MagnifierConfig::default();
    /// config.save().expect("Failed to save configuration");
    /// ```
    pub fn save(&self) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(CONFIG_FILE, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MagnifierConfig::default();
        assert_eq!(config.scaling.filter, FilterKind::Hq4x);
        assert!(config.window.vsync);
        assert_eq!(config.export.directory, PathBuf::from("exports"));
        assert!(config.export.include_timestamp);
    }

    #[test]
    fn test_config_serialization() {
        let config = MagnifierConfig::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: MagnifierConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize");

        assert_eq!(config.scaling.filter, deserialized.scaling.filter);
        assert_eq!(config.window.vsync, deserialized.window.vsync);
    }

    #[test]
    fn test_filter_names_in_toml() {
        let config = MagnifierConfig::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        assert!(toml_str.contains("filter = \"hq4x\""));

        let parsed: MagnifierConfig =
            toml::from_str("[scaling]\nfilter = \"scale3x\"\n[window]\nvsync = false\n[export]\ndirectory = \"out\"\ninclude_timestamp = false\n")
                .expect("Failed to parse");
        assert_eq!(parsed.scaling.filter, FilterKind::Scale3x);
        assert!(!parsed.window.vsync);
    }
}
