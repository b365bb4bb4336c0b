//! Configuration management and validation.
//!
//! Provides layered configuration for the processor: built-in defaults,
//! then an optional TOML file at `~/.config/testcase-processor/config.toml`,
//! then CLI overrides applied by the command layer.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::services::generator_output::RecordDefaults;
use crate::constants::{DEFAULT_CATEGORY, DEFAULT_PRIORITY, DEFAULT_TEST_TYPE};
use crate::{Error, Result};

/// Export format names accepted in configuration files
pub const FORMAT_NAMES: &[&str] = &["csv", "sheet", "zephyr"];

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Export format used when the CLI does not specify one
    pub default_format: String,

    /// Directory for generated files in batch mode when the CLI does not
    /// specify one
    pub output_dir: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "csv".to_string(),
            output_dir: None,
        }
    }
}

/// Default values applied to record fields with absent or empty columns
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldsConfig {
    pub priority: String,
    pub category: String,
    pub test_type: String,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            priority: DEFAULT_PRIORITY.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            test_type: DEFAULT_TEST_TYPE.to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Record field defaults
    pub fields: FieldsConfig,
}

impl Config {
    /// Default configuration file location
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join("testcase-processor").join("config.toml"))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config {}", path.display()), e))?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::config_format(
                path.display().to_string(),
                "Invalid configuration file",
                e,
            )
        })?;

        Ok(config)
    }

    /// Load configuration with the layered approach: defaults, then the
    /// explicit file if given, else the default location if it exists
    pub fn load_layered(config_file: Option<&Path>) -> Result<Config> {
        let config = match config_file {
            Some(path) => {
                debug!("Using config file: {}", path.display());
                Self::load(path)?
            }
            None => {
                let default_path = Self::default_config_path()?;
                if default_path.exists() {
                    debug!("Using default config file: {}", default_path.display());
                    Self::load(&default_path)?
                } else {
                    debug!("No config file found, using defaults");
                    Config::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if !FORMAT_NAMES.contains(&self.output.default_format.as_str()) {
            return Err(Error::configuration(format!(
                "Unknown export format '{}'. Available formats: {}",
                self.output.default_format,
                FORMAT_NAMES.join(", ")
            )));
        }

        if self.fields.priority.trim().is_empty() {
            return Err(Error::configuration(
                "Default priority cannot be empty".to_string(),
            ));
        }

        if self.fields.category.trim().is_empty() {
            return Err(Error::configuration(
                "Default category cannot be empty".to_string(),
            ));
        }

        if self.fields.test_type.trim().is_empty() {
            return Err(Error::configuration(
                "Default test type cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Field defaults for the record mapper
    pub fn record_defaults(&self) -> RecordDefaults {
        RecordDefaults {
            priority: self.fields.priority.clone(),
            category: self.fields.category.clone(),
            test_type: self.fields.test_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.default_format, "csv");
        assert_eq!(config.fields.priority, "Medium");
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[output]
default_format = "zephyr"

[fields]
priority = "High"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.output.default_format, "zephyr");
        assert_eq!(config.fields.priority, "High");
        // Unspecified values keep their defaults
        assert_eq!(config.fields.category, "Functional");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_format_rejected() {
        let mut config = Config::default();
        config.output.default_format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_field_default_rejected() {
        let mut config = Config::default();
        config.fields.test_type = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_format_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[").unwrap();

        let result = Config::load(file.path());
        assert!(matches!(result, Err(Error::ConfigFormat { .. })));
    }

    #[test]
    fn test_record_defaults_reflect_fields() {
        let mut config = Config::default();
        config.fields.priority = "Critical".to_string();

        let defaults = config.record_defaults();
        assert_eq!(defaults.priority, "Critical");
        assert_eq!(defaults.category, "Functional");
    }
}
