//! Configuration file handling for graymat.
//!
//! Loads configuration from `<config dir>/graymat/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default extension appended to output names.
pub const DEFAULT_EXTENSION: &str = ".csv";

/// Default suffix for the thresholded output file.
pub const DEFAULT_THRESHOLD_SUFFIX: &str = "_threshold";

/// Configuration file structure for graymat.
/// Loaded from `<config dir>/graymat/config.toml` (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub threshold: ThresholdConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_threshold_suffix")]
    pub threshold_suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            threshold_suffix: default_threshold_suffix(),
        }
    }
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ThresholdConfig {
    /// When set, a binarized copy is exported alongside the grayscale output
    #[serde(default)]
    pub value: Option<f32>,
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_threshold_suffix() -> String {
    DEFAULT_THRESHOLD_SUFFIX.to_string()
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("graymat").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/graymat/config.toml")
        })
}

/// Contents written by `graymat config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# graymat configuration

[output]
# Extension appended to the output name
extension = ".csv"
# Suffix for the thresholded output (before the extension)
threshold_suffix = "_threshold"

[threshold]
# Binarize at this cutoff and write a second CSV
# value = 128.0
"#;
