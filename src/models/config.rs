use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "trainjson.toml";

/// Configuration loaded from trainjson.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Directory traversal configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// File extension (without the dot) of exercise group files
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Visit levels and files in name order instead of listing order
    #[serde(default)]
    pub sort_entries: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            sort_entries: false,
        }
    }
}

fn default_extension() -> String {
    "csv".to_string()
}

/// Values substituted for missing or malformed numeric fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_rounds")]
    pub rounds: i64,
    #[serde(default = "default_rest_seconds")]
    pub rest_seconds: i64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            rounds: default_rounds(),
            rest_seconds: default_rest_seconds(),
        }
    }
}

fn default_rounds() -> i64 {
    1
}

fn default_rest_seconds() -> i64 {
    30
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print the JSON document instead of the compact form
    #[serde(default)]
    pub pretty: bool,
    /// Create missing parent directories of the output file
    #[serde(default = "default_create_output_dirs")]
    pub create_output_dirs: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            create_output_dirs: default_create_output_dirs(),
        }
    }
}

fn default_create_output_dirs() -> bool {
    true
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))
    }

    /// Try to load config from trainjson.toml in the given directory
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI overrides into the config
    pub fn with_overrides(mut self, pretty: bool) -> Self {
        if pretty {
            self.output.pretty = true;
        }
        self
    }

    /// Render the config as TOML, used by `init`
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::SerializeError)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(toml::ser::Error),
}
