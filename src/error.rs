//! Error types for style parsing and configuration loading.

use std::path::PathBuf;

/// Errors that can occur while building colors and styles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("Could not interpret color string: '{name}'")]
    InvalidColorName { name: String },

    #[error("3-bit color value must be in 0..=7, got {value}")]
    InvalidColorValue { value: u8 },
}

/// Errors that can occur while reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Invalid style in config: {0}")]
    Style(#[from] StyleError),
}
