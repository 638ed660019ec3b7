//! Configuration file handling.
//!
//! The config file is TOML. Every field is optional:
//!
//! ```toml
//! [style]
//! fg = "white"
//! bg = "black"
//! bold = false
//! faint = false
//! reverse = false
//!
//! [line]
//! max_width = 80
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, StyleError};
use crate::terminal::{Color, Graphics};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SGRLINE_CONFIG";

/// Width used when neither the config nor the terminal provides one.
pub const FALLBACK_WIDTH: usize = 80;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default style applied after every fragment of a line.
    pub style: StyleConfig,
    pub line: LineConfig,
}

/// Style section, with colors given by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    pub bold: bool,
    pub faint: bool,
    pub reverse: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    /// Maximum visible width. Unset means "use the terminal width".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<usize>,
}

impl StyleConfig {
    /// Resolve color names into a [`Graphics`] value.
    ///
    /// # Errors
    /// Returns [`StyleError::InvalidColorName`] for an unknown color.
    pub fn to_graphics(&self) -> Result<Graphics, StyleError> {
        let mut graphics = Graphics::new()
            .bold(self.bold)
            .faint(self.faint)
            .reverse(self.reverse);
        if let Some(name) = &self.fg {
            graphics = graphics.with_fg(Color::from_name(name)?);
        }
        if let Some(name) = &self.bg {
            graphics = graphics.with_bg(Color::from_name(name)?);
        }
        Ok(graphics)
    }
}

impl Config {
    /// Location of the config file.
    ///
    /// `$SGRLINE_CONFIG` wins, otherwise `<config dir>/sgrline/config.toml`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("sgrline").join("config.toml"))
    }

    /// Load from `path`. A missing file yields the default config.
    ///
    /// Color names are validated here so a bad config is rejected up front.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.style.to_graphics()?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write the config as TOML, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)?;
        Ok(())
    }

    /// Default style as a [`Graphics`] value.
    pub fn default_graphics(&self) -> Result<Graphics, StyleError> {
        self.style.to_graphics()
    }

    /// Pick the line width: explicit value, then config, then terminal.
    pub fn resolve_width(&self, explicit: Option<usize>) -> usize {
        explicit
            .or(self.line.max_width)
            .or_else(terminal_width)
            .unwrap_or(FALLBACK_WIDTH)
    }
}

/// Current terminal width in columns, if stdout is a terminal.
fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(width, _)| usize::from(width.0))
}
