//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver
//!
//! Manages the user-editable settings of clipstack. Loads and saves them as
//! TOML from the platform config directory resolved by the
//! [`directories`](https://docs.rs/directories) crate; command-line flags are
//! applied on top afterwards (see [`crate::cli`]).
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load().await?;
//! config.validate()?;
//! ```

use cliphist::HistoryConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs as TokioFs;
use tracing::info;

use crate::error::AppError;

pub const DEFAULT_BACKGROUND: &str = "#edbb99";

/// History layout. Horizontal also captures and shows entry timestamps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Vertical,

    Horizontal,
}

impl Layout {
    #[inline]
    pub const fn captures_timestamps(self) -> bool {
        matches!(self, Layout::Horizontal)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub layout: Layout,

    /// Background colour, `#rrggbb` or a terminal colour name
    pub background: String,

    /// Collapse the view after an entry has been pasted
    pub minimize_after_paste: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            layout: Layout::Vertical,
            background: DEFAULT_BACKGROUND.to_string(),
            minimize_after_paste: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClipboardConfig {
    /// How often the clipboard is sampled for ownership changes
    #[serde(with = "humantime_serde")]
    pub poll_interval: Duration,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(250),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,

    /// Log directory; the platform data directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub history: HistoryConfig,

    pub ui: UiConfig,

    pub clipboard: ClipboardConfig,

    pub logging: LoggingConfig,
}

impl Config {
    /// Loads config from the platform config dir, or writes and returns the
    /// defaults when no file exists yet.
    ///
    /// The config is expected at `$XDG_CONFIG_HOME/clipstack/config.toml`
    /// (Linux), or equivalent on Windows/macOS.
    pub async fn load() -> Result<Self, AppError> {
        let path = Self::config_path()?;
        if TokioFs::try_exists(&path).await? {
            Self::load_from(&path).await
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save_to(&path).await?;

            Ok(default_config)
        }
    }

    /// Loads config from an explicit TOML file.
    pub async fn load_from(path: &Path) -> Result<Self, AppError> {
        info!("Loading config from {}", path.display());

        let text = TokioFs::read_to_string(path)
            .await
            .map_err(|source| AppError::ConfigIo {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(toml::from_str(&text)?)
    }

    pub async fn save_to(&self, path: &Path) -> Result<(), AppError> {
        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent).await?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(path, toml_str).await?;

        Ok(())
    }

    /// Checks every value the program cannot run with.
    pub fn validate(&self) -> Result<(), AppError> {
        self.history.validate()?;

        crate::view::theme::parse_color(&self.ui.background)?;

        if self.clipboard.poll_interval.is_zero() {
            return Err(AppError::invalid_configuration(
                "clipboard.poll_interval",
                "must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> Result<PathBuf, AppError> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    /// Directory holding rolling log files unless `logging.directory` is set.
    pub fn log_dir(&self) -> Result<PathBuf, AppError> {
        match &self.logging.directory {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::project_dirs()?.data_local_dir().join("logs")),
        }
    }

    fn project_dirs() -> Result<ProjectDirs, AppError> {
        ProjectDirs::from("org", "clipstack", "clipstack")
            .ok_or_else(|| AppError::Other("Could not determine config directory.".to_string()))
    }
}
