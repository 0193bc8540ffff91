//! Optional settings file: `~/.config/watchlist/settings.toml`.
//!
//! Every key is optional and command-line flags win over the file:
//! ```toml
//! [view]
//! filter = "unwatched"
//!
//! [pick]
//! seed = 42
//!
//! [display]
//! color = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use watchlist_core::StatusFilter;

use crate::error::CliError;

/// Canonical path to the settings file.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("watchlist").join("settings.toml")
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Settings {
    #[serde(default)]
    pub view: ViewSettings,
    #[serde(default)]
    pub pick: PickSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub(crate) struct ViewSettings {
    pub filter: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub(crate) struct PickSettings {
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub(crate) struct DisplaySettings {
    pub color: Option<bool>,
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub(crate) fn load(path: &Path) -> Result<Self, CliError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(CliError::settings(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
        };
        let settings: Settings = toml::from_str(&contents)
            .map_err(|e| CliError::settings(format!("{}: {}", path.display(), e)))?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// The configured initial filter, if any.
    pub(crate) fn filter(&self) -> Result<Option<StatusFilter>, CliError> {
        self.view
            .filter
            .as_deref()
            .map(|name| {
                name.parse::<StatusFilter>()
                    .map_err(|e| CliError::settings(format!("[view] filter: {}", e)))
            })
            .transpose()
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
