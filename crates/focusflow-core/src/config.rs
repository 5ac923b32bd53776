//! User settings and their on-disk location.
//!
//! Settings are read from a JSON document. Missing fields take their
//! defaults, unknown fields are rejected, and durations are clamped to the
//! allowed range on load. The default location follows the XDG Base
//! Directory convention: `$XDG_CONFIG_HOME/focusflow/settings.json`.

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{FocusError, Result, ResultExt};
use crate::models::Durations;

const APP_PREFIX: &str = "focusflow";
const SETTINGS_FILE: &str = "settings.json";

/// Options a collaborator may apply to a running tracker.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Phase durations in minutes
    #[serde(default)]
    pub durations: Durations,
    /// Start breaks automatically when a work phase ends
    #[serde(default)]
    pub auto_start_breaks: bool,
    /// Start work automatically when a break ends
    #[serde(default)]
    pub auto_start_pomodoros: bool,
    /// Mark the active task completed once it reaches its estimate
    #[serde(default)]
    pub auto_check_tasks: bool,
    /// Move to the next task once the active one reaches its estimate
    #[serde(default)]
    pub auto_switch_tasks: bool,
}

impl Settings {
    /// Parses settings from JSON text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focusflow_core::Settings;
    ///
    /// let settings = Settings::from_json(r#"{ "durations": { "work": 90 } }"#).unwrap();
    /// assert_eq!(settings.durations.work, 60);
    /// assert_eq!(settings.durations.short_break, 5);
    /// assert!(!settings.auto_check_tasks);
    /// ```
    pub fn from_json(text: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(text)?;
        Ok(settings.clamped())
    }

    /// Copy with durations clamped to `[1, 60]` minutes.
    pub fn clamped(mut self) -> Self {
        self.durations = self.durations.clamped();
        self
    }

    /// Loads settings from an explicit file. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|e| FocusError::file_system(path, e))?;
        let settings: Settings = serde_json::from_str(&text)
            .with_context(format!("Invalid settings file {}", path.display()))?;
        debug!("loaded settings from {}", path.display());
        Ok(settings.clamped())
    }

    /// Loads settings from `path` if given, otherwise from the default
    /// location. A missing default file yields default settings.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                debug!("no settings file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Writes the settings as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FocusError::file_system(parent, e))?;
        }
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text).map_err(|e| FocusError::file_system(path, e))
    }

    /// Writes the settings to the default location, creating the
    /// configuration directory if needed. Returns the path written.
    pub fn save_default(&self) -> Result<PathBuf> {
        let path = xdg::BaseDirectories::with_prefix(APP_PREFIX)
            .place_config_file(SETTINGS_FILE)
            .map_err(|e| FocusError::XdgDirectory(e.to_string()))?;
        self.save(&path)?;
        Ok(path)
    }

    /// Default settings path following the XDG Base Directory
    /// convention, or `None` when no home directory can be determined.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_PREFIX).get_config_file(SETTINGS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_pomodoro() {
        let settings = Settings::default();
        assert_eq!(settings.durations, Durations::default());
        assert_eq!(settings.durations.work, 25);
        assert_eq!(settings.durations.short_break, 5);
        assert_eq!(settings.durations.long_break, 15);
        assert!(!settings.auto_start_breaks);
        assert!(!settings.auto_start_pomodoros);
        assert!(!settings.auto_check_tasks);
        assert!(!settings.auto_switch_tasks);
    }

    #[test]
    fn test_from_json_full_document() {
        let settings = Settings::from_json(
            r#"{
                "durations": { "work": 50, "short_break": 10, "long_break": 30 },
                "auto_start_breaks": true,
                "auto_start_pomodoros": false,
                "auto_check_tasks": true,
                "auto_switch_tasks": true
            }"#,
        )
        .unwrap();
        assert_eq!(settings.durations.work, 50);
        assert_eq!(settings.durations.long_break, 30);
        assert!(settings.auto_start_breaks);
        assert!(settings.auto_check_tasks);
        assert!(settings.auto_switch_tasks);
    }

    #[test]
    fn test_from_json_clamps_and_rejects_unknown() {
        let settings =
            Settings::from_json(r#"{ "durations": { "work": 0, "long_break": 120 } }"#).unwrap();
        assert_eq!(settings.durations.work, 1);
        assert_eq!(settings.durations.long_break, 60);

        let err = Settings::from_json(r#"{ "volume": 3 }"#).unwrap_err();
        assert!(matches!(err, FocusError::Serialization { .. }));
    }
}
