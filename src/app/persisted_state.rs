// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! This module handles state that should persist across sessions but is not
//! user-configurable (unlike preferences in `settings.toml`). Currently this
//! is the theme chosen with the theme toggle.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. `--data-dir` or `GALLERY_LENS_DATA_DIR`
//! 3. Falls back to platform-specific data directory

use super::paths;
use crate::domain::ui::ThemeFlag;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Theme explicitly chosen by the user. `None` follows the system theme.
    #[serde(default, with = "stored_theme")]
    pub theme: Option<ThemeFlag>,
}

/// On-disk spelling of [`ThemeFlag`].
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum StoredTheme {
    Light,
    Dark,
}

impl From<ThemeFlag> for StoredTheme {
    fn from(flag: ThemeFlag) -> Self {
        match flag {
            ThemeFlag::Light => Self::Light,
            ThemeFlag::Dark => Self::Dark,
        }
    }
}

impl From<StoredTheme> for ThemeFlag {
    fn from(stored: StoredTheme) -> Self {
        match stored {
            StoredTheme::Light => Self::Light,
            StoredTheme::Dark => Self::Dark,
        }
    }
}

mod stored_theme {
    use super::{Deserialize, Deserializer, Serialize, Serializer, StoredTheme, ThemeFlag};

    pub fn serialize<S: Serializer>(
        theme: &Option<ThemeFlag>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        theme.map(StoredTheme::from).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ThemeFlag>, D::Error> {
        Ok(Option::<StoredTheme>::deserialize(deserializer)?.map(ThemeFlag::from))
    }
}

impl AppState {
    /// Loads application state from a custom directory, or the resolved data
    /// directory when `base_dir` is `None`.
    ///
    /// Returns a tuple of (state, optional_warning). If loading fails, returns
    /// default state with a warning key explaining what went wrong.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(err) => {
                        tracing::warn!(path = %path.display(), %err, "state file is corrupted");
                        (
                            Self::default(),
                            Some("notification-state-parse-error".to_string()),
                        )
                    }
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot read state file");
                (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                )
            }
        }
    }

    /// Saves application state to a custom directory.
    ///
    /// Creates the parent directory if it doesn't exist. Returns an optional
    /// warning key if the save failed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_follows_system_theme() {
        assert!(AppState::default().theme.is_none());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let state = AppState {
            theme: Some(ThemeFlag::Light),
        };
        assert!(state.save_to(Some(base_dir.clone())).is_none());

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, state);
    }

    #[test]
    fn load_from_missing_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().join("missing")));
        assert!(warning.is_none());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn load_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), [0xff, 0x00, 0x13])
            .expect("failed to write corrupted state");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(state, AppState::default());
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("deep").join("data");
        let state = AppState {
            theme: Some(ThemeFlag::Dark),
        };
        assert!(state.save_to(Some(nested.clone())).is_none());
        assert!(nested.join(STATE_FILE).exists());
    }
}
