// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::viewer::component;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Gallery(component::Message),
    /// The theme toggle was activated.
    ToggleTheme,
    Tick(Instant), // Periodic tick releasing pending announcements
}

impl From<component::Message> for Message {
    fn from(message: component::Message) -> Self {
        Message::Gallery(message)
    }
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Path of the TOML catalog file to display.
    pub catalog_path: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `GALLERY_LENS_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `GALLERY_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
