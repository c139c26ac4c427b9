// SPDX-License-Identifier: MPL-2.0
//! System theme detection.

use crate::domain::ui::ThemeFlag;
use dark_light;

/// Detects the system theme. Anything other than an explicit light
/// preference (including detection errors) resolves to dark.
#[must_use]
pub fn detect_system_theme() -> ThemeFlag {
    if let Ok(dark_light::Mode::Light) = dark_light::detect() {
        ThemeFlag::Light
    } else {
        ThemeFlag::Dark
    }
}
