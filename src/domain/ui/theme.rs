// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme flag.

/// Display theme chosen by the user or inherited from the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeFlag {
    Light,
    Dark,
}

impl ThemeFlag {
    /// Returns the persisted flag, or asks `system` when nothing was persisted.
    #[must_use]
    pub fn resolve(persisted: Option<Self>, system: impl FnOnce() -> Self) -> Self {
        persisted.unwrap_or_else(system)
    }

    /// Returns the opposite flag.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// i18n key of the toggle control label, which describes the theme the
    /// toggle switches *to*.
    #[must_use]
    pub fn toggle_label_key(self) -> &'static str {
        match self {
            Self::Light => "theme-toggle-to-dark",
            Self::Dark => "theme-toggle-to-light",
        }
    }

    /// Stable lowercase name, as stored on disk.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_persisted_value() {
        let flag = ThemeFlag::resolve(Some(ThemeFlag::Light), || {
            panic!("system detection must not run when a value is persisted")
        });
        assert_eq!(flag, ThemeFlag::Light);
    }

    #[test]
    fn resolve_falls_back_to_system() {
        assert_eq!(ThemeFlag::resolve(None, || ThemeFlag::Dark), ThemeFlag::Dark);
        assert_eq!(ThemeFlag::resolve(None, || ThemeFlag::Light), ThemeFlag::Light);
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(ThemeFlag::Light.toggled(), ThemeFlag::Dark);
        assert_eq!(ThemeFlag::Dark.toggled(), ThemeFlag::Light);
    }

    #[test]
    fn toggle_label_names_the_other_theme() {
        assert_eq!(ThemeFlag::Light.toggle_label_key(), "theme-toggle-to-dark");
        assert_eq!(ThemeFlag::Dark.toggle_label_key(), "theme-toggle-to-light");
    }
}
