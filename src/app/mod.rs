// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and its
//! presenter.
//!
//! The `App` struct wires together the gallery component, localization, the
//! theme flag and the announcement debounce, and translates gallery effects
//! into [`Presenter`] calls. Persistence of the theme choice also happens here
//! so the gallery component stays free of I/O.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;

pub use message::{Flags, Message};

use crate::application::port::Presenter;
use crate::domain::gallery::Catalog;
use crate::error::{Error, Result};
use crate::i18n::I18n;
use crate::infrastructure::catalog_file;
use crate::ui::announcer::Announcer;
use crate::ui::theming;
use crate::domain::ui::ThemeFlag;
use crate::ui::viewer::{Announcement, Effect, Gallery};
use config::Config;
use persisted_state::AppState;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Everything `App::new` needs besides the catalog and presenter.
#[derive(Debug, Default)]
pub struct AppSetup {
    pub config: Config,
    pub i18n: I18n,
    pub app_state: AppState,
    /// Data directory override for `state.cbor`. `None` uses path resolution.
    pub data_dir: Option<PathBuf>,
}

/// Root application state that bridges the gallery component, localization,
/// and persisted preferences.
pub struct App<P: Presenter> {
    pub i18n: I18n,
    gallery: Gallery,
    presenter: P,
    announcer: Announcer,
    theme: ThemeFlag,
    app_state: AppState,
    data_dir: Option<PathBuf>,
    /// Localized warnings raised while loading settings or state.
    warnings: Vec<String>,
}

impl<P: Presenter> fmt::Debug for App<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery", &self.gallery)
            .field("theme", &self.theme)
            .field("announcer", &self.announcer)
            .finish_non_exhaustive()
    }
}

impl<P: Presenter> App<P> {
    /// Builds the application and pushes the initial theme and control states
    /// to `presenter`.
    pub fn new(catalog: Catalog, presenter: P, setup: AppSetup) -> Self {
        let AppSetup {
            config,
            i18n,
            app_state,
            data_dir,
        } = setup;

        let theme = ThemeFlag::resolve(app_state.theme, theming::detect_system_theme);
        let mut app = Self {
            i18n,
            gallery: Gallery::new(catalog).with_swipe_threshold(config.swipe_threshold()),
            presenter,
            announcer: Announcer::new(config.announce_delay()),
            theme,
            app_state,
            data_dir,
            warnings: Vec::new(),
        };

        app.apply_theme();
        let effects = app.gallery.set_category(config.default_category());
        app.apply_effects(effects, Instant::now());
        tracing::debug!(
            items = app.gallery.navigator().catalog().len(),
            theme = theme.name(),
            "application initialized"
        );
        app
    }

    /// Loads settings, persisted state and the catalog named by `flags`.
    ///
    /// Settings and state problems degrade to defaults and are reported
    /// through [`App::warnings`]; a missing or unreadable catalog is an error.
    pub fn from_flags(flags: Flags, presenter: P) -> Result<Self> {
        let Some(catalog_path) = flags.catalog_path.as_deref() else {
            return Err(Error::Catalog("no catalog file given".to_string()));
        };
        let catalog = catalog_file::load(Path::new(catalog_path))?;

        let config_dir = flags.config_dir.map(PathBuf::from);
        let data_dir = flags.data_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir);
        let (app_state, state_warning) = AppState::load_from(data_dir.clone());
        let i18n = I18n::new(flags.lang, &config);

        let mut app = Self::new(
            catalog,
            presenter,
            AppSetup {
                config,
                i18n,
                app_state,
                data_dir,
            },
        );
        for key in [config_warning, state_warning].into_iter().flatten() {
            let text = app.i18n.tr(&key);
            tracing::warn!(key = key.as_str(), "{text}");
            app.warnings.push(text);
        }
        Ok(app)
    }

    /// Handles a message using the current time for announcement timing.
    pub fn update(&mut self, message: Message) {
        self.update_at(message, Instant::now());
    }

    /// Handles a message at `now`.
    pub fn update_at(&mut self, message: Message, now: Instant) {
        match message {
            Message::Gallery(msg) => {
                let effects = self.gallery.handle_message(msg);
                self.apply_effects(effects, now);
            }
            Message::ToggleTheme => self.toggle_theme(),
            Message::Tick(at) => self.release_announcement(at),
        }
    }

    /// Writes any pending announcement immediately.
    pub fn flush_announcements(&mut self) {
        if let Some(text) = self.announcer.flush() {
            self.presenter.set_live_region(&text);
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[must_use]
    pub fn theme(&self) -> ThemeFlag {
        self.theme
    }

    #[must_use]
    pub fn has_pending_announcement(&self) -> bool {
        self.announcer.is_pending()
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.app_state.theme = Some(self.theme);
        if let Some(key) = self.app_state.save_to(self.data_dir.clone()) {
            tracing::warn!(key = key.as_str(), "theme choice was not persisted");
        }
        tracing::debug!(theme = self.theme.name(), "theme toggled");
        self.apply_theme();
    }

    fn apply_theme(&mut self) {
        let label = self.i18n.tr(self.theme.toggle_label_key());
        self.presenter.apply_theme(self.theme, &label);
    }

    fn apply_effects(&mut self, effects: Vec<Effect>, now: Instant) {
        for effect in effects {
            match effect {
                Effect::Render(frame) => self.presenter.render(&frame),
                Effect::SyncControls(controls) => self.presenter.sync_controls(&controls),
                Effect::SetViewerVisible(visible) => self.presenter.set_viewer_visible(visible),
                Effect::FocusCloseControl => self.presenter.focus_close_control(),
                Effect::Announce(announcement) => self.announce(&announcement, now),
            }
        }
        self.release_announcement(now);
    }

    /// Clears the live region and schedules the localized text.
    ///
    /// Text that is already due is written first so a late tick never loses it.
    fn announce(&mut self, announcement: &Announcement, now: Instant) {
        self.release_announcement(now);
        let args = announcement.args();
        let borrowed: Vec<(&str, &str)> = args
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        let text = self.i18n.tr_with_args(announcement.i18n_key(), &borrowed);

        // A pending announcement means the region was already cleared
        if !self.announcer.is_pending() {
            self.presenter.set_live_region("");
        }
        self.announcer.schedule(text, now);
    }

    fn release_announcement(&mut self, now: Instant) {
        if let Some(text) = self.announcer.tick(now) {
            self.presenter.set_live_region(&text);
        }
    }
}
