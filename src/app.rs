//! The panel UI registry.
//!
//! `PanelUi` bundles configuration with the injected platform: document,
//! preference store, timers, clipboard and the username RNG. The browser
//! bindings hold one instance per page; tests build one over the in-memory
//! platform.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::cell::{Cell, RefCell};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::UiConfig;
use crate::platform::{ClipboardWriter, Document, Scheduler, SettingsStore};
use crate::util::clipboard::{self, CopyOutcome};
use crate::util::theme::{self, ThemeMode, ThemeSettings};
use crate::util::toast::{self, Severity};
use crate::util::{edit_panel, menu, username};

pub struct PanelUi<D, S, T, C> {
    config: UiConfig,
    doc: D,
    store: S,
    timers: T,
    clipboard: C,
    rng: RefCell<SmallRng>,
    theme_restored: Cell<bool>,
}

impl<D, S, T, C> PanelUi<D, S, T, C>
where
    D: Document,
    S: SettingsStore,
    T: Scheduler,
    C: ClipboardWriter,
{
    pub fn new(config: UiConfig, doc: D, store: S, timers: T, clipboard: C, seed: u64) -> Self {
        Self {
            config,
            doc,
            store,
            timers,
            clipboard,
            rng: RefCell::new(SmallRng::seed_from_u64(seed)),
            theme_restored: Cell::new(false),
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn toggle_menu(&self) -> Option<bool> {
        menu::toggle_menu(&self.doc, &self.config)
    }

    pub fn toggle_theme(&self) -> Option<ThemeMode> {
        theme::toggle_theme(&self.doc, &self.store, &self.config)
    }

    pub fn change_color(&self, color: &str) {
        theme::change_color(&self.doc, &self.store, &self.config, color);
    }

    pub fn init_theme(&self) -> ThemeSettings {
        theme::init_theme(&self.doc, &self.store, &self.config)
    }

    /// Page-load theme restore. Only the first call applies anything.
    pub fn restore_theme_once(&self) -> Option<ThemeSettings> {
        if self.theme_restored.replace(true) {
            return None;
        }
        Some(self.init_theme())
    }

    /// Take over from the UI this one replaces after a config change.
    ///
    /// If `previous` already restored the theme on page load, it did so with
    /// its own keys and class names, so the restore runs again under this
    /// config.
    pub fn take_over_from(&self, previous: &Self) -> Option<ThemeSettings> {
        if !previous.theme_restored.get() {
            return None;
        }
        self.theme_restored.set(false);
        self.restore_theme_once()
    }

    pub fn show_toast(&self, message: &str, severity: Severity) -> Option<D::Element> {
        toast::show_toast(&self.doc, &self.timers, &self.config, message, severity)
    }

    pub fn generate_username(&self) -> String {
        username::generate_username(&self.doc, &self.config, &mut *self.rng.borrow_mut())
    }

    pub fn toggle_edit(&self, id: &str) -> Option<&'static str> {
        edit_panel::toggle_edit(&self.doc, &self.config, id)
    }

    pub async fn copy_to_clipboard(&self, text: Option<&str>) -> CopyOutcome {
        clipboard::copy_to_clipboard(&self.doc, &self.timers, &self.clipboard, &self.config, text).await
    }
}
