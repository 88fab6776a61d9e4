//! Dark mode and accent color.
//!
//! Reads the persisted preferences from the settings store and applies them
//! to the page: a `dark-mode` class on `<body>` and a CSS custom property on
//! `<html>`. Toggle and color changes write back to the store.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A store that cannot be read or written is
//! logged and otherwise ignored, so the page still themes for the session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::UiConfig;
use crate::platform::{Document, Element, SettingsStore};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but the exact names is no preference.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }
}

/// Persisted theme preferences.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeSettings {
    pub mode: Option<ThemeMode>,
    pub accent: Option<String>,
}

fn read<S: SettingsStore>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("[{}] reading {key}: {err}", err.error_code());
            None
        }
    }
}

fn write<S: SettingsStore>(store: &S, key: &str, value: &str) {
    if let Err(err) = store.set(key, value) {
        log::warn!("[{}] writing {key}: {err}", err.error_code());
    }
}

/// Read both preferences. An empty stored color counts as unset.
pub fn load_settings<S: SettingsStore>(store: &S, config: &UiConfig) -> ThemeSettings {
    ThemeSettings {
        mode: read(store, &config.storage.theme).and_then(|raw| ThemeMode::parse(&raw)),
        accent: read(store, &config.storage.color).filter(|c| !c.is_empty()),
    }
}

/// Set the accent property on `<html>` and mirror it into the color input.
fn apply_accent<D: Document>(doc: &D, config: &UiConfig, color: &str) {
    if let Some(root) = doc.root() {
        root.set_style_property(config.accent_property.as_str(), color);
    }
    if let Some(input) = doc.element_by_id(&config.elements.color_input) {
        input.set_value(color);
    }
}

/// Apply `settings` to the page without touching the store.
///
/// A stored light mode leaves `<body>` alone, so markup that ships dark keeps
/// its class on load.
pub fn apply<D: Document>(doc: &D, config: &UiConfig, settings: &ThemeSettings) {
    if settings.mode == Some(ThemeMode::Dark) {
        if let Some(body) = doc.body() {
            body.add_class(&config.classes.dark_mode);
        }
    }
    if let Some(color) = settings.accent.as_deref() {
        apply_accent(doc, config, color);
    }
}

/// Flip dark mode on `<body>` and persist the result.
///
/// Returns the new mode, or `None` before the body exists.
pub fn toggle_theme<D: Document, S: SettingsStore>(doc: &D, store: &S, config: &UiConfig) -> Option<ThemeMode> {
    let Some(body) = doc.body() else {
        log::debug!("theme toggle skipped: no <body>");
        return None;
    };
    let mode = ThemeMode::from_dark(body.toggle_class(&config.classes.dark_mode));
    write(store, &config.storage.theme, mode.as_str());
    Some(mode)
}

/// Apply and persist a caller-validated CSS color.
pub fn change_color<D: Document, S: SettingsStore>(doc: &D, store: &S, config: &UiConfig, color: &str) {
    apply_accent(doc, config, color);
    write(store, &config.storage.color, color);
}

/// Restore persisted preferences on page load.
///
/// The stored color goes back through [`change_color`], so it is rewritten
/// to the store as well.
pub fn init_theme<D: Document, S: SettingsStore>(doc: &D, store: &S, config: &UiConfig) -> ThemeSettings {
    let settings = load_settings(store, config);
    apply(
        doc,
        config,
        &ThemeSettings {
            mode: settings.mode,
            accent: None,
        },
    );
    if let Some(color) = settings.accent.as_deref() {
        change_color(doc, store, config, color);
    }
    settings
}
