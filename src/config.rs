//! Runtime configuration for the panel UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The markup owns element ids, CSS class names and storage keys. Defaults
//! match the panel templates; pages with different markup can override any
//! subset through `configureUi(json)` before the first interaction.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::UiError;

/// Complete configuration; every section falls back to its defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub storage: StorageKeys,
    pub elements: ElementIds,
    pub classes: ClassNames,
    pub accent_property: AccentProperty,
    pub toast: ToastTiming,
    pub messages: Messages,
}

impl UiConfig {
    /// Parse a (possibly partial) JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] when `raw` is not valid JSON for this shape.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// `localStorage` keys for the two persisted preferences.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub theme: String,
    pub color: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            theme: "g_theme".to_owned(),
            color: "g_color".to_owned(),
        }
    }
}

/// Element ids the helpers look up.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub nav_menu: String,
    pub username_input: String,
    pub color_input: String,
    /// Edit panels are named `<edit_prefix><id>`.
    pub edit_prefix: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            nav_menu: "navMenu".to_owned(),
            username_input: "u_name".to_owned(),
            color_input: "themeColor".to_owned(),
            edit_prefix: "edit-".to_owned(),
        }
    }
}

impl ElementIds {
    pub fn edit_panel(&self, id: &str) -> String {
        format!("{}{id}", self.edit_prefix)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub menu_active: String,
    pub dark_mode: String,
    pub toast: String,
    pub toast_visible: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            menu_active: "active".to_owned(),
            dark_mode: "dark-mode".to_owned(),
            toast: "g-toast".to_owned(),
            toast_visible: "show".to_owned(),
        }
    }
}

/// CSS custom property carrying the accent color.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AccentProperty(pub String);

impl Default for AccentProperty {
    fn default() -> Self {
        Self("--primary".to_owned())
    }
}

impl AccentProperty {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Toast lifecycle delays in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToastTiming {
    /// Creation to `show` class, leaves one frame for the entry transition.
    pub show_after_ms: u32,
    /// Creation to `show` class removal.
    pub hide_after_ms: u32,
    /// Hide to element removal, matches the exit transition.
    pub remove_after_ms: u32,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            show_after_ms: 10,
            hide_after_ms: 3000,
            remove_after_ms: 400,
        }
    }
}

impl ToastTiming {
    /// Creation to removal.
    pub fn lifetime_ms(&self) -> u32 {
        self.hide_after_ms.saturating_add(self.remove_after_ms)
    }
}

/// User-facing copy feedback. Defaults are the panel's Persian strings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub copied: String,
    pub nothing_to_copy: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            copied: "✅ لینک کپی شد!".to_owned(),
            nothing_to_copy: "❌ لینک ساب وجود ندارد!".to_owned(),
        }
    }
}
