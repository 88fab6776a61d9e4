//! Mobile navigation menu toggle.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::config::UiConfig;
use crate::platform::{Document, Element};

/// Flip the active class on the navigation container.
///
/// Returns the new state, or `None` when the page has no menu.
pub fn toggle_menu<D: Document>(doc: &D, config: &UiConfig) -> Option<bool> {
    let Some(nav) = doc.element_by_id(&config.elements.nav_menu) else {
        log::debug!("menu toggle skipped: #{} not on page", config.elements.nav_menu);
        return None;
    };
    Some(nav.toggle_class(&config.classes.menu_active))
}
