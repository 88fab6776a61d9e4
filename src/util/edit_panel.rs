//! Inline edit panel toggle.
//!
//! Panels are hidden in markup with `display: none` (or no inline display at
//! all) and opened as flex rows. Any other inline display counts as open.

#[cfg(test)]
#[path = "edit_panel_test.rs"]
mod edit_panel_test;

use crate::config::UiConfig;
use crate::platform::{Document, Element};

pub const OPEN_DISPLAY: &str = "flex";
pub const CLOSED_DISPLAY: &str = "none";

/// The display value that follows `current`.
pub fn next_display(current: &str) -> &'static str {
    if current == CLOSED_DISPLAY || current.is_empty() {
        OPEN_DISPLAY
    } else {
        CLOSED_DISPLAY
    }
}

/// Toggle the panel `<edit_prefix><id>`, returning the display it now has.
pub fn toggle_edit<D: Document>(doc: &D, config: &UiConfig, id: &str) -> Option<&'static str> {
    let panel_id = config.elements.edit_panel(id);
    let Some(panel) = doc.element_by_id(&panel_id) else {
        log::debug!("edit toggle skipped: #{panel_id} not on page");
        return None;
    };
    let next = next_display(&panel.inline_display());
    panel.set_inline_display(next);
    Some(next)
}
