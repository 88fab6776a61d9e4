//! The panel's UI helpers, one module per concern.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each helper takes the platform seams it needs as arguments, so the same
//! code runs against the live page and against the in-memory platform.

pub mod clipboard;
pub mod edit_panel;
pub mod menu;
pub mod theme;
pub mod toast;
pub mod username;
