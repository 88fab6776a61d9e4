//! Platform seams between the UI helpers and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each concern the helpers touch (document, preference storage, timers,
//! clipboard) is a trait. `web` implements them over `web-sys` when the
//! `hydrate` feature is on; the in-memory implementations back native builds
//! and tests.

pub mod clipboard;
pub mod dom;
pub mod memory;
pub mod storage;
pub mod timers;
#[cfg(feature = "hydrate")]
pub mod web;

pub use clipboard::{ClipboardWriter, MemoryClipboard};
pub use dom::{Document, Element};
pub use memory::{MemoryDocument, MemoryElement};
pub use storage::{MemoryStore, SettingsStore};
pub use timers::{ManualScheduler, Scheduler};
