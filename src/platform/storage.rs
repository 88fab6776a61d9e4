//! Durable key-value preference storage.
//!
//! The browser implementation is `localStorage`; values are plain strings
//! with no schema or versioning. Last write wins.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::UiError;

pub trait SettingsStore {
    /// Read `key`; `Ok(None)` when it was never written.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, UiError>;

    /// Overwrite `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be reached or
    /// refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), UiError>;
}

/// Shared in-memory store. Clones see the same entries, which lets a test
/// simulate a page reload by building a fresh UI over the same store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that fails every call, like `localStorage` in a sandboxed frame.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .extend(entries.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())));
        store
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        if self.unavailable {
            return Err(UiError::StorageUnavailable);
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        if self.unavailable {
            return Err(UiError::StorageUnavailable);
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
