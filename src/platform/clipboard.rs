//! Asynchronous clipboard writes.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::error::UiError;

pub trait ClipboardWriter: Clone + 'static {
    /// Write `text` to the system clipboard. Suspends until the platform
    /// resolves; no timeout.
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), UiError>>;
}

#[derive(Debug, Default)]
struct ClipboardState {
    attempts: Vec<String>,
    contents: Option<String>,
}

/// In-memory clipboard that either accepts writes or rejects them all.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    state: Rc<RefCell<ClipboardState>>,
    failing: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write, like a denied permission.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Every text a write was attempted with, successful or not.
    pub fn attempts(&self) -> Vec<String> {
        self.state.borrow().attempts.clone()
    }

    pub fn contents(&self) -> Option<String> {
        self.state.borrow().contents.clone()
    }
}

impl ClipboardWriter for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), UiError> {
        let mut state = self.state.borrow_mut();
        state.attempts.push(text.to_owned());
        if self.failing {
            return Err(UiError::ClipboardRejected("NotAllowedError".to_owned()));
        }
        state.contents = Some(text.to_owned());
        Ok(())
    }
}
