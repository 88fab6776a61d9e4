//! Error type shared by the platform layer and the UI helpers.
//!
//! ERROR HANDLING
//! ==============
//! Platform calls return `Result<_, UiError>` and propagate with `?`. The
//! helpers in `util` never surface these to markup callers: a failure is
//! logged and the operation degrades to a no-op.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("storage unavailable")]
    StorageUnavailable,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("clipboard unavailable")]
    ClipboardUnavailable,
    #[error("clipboard write rejected: {0}")]
    ClipboardRejected(String),
    #[error("copy command rejected")]
    CopyCommandRejected,
    #[error("dom error: {0}")]
    Dom(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl UiError {
    /// Stable code used in log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingElement(_) => "E_MISSING_ELEMENT",
            Self::StorageUnavailable => "E_STORAGE_UNAVAILABLE",
            Self::Storage(_) => "E_STORAGE",
            Self::ClipboardUnavailable => "E_CLIPBOARD_UNAVAILABLE",
            Self::ClipboardRejected(_) => "E_CLIPBOARD_REJECTED",
            Self::CopyCommandRejected => "E_COPY_COMMAND",
            Self::Dom(_) => "E_DOM",
            Self::Config(_) => "E_CONFIG",
        }
    }
}
