//! Copy-to-clipboard with a legacy fallback and toast feedback.
//!
//! ERROR HANDLING
//! ==============
//! A rejected clipboard write falls back to the textarea + `execCommand`
//! technique. The success toast is shown whether or not the fallback copy
//! worked; the fallback result is only logged and reported in the outcome.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use crate::config::UiConfig;
use crate::platform::{ClipboardWriter, Document, Scheduler};
use crate::util::toast::{Severity, show_toast};

/// How a copy request was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Nothing to copy; the danger toast was shown.
    Missing,
    /// The async clipboard API accepted the write.
    Clipboard,
    /// The async API failed and the textarea fallback ran.
    Fallback { verified: bool },
}

pub async fn copy_to_clipboard<D, T, C>(
    doc: &D,
    timers: &T,
    clipboard: &C,
    config: &UiConfig,
    text: Option<&str>,
) -> CopyOutcome
where
    D: Document,
    T: Scheduler,
    C: ClipboardWriter,
{
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        show_toast(doc, timers, config, &config.messages.nothing_to_copy, Severity::Danger);
        return CopyOutcome::Missing;
    };

    let outcome = match clipboard.write_text(text).await {
        Ok(()) => CopyOutcome::Clipboard,
        Err(err) => {
            log::debug!("[{}] {err}, falling back to execCommand", err.error_code());
            let verified = match doc.legacy_copy(text) {
                Ok(()) => true,
                Err(err) => {
                    log::warn!("[{}] fallback copy failed: {err}", err.error_code());
                    false
                }
            };
            CopyOutcome::Fallback { verified }
        }
    };
    show_toast(doc, timers, config, &config.messages.copied, Severity::Success);
    outcome
}
