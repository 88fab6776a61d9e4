//! Corner toast notifications.
//!
//! DESIGN
//! ======
//! A toast is a `<div>` appended to `<body>`. Three timers drive it: the
//! `show` class lands one tick after insertion so the entry transition runs,
//! it is dropped at `hide_after_ms`, and the element is removed
//! `remove_after_ms` later. Timers are never cancelled and toasts do not know
//! about each other, so repeated calls stack.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::config::UiConfig;
use crate::platform::{Document, Element, Scheduler};

/// Visual style, mapped to a `g-toast-<severity>` class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Success,
    Danger,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "success" => Some(Self::Success),
            "danger" => Some(Self::Danger),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    /// Parse a severity passed from markup, defaulting when absent or unknown.
    pub fn from_markup(raw: Option<&str>) -> Self {
        match raw {
            None => Self::default(),
            Some(raw) => Self::parse(raw).unwrap_or_else(|| {
                log::debug!("unknown toast severity {raw:?}, using success");
                Self::default()
            }),
        }
    }
}

/// `"g-toast g-toast-<severity>"` for the configured base class.
pub fn class_name(config: &UiConfig, severity: Severity) -> String {
    let base = &config.classes.toast;
    format!("{base} {base}-{}", severity.as_str())
}

/// Insert a toast and schedule its lifecycle.
///
/// `message` is trusted markup and is not escaped. Returns the toast element,
/// or `None` when there is no body to attach to.
pub fn show_toast<D: Document, T: Scheduler>(
    doc: &D,
    timers: &T,
    config: &UiConfig,
    message: &str,
    severity: Severity,
) -> Option<D::Element> {
    let Some(toast) = doc.append_to_body("div", &class_name(config, severity), message) else {
        log::debug!("toast dropped: no <body>");
        return None;
    };
    let timing = config.toast;

    let el = toast.clone();
    let visible = config.classes.toast_visible.clone();
    timers.schedule(timing.show_after_ms, Box::new(move || el.add_class(&visible)));

    let el = toast.clone();
    let visible = config.classes.toast_visible.clone();
    let inner = timers.clone();
    timers.schedule(
        timing.hide_after_ms,
        Box::new(move || {
            el.remove_class(&visible);
            inner.schedule(timing.remove_after_ms, Box::new(move || el.remove()));
        }),
    );

    Some(toast)
}
