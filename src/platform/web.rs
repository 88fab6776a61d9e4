//! Browser implementations of the platform seams.
//!
//! Only compiled with the `hydrate` feature. Every `JsValue` error is turned
//! into a [`UiError`] at the call site; element operations log and continue.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use super::clipboard::ClipboardWriter;
use super::dom::{Document, Element};
use super::storage::SettingsStore;
use super::timers::{Scheduler, Task};
use crate::error::UiError;

/// Best-effort text for a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn dom_error(value: &JsValue) -> UiError {
    UiError::Dom(js_message(value))
}

fn log_dom_failure(op: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::debug!("{op} failed: {}", js_message(&err));
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

#[derive(Clone, Debug)]
pub struct WebElement(HtmlElement);

impl Element for WebElement {
    fn toggle_class(&self, class: &str) -> bool {
        match self.0.class_list().toggle(class) {
            Ok(present) => present,
            Err(err) => {
                log::debug!("classList.toggle({class}) failed: {}", js_message(&err));
                self.has_class(class)
            }
        }
    }

    fn add_class(&self, class: &str) {
        log_dom_failure("classList.add", self.0.class_list().add_1(class));
    }

    fn remove_class(&self, class: &str) {
        log_dom_failure("classList.remove", self.0.class_list().remove_1(class));
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn inline_display(&self) -> String {
        self.0.style().get_property_value("display").unwrap_or_default()
    }

    fn set_inline_display(&self, value: &str) {
        self.set_style_property("display", value);
    }

    fn set_style_property(&self, name: &str, value: &str) {
        log_dom_failure("style.setProperty", self.0.style().set_property(name, value));
    }

    fn remove(&self) {
        self.0.remove();
    }
}

#[derive(Clone, Debug)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    /// The current window's document.
    ///
    /// # Errors
    ///
    /// Returns an error outside a window context (workers, tests under node).
    pub fn current() -> Result<Self, UiError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| UiError::MissingElement("document".to_owned()))?;
        Ok(Self { document })
    }

    /// Whether the parser is still running, i.e. `DOMContentLoaded` is pending.
    pub fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }

    pub fn inner(&self) -> &web_sys::Document {
        &self.document
    }

    fn create_html(&self, tag: &str) -> Result<HtmlElement, UiError> {
        self.document
            .create_element(tag)
            .map_err(|e| dom_error(&e))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| UiError::Dom(format!("<{tag}> is not an HtmlElement")))
    }

    fn copy_via_textarea(&self, body: &HtmlElement, text: &str) -> Result<(), UiError> {
        let area = self
            .create_html("textarea")?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| UiError::Dom("textarea cast failed".to_owned()))?;
        area.set_value(text);
        let style = area.style();
        style.set_property("position", "fixed").map_err(|e| dom_error(&e))?;
        style.set_property("left", "-999999px").map_err(|e| dom_error(&e))?;
        body.append_child(&area).map_err(|e| dom_error(&e))?;

        let copied = area
            .focus()
            .map(|()| area.select())
            .and_then(|()| {
                self.document
                    .dyn_ref::<HtmlDocument>()
                    .ok_or_else(|| JsValue::from_str("document is not an HtmlDocument"))?
                    .exec_command("copy")
            });
        area.remove();

        match copied {
            Ok(true) => Ok(()),
            Ok(false) => Err(UiError::CopyCommandRejected),
            Err(err) => Err(dom_error(&err)),
        }
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .map(WebElement)
            .ok()
    }

    fn body(&self) -> Option<WebElement> {
        self.document.body().map(WebElement)
    }

    fn root(&self) -> Option<WebElement> {
        self.document
            .document_element()?
            .dyn_into::<HtmlElement>()
            .map(WebElement)
            .ok()
    }

    fn append_to_body(&self, tag: &str, class_name: &str, inner_html: &str) -> Option<WebElement> {
        let body = self.document.body()?;
        let el = match self.create_html(tag) {
            Ok(el) => el,
            Err(err) => {
                log::warn!("[{}] {err}", err.error_code());
                return None;
            }
        };
        el.set_class_name(class_name);
        el.set_inner_html(inner_html);
        if let Err(err) = body.append_child(&el) {
            log::warn!("appendChild failed: {}", js_message(&err));
            return None;
        }
        Some(WebElement(el))
    }

    fn legacy_copy(&self, text: &str) -> Result<(), UiError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| UiError::MissingElement("body".to_owned()))?;
        self.copy_via_textarea(&body, text)
    }
}

// =============================================================================
// STORAGE
// =============================================================================

/// `window.localStorage`, looked up on every call so a storage that becomes
/// unavailable mid-session degrades instead of caching a dead handle.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, UiError> {
        web_sys::window()
            .ok_or(UiError::StorageUnavailable)?
            .local_storage()
            .map_err(|e| UiError::Storage(js_message(&e)))?
            .ok_or(UiError::StorageUnavailable)
    }
}

impl SettingsStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| UiError::Storage(js_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| UiError::Storage(js_message(&e)))
    }
}

// =============================================================================
// TIMERS
// =============================================================================

/// `setTimeout` through gloo-timers; handles are forgotten so tasks always run.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }
}

// =============================================================================
// CLIPBOARD
// =============================================================================

/// `navigator.clipboard.writeText`, resolved dynamically because the API is
/// missing outside secure contexts.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavigatorClipboard;

impl ClipboardWriter for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<(), UiError> {
        let window = web_sys::window().ok_or(UiError::ClipboardUnavailable)?;
        let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
            .map_err(|e| UiError::ClipboardRejected(js_message(&e)))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(UiError::ClipboardUnavailable);
        }
        let write = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .map_err(|e| UiError::ClipboardRejected(js_message(&e)))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| UiError::ClipboardUnavailable)?;
        let promise = write
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|e| UiError::ClipboardRejected(js_message(&e)))?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| UiError::ClipboardUnavailable)?;
        JsFuture::from(promise)
            .await
            .map_err(|e| UiError::ClipboardRejected(js_message(&e)))?;
        Ok(())
    }
}
