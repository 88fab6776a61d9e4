//! JavaScript exports for markup event handlers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Templates call these from `onclick`/`onchange` attributes, so the
//! exported names are fixed: `toggleMenu`, `toggleTheme`, `changeColor`,
//! `initTheme`, `showToast`, `genU`, `toggleEdit` and `copyS`, plus the
//! descriptive aliases. One `PanelUi` lives per page in a thread-local.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::app::PanelUi;
use crate::config::UiConfig;
use crate::error::UiError;
use crate::platform::web::{LocalStore, NavigatorClipboard, TimeoutScheduler, WebDocument, js_message};
use crate::util::toast::Severity;

type BrowserUi = PanelUi<WebDocument, LocalStore, TimeoutScheduler, NavigatorClipboard>;

thread_local! {
    static UI: RefCell<Option<Rc<BrowserUi>>> = const { RefCell::new(None) };
}

/// Seed for the username RNG; not security relevant.
fn seed() -> u64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let noise = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let now = js_sys::Date::now() as u64;
    (noise << 32) ^ now
}

fn build(config: UiConfig) -> Result<BrowserUi, UiError> {
    Ok(PanelUi::new(
        config,
        WebDocument::current()?,
        LocalStore,
        TimeoutScheduler,
        NavigatorClipboard,
        seed(),
    ))
}

/// The page's UI, built with default config on first use.
fn ui() -> Option<Rc<BrowserUi>> {
    UI.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            match build(UiConfig::default()) {
                Ok(ui) => *slot = Some(Rc::new(ui)),
                Err(err) => log::warn!("[{}] panel ui unavailable: {err}", err.error_code()),
            }
        }
        slot.clone()
    })
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    }
    schedule_theme_restore();
}

/// Run `initTheme` once the document is parsed.
fn schedule_theme_restore() {
    let doc = match WebDocument::current() {
        Ok(doc) => doc,
        Err(err) => {
            log::warn!("[{}] theme restore skipped: {err}", err.error_code());
            return;
        }
    };
    if !doc.is_loading() {
        restore_theme_once();
        return;
    }
    let callback = Closure::once_into_js(restore_theme_once);
    if let Err(err) = doc
        .inner()
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
    {
        log::warn!("DOMContentLoaded listener failed: {}", js_message(&err));
    }
}

fn restore_theme_once() {
    if let Some(settings) = ui().and_then(|ui| ui.restore_theme_once()) {
        log::info!("theme restored: mode={:?} accent={:?}", settings.mode, settings.accent);
    }
}

/// Replace the page configuration with `json` (partial objects allowed).
///
/// The module's start hook may already have restored the theme with the
/// default config; in that case the restore runs again with the new one.
///
/// # Errors
///
/// Throws when `json` does not parse or there is no document.
#[wasm_bindgen(js_name = configureUi)]
pub fn configure_ui(json: &str) -> Result<(), JsValue> {
    let ui = UiConfig::from_json(json)
        .and_then(build)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    let previous = UI.with(|slot| slot.borrow().clone());
    if let Some(settings) = previous.and_then(|prev| ui.take_over_from(&prev)) {
        log::info!("theme restored after reconfigure: mode={:?} accent={:?}", settings.mode, settings.accent);
    }
    UI.with(|slot| *slot.borrow_mut() = Some(Rc::new(ui)));
    Ok(())
}

#[wasm_bindgen(js_name = toggleMenu)]
pub fn toggle_menu() {
    if let Some(ui) = ui() {
        ui.toggle_menu();
    }
}

#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    if let Some(ui) = ui() {
        ui.toggle_theme();
    }
}

#[wasm_bindgen(js_name = changeColor)]
pub fn change_color(color: &str) {
    if let Some(ui) = ui() {
        ui.change_color(color);
    }
}

#[wasm_bindgen(js_name = initTheme)]
pub fn init_theme() {
    if let Some(ui) = ui() {
        ui.init_theme();
    }
}

#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, severity: Option<String>) {
    if let Some(ui) = ui() {
        ui.show_toast(message, Severity::from_markup(severity.as_deref()));
    }
}

#[wasm_bindgen(js_name = generateUsername)]
pub fn generate_username() -> Option<String> {
    ui().map(|ui| ui.generate_username())
}

#[wasm_bindgen(js_name = genU)]
pub fn gen_u() -> Option<String> {
    generate_username()
}

#[wasm_bindgen(js_name = toggleEdit)]
pub fn toggle_edit(id: &str) {
    if let Some(ui) = ui() {
        ui.toggle_edit(id);
    }
}

#[wasm_bindgen(js_name = copyToClipboard)]
pub async fn copy_to_clipboard(text: Option<String>) -> Result<(), JsValue> {
    if let Some(ui) = ui() {
        let outcome = ui.copy_to_clipboard(text.as_deref()).await;
        log::debug!("copy outcome: {outcome:?}");
    }
    Ok(())
}

#[wasm_bindgen(js_name = copyS)]
pub async fn copy_s(text: Option<String>) -> Result<(), JsValue> {
    copy_to_clipboard(text).await
}
