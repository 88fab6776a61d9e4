use super::*;
use crate::platform::{ManualScheduler, MemoryDocument, MemoryElement};

fn toasts(doc: &MemoryDocument) -> Vec<MemoryElement> {
    doc.body_children()
        .into_iter()
        .filter(|el| el.has_class("g-toast"))
        .collect()
}

// =============================================================
// Severity
// =============================================================

#[test]
fn severity_defaults_to_success() {
    assert_eq!(Severity::default(), Severity::Success);
    assert_eq!(Severity::from_markup(None), Severity::Success);
}

#[test]
fn severity_from_markup_parses_known_and_falls_back() {
    assert_eq!(Severity::from_markup(Some("danger")), Severity::Danger);
    assert_eq!(Severity::from_markup(Some("warning")), Severity::Warning);
    assert_eq!(Severity::from_markup(Some("info")), Severity::Info);
    assert_eq!(Severity::from_markup(Some("fatal")), Severity::Success);
}

#[test]
fn class_name_combines_base_and_severity() {
    let config = UiConfig::default();
    assert_eq!(class_name(&config, Severity::Danger), "g-toast g-toast-danger");
    assert_eq!(class_name(&config, Severity::Success), "g-toast g-toast-success");
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn toast_is_inserted_hidden_with_markup() {
    let doc = MemoryDocument::new();
    let timers = ManualScheduler::new();
    let toast = show_toast(&doc, &timers, &UiConfig::default(), "<b>Saved</b>", Severity::Success)
        .expect("body present");

    assert_eq!(toast.tag(), "div");
    assert_eq!(toast.inner_html(), "<b>Saved</b>");
    assert!(!toast.has_class("show"));
    assert_eq!(toasts(&doc).len(), 1);
}

#[test]
fn toast_shows_hides_and_is_removed_on_schedule() {
    let doc = MemoryDocument::new();
    let timers = ManualScheduler::new();
    let toast = show_toast(&doc, &timers, &UiConfig::default(), "x", Severity::Info).expect("body present");

    timers.advance(9);
    assert!(!toast.has_class("show"));
    timers.advance(1);
    assert!(toast.has_class("show"));

    timers.advance(2989);
    assert!(toast.has_class("show"));
    timers.advance(1);
    assert!(!toast.has_class("show"));
    assert!(toast.is_attached());

    timers.advance(399);
    assert!(toast.is_attached());
    timers.advance(1);
    assert!(!toast.is_attached());
    assert!(toasts(&doc).is_empty());
    assert_eq!(timers.pending(), 0);
}

#[test]
fn stacked_toasts_live_independently() {
    let doc = MemoryDocument::new();
    let timers = ManualScheduler::new();
    let config = UiConfig::default();

    let x = show_toast(&doc, &timers, &config, "x", Severity::Success).expect("body present");
    timers.advance(1000);
    let y = show_toast(&doc, &timers, &config, "y", Severity::Success).expect("body present");

    timers.advance(10);
    assert!(x.has_class("show") && y.has_class("show"));
    assert_eq!(toasts(&doc).len(), 2);

    // x was created at 0, y at 1000.
    timers.advance(2390);
    assert!(!x.is_attached());
    assert!(y.is_attached());
    assert_eq!(toasts(&doc).len(), 1);

    timers.advance(999);
    assert!(y.is_attached());
    timers.advance(1);
    assert!(!y.is_attached());
}

#[test]
fn back_to_back_toasts_coexist_in_insertion_order() {
    let doc = MemoryDocument::new();
    let timers = ManualScheduler::new();
    let config = UiConfig::default();
    show_toast(&doc, &timers, &config, "x", Severity::Success);
    show_toast(&doc, &timers, &config, "y", Severity::Danger);

    timers.advance(10);
    let live = toasts(&doc);
    assert_eq!(live.len(), 2);
    assert_eq!(live[0].inner_html(), "x");
    assert_eq!(live[1].class_name(), "g-toast g-toast-danger show");

    timers.advance(3390);
    assert!(toasts(&doc).is_empty());
}

#[test]
fn custom_timing_is_respected() {
    let doc = MemoryDocument::new();
    let timers = ManualScheduler::new();
    let mut config = UiConfig::default();
    config.toast.hide_after_ms = 500;
    config.toast.remove_after_ms = 100;
    let toast = show_toast(&doc, &timers, &config, "quick", Severity::Info).expect("body present");

    timers.advance(599);
    assert!(toast.is_attached());
    timers.advance(1);
    assert!(!toast.is_attached());
}

#[test]
fn toast_without_body_schedules_nothing() {
    let doc = MemoryDocument::without_body();
    let timers = ManualScheduler::new();
    assert!(show_toast(&doc, &timers, &UiConfig::default(), "x", Severity::Success).is_none());
    assert_eq!(timers.pending(), 0);
}
