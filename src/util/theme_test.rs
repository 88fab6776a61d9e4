use super::*;
use crate::platform::{MemoryDocument, MemoryStore};

fn stored(store: &MemoryStore, key: &str) -> Option<String> {
    store.get(key).expect("store available")
}

// =============================================================
// ThemeMode
// =============================================================

#[test]
fn theme_mode_parses_exact_names_only() {
    assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
    assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
    assert_eq!(ThemeMode::parse("Dark"), None);
    assert_eq!(ThemeMode::parse(""), None);
}

#[test]
fn theme_mode_round_trips_stored_names() {
    assert_eq!(ThemeMode::parse(ThemeMode::Dark.as_str()), Some(ThemeMode::Dark));
    assert_eq!(ThemeMode::parse(ThemeMode::Light.as_str()), Some(ThemeMode::Light));
    assert_eq!(ThemeMode::default(), ThemeMode::Light);
}

// =============================================================
// toggle_theme
// =============================================================

#[test]
fn toggle_theme_alternates_persisted_value() {
    let doc = MemoryDocument::new();
    let store = MemoryStore::new();
    let config = UiConfig::default();
    let body = doc.body().expect("body");

    let mut last = None;
    for _ in 0..6 {
        let mode = toggle_theme(&doc, &store, &config).expect("body present");
        if let Some(prev) = last {
            assert_ne!(prev, mode);
        }
        assert_eq!(stored(&store, "g_theme").as_deref(), Some(mode.as_str()));
        assert_eq!(body.has_class("dark-mode"), mode == ThemeMode::Dark);
        last = Some(mode);
    }
}

#[test]
fn toggle_theme_starts_from_body_state() {
    let doc = MemoryDocument::new();
    let store = MemoryStore::new();
    doc.body().expect("body").add_class("dark-mode");
    assert_eq!(toggle_theme(&doc, &store, &UiConfig::default()), Some(ThemeMode::Light));
    assert_eq!(stored(&store, "g_theme").as_deref(), Some("light"));
}

#[test]
fn toggle_theme_without_body_persists_nothing() {
    let doc = MemoryDocument::without_body();
    let store = MemoryStore::new();
    assert_eq!(toggle_theme(&doc, &store, &UiConfig::default()), None);
    assert_eq!(stored(&store, "g_theme"), None);
}

#[test]
fn toggle_theme_survives_unavailable_storage() {
    let doc = MemoryDocument::new();
    let store = MemoryStore::unavailable();
    assert_eq!(toggle_theme(&doc, &store, &UiConfig::default()), Some(ThemeMode::Dark));
    assert!(doc.body().expect("body").has_class("dark-mode"));
}

// =============================================================
// change_color
// =============================================================

#[test]
fn change_color_sets_property_and_persists() {
    let doc = MemoryDocument::new();
    let store = MemoryStore::new();
    let picker = doc.insert("themeColor", "input");
    change_color(&doc, &store, &UiConfig::default(), "#0ea5e9");

    let root = doc.root().expect("root");
    assert_eq!(root.style_property("--primary").as_deref(), Some("#0ea5e9"));
    assert_eq!(picker.value(), "#0ea5e9");
    assert_eq!(stored(&store, "g_color").as_deref(), Some("#0ea5e9"));
}

#[test]
fn change_color_passes_value_through_unvalidated() {
    let doc = MemoryDocument::new();
    let store = MemoryStore::new();
    change_color(&doc, &store, &UiConfig::default(), "rgb(1 2 3 / 50%)");
    let root = doc.root().expect("root");
    assert_eq!(root.style_property("--primary").as_deref(), Some("rgb(1 2 3 / 50%)"));
}

// =============================================================
// init_theme
// =============================================================

#[test]
fn init_theme_restores_dark_mode_and_color() {
    let doc = MemoryDocument::new();
    let store = MemoryStore::with_entries([("g_theme", "dark"), ("g_color", "#22c55e")]);
    let settings = init_theme(&doc, &store, &UiConfig::default());

    assert_eq!(settings.mode, Some(ThemeMode::Dark));
    assert!(doc.body().expect("body").has_class("dark-mode"));
    let root = doc.root().expect("root");
    assert_eq!(root.style_property("--primary").as_deref(), Some("#22c55e"));
}

#[test]
fn init_theme_light_leaves_body_untouched() {
    let doc = MemoryDocument::new();
    let store = MemoryStore::with_entries([("g_theme", "light")]);
    init_theme(&doc, &store, &UiConfig::default());
    assert_eq!(doc.body().expect("body").class_name(), "");
    assert_eq!(doc.root().expect("root").style_property("--primary"), None);
}

#[test]
fn init_theme_is_idempotent() {
    let doc = MemoryDocument::new();
    let store = MemoryStore::with_entries([("g_theme", "dark"), ("g_color", "#f97316")]);
    let config = UiConfig::default();

    let first = init_theme(&doc, &store, &config);
    let body_after_first = doc.body().expect("body").class_name();
    let second = init_theme(&doc, &store, &config);

    assert_eq!(first, second);
    assert_eq!(doc.body().expect("body").class_name(), body_after_first);
    assert_eq!(body_after_first, "dark-mode");
    assert_eq!(stored(&store, "g_color").as_deref(), Some("#f97316"));
}

#[test]
fn init_theme_after_toggle_matches_last_persisted_value() {
    let store = MemoryStore::new();
    let config = UiConfig::default();
    let page = MemoryDocument::new();
    toggle_theme(&page, &store, &config);
    toggle_theme(&page, &store, &config);
    toggle_theme(&page, &store, &config);

    let reloaded = MemoryDocument::new();
    init_theme(&reloaded, &store, &config);
    assert!(reloaded.body().expect("body").has_class("dark-mode"));
}

#[test]
fn init_theme_ignores_unknown_and_empty_values() {
    let doc = MemoryDocument::new();
    let store = MemoryStore::with_entries([("g_theme", "sepia"), ("g_color", "")]);
    let settings = init_theme(&doc, &store, &UiConfig::default());
    assert_eq!(settings, ThemeSettings::default());
    assert_eq!(doc.body().expect("body").class_name(), "");
}

#[test]
fn init_theme_with_unavailable_storage_is_noop() {
    let doc = MemoryDocument::new();
    let settings = init_theme(&doc, &MemoryStore::unavailable(), &UiConfig::default());
    assert_eq!(settings, ThemeSettings::default());
    assert_eq!(doc.body().expect("body").class_name(), "");
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_sets_dark_mode_and_accent() {
    let doc = MemoryDocument::new();
    let config = UiConfig::default();
    apply(
        &doc,
        &config,
        &ThemeSettings {
            mode: Some(ThemeMode::Dark),
            accent: Some("#123456".to_owned()),
        },
    );
    assert!(doc.body().expect("body").has_class("dark-mode"));
    assert_eq!(doc.root().expect("root").style_property("--primary").as_deref(), Some("#123456"));
}
