use super::*;
use crate::settings::MemoryStore;

#[test]
fn parse_accepts_known_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
}

#[test]
fn parse_rejects_unknown_and_case_variants() {
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("sepia"), None);
}

#[test]
fn toggled_twice_is_identity() {
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn display_matches_attribute_value() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.to_string(), "light");
}

#[test]
fn resolve_prefers_os_dark_when_nothing_stored() {
    let store = MemoryStore::new();
    assert_eq!(resolve_initial(&store, true), Theme::Dark);
    assert_eq!(resolve_initial(&store, false), Theme::Light);
}

#[test]
fn resolve_stored_value_beats_os_signal() {
    let store = MemoryStore::with("theme", "light");
    assert_eq!(resolve_initial(&store, true), Theme::Light);
    let store = MemoryStore::with("theme", "dark");
    assert_eq!(resolve_initial(&store, false), Theme::Dark);
}

#[test]
fn resolve_ignores_unrecognised_stored_value() {
    let store = MemoryStore::with("theme", "purple");
    assert_eq!(resolve_initial(&store, true), Theme::Dark);
}

#[test]
fn icons_follow_theme() {
    assert_eq!(ThemeIcons::for_theme(Theme::Dark), ThemeIcons { sun: false, moon: true, glow: true });
    assert_eq!(ThemeIcons::for_theme(Theme::Light), ThemeIcons { sun: true, moon: false, glow: false });
}
