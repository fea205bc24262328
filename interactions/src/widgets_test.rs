use super::*;

fn activated(effects: &[Effect]) -> Vec<Target> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::SetClass { target, on: true, .. } => Some(*target),
            _ => None,
        })
        .collect()
}

fn tabs() -> Tabs {
    Tabs::new(
        vec![Some("overview".to_owned()), Some("specs".to_owned()), None],
        vec!["overview-tab".to_owned(), "specs-tab".to_owned()],
    )
}

// =============================================================
// Tabs
// =============================================================

#[test]
fn tabs_start_with_nothing_selected() {
    let t = tabs();
    assert_eq!(t.active_button(), None);
    assert_eq!(t.active_pane(), None);
}

#[test]
fn select_activates_button_and_matching_pane() {
    let mut t = tabs();
    let effects = t.select(1);
    assert_eq!(activated(&effects), vec![Target::TabButton(1), Target::TabPane(1)]);
    assert_eq!(t.active_button(), Some(1));
    assert_eq!(t.active_pane(), Some(1));
}

#[test]
fn select_clears_every_button_and_pane_first() {
    let mut t = tabs();
    let effects = t.select(0);
    let cleared = effects
        .iter()
        .filter(|e| matches!(e, Effect::SetClass { on: false, .. }))
        .count();
    assert_eq!(cleared, 3 + 2);
}

#[test]
fn select_button_without_key_activates_no_pane() {
    let mut t = tabs();
    t.select(0);
    let effects = t.select(2);
    assert_eq!(activated(&effects), vec![Target::TabButton(2)]);
    assert_eq!(t.active_pane(), None);
}

#[test]
fn select_out_of_range_is_noop() {
    let mut t = tabs();
    assert!(t.select(9).is_empty());
    assert_eq!(t.active_button(), None);
}

// =============================================================
// Accordion
// =============================================================

#[test]
fn accordion_opens_clicked_item() {
    let mut a = Accordion::new(3);
    let effects = a.toggle(1);
    assert_eq!(activated(&effects), vec![Target::FaqItem(1)]);
    assert_eq!(a.open_item(), Some(1));
}

#[test]
fn accordion_switches_to_other_item() {
    let mut a = Accordion::new(3);
    a.toggle(0);
    let effects = a.toggle(2);
    assert_eq!(activated(&effects), vec![Target::FaqItem(2)]);
    assert_eq!(a.open_item(), Some(2));
}

#[test]
fn accordion_second_click_collapses() {
    let mut a = Accordion::new(2);
    a.toggle(1);
    let effects = a.toggle(1);
    assert!(activated(&effects).is_empty());
    assert_eq!(a.open_item(), None);
}

// =============================================================
// Modal
// =============================================================

#[test]
fn modal_open_injects_text_and_shows() {
    let mut m = Modal::new(true);
    let effects = m.open(Some("Pricing"), Some("Free during beta."));
    assert!(m.is_open());
    assert_eq!(m.title(), "Pricing");
    assert_eq!(m.body(), "Free during beta.");
    assert!(effects.contains(&Effect::class(Target::Modal, SHOW, true)));
    assert!(effects.contains(&Effect::attr(Target::Modal, "aria-hidden", "false")));
    assert!(effects.contains(&Effect::text(Target::ModalTitle, "Pricing")));
}

#[test]
fn modal_open_uses_defaults() {
    let mut m = Modal::new(true);
    m.open(None, None);
    assert_eq!(m.title(), DEFAULT_MODAL_TITLE);
    assert_eq!(m.body(), "");
    m.open(Some(""), None);
    assert_eq!(m.title(), DEFAULT_MODAL_TITLE);
}

#[test]
fn modal_close_syncs_class_and_aria() {
    let mut m = Modal::new(true);
    m.open(Some("x"), None);
    let effects = m.close();
    assert!(!m.is_open());
    assert_eq!(
        effects,
        vec![Effect::class(Target::Modal, SHOW, false), Effect::attr(Target::Modal, "aria-hidden", "true")]
    );
}

#[test]
fn absent_modal_never_opens() {
    let mut m = Modal::new(false);
    assert!(m.open(Some("x"), Some("y")).is_empty());
    assert!(!m.is_open());
    assert!(m.close().is_empty());
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn menu_toggle_locks_and_unlocks_body_scroll() {
    let mut menu = MobileMenu::new(true);
    let effects = menu.toggle();
    assert!(menu.is_open());
    assert!(effects.contains(&Effect::style(Target::Body, "overflow", "hidden")));

    let effects = menu.toggle();
    assert!(!menu.is_open());
    assert!(effects.contains(&Effect::style(Target::Body, "overflow", "")));
}

#[test]
fn menu_close_only_acts_when_open() {
    let mut menu = MobileMenu::new(true);
    assert!(menu.close().is_empty());
    menu.toggle();
    assert_eq!(menu.close().len(), 3);
    assert!(!menu.is_open());
}

#[test]
fn absent_menu_ignores_clicks() {
    let mut menu = MobileMenu::new(false);
    assert!(menu.toggle().is_empty());
    assert!(!menu.is_open());
}
