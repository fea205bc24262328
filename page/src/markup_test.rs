#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Labels
// =============================================================

#[test]
fn confirmation_label_uses_check_icon() {
    assert_eq!(
        button_label(ButtonLabel::AddedToWaitlist),
        "<i class=\"fas fa-check\"></i> Added to Waitlist"
    );
}

#[test]
fn idle_label_uses_rocket_icon() {
    assert_eq!(
        button_label(ButtonLabel::GetEarlyAccess),
        "<i class=\"fas fa-rocket\"></i> Get Early Access"
    );
}

// =============================================================
// Ripple
// =============================================================

#[test]
fn ripple_position_is_pixel_offsets() {
    let [(left, x), (top, y)] = ripple_position(Point::new(12.5, 40.0));
    assert_eq!((left, x.as_str()), ("left", "12.5px"));
    assert_eq!((top, y.as_str()), ("top", "40px"));
}

#[test]
fn injected_css_covers_ripple_and_theme_transition() {
    assert!(INJECTED_CSS.contains(".ripple {"));
    assert!(INJECTED_CSS.contains("@keyframes ripple"));
    assert!(INJECTED_CSS.contains(".theme-transition *::after"));
}

// =============================================================
// Selectors
// =============================================================

#[test]
fn reveal_selector_lists_every_reveal_block() {
    for class in [".feature-card", ".section-header", ".about-content", ".cta-card", ".progress-container", ".status-message"] {
        assert!(REVEAL.contains(class), "{class} missing from reveal selector");
    }
}

#[test]
fn ripple_hosts_skip_disabled_buttons() {
    assert!(RIPPLE_HOSTS.contains("button:not([disabled])"));
    assert!(RIPPLE_HOSTS.contains(".nav-link"));
}

// =============================================================
// Config
// =============================================================

#[test]
fn missing_config_script_uses_defaults() {
    assert_eq!(read_config(None), InteractionConfig::default());
    assert_eq!(read_config(Some("  \n ")), InteractionConfig::default());
}

#[test]
fn config_script_overrides_fields() {
    let config = read_config(Some(r#"{ "stickyHeaderPx": 64, "formResetMs": 3000 }"#));
    assert_eq!(config.sticky_header_px, 64.0);
    assert_eq!(config.form_reset_ms, 3000);
    assert_eq!(config.back_to_top_px, 400.0);
}

#[test]
fn malformed_config_script_falls_back_to_defaults() {
    assert_eq!(read_config(Some("{ nope")), InteractionConfig::default());
    assert_eq!(read_config(Some(r#"{ "navOffsetPx": -1 }"#)), InteractionConfig::default());
    assert_eq!(read_config(Some(r#"{ "counterVisibility": 2 }"#)), InteractionConfig::default());
}
