//! Selectors, injected markup, and config decoding used by the shell.
//!
//! Everything here is plain string work so it can be checked natively.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use interactions::config::InteractionConfig;
use interactions::geometry::Point;
use interactions::waitlist::ButtonLabel;

// =============================================================
// Selectors
// =============================================================

pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const MOBILE_MENU_ID: &str = "mobileMenuBtn";
pub const MODAL_ID: &str = "faqModal";
pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const WAITLIST_FORM_ID: &str = "waitlistForm";
pub const CONFIG_SCRIPT_ID: &str = "landing-config";

pub const HEADER: &str = ".header";
pub const NAV: &str = ".nav";
pub const NAV_LINKS: &str = ".nav-link";
pub const PRELOADER: &str = ".preloader";
pub const SUN_ICON: &str = ".fa-sun";
pub const MOON_ICON: &str = ".fa-moon";
pub const TOGGLE_GLOW: &str = ".toggle-glow";
pub const SECTIONS: &str = "section[id]";
pub const ANCHORS: &str = "a[href^=\"#\"]";
pub const BLOBS: &str = ".blob";
pub const COUNTERS: &str = ".stat-number";
pub const TAB_BUTTONS: &str = ".tab-btn";
pub const TAB_PANES: &str = ".tab-pane";
pub const FAQ_ITEMS: &str = ".faq-item";
pub const FAQ_QUESTION: &str = ".faq-question";
pub const FAQ_MORE: &str = ".faq-more";
pub const MODAL_TITLE: &str = ".faq-modal__title";
pub const MODAL_BODY: &str = ".faq-modal__body";
pub const MODAL_CLOSE: &str = "[data-close-modal]";
pub const FEATURE_CARDS: &str = ".feature-card";
pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
pub const REVEAL: &str =
    ".feature-card, .section-header, .about-content, .cta-card, .progress-container, .status-message";
/// Hosts disabled when the page mounts never get a ripple listener.
pub const RIPPLE_HOSTS: &str = "button:not([disabled]), .btn:not([disabled]), .nav-link";

/// Class that suppresses ripples on an otherwise wired host.
pub const DISABLED_CLASS: &str = "disabled";
pub const RIPPLE_CLASS: &str = "ripple";

// =============================================================
// Injected markup
// =============================================================

/// Ripple animation and theme-transition rules, appended to `<head>` once.
pub const INJECTED_CSS: &str = r"
.ripple {
    position: absolute;
    border-radius: 50%;
    background-color: rgba(255, 255, 255, 0.3);
    transform: scale(0);
    animation: ripple 0.6s linear;
    pointer-events: none;
}

@keyframes ripple {
    to {
        transform: scale(4);
        opacity: 0;
    }
}

.theme-transition *,
.theme-transition *::before,
.theme-transition *::after {
    transition: background-color 0.3s ease, border-color 0.3s ease, color 0.3s ease !important;
}
";

/// Inner HTML for the waitlist submit button.
pub fn button_label(label: ButtonLabel) -> String {
    format!("<i class=\"{}\"></i> {}", label.icon(), label.text())
}

/// CSS pixel length.
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Inline `left`/`top` for a ripple spawned at `at`.
pub fn ripple_position(at: Point) -> [(&'static str, String); 2] {
    [("left", px(at.x)), ("top", px(at.y))]
}

// =============================================================
// Config
// =============================================================

/// Decode the optional `#landing-config` script body. A missing or blank
/// script means defaults; a malformed one is logged and also means defaults.
pub fn read_config(raw: Option<&str>) -> InteractionConfig {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return InteractionConfig::default();
    };
    match InteractionConfig::from_json(raw) {
        Ok(config) => {
            log::debug!("landing config override loaded");
            config
        }
        Err(err) => {
            log::warn!("ignoring #{CONFIG_SCRIPT_ID}: {err}");
            InteractionConfig::default()
        }
    }
}
