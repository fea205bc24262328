//! Page description and per-event measurements.
//!
//! [`PageLayout`] is collected once when the controller mounts: how many of
//! each widget exist and the static data attributes they carry. Geometry that
//! changes as the user scrolls or resizes is measured again for every event
//! and passed in as a [`ScrollFrame`].

/// Static structure of the page at mount time.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    /// `href` of each `.nav-link`.
    pub nav_link_hrefs: Vec<String>,
    /// `data-tab` of each `.tab-btn`.
    pub tab_keys: Vec<Option<String>>,
    /// `id` of each `.tab-pane`.
    pub tab_pane_ids: Vec<String>,
    /// Number of `.faq-item`s.
    pub faq_items: usize,
    /// `.faq-more` buttons, in document order.
    pub faq_more: Vec<FaqMore>,
    /// Raw `data-count` of each `.stat-number`.
    pub counter_targets: Vec<Option<String>>,
    pub blobs: usize,
    pub feature_cards: usize,
    pub reveal_targets: usize,
    pub ripple_hosts: usize,
    /// `#faqModal` exists.
    pub has_modal: bool,
    /// Sun, moon, and glow icons all exist inside the theme toggle.
    pub has_theme_icons: bool,
    /// Both `#mobileMenuBtn` and `.nav` exist.
    pub has_mobile_menu: bool,
    /// `#waitlistForm` exists.
    pub has_waitlist_form: bool,
}

/// Text carried by a `.faq-more` button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqMore {
    pub title: Option<String>,
    pub detail: Option<String>,
}

/// A `section[id]` measured in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: String,
    /// `offsetTop`.
    pub top: f64,
    /// `offsetHeight`.
    pub height: f64,
}

/// Measurements taken on each scroll tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollFrame {
    /// `window.scrollY`.
    pub scroll_y: f64,
    /// `window.innerHeight`.
    pub viewport_height: f64,
    pub sections: Vec<SectionBox>,
    /// Viewport-relative top of each reveal target, indexed like [`crate::effect::Target::Reveal`].
    pub reveal_tops: Vec<f64>,
}

/// An `a[href^="#"]` click.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorClick {
    pub href: String,
    /// `offsetTop` of the element the href names, if it exists.
    pub target_top: Option<f64>,
    /// `offsetHeight` of `.header`, if it exists.
    pub header_height: Option<f64>,
}
