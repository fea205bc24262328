//! Shared defaults for the interaction core.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Scroll thresholds ───────────────────────────────────────────

/// Scroll depth past which the header turns sticky.
pub const STICKY_HEADER_PX: f64 = 10.0;

/// Offset added to the scroll position before matching it against sections.
pub const NAV_OFFSET_PX: f64 = 100.0;

/// Scroll depth past which the back-to-top button shows.
pub const BACK_TO_TOP_PX: f64 = 400.0;

/// Distance above the viewport bottom an element must cross to reveal.
pub const REVEAL_OFFSET_PX: f64 = 100.0;

/// Gap left between the sticky header and an anchor target.
pub const ANCHOR_GAP_PX: f64 = 20.0;

/// Header height assumed when the header is missing or collapsed.
pub const FALLBACK_HEADER_PX: f64 = 80.0;

// ── Delays ──────────────────────────────────────────────────────

pub const THEME_TRANSITION_MS: u32 = 300;
pub const PRELOADER_DELAY_MS: u32 = 600;
pub const RIPPLE_LIFETIME_MS: u32 = 1000;
pub const FORM_RESET_MS: u32 = 2000;

// ── Cosmetics ───────────────────────────────────────────────────

/// Frames a counter takes to climb from zero to its target.
pub const COUNTER_STEPS: i64 = 50;

/// Fraction of a counter that must be visible before it starts.
pub const COUNTER_VISIBILITY: f64 = 0.4;

/// Blob travel range in pixels per unit of speed.
pub const PARALLAX_RANGE_PX: f64 = 20.0;

/// Speed increment between successive blobs.
pub const PARALLAX_SPEED_STEP: f64 = 0.5;

/// Pixels of pointer offset per degree of card tilt.
pub const TILT_DIVISOR: f64 = 20.0;

/// Card transform when the pointer leaves.
pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) translateZ(0)";

// ── Class names ─────────────────────────────────────────────────

pub const ACTIVE: &str = "active";
pub const SHOW: &str = "show";
pub const HIDDEN: &str = "hidden";
pub const LOADED: &str = "loaded";
pub const STICKY: &str = "header--sticky";
pub const THEME_TRANSITION: &str = "theme-transition";
