//! Scroll-position predicates.
//!
//! Each function is a pure comparison of the current scroll measurements
//! against a fixed threshold, so calling it on every scroll tick is safe.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::layout::SectionBox;

/// Whether the header should carry its sticky modifier.
#[must_use]
pub fn is_sticky(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Whether the back-to-top button should show.
#[must_use]
pub fn shows_back_to_top(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Whether an element whose viewport-relative top is `top` has entered view.
#[must_use]
pub fn should_reveal(top: f64, viewport_height: f64, offset: f64) -> bool {
    top < viewport_height - offset
}

/// Whether `probe` (a document offset) falls inside `section`. The bottom edge is exclusive.
#[must_use]
pub fn section_contains(section: &SectionBox, probe: f64) -> bool {
    probe >= section.top && probe < section.top + section.height
}

/// First nav link whose `href` mentions `section_id`.
#[must_use]
pub fn link_for_section(hrefs: &[String], section_id: &str) -> Option<usize> {
    hrefs.iter().position(|href| href.contains(section_id))
}

/// Nav link updates for one scroll position, in section order.
///
/// Each entry is `(link index, active)`. Sections without an id or without a
/// matching link produce nothing. When two sections share a link, the later
/// update wins once applied in order.
#[must_use]
pub fn nav_updates(sections: &[SectionBox], hrefs: &[String], scroll_y: f64, offset: f64) -> Vec<(usize, bool)> {
    let probe = scroll_y + offset;
    sections
        .iter()
        .filter(|section| !section.id.is_empty())
        .filter_map(|section| {
            link_for_section(hrefs, &section.id).map(|link| (link, section_contains(section, probe)))
        })
        .collect()
}

/// Document offset to scroll to for an in-page anchor, keeping the target
/// clear of the header.
///
/// A missing or zero-height header counts as `fallback_header` tall.
#[must_use]
pub fn anchor_scroll_top(target_top: f64, header_height: Option<f64>, gap: f64, fallback_header: f64) -> f64 {
    let header = header_height.filter(|h| *h > 0.0).unwrap_or(fallback_header);
    target_top - header - gap
}
