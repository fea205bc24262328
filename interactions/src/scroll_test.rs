#![allow(clippy::float_cmp)]

use super::*;

fn section(id: &str, top: f64, height: f64) -> SectionBox {
    SectionBox { id: id.to_owned(), top, height }
}

fn hrefs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

// =============================================================
// Thresholds
// =============================================================

#[test]
fn sticky_is_strictly_past_threshold() {
    assert!(!is_sticky(0.0, 10.0));
    assert!(!is_sticky(10.0, 10.0));
    assert!(is_sticky(10.5, 10.0));
}

#[test]
fn back_to_top_is_strictly_past_threshold() {
    assert!(!shows_back_to_top(400.0, 400.0));
    assert!(shows_back_to_top(401.0, 400.0));
}

#[test]
fn reveal_requires_top_above_offset_line() {
    assert!(should_reveal(599.0, 700.0, 100.0));
    assert!(!should_reveal(600.0, 700.0, 100.0));
    assert!(should_reveal(-250.0, 700.0, 100.0));
}

// =============================================================
// Nav highlight
// =============================================================

#[test]
fn section_bottom_edge_is_exclusive() {
    let s = section("about", 500.0, 300.0);
    assert!(section_contains(&s, 500.0));
    assert!(section_contains(&s, 799.0));
    assert!(!section_contains(&s, 800.0));
    assert!(!section_contains(&s, 499.0));
}

#[test]
fn link_for_section_matches_substring_of_href() {
    let links = hrefs(&["#home", "#features", "/pricing#plans"]);
    assert_eq!(link_for_section(&links, "features"), Some(1));
    assert_eq!(link_for_section(&links, "plans"), Some(2));
    assert_eq!(link_for_section(&links, "faq"), None);
}

#[test]
fn nav_updates_mark_only_containing_section() {
    let sections = vec![section("home", 0.0, 600.0), section("features", 600.0, 800.0), section("faq", 1400.0, 500.0)];
    let links = hrefs(&["#home", "#features", "#faq"]);

    // 550 + 100 = 650 falls inside features.
    let updates = nav_updates(&sections, &links, 550.0, 100.0);
    assert_eq!(updates, vec![(0, false), (1, true), (2, false)]);
}

#[test]
fn nav_updates_skip_sections_without_id_or_link() {
    let sections = vec![section("", 0.0, 600.0), section("contact", 600.0, 400.0), section("home", 0.0, 600.0)];
    let links = hrefs(&["#home"]);
    assert_eq!(nav_updates(&sections, &links, 0.0, 100.0), vec![(0, true)]);
}

#[test]
fn nav_updates_above_first_section_clear_everything() {
    let sections = vec![section("features", 600.0, 800.0)];
    let links = hrefs(&["#features"]);
    assert_eq!(nav_updates(&sections, &links, 0.0, 100.0), vec![(0, false)]);
}

// =============================================================
// Anchors
// =============================================================

#[test]
fn anchor_subtracts_header_and_gap() {
    assert_eq!(anchor_scroll_top(1000.0, Some(64.0), 20.0, 80.0), 916.0);
}

#[test]
fn anchor_falls_back_when_header_missing_or_collapsed() {
    assert_eq!(anchor_scroll_top(1000.0, None, 20.0, 80.0), 900.0);
    assert_eq!(anchor_scroll_top(1000.0, Some(0.0), 20.0, 80.0), 900.0);
}
