#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// Parallax
// =============================================================

#[test]
fn parallax_centre_pointer_leaves_blobs_at_rest() {
    let viewport = Size::new(1000.0, 800.0);
    for index in 0..4 {
        let offset = parallax_offset(index, Point::new(500.0, 400.0), viewport);
        assert!(approx_eq(offset.x, 0.0));
        assert!(approx_eq(offset.y, 0.0));
    }
}

#[test]
fn parallax_speed_grows_with_index() {
    let viewport = Size::new(1000.0, 1000.0);
    let corner = Point::new(1000.0, 0.0);
    // speed 0.5: 1*20*0.5 - 10*0.5 = 5; 0*20*0.5 - 5 = -5
    assert_eq!(parallax_offset(0, corner, viewport), Point::new(5.0, -5.0));
    // speed 1.0
    assert_eq!(parallax_offset(1, corner, viewport), Point::new(10.0, -10.0));
    // speed 1.5
    assert_eq!(parallax_offset(2, corner, viewport), Point::new(15.0, -15.0));
}

#[test]
fn parallax_zero_viewport_does_not_divide_by_zero() {
    let offset = parallax_offset(0, Point::new(10.0, 10.0), Size::new(0.0, 0.0));
    assert!(offset.x.is_finite());
    assert!(offset.y.is_finite());
}

#[test]
fn parallax_transform_formats_pixels() {
    assert_eq!(parallax_transform(Point::new(5.0, -2.5)), "translate(5px, -2.5px)");
}

// =============================================================
// Tilt
// =============================================================

#[test]
fn tilt_at_centre_is_flat_with_centred_glow() {
    let card = Rect::new(100.0, 200.0, 400.0, 200.0);
    let tilt = Tilt::at(Point::new(300.0, 300.0), card);
    assert!(approx_eq(tilt.rotate_x, 0.0));
    assert!(approx_eq(tilt.rotate_y, 0.0));
    assert_eq!(tilt.glow_x, 50.0);
    assert_eq!(tilt.glow_y, 50.0);
}

#[test]
fn tilt_top_left_corner() {
    let card = Rect::new(0.0, 0.0, 400.0, 200.0);
    let tilt = Tilt::at(Point::new(0.0, 0.0), card);
    assert_eq!(tilt.rotate_x, -5.0);
    assert_eq!(tilt.rotate_y, 10.0);
    assert_eq!(tilt.glow_x, 0.0);
    assert_eq!(tilt.glow_y, 0.0);
    assert_eq!(tilt.transform(), "perspective(1000px) rotateX(-5deg) rotateY(10deg) translateZ(10px)");
}

#[test]
fn tilt_zero_sized_card_keeps_glow_finite() {
    let tilt = Tilt::at(Point::new(3.0, 3.0), Rect::new(0.0, 0.0, 0.0, 0.0));
    assert_eq!(tilt.glow_x, 0.0);
    assert_eq!(tilt.glow_y, 0.0);
}

// =============================================================
// Ripple
// =============================================================

#[test]
fn ripple_origin_is_host_relative() {
    let origin = ripple_origin(Point::new(130.0, 45.0), Rect::new(100.0, 20.0, 120.0, 40.0));
    assert_eq!(origin, Point::new(30.0, 25.0));
}

// =============================================================
// Counters
// =============================================================

#[test]
fn parse_count_reads_leading_integer() {
    assert_eq!(parse_count("1200"), 1200);
    assert_eq!(parse_count("  42"), 42);
    assert_eq!(parse_count("98%"), 98);
    assert_eq!(parse_count("+7"), 7);
    assert_eq!(parse_count("-15"), -15);
}

#[test]
fn parse_count_unparsable_is_zero() {
    assert_eq!(parse_count(""), 0);
    assert_eq!(parse_count("lots"), 0);
    assert_eq!(parse_count("-"), 0);
}

#[test]
fn parse_count_saturates_beyond_i64() {
    assert_eq!(parse_count("9223372036854775807"), i64::MAX);
    assert_eq!(parse_count("100000000000000000000"), i64::MAX);
    assert_eq!(parse_count("-100000000000000000000"), -i64::MAX);
}

#[test]
fn counter_with_huge_target_steps_without_overflow() {
    let mut counter = Counter::new(parse_count("9223372036854775807"), 50);
    assert_eq!(counter.step(), i64::MAX / 50 + 1);
    assert!(counter.start());
    let mut frames = 0;
    while let Some(value) = counter.frame() {
        assert!(value > 0);
        frames += 1;
        assert!(frames <= 50, "counter did not finish");
    }
    assert_eq!(counter.current(), i64::MAX);
    assert_eq!(counter.phase(), CounterPhase::Done);
}

#[test]
fn counter_step_is_ceiling_of_fiftieth() {
    assert_eq!(Counter::new(1000, 50).step(), 20);
    assert_eq!(Counter::new(1001, 50).step(), 21);
    assert_eq!(Counter::new(7, 50).step(), 1);
    assert_eq!(Counter::new(0, 50).step(), 0);
}

#[test]
fn counter_runs_to_exact_target() {
    let mut counter = Counter::new(130, 50);
    assert!(counter.start());
    let mut shown = Vec::new();
    while let Some(value) = counter.frame() {
        shown.push(value);
    }
    assert_eq!(counter.phase(), CounterPhase::Done);
    assert_eq!(shown.last(), Some(&130));
    assert_eq!(shown.len(), 44);
    assert!(shown.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn counter_zero_or_negative_target_finishes_first_frame() {
    let mut counter = Counter::new(0, 50);
    counter.start();
    assert_eq!(counter.frame(), Some(0));
    assert_eq!(counter.frame(), None);

    let mut counter = Counter::new(-5, 50);
    counter.start();
    assert_eq!(counter.frame(), Some(-5));
    assert_eq!(counter.phase(), CounterPhase::Done);
}

#[test]
fn counter_without_steps_jumps_to_target() {
    let mut counter = Counter::new(900, 0);
    counter.start();
    assert_eq!(counter.frame(), Some(900));
}

#[test]
fn counter_starts_once() {
    let mut counter = Counter::new(10, 50);
    assert!(counter.start());
    assert!(!counter.start());
}

#[test]
fn idle_counter_does_not_advance() {
    let mut counter = Counter::new(10, 50);
    assert_eq!(counter.frame(), None);
    assert_eq!(counter.current(), 0);
}
