//! Presentational math: blob parallax, card tilt and glow, ripple origin, and
//! the hero stat counters. None of it feeds back into page state.

#[cfg(test)]
#[path = "cosmetics_test.rs"]
mod cosmetics_test;

use crate::consts::{PARALLAX_RANGE_PX, PARALLAX_SPEED_STEP, TILT_DIVISOR};
use crate::geometry::{Point, Rect, Size};

// =============================================================
// Parallax
// =============================================================

/// Offset for blob `index` given the pointer position in a viewport.
///
/// Blobs further down the list move faster; each is centred so the pointer in
/// the middle of the viewport leaves every blob at rest.
#[must_use]
pub fn parallax_offset(index: usize, pointer: Point, viewport: Size) -> Point {
    let fx = if viewport.width > 0.0 { pointer.x / viewport.width } else { 0.0 };
    let fy = if viewport.height > 0.0 { pointer.y / viewport.height } else { 0.0 };
    #[allow(clippy::cast_precision_loss)]
    let speed = (index + 1) as f64 * PARALLAX_SPEED_STEP;
    let half = PARALLAX_RANGE_PX / 2.0;
    Point { x: fx * PARALLAX_RANGE_PX * speed - half * speed, y: fy * PARALLAX_RANGE_PX * speed - half * speed }
}

#[must_use]
pub fn parallax_transform(offset: Point) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

// =============================================================
// Card tilt
// =============================================================

/// Tilt angles and glow focus for a card under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Degrees around the X axis; positive when the pointer is below centre.
    pub rotate_x: f64,
    /// Degrees around the Y axis; positive when the pointer is left of centre.
    pub rotate_y: f64,
    /// Pointer position as a percentage of the card width.
    pub glow_x: f64,
    /// Pointer position as a percentage of the card height.
    pub glow_y: f64,
}

impl Tilt {
    #[must_use]
    pub fn at(client: Point, card: Rect) -> Self {
        let local = card.to_local(client);
        let center = Point::new(card.width / 2.0, card.height / 2.0);
        let pct = |v: f64, extent: f64| if extent > 0.0 { v / extent * 100.0 } else { 0.0 };
        Self {
            rotate_x: (local.y - center.y) / TILT_DIVISOR,
            rotate_y: (center.x - local.x) / TILT_DIVISOR,
            glow_x: pct(local.x, card.width),
            glow_y: pct(local.y, card.height),
        }
    }

    #[must_use]
    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateZ(10px)",
            self.rotate_x, self.rotate_y
        )
    }
}

// =============================================================
// Ripple
// =============================================================

/// Ripple spawn point relative to the clicked host.
#[must_use]
pub fn ripple_origin(client: Point, host: Rect) -> Point {
    host.to_local(client)
}

// =============================================================
// Counters
// =============================================================

/// Parse a `data-count` value the way `parseInt(.., 10)` reads it: optional
/// leading whitespace and sign, then the longest run of digits. Anything
/// unparsable counts as zero; values beyond `i64` saturate.
#[must_use]
pub fn parse_count(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return 0;
    }
    // Only overflow can fail here; saturate instead.
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    if negative { -value } else { value }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    /// Not yet seen.
    Idle,
    Running,
    Done,
}

/// Counts from zero to `target` in fixed increments, one per animation frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    target: i64,
    step: i64,
    current: i64,
    phase: CounterPhase,
}

impl Counter {
    /// A counter that reaches `target` in about `steps` frames.
    #[must_use]
    pub fn new(target: i64, steps: i64) -> Self {
        let step = match (target, steps) {
            (t, _) if t <= 0 => 0,
            (t, s) if s <= 0 => t,
            (t, s) => t / s + i64::from(t % s != 0),
        };
        Self { target, step, current: 0, phase: CounterPhase::Idle }
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    #[must_use]
    pub fn step(&self) -> i64 {
        self.step
    }

    #[must_use]
    pub fn current(&self) -> i64 {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    /// Begin counting. Returns `false` if the counter already started.
    pub fn start(&mut self) -> bool {
        if self.phase != CounterPhase::Idle {
            return false;
        }
        self.phase = CounterPhase::Running;
        self.current = 0;
        true
    }

    /// Advance one frame. Returns the text to display, or `None` when not running.
    pub fn frame(&mut self) -> Option<i64> {
        if self.phase != CounterPhase::Running {
            return None;
        }
        self.current = self.current.saturating_add(self.step);
        if self.current >= self.target {
            self.current = self.target;
            self.phase = CounterPhase::Done;
        }
        Some(self.current)
    }
}
