//! Interaction core for the landing page.
//!
//! This crate holds every decision the landing page makes in response to DOM
//! events, with no dependency on the browser. The `page` crate measures the
//! document, forwards events into [`engine::LandingCore`], and applies the
//! returned [`effect::Effect`]s to real elements. Keeping the logic here lets
//! the whole page be exercised natively, including timers, which are modelled
//! as cancellable scheduled tasks and fast-forwarded by
//! [`scheduler::VirtualClock`] in tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::LandingCore`], the event-to-effect controller |
//! | [`effect`] | Effect, target, and deferred-task types shared with the shell |
//! | [`layout`] | Page description collected once, and per-scroll measurements |
//! | [`theme`] | Light/dark theme value and startup resolution |
//! | [`settings`] | Injected key-value settings store |
//! | [`scroll`] | Pure scroll-position predicates (nav, header, back-to-top, reveal) |
//! | [`widgets`] | Tabs, FAQ accordion, modal, mobile menu |
//! | [`waitlist`] | Decorative waitlist form validation and submit cycle |
//! | [`cosmetics`] | Parallax, card tilt, ripple, and counter math |
//! | [`scheduler`] | Task ids and the virtual clock |
//! | [`config`] | Tunable thresholds and delays |
//! | [`geometry`] | Points, sizes, and rectangles |
//! | [`consts`] | Default thresholds, delays, and storage keys |

pub mod config;
pub mod consts;
pub mod cosmetics;
pub mod effect;
pub mod engine;
pub mod geometry;
pub mod layout;
pub mod scheduler;
pub mod scroll;
pub mod settings;
pub mod theme;
pub mod waitlist;
pub mod widgets;
