//! Effects returned by the core for the shell to apply.
//!
//! The core never touches the document. Each handler returns a list of
//! [`Effect`]s addressed by [`Target`]; the shell resolves a target against the
//! element bundle it collected at startup and drops effects whose element is
//! absent. Timers travel the same way: [`Effect::Schedule`] asks the shell to
//! run a [`Deferred`] task after a delay, and [`Effect::Cancel`] withdraws it.

use crate::geometry::Point;
use crate::waitlist::ButtonLabel;

#[cfg(test)]
#[path = "effect_test.rs"]
mod effect_test;

/// Element addressed by an effect. Indexed variants follow document order of
/// the matching selector at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    /// `<html>`.
    Root,
    /// `<body>`.
    Body,
    /// `.header`.
    Header,
    /// `.nav`.
    Nav,
    /// `#mobileMenuBtn`.
    MobileMenuButton,
    /// `.preloader`.
    Preloader,
    /// `.fa-sun` inside the theme toggle.
    ThemeSunIcon,
    /// `.fa-moon` inside the theme toggle.
    ThemeMoonIcon,
    /// `.toggle-glow` inside the theme toggle.
    ThemeGlow,
    /// `#backToTop`.
    BackToTop,
    /// `#faqModal`.
    Modal,
    /// `.faq-modal__title`.
    ModalTitle,
    /// `.faq-modal__body`.
    ModalBody,
    /// `#waitlistForm`.
    WaitlistForm,
    /// `button[type="submit"]` inside the waitlist form.
    SubmitButton,
    NavLink(usize),
    Reveal(usize),
    TabButton(usize),
    TabPane(usize),
    FaqItem(usize),
    Blob(usize),
    FeatureCard(usize),
    Counter(usize),
    RippleHost(usize),
}

/// Identifier of a scheduled task, unique for the lifetime of a core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

/// Identifier of a spawned ripple element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RippleId(pub u64);

/// Work the core asks to be handed back after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    EndThemeTransition,
    HidePreloader,
    RemoveRipple(RippleId),
    ResetWaitlist,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetClass { target: Target, class: &'static str, on: bool },
    SetAttribute { target: Target, name: &'static str, value: String },
    SetText { target: Target, text: String },
    /// Set an inline style property. An empty value clears it.
    SetStyle { target: Target, property: &'static str, value: String },
    SetDisabled { target: Target, disabled: bool },
    SetButtonLabel { target: Target, label: ButtonLabel },
    ResetForm { target: Target },
    /// Blocking `window.alert`.
    Alert(String),
    /// Smooth-scroll the window to a document offset.
    ScrollTo { top: f64 },
    /// Append a `span.ripple` to ripple host `host` at local point `at`.
    SpawnRipple { id: RippleId, host: usize, at: Point },
    RemoveRipple { id: RippleId },
    /// Stop watching counter `index` for visibility.
    UnobserveCounter { index: usize },
    /// Call back into the core on the next animation frame for counter `index`.
    RequestFrame { counter: usize },
    Schedule { id: TaskId, delay_ms: u32, task: Deferred },
    Cancel { id: TaskId },
}

impl Effect {
    #[must_use]
    pub fn class(target: Target, class: &'static str, on: bool) -> Self {
        Self::SetClass { target, class, on }
    }

    #[must_use]
    pub fn style(target: Target, property: &'static str, value: impl Into<String>) -> Self {
        Self::SetStyle { target, property, value: value.into() }
    }

    #[must_use]
    pub fn attr(target: Target, name: &'static str, value: impl Into<String>) -> Self {
        Self::SetAttribute { target, name, value: value.into() }
    }

    #[must_use]
    pub fn text(target: Target, text: impl Into<String>) -> Self {
        Self::SetText { target, text: text.into() }
    }

    /// Element this effect writes to, or `None` for window-level work and timers.
    #[must_use]
    pub fn target(&self) -> Option<Target> {
        match self {
            Self::SetClass { target, .. }
            | Self::SetAttribute { target, .. }
            | Self::SetText { target, .. }
            | Self::SetStyle { target, .. }
            | Self::SetDisabled { target, .. }
            | Self::SetButtonLabel { target, .. }
            | Self::ResetForm { target } => Some(*target),
            Self::SpawnRipple { host, .. } => Some(Target::RippleHost(*host)),
            Self::UnobserveCounter { index } => Some(Target::Counter(*index)),
            Self::RequestFrame { counter } => Some(Target::Counter(*counter)),
            Self::Alert(_)
            | Self::ScrollTo { .. }
            | Self::RemoveRipple { .. }
            | Self::Schedule { .. }
            | Self::Cancel { .. } => None,
        }
    }
}
