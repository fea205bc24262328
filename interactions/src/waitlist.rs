//! Decorative waitlist form.
//!
//! Submitting validates that both fields are filled, then flips the submit
//! button into a confirmation state and schedules a reset. Nothing leaves the
//! browser.

#[cfg(test)]
#[path = "waitlist_test.rs"]
mod waitlist_test;

use crate::effect::{Deferred, Effect, TaskId, Target};
use crate::scheduler::TaskIds;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WaitlistError {
    #[error("Please fill in all required fields")]
    MissingFields,
}

/// Raw form values. `None` means the form has no such field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistFields {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl WaitlistFields {
    #[must_use]
    pub fn new(name: &str, email: &str) -> Self {
        Self { name: Some(name.to_owned()), email: Some(email.to_owned()) }
    }
}

/// A validated signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signup {
    pub name: String,
    pub email: String,
}

/// Both fields must be present and non-empty. Whitespace counts as content.
///
/// # Errors
///
/// Returns [`WaitlistError::MissingFields`] when either field is missing or empty.
pub fn validate(fields: &WaitlistFields) -> Result<Signup, WaitlistError> {
    match (fields.name.as_deref(), fields.email.as_deref()) {
        (Some(name), Some(email)) if !name.is_empty() && !email.is_empty() => {
            Ok(Signup { name: name.to_owned(), email: email.to_owned() })
        }
        _ => Err(WaitlistError::MissingFields),
    }
}

/// Submit button content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLabel {
    GetEarlyAccess,
    AddedToWaitlist,
}

impl ButtonLabel {
    /// Font Awesome icon classes shown before the text.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::GetEarlyAccess => "fas fa-rocket",
            Self::AddedToWaitlist => "fas fa-check",
        }
    }

    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::GetEarlyAccess => "Get Early Access",
            Self::AddedToWaitlist => "Added to Waitlist",
        }
    }
}

/// Submit cycle state.
#[derive(Debug, Clone, Default)]
pub struct Waitlist {
    present: bool,
    pending_reset: Option<TaskId>,
    last_signup: Option<Signup>,
}

impl Waitlist {
    #[must_use]
    pub fn new(present: bool) -> Self {
        Self { present, ..Self::default() }
    }

    /// Whether a confirmation is showing and a reset is scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending_reset.is_some()
    }

    #[must_use]
    pub fn last_signup(&self) -> Option<&Signup> {
        self.last_signup.as_ref()
    }

    /// Handle a submit. Invalid input alerts and leaves the button alone; valid
    /// input disables it, swaps the label, and schedules the reset. A second
    /// submit while a reset is pending replaces that reset.
    pub fn submit(&mut self, fields: &WaitlistFields, ids: &mut TaskIds, reset_ms: u32) -> Vec<Effect> {
        if !self.present {
            return Vec::new();
        }
        let signup = match validate(fields) {
            Ok(signup) => signup,
            Err(err) => {
                log::debug!("waitlist submit rejected: {err}");
                return vec![Effect::Alert(err.to_string())];
            }
        };
        log::debug!("waitlist signup accepted for {}", signup.email);
        self.last_signup = Some(signup);

        let mut effects = Vec::new();
        if let Some(previous) = self.pending_reset.take() {
            effects.push(Effect::Cancel { id: previous });
        }
        let id = ids.next_id();
        self.pending_reset = Some(id);
        effects.extend([
            Effect::SetDisabled { target: Target::SubmitButton, disabled: true },
            Effect::SetButtonLabel { target: Target::SubmitButton, label: ButtonLabel::AddedToWaitlist },
            Effect::Schedule { id, delay_ms: reset_ms, task: Deferred::ResetWaitlist },
        ]);
        effects
    }

    /// Scheduled reset: clear the form and restore the button.
    pub fn reset(&mut self) -> Vec<Effect> {
        if self.pending_reset.take().is_none() {
            return Vec::new();
        }
        vec![
            Effect::ResetForm { target: Target::WaitlistForm },
            Effect::SetDisabled { target: Target::SubmitButton, disabled: false },
            Effect::SetButtonLabel { target: Target::SubmitButton, label: ButtonLabel::GetEarlyAccess },
        ]
    }
}
