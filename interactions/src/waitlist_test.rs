use super::*;

fn submit(w: &mut Waitlist, ids: &mut TaskIds, fields: &WaitlistFields) -> Vec<Effect> {
    w.submit(fields, ids, 2000)
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_accepts_filled_fields() {
    let signup = validate(&WaitlistFields::new("Ada", "ada@example.com")).unwrap();
    assert_eq!(signup.name, "Ada");
    assert_eq!(signup.email, "ada@example.com");
}

#[test]
fn validate_rejects_empty_or_missing_fields() {
    assert_eq!(validate(&WaitlistFields::new("", "a@b.co")), Err(WaitlistError::MissingFields));
    assert_eq!(validate(&WaitlistFields::new("Ada", "")), Err(WaitlistError::MissingFields));
    assert_eq!(validate(&WaitlistFields::default()), Err(WaitlistError::MissingFields));
}

#[test]
fn validate_counts_whitespace_as_content() {
    assert!(validate(&WaitlistFields::new(" ", "a@b.co")).is_ok());
}

#[test]
fn error_message_is_user_facing_alert_text() {
    assert_eq!(WaitlistError::MissingFields.to_string(), "Please fill in all required fields");
}

#[test]
fn labels_pair_icon_with_text() {
    assert_eq!(ButtonLabel::AddedToWaitlist.icon(), "fas fa-check");
    assert_eq!(ButtonLabel::AddedToWaitlist.text(), "Added to Waitlist");
    assert_eq!(ButtonLabel::GetEarlyAccess.icon(), "fas fa-rocket");
    assert_eq!(ButtonLabel::GetEarlyAccess.text(), "Get Early Access");
}

// =============================================================
// Submit cycle
// =============================================================

#[test]
fn invalid_submit_only_alerts() {
    let mut w = Waitlist::new(true);
    let mut ids = TaskIds::default();
    let effects = submit(&mut w, &mut ids, &WaitlistFields::new("", "a@b.co"));
    assert_eq!(effects, vec![Effect::Alert("Please fill in all required fields".to_owned())]);
    assert!(!w.is_pending());
    assert!(w.last_signup().is_none());
}

#[test]
fn valid_submit_disables_relabels_and_schedules() {
    let mut w = Waitlist::new(true);
    let mut ids = TaskIds::default();
    let effects = submit(&mut w, &mut ids, &WaitlistFields::new("Ada", "ada@example.com"));
    assert!(effects.contains(&Effect::SetDisabled { target: Target::SubmitButton, disabled: true }));
    assert!(effects.contains(&Effect::SetButtonLabel {
        target: Target::SubmitButton,
        label: ButtonLabel::AddedToWaitlist
    }));
    assert!(effects.iter().any(|e| matches!(
        e,
        Effect::Schedule { delay_ms: 2000, task: Deferred::ResetWaitlist, .. }
    )));
    assert!(w.is_pending());
}

#[test]
fn resubmit_cancels_previous_reset() {
    let mut w = Waitlist::new(true);
    let mut ids = TaskIds::default();
    submit(&mut w, &mut ids, &WaitlistFields::new("Ada", "ada@example.com"));
    let effects = submit(&mut w, &mut ids, &WaitlistFields::new("Ada", "ada@example.com"));
    assert!(matches!(effects[0], Effect::Cancel { .. }));
}

#[test]
fn reset_restores_form_once() {
    let mut w = Waitlist::new(true);
    let mut ids = TaskIds::default();
    submit(&mut w, &mut ids, &WaitlistFields::new("Ada", "ada@example.com"));
    let effects = w.reset();
    assert_eq!(effects.len(), 3);
    assert!(effects.contains(&Effect::ResetForm { target: Target::WaitlistForm }));
    assert!(!w.is_pending());
    assert!(w.reset().is_empty());
}

#[test]
fn absent_form_ignores_submit() {
    let mut w = Waitlist::new(false);
    let mut ids = TaskIds::default();
    assert!(submit(&mut w, &mut ids, &WaitlistFields::new("", "")).is_empty());
}
