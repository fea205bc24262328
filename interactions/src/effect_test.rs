use super::*;

#[test]
fn element_effects_name_their_target() {
    assert_eq!(Effect::class(Target::Header, "x", true).target(), Some(Target::Header));
    assert_eq!(Effect::style(Target::Blob(2), "transform", "").target(), Some(Target::Blob(2)));
    assert_eq!(Effect::ResetForm { target: Target::WaitlistForm }.target(), Some(Target::WaitlistForm));
}

#[test]
fn indexed_effects_map_to_indexed_targets() {
    let spawn = Effect::SpawnRipple { id: RippleId(1), host: 3, at: Point::new(0.0, 0.0) };
    assert_eq!(spawn.target(), Some(Target::RippleHost(3)));
    assert_eq!(Effect::RequestFrame { counter: 1 }.target(), Some(Target::Counter(1)));
    assert_eq!(Effect::UnobserveCounter { index: 0 }.target(), Some(Target::Counter(0)));
}

#[test]
fn window_level_effects_have_no_target() {
    assert_eq!(Effect::Alert("hi".into()).target(), None);
    assert_eq!(Effect::ScrollTo { top: 0.0 }.target(), None);
    assert_eq!(Effect::Cancel { id: TaskId(4) }.target(), None);
    assert_eq!(Effect::RemoveRipple { id: RippleId(9) }.target(), None);
}
