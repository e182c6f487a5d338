use super::*;

fn center_with_toast(now: Instant) -> NotificationCenter {
    let mut center = NotificationCenter::default();
    center.push("Poem saved as draft!", Severity::Success, now);
    center
}

#[test]
fn severity_accent_colors() {
    assert_eq!(Severity::Info.accent(), 0x3B82F6);
    assert_eq!(Severity::Success.accent(), 0x10B981);
    assert_eq!(Severity::Warning.accent(), 0xF59E0B);
    assert_eq!(Severity::Error.accent(), 0xEF4444);
}

#[test]
fn toast_lives_through_enter_visible_exit() {
    let t0 = Instant::now();
    let mut center = center_with_toast(t0);

    // Still entering.
    assert!(!center.tick(t0 + TOAST_TRANSITION / 2));
    assert!(!center.is_empty());

    // Entering finished.
    assert!(center.tick(t0 + TOAST_TRANSITION));

    // Visibility expired: starts exiting.
    assert!(center.tick(t0 + TOAST_TRANSITION + TOAST_VISIBLE));

    // Exit transition finished: removed.
    assert!(center.tick(t0 + TOAST_TRANSITION + TOAST_VISIBLE + TOAST_TRANSITION));
    assert!(center.is_empty());
}

#[test]
fn click_dismisses_exactly_once() {
    let t0 = Instant::now();
    let mut center = center_with_toast(t0);
    let settled = t0 + TOAST_TRANSITION;
    center.tick(settled);

    let clicked = settled + Duration::from_secs(1);
    center.dismiss(0, clicked);

    // A second click during the exit transition must not restart it.
    center.dismiss(0, clicked + Duration::from_millis(100));

    assert!(center.tick(clicked + TOAST_TRANSITION));
    assert!(center.is_empty());
}

#[test]
fn dismissing_a_missing_index_is_harmless() {
    let mut center = NotificationCenter::default();
    center.dismiss(3, Instant::now());
    assert!(center.is_empty());
}

#[test]
fn newer_toasts_stack_below_older_ones() {
    let t0 = Instant::now();
    let mut center = center_with_toast(t0);
    center.push("Draft loaded successfully!", Severity::Success, t0);

    let settled = t0 + TOAST_TRANSITION;
    center.tick(settled);
    let layouts = center.layout(1280, 1.0, settled);
    assert_eq!(layouts.len(), 2);
    assert!(layouts[1].rect.y > layouts[0].rect.y);
    assert_eq!(layouts[0].rect.x, layouts[1].rect.x);
}

#[test]
fn entering_toast_hangs_off_the_right_edge() {
    let t0 = Instant::now();
    let center = center_with_toast(t0);

    let sliding = center.layout(1280, 1.0, t0);
    let settled = center.layout(1280, 1.0, t0 + TOAST_TRANSITION);
    assert!(sliding[0].rect.x > settled[0].rect.x);
    assert!(sliding[0].rect.x >= 1280.0 - 20.0);
}

#[test]
fn hit_test_finds_a_resting_toast() {
    let t0 = Instant::now();
    let mut center = center_with_toast(t0);
    let settled = t0 + TOAST_TRANSITION;
    center.tick(settled);

    let rect = center.layout(1280, 1.0, settled)[0].rect;
    let inside = (rect.x as f64 + 5.0, rect.y as f64 + 5.0);
    assert_eq!(center.hit_test(inside.0, inside.1, 1280, 1.0, settled), Some(0));
    assert_eq!(center.hit_test(5.0, 5.0, 1280, 1.0, settled), None);
}

#[test]
fn schedule_tracks_the_earliest_deadline() {
    let t0 = Instant::now();
    let mut center = NotificationCenter::default();
    assert!(center.schedule(t0).is_none());

    center.push("hi", Severity::Info, t0);
    // Sliding toasts want an animation frame soon.
    let wake = center.schedule(t0).unwrap();
    assert!(wake <= t0 + Duration::from_millis(20));

    let settled = t0 + TOAST_TRANSITION;
    center.tick(settled);
    // A visible toast sleeps until its visibility window ends.
    let wake = center.schedule(settled).unwrap();
    assert_eq!(wake, t0 + TOAST_TRANSITION + TOAST_VISIBLE);
}
