// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `vitrine_session` crate.
//!
//! These drive a [`ViewportSession`] through whole activation sequences with
//! synthetic frame durations, checking the lock, the spiral formation, the
//! camera framing and direct manipulation as they interact.

use core::time::Duration;

use kurbo::{Point, Size, Vec2};
use vitrine_event_state::pointer::{PointerButton, PointerId};
use vitrine_session::{
    ActivationOutcome, ClickOutcome, FLOATING_OPACITY, GroupId, IgnoreReason, Image, ImageId,
    InputEvent, InputOutcome, PhaseKind, Platform, RecordingTrace, SessionConfig, SessionEvent,
    ViewportSession,
};
use vitrine_spiral::SpiralParams;

const FRAME: Duration = Duration::from_millis(100);
const VIEWPORT: Size = Size::new(1280.0, 800.0);

/// Three `"h"` images, two `"g"` images, one `"solo"` image.
fn gallery() -> Vec<Image> {
    vec![
        Image::new("h", Point::new(-400.0, -200.0)),
        Image::new("g", Point::new(300.0, 250.0)),
        Image::new("h", Point::new(120.0, -340.0)),
        Image::new("g", Point::new(-60.0, 80.0)),
        Image::new("h", Point::new(500.0, 500.0)),
        Image::new("solo", Point::new(0.0, 0.0)),
    ]
}

fn desktop() -> ViewportSession<RecordingTrace> {
    ViewportSession::with_trace(
        SessionConfig::default(),
        VIEWPORT,
        gallery(),
        RecordingTrace::new(),
    )
}

fn run_frames<T: vitrine_session::SessionTrace>(session: &mut ViewportSession<T>, n: usize) {
    for _ in 0..n {
        session.tick(FRAME);
    }
}

fn run_until_unlocked<T: vitrine_session::SessionTrace>(session: &mut ViewportSession<T>) -> usize {
    let mut frames = 0;
    while session.is_locked() {
        session.tick(FRAME);
        frames += 1;
        assert!(frames < 1000, "activation never unlocked");
    }
    frames
}

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-6
}

#[test]
fn activation_walks_every_phase_on_the_virtual_clock() {
    let mut s = desktop();
    assert_eq!(s.phase().kind(), PhaseKind::Idle);

    assert_eq!(s.activate_group("h"), ActivationOutcome::Started);
    assert!(s.is_locked());
    assert_eq!(s.phase().kind(), PhaseKind::Fading);
    assert_eq!(s.camera().target_scale(), 0.7);

    // 800 ms of fading.
    run_frames(&mut s, 7);
    assert_eq!(s.phase().kind(), PhaseKind::Fading);
    assert!(s.frame().is_none());
    run_frames(&mut s, 1);
    assert_eq!(s.phase().kind(), PhaseKind::Forming);
    assert!(s.frame().is_some());

    // 400 ms of forming.
    run_frames(&mut s, 3);
    assert_eq!(s.phase().kind(), PhaseKind::Forming);
    assert!(!s.camera().is_approaching());
    run_frames(&mut s, 1);
    assert_eq!(s.phase().kind(), PhaseKind::Framing);
    assert!(s.camera().is_approaching());
    assert!(s.is_locked());

    // The 1500 ms approach started within the last frame.
    let frames = run_until_unlocked(&mut s);
    assert_eq!(frames, 14);
    assert_eq!(s.phase().kind(), PhaseKind::Idle);
    assert_eq!(s.active_group(), Some(&GroupId::new("h")));

    let phases: Vec<_> = s.trace().phase_changes().collect();
    assert_eq!(
        phases,
        [
            (PhaseKind::Idle, PhaseKind::Locking),
            (PhaseKind::Locking, PhaseKind::Fading),
            (PhaseKind::Fading, PhaseKind::Forming),
            (PhaseKind::Forming, PhaseKind::Framing),
            (PhaseKind::Framing, PhaseKind::Idle),
        ]
    );
}

#[test]
fn long_frames_carry_over_between_phases() {
    let mut s = desktop();
    s.activate_group("h");
    // One 1.25 s frame passes fading (0.8 s) and forming (0.4 s).
    s.tick(Duration::from_millis(1250));
    assert_eq!(s.phase().kind(), PhaseKind::Framing);
    assert_eq!(s.phase().elapsed(), Duration::from_millis(50));
}

#[test]
fn members_form_a_spiral_and_others_float() {
    let mut s = desktop();
    s.activate_group("h");
    run_until_unlocked(&mut s);

    let frame = *s.frame().unwrap();
    assert!(close(frame.center, Point::new(-0.4 * 1280.0, 0.0)));
    assert!((frame.max_radius - (1280.0 * 0.28_f64).min(800.0 * 0.45)).abs() < 1e-9);

    let expected = SpiralParams::new(frame.center, frame.max_radius).place(3);
    let members: Vec<_> = s.group_members(&GroupId::new("h")).collect();
    assert_eq!(members, [ImageId(0), ImageId(2), ImageId(4)]);
    for (rank, (id, slot)) in members.iter().zip(&expected).enumerate() {
        let img = s.image(*id).unwrap();
        assert!(close(img.world(), *slot));
        assert!(close(img.target(), *slot));
        // 1.8 s since formation, past the 1 s settle.
        assert!(close(img.display(), *slot));
        assert!(!img.is_floating());
        assert_eq!(img.opacity(), 1.0);
        assert_eq!(img.z_index(), 4000 - rank as i32);
        assert!((*slot - frame.center).hypot() <= frame.max_radius + 1e-9);
    }
    assert!(close(s.image(members[0]).unwrap().world(), frame.center));

    for id in [ImageId(1), ImageId(3), ImageId(5)] {
        let img = s.image(id).unwrap();
        assert!(img.is_floating());
        assert_eq!(img.opacity(), FLOATING_OPACITY);
    }
    // Non-members stay put.
    assert_eq!(s.image(ImageId(1)).unwrap().world(), Point::new(300.0, 250.0));
}

#[test]
fn framing_puts_the_spiral_center_on_the_anchor() {
    let mut s = desktop();
    s.activate_group("g");
    run_until_unlocked(&mut s);

    let frame = *s.frame().unwrap();
    assert!((s.scale() - 1.0).abs() < 1e-12);
    let on_screen = s.camera().world_to_screen(frame.center);
    assert!(close(on_screen, Point::new(1280.0 * 0.28, 800.0 * 0.5)));
    assert!(close(on_screen, frame.anchor));
}

#[test]
fn activation_while_locked_changes_nothing() {
    let mut s = desktop();
    s.activate_group("h");
    run_frames(&mut s, 9);
    assert_eq!(s.phase().kind(), PhaseKind::Forming);

    let before: Vec<_> = s.images().iter().map(|i| (i.world(), i.target(), i.is_floating())).collect();
    let target_scale = s.camera().target_scale();
    let top_z = s.top_z();

    assert_eq!(
        s.activate_group("g"),
        ActivationOutcome::Ignored(IgnoreReason::Locked)
    );
    assert_eq!(s.active_group(), Some(&GroupId::new("h")));
    assert_eq!(s.phase().kind(), PhaseKind::Forming);
    assert_eq!(s.camera().target_scale(), target_scale);
    assert_eq!(s.top_z(), top_z);
    let after: Vec<_> = s.images().iter().map(|i| (i.world(), i.target(), i.is_floating())).collect();
    assert_eq!(before, after);
    assert!(s.trace().events().contains(&SessionEvent::Ignored {
        group: Some(GroupId::new("g")),
        reason: IgnoreReason::Locked,
    }));
}

#[test]
fn next_group_activates_once_unlocked() {
    let mut s = desktop();
    s.activate_group("h");
    run_frames(&mut s, 3);
    assert!(matches!(s.activate_group("g"), ActivationOutcome::Ignored(_)));
    run_until_unlocked(&mut s);

    assert_eq!(s.activate_group("g"), ActivationOutcome::Started);
    assert_eq!(s.active_group(), Some(&GroupId::new("g")));
    for id in s.group_members(&GroupId::new("h")).collect::<Vec<_>>() {
        assert!(s.image(id).unwrap().is_floating());
    }
    for id in s.group_members(&GroupId::new("g")).collect::<Vec<_>>() {
        assert!(!s.image(id).unwrap().is_floating());
    }
    run_until_unlocked(&mut s);
    assert_eq!(s.phase().kind(), PhaseKind::Idle);
}

#[test]
fn activation_records_the_snapped_view() {
    let mut s = desktop();
    s.wheel(-200.0, Point::new(200.0, 200.0));
    run_frames(&mut s, 3);
    let target_origin = s.camera().target_origin();
    let target_scale = s.camera().target_scale();

    s.activate_group("h");
    assert_eq!(s.camera().wheel_momentum(), 0.0);
    let stored = s.stored_view();
    assert_eq!(stored.origin, target_origin);
    assert_eq!(stored.scale, target_scale);
    assert_eq!(s.camera().origin(), target_origin);
}

#[test]
fn empty_group_still_runs_and_unlocks() {
    let mut s = desktop();
    assert_eq!(s.activate_group("nobody"), ActivationOutcome::Started);
    assert!(s.images().iter().all(|i| i.is_floating()));
    run_until_unlocked(&mut s);
    assert_eq!(s.phase().kind(), PhaseKind::Idle);
    assert_eq!(s.active_group(), Some(&GroupId::new("nobody")));
    assert!(s.trace().events().iter().any(|e| matches!(
        e,
        SessionEvent::LayoutComputed { members: 0, .. }
    )));
}

#[test]
fn single_member_sits_at_the_center() {
    let mut s = desktop();
    s.activate_group("solo");
    run_until_unlocked(&mut s);
    let frame = *s.frame().unwrap();
    assert!(close(s.image(ImageId(5)).unwrap().world(), frame.center));
}

#[test]
fn drag_follows_the_cursor_at_any_scale() {
    let mut s = desktop();
    s.activate_group("h");
    run_until_unlocked(&mut s);

    // Zoom in a little, then let the wheel settle.
    s.wheel(-300.0, Point::new(640.0, 400.0));
    run_frames(&mut s, 200);
    let scale = s.scale();
    assert!(scale > 1.0);

    let p = PointerId(7);
    let start = s.image(ImageId(2)).unwrap().world();
    assert!(s.begin_drag(p, PointerButton::Primary, Point::new(600.0, 300.0), ImageId(2)));
    assert_eq!(s.top_z(), 4001);
    assert_eq!(s.image(ImageId(2)).unwrap().z_index(), 4001);
    assert!(s.image(ImageId(2)).unwrap().is_manual());

    assert_eq!(s.drag_to(p, Point::new(650.0, 280.0)), Some(ImageId(2)));
    let img = s.image(ImageId(2)).unwrap();
    let expected = start + Vec2::new(50.0, -20.0) / scale;
    assert!(close(img.world(), expected));
    assert_eq!(img.display(), img.world());

    assert_eq!(s.end_drag(p, Point::new(650.0, 280.0)), Some(ImageId(2)));
    assert!(!s.image(ImageId(2)).unwrap().is_manual());
    assert!(s.trace().events().iter().any(|e| matches!(
        e,
        SessionEvent::DragEnded { image: ImageId(2), .. }
    )));
}

#[test]
fn drags_need_the_primary_button_and_an_active_member() {
    let mut s = desktop();
    let p = PointerId(1);
    // Nothing open yet.
    assert!(!s.begin_drag(p, PointerButton::Primary, Point::ZERO, ImageId(0)));

    s.activate_group("h");
    run_until_unlocked(&mut s);
    assert!(!s.begin_drag(p, PointerButton::Secondary, Point::ZERO, ImageId(0)));
    assert!(!s.begin_drag(p, PointerButton::Primary, Point::ZERO, ImageId(1)));
    assert!(!s.begin_drag(p, PointerButton::Primary, Point::ZERO, ImageId(99)));
    assert_eq!(s.top_z(), 4000);

    assert!(s.begin_drag(p, PointerButton::Primary, Point::ZERO, ImageId(0)));
    assert!(s.begin_drag(PointerId(2), PointerButton::Primary, Point::ZERO, ImageId(4)));
    assert_eq!(s.top_z(), 4002);
    assert_eq!(s.image(ImageId(4)).unwrap().z_index(), 4002);
    assert_eq!(s.drags().active_drags(), 2);
}

#[test]
fn moves_without_a_drag_do_nothing() {
    let mut s = desktop();
    s.activate_group("h");
    run_until_unlocked(&mut s);
    let before: Vec<_> = s.images().iter().map(Image::world).collect();
    assert_eq!(s.drag_to(PointerId(3), Point::new(10.0, 10.0)), None);
    assert_eq!(s.end_drag(PointerId(3), Point::new(10.0, 10.0)), None);
    let after: Vec<_> = s.images().iter().map(Image::world).collect();
    assert_eq!(before, after);
}

#[test]
fn click_routing_on_desktop() {
    let mut s = desktop();
    assert_eq!(
        s.handle_click(ImageId(1)),
        ClickOutcome::Activated(GroupId::new("g"))
    );
    assert_eq!(
        s.handle_click(ImageId(0)),
        ClickOutcome::Ignored(IgnoreReason::GroupActive)
    );
    assert_eq!(
        s.handle_click(ImageId(42)),
        ClickOutcome::Ignored(IgnoreReason::UnknownImage)
    );
}

#[test]
fn mobile_clicks_open_the_group_elsewhere() {
    let mut s = ViewportSession::new(
        SessionConfig::for_platform(Platform::Mobile),
        Size::new(390.0, 844.0),
        gallery(),
    );
    assert_eq!(
        s.handle_click(ImageId(3)),
        ClickOutcome::OpenMobileGroup(GroupId::new("g"))
    );
    assert!(!s.is_locked());
    assert!(s.active_group().is_none());

    // No wheel zoom on touch hosts.
    assert!(!s.wheel(-100.0, Point::new(100.0, 100.0)));
    assert_eq!(s.camera().wheel_momentum(), 0.0);
}

#[test]
fn wheel_is_dropped_while_locked() {
    let mut s = desktop();
    s.activate_group("h");
    assert!(!s.wheel(-500.0, Point::new(10.0, 10.0)));
    assert_eq!(s.camera().wheel_momentum(), 0.0);
    assert_eq!(
        s.handle_input(InputEvent::Wheel {
            delta_y: -500.0,
            position: Point::new(10.0, 10.0),
        }),
        InputOutcome::Ignored
    );
    run_until_unlocked(&mut s);
    assert!(s.wheel(-500.0, Point::new(10.0, 10.0)));
    assert!(s.camera().wheel_momentum() < 0.0);
}

#[test]
fn scale_stays_within_limits_under_a_wheel_storm() {
    let mut s = desktop();
    let (min, max) = (s.config().camera.min_scale, s.config().camera.max_scale);
    for i in 0..400 {
        let delta = if (i / 50) % 2 == 0 { -900.0 } else { 1200.0 };
        s.wheel(delta, Point::new(300.0, 200.0));
        s.tick(Duration::from_millis(16));
        assert!(s.scale() >= min - 1e-12 && s.scale() <= max + 1e-12);
    }
}

#[test]
fn deactivate_restores_the_stored_view() {
    let mut s = desktop();
    s.activate_group("h");
    assert_eq!(s.deactivate(), None);
    run_until_unlocked(&mut s);

    let stored = s.stored_view();
    assert_eq!(s.deactivate(), Some(GroupId::new("h")));
    assert!(s.active_group().is_none());
    assert!(s.frame().is_none());
    assert!(s.images().iter().all(|i| !i.is_floating()));
    assert_eq!(s.camera().target_origin(), stored.origin);
    assert_eq!(s.camera().target_scale(), stored.scale);
    assert_eq!(s.deactivate(), None);

    // A new group can be opened by click again.
    assert!(matches!(
        s.handle_click(ImageId(1)),
        ClickOutcome::Activated(_)
    ));
}

#[test]
fn pointer_input_drives_drags() {
    let mut s = desktop();
    s.activate_group("g");
    run_until_unlocked(&mut s);
    let p = PointerId(11);
    let start = s.image(ImageId(3)).unwrap().world();
    let scale = s.scale();

    assert_eq!(
        s.handle_input(InputEvent::PointerDown {
            pointer: p,
            button: PointerButton::Primary,
            position: Point::new(100.0, 100.0),
            target: Some(ImageId(3)),
        }),
        InputOutcome::DragStarted(ImageId(3))
    );
    assert_eq!(
        s.handle_input(InputEvent::PointerMove {
            pointer: p,
            position: Point::new(130.0, 140.0),
        }),
        InputOutcome::Dragged(ImageId(3))
    );
    assert_eq!(s.camera().pointer(), Point::new(130.0, 140.0));
    assert_eq!(
        s.handle_input(InputEvent::PointerUp {
            pointer: p,
            position: Point::new(130.0, 140.0),
        }),
        InputOutcome::DragEnded(ImageId(3))
    );
    let moved = s.image(ImageId(3)).unwrap().world();
    assert!(close(moved, start + Vec2::new(30.0, 40.0) / scale));

    // Background presses only move the zoom anchor.
    assert_eq!(
        s.handle_input(InputEvent::PointerDown {
            pointer: p,
            button: PointerButton::Primary,
            position: Point::new(5.0, 6.0),
            target: None,
        }),
        InputOutcome::Ignored
    );
    assert_eq!(s.camera().pointer(), Point::new(5.0, 6.0));
}

#[test]
fn deactivation_ends_drags_in_progress() {
    let mut s = desktop();
    s.activate_group("h");
    run_until_unlocked(&mut s);
    assert!(s.begin_drag(PointerId(1), PointerButton::Primary, Point::ZERO, ImageId(0)));
    s.deactivate();
    assert_eq!(s.drags().active_drags(), 0);
    assert!(!s.image(ImageId(0)).unwrap().is_manual());
}

#[test]
fn frame_counted_approach_unlocks_after_exact_frames() {
    let mut config = SessionConfig::default();
    config.timeline.framing = vitrine_camera::ApproachDuration::Frames(90);
    let mut s = ViewportSession::new(config, VIEWPORT, gallery());
    s.activate_group("h");
    // Fading and forming take 12 frames; the approach starts in the 12th.
    run_frames(&mut s, 12);
    assert_eq!(s.phase().kind(), PhaseKind::Framing);
    let frames = run_until_unlocked(&mut s);
    assert_eq!(frames, 89);
}

#[test]
fn formation_leaves_a_dragged_image_with_its_pointer() {
    let mut s = desktop();
    s.activate_group("h");
    let p = PointerId(4);
    assert!(s.begin_drag(p, PointerButton::Primary, Point::ZERO, ImageId(0)));
    s.drag_to(p, Point::new(10.0, 0.0));
    let before = s.image(ImageId(0)).unwrap().world();

    // Past the 800 ms fade: the group forms around the held image.
    run_frames(&mut s, 8);
    assert_eq!(s.phase().kind(), PhaseKind::Forming);
    let frame = *s.frame().unwrap();
    let img = s.image(ImageId(0)).unwrap();
    assert_eq!(img.world(), before);
    assert_eq!(img.display(), before);
    assert!(img.is_manual());
    assert!(!img.is_settling());
    assert!(close(img.target(), frame.center));

    // Other members still move to their slots.
    let slots = SpiralParams::new(frame.center, frame.max_radius).place(3);
    assert!(close(s.image(ImageId(2)).unwrap().world(), slots[1]));

    // The next move continues from where the pointer left the image.
    let scale = s.scale();
    s.drag_to(p, Point::new(11.0, 0.0));
    let start = Point::new(-400.0, -200.0);
    assert!(close(
        s.image(ImageId(0)).unwrap().world(),
        start + Vec2::new(11.0, 0.0) / scale
    ));
}

#[test]
fn clicks_on_an_open_gallery_are_traced_when_dropped() {
    let mut s = desktop();
    s.handle_click(ImageId(1));
    run_until_unlocked(&mut s);
    s.trace_mut().clear();

    assert_eq!(
        s.handle_click(ImageId(0)),
        ClickOutcome::Ignored(IgnoreReason::GroupActive)
    );
    assert_eq!(
        s.trace().events(),
        [SessionEvent::Ignored {
            group: Some(GroupId::new("h")),
            reason: IgnoreReason::GroupActive,
        }]
    );
}
