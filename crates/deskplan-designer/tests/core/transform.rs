use deskplan_core::{Category, ItemType, Point, WorkspaceItem};
use deskplan_designer::transform::{
    moved, pointer_angle, resized, rotation_for, InteractionState, TransformKind,
    TransformSession,
};
use deskplan_designer::viewport::Viewport;
use deskplan_settings::PlacementSettings;

fn desk(id: &str, x: f64, y: f64) -> WorkspaceItem {
    WorkspaceItem::new(id, ItemType::Desk, Category::Furniture, x, y, 120.0, 70.0, id)
}

#[test]
fn test_move_rounds_position() {
    let out = moved(&desk("a", 10.0, 10.0), 5.4, 5.6);
    assert_eq!((out.x, out.y), (15.0, 16.0));
    assert_eq!((out.width, out.height), (120.0, 70.0));
}

#[test]
fn test_resize_bottom_right() {
    let out = resized(&desk("a", 0.0, 0.0), TransformKind::ResizeBottomRight, 30.0, -20.0, 20.0);
    assert_eq!((out.x, out.y), (0.0, 0.0));
    assert_eq!((out.width, out.height), (150.0, 50.0));
}

#[test]
fn test_resize_top_left_moves_origin() {
    let out = resized(&desk("a", 100.0, 100.0), TransformKind::ResizeTopLeft, 20.0, 10.0, 20.0);
    assert_eq!((out.x, out.y), (120.0, 110.0));
    assert_eq!((out.width, out.height), (100.0, 60.0));
}

#[test]
fn test_resize_bottom_left_only_touches_left_and_bottom() {
    let out = resized(&desk("a", 100.0, 100.0), TransformKind::ResizeBottomLeft, -10.0, 15.0, 20.0);
    assert_eq!(out.x, 90.0);
    assert_eq!(out.width, 130.0);
    assert_eq!(out.y, 100.0);
    assert_eq!(out.height, 85.0);
}

#[test]
fn test_resize_clamps_to_min_size() {
    for kind in [
        TransformKind::ResizeTopLeft,
        TransformKind::ResizeTopRight,
        TransformKind::ResizeBottomLeft,
        TransformKind::ResizeBottomRight,
    ] {
        for (dx, dy) in [(-1000.0, -1000.0), (1000.0, 1000.0)] {
            let out = resized(&desk("a", 0.0, 0.0), kind, dx, dy, 20.0);
            assert!(out.width >= 20.0, "{:?} width {}", kind, out.width);
            assert!(out.height >= 20.0, "{:?} height {}", kind, out.height);
        }
    }
}

#[test]
fn test_rotation_snaps_to_fifteen() {
    let r = rotation_for(0.0, 0.0, 20f64.to_radians(), Some(15.0));
    assert_eq!(r, 15.0);
    let r = rotation_for(0.0, 0.0, 23f64.to_radians(), Some(15.0));
    assert_eq!(r, 30.0);
}

#[test]
fn test_rotation_rounds_to_tenth() {
    let r = rotation_for(0.0, 0.0, 12.345f64.to_radians(), None);
    assert!((r - 12.3).abs() < 1e-9);
}

#[test]
fn test_pointer_angle_uses_viewport_center() {
    let mut vp = Viewport::default();
    vp.set_origin(Point::new(10.0, 10.0));
    vp.set_zoom(2.0);
    // Board center (50, 50) is at viewport (110, 110).
    let angle = pointer_angle(Point::new(50.0, 50.0), Point::new(110.0, 210.0), &vp);
    assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn test_session_moves_rigidly_from_start_snapshot() {
    let vp = Viewport::default();
    let a = desk("a", 0.0, 0.0);
    let b = desk("b", 200.0, 50.0);
    let session = TransformSession::begin(
        TransformKind::Move,
        Point::new(10.0, 10.0),
        &a,
        vec![a.clone(), b.clone()],
        &vp,
    );
    let rules = PlacementSettings::default();

    let first = session.update(Point::new(20.0, 30.0), &vp, false, &rules);
    assert_eq!((first[0].x, first[0].y), (10.0, 20.0));
    assert_eq!((first[1].x, first[1].y), (210.0, 70.0));

    // A second update is relative to the start, not the previous update.
    let second = session.update(Point::new(15.0, 10.0), &vp, false, &rules);
    assert_eq!((second[0].x, second[0].y), (5.0, 0.0));
}

#[test]
fn test_session_divides_delta_by_zoom() {
    let mut vp = Viewport::default();
    vp.set_zoom(2.0);
    let a = desk("a", 0.0, 0.0);
    let session = TransformSession::begin(
        TransformKind::ResizeBottomRight,
        Point::new(0.0, 0.0),
        &a,
        vec![a.clone()],
        &vp,
    );
    let out = session.update(Point::new(40.0, 20.0), &vp, false, &PlacementSettings::default());
    assert_eq!((out[0].width, out[0].height), (140.0, 80.0));
}

#[test]
fn test_session_skips_locked_items() {
    let vp = Viewport::default();
    let a = desk("a", 0.0, 0.0);
    let mut locked = desk("locked", 300.0, 0.0);
    locked.locked = Some(true);
    let session = TransformSession::begin(
        TransformKind::Move,
        Point::new(0.0, 0.0),
        &a,
        vec![a.clone(), locked.clone()],
        &vp,
    );
    let out = session.update(Point::new(50.0, 50.0), &vp, false, &PlacementSettings::default());
    assert_eq!(out[0].x, 50.0);
    assert_eq!(out[1], locked);
}

#[test]
fn test_rotate_session_tracks_pointer_angle() {
    let vp = Viewport::default();
    let mut a = desk("a", 0.0, 0.0);
    a.rotation = 30.0;
    // Center is (60, 35). Start to the right of it, end below it.
    let session = TransformSession::begin(
        TransformKind::Rotate,
        Point::new(160.0, 35.0),
        &a,
        vec![a.clone()],
        &vp,
    );
    assert_eq!(session.initial_rotation, 30.0);
    assert_eq!(session.start_angle, 0.0);

    let out = session.update(Point::new(60.0, 135.0), &vp, false, &PlacementSettings::default());
    assert_eq!(out[0].rotation, 120.0);
}

#[test]
fn test_interaction_state_accessors() {
    let state = InteractionState::default();
    assert!(state.is_idle());
    assert!(state.session().is_none());
    assert!(state.marquee().is_none());
}
