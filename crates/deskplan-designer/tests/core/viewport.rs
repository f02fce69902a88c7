use deskplan_core::Point;
use deskplan_designer::viewport::Viewport;
use deskplan_settings::ZoomSettings;

#[test]
fn test_viewport_creation() {
    let vp = Viewport::default();
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.origin(), Point::new(0.0, 0.0));
}

#[test]
fn test_to_board_divides_by_zoom_after_origin() {
    let mut vp = Viewport::default();
    vp.set_origin(Point::new(200.0, 100.0));
    vp.set_zoom(2.0);
    assert_eq!(vp.to_board(Point::new(300.0, 300.0)), Point::new(50.0, 100.0));
}

#[test]
fn test_zoom_controls_step_and_clamp() {
    let mut vp = Viewport::default();
    vp.zoom_in();
    assert!((vp.zoom() - 1.2).abs() < 1e-9);

    for _ in 0..20 {
        vp.zoom_in();
    }
    assert_eq!(vp.zoom(), 3.0);

    for _ in 0..30 {
        vp.zoom_out();
    }
    assert_eq!(vp.zoom(), 0.2);

    vp.reset_zoom();
    assert_eq!(vp.zoom(), 1.0);
}

#[test]
fn test_modified_wheel_steps_by_tenth() {
    let mut vp = Viewport::default();
    assert!(vp.handle_wheel(100.0, true));
    assert!((vp.zoom() - 0.9).abs() < 1e-9);
    assert!(vp.handle_wheel(-100.0, true));
    assert!(vp.handle_wheel(-100.0, true));
    assert!((vp.zoom() - 1.1).abs() < 1e-9);
}

#[test]
fn test_custom_limits() {
    let mut vp = Viewport::new(ZoomSettings {
        min: 0.5,
        max: 2.0,
        step: 0.5,
        wheel_step: 0.25,
    });
    vp.set_zoom(5.0);
    assert_eq!(vp.zoom(), 2.0);
    vp.zoom_out();
    vp.zoom_out();
    vp.zoom_out();
    assert_eq!(vp.zoom(), 0.5);
}
