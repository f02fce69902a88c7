use deskplan_core::{Employee, ItemStatus, Point};
use deskplan_designer::{AppMode, DesignerState, Modifiers, PointerTarget, TransformKind};

#[test]
fn test_confirm_booking_occupies_with_current_user() {
    let mut state = DesignerState::new();
    let before = state.history_len();

    assert!(state.confirm_booking("D-101"));
    let desk = state.item("D-101").unwrap();
    assert_eq!(desk.status, ItemStatus::Occupied);
    assert_eq!(desk.assignee, Some(Employee::current_user()));
    assert_eq!(state.history_len(), before + 1);

    state.undo();
    assert_eq!(state.item("D-101").unwrap().status, ItemStatus::Available);
}

#[test]
fn test_confirm_booking_unknown_item_is_noop() {
    let mut state = DesignerState::new();
    let before = state.history_len();
    assert!(!state.confirm_booking("NOPE"));
    assert_eq!(state.history_len(), before);
}

#[test]
fn test_release_booking() {
    let mut state = DesignerState::new();
    state.confirm_booking("D-101");
    assert!(state.release_booking("D-101"));
    let desk = state.item("D-101").unwrap();
    assert_eq!(desk.status, ItemStatus::Available);
    assert!(desk.assignee.is_none());
}

#[test]
fn test_booking_mode_selects_bookable_items_only() {
    let mut state = DesignerState::new();
    assert_eq!(state.toggle_mode(), AppMode::Booking);
    assert!(state.selected_ids().is_empty());

    let zone = PointerTarget::new("ZONE-ENG", TransformKind::Move);
    state.pointer_down(Point::new(400.0, 100.0), Some(&zone), Modifiers::default());
    assert!(state.selected_ids().is_empty());

    let meeting = PointerTarget::new("MEET-PRO", TransformKind::Move);
    state.pointer_down(Point::new(150.0, 150.0), Some(&meeting), Modifiers::default());
    assert_eq!(state.selected_ids(), ["MEET-PRO"]);
    assert!(state.interaction().is_idle());

    let desk = PointerTarget::new("D-101", TransformKind::Move);
    state.pointer_down(Point::new(450.0, 180.0), Some(&desk), Modifiers::shift());
    assert_eq!(state.selected_ids(), ["D-101"]);
    assert_eq!(state.primary_selected_item().unwrap().id, "D-101");
}

#[test]
fn test_booking_mode_never_drags_or_marquees() {
    let mut state = DesignerState::new();
    state.toggle_mode();
    let before = state.items().to_vec();

    let desk = PointerTarget::new("D-101", TransformKind::Move);
    state.pointer_down(Point::new(450.0, 180.0), Some(&desk), Modifiers::default());
    state.pointer_move(Point::new(600.0, 400.0), Modifiers::default());
    state.pointer_up();
    assert_eq!(state.items(), before.as_slice());

    state.pointer_down(Point::new(5.0, 5.0), None, Modifiers::default());
    assert!(state.interaction().is_idle());
    assert_eq!(state.selected_ids(), ["D-101"]);
}

#[test]
fn test_primary_item_follows_selection_order() {
    let mut state = DesignerState::new();
    state.set_selection(["ZONE-ENG", "D-101"]);
    assert_eq!(state.primary_selected_item().unwrap().id, "ZONE-ENG");

    state.set_selection(["GONE", "D-101"]);
    assert_eq!(state.primary_selected_item().unwrap().id, "D-101");

    state.clear_selection();
    assert!(state.primary_selected_item().is_none());
}
