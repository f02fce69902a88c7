use deskplan_designer::{DesignerState, InputEvent, KeyCommand, Modifiers};

fn ctrl() -> Modifiers {
    Modifiers {
        ctrl: true,
        ..Modifiers::default()
    }
}

fn key(name: &str, modifiers: Modifiers) -> InputEvent {
    InputEvent::KeyDown {
        key: name.to_string(),
        modifiers,
        in_text_field: false,
    }
}

#[test]
fn test_undo_redo_shortcuts() {
    let mut state = DesignerState::new();
    state.duplicate_items(&["D-101".to_string()]);
    assert_eq!(state.items().len(), 4);

    assert_eq!(state.handle_key("z", ctrl(), false), Some(KeyCommand::Undo));
    assert_eq!(state.items().len(), 3);

    let ctrl_shift = Modifiers {
        shift: true,
        ..ctrl()
    };
    assert_eq!(state.handle_key("Z", ctrl_shift, false), Some(KeyCommand::Redo));
    assert_eq!(state.items().len(), 4);

    state.dispatch(key("z", ctrl()));
    state.dispatch(key("y", ctrl()));
    assert_eq!(state.items().len(), 4);
}

#[test]
fn test_copy_paste_shortcuts() {
    let mut state = DesignerState::new();
    state.dispatch(key("c", ctrl()));
    state.dispatch(key("v", ctrl()));
    assert_eq!(state.items().len(), 4);
    assert_eq!(state.selected_ids().len(), 1);
    assert_ne!(state.selected_ids()[0], "D-101");
}

#[test]
fn test_delete_shortcut_removes_selection() {
    let mut state = DesignerState::new();
    assert_eq!(
        state.handle_key("Delete", Modifiers::default(), false),
        Some(KeyCommand::Delete)
    );
    assert!(state.item("D-101").is_none());
    assert!(state.selected_ids().is_empty());

    let len = state.history_len();
    assert_eq!(state.handle_key("Backspace", Modifiers::default(), false), None);
    assert_eq!(state.history_len(), len);
}

#[test]
fn test_text_field_keys_are_ignored() {
    let mut state = DesignerState::new();
    assert_eq!(state.handle_key("Backspace", Modifiers::default(), true), None);
    assert!(state.item("D-101").is_some());
}

#[test]
fn test_edit_shortcuts_work_in_booking_mode() {
    let mut state = DesignerState::new();
    state.dispatch(key("c", ctrl()));
    state.toggle_mode();
    assert!(!state.is_admin());

    assert_eq!(state.handle_key("v", ctrl(), false), Some(KeyCommand::Paste));
    assert_eq!(state.items().len(), 4);

    state.set_selection(["D-101"]);
    assert_eq!(
        state.handle_key("Delete", Modifiers::default(), false),
        Some(KeyCommand::Delete)
    );
    assert_eq!(state.items().len(), 3);
    assert!(state.item("D-101").is_none());

    assert_eq!(state.handle_key("z", ctrl(), false), Some(KeyCommand::Undo));
    assert!(state.item("D-101").is_some());
}

#[test]
fn test_wheel_event_needs_modifier() {
    let mut state = DesignerState::new();
    state.dispatch(InputEvent::Wheel {
        delta_y: 120.0,
        modifiers: Modifiers::default(),
    });
    assert_eq!(state.zoom(), 1.0);
    state.dispatch(InputEvent::Wheel {
        delta_y: 120.0,
        modifiers: ctrl(),
    });
    assert!((state.zoom() - 0.9).abs() < 1e-9);
}
