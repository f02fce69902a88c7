use deskplan_core::{Category, ItemType, Point, WorkspaceItem};
use deskplan_designer::selection_manager::{items_in_rect, SelectionManager};

/// An item whose unrotated center is `(cx, cy)`.
fn centered(id: &str, cx: f64, cy: f64) -> WorkspaceItem {
    WorkspaceItem::new(
        id,
        ItemType::Chair,
        Category::Furniture,
        cx - 10.0,
        cy - 10.0,
        20.0,
        20.0,
        id,
    )
}

#[test]
fn test_select_exclusive_replaces() {
    let mut sel = SelectionManager::new();
    sel.select_many(["a", "b"]);
    sel.select_exclusive("c");
    assert_eq!(sel.ids(), ["c"]);
}

#[test]
fn test_clear() {
    let mut sel = SelectionManager::new();
    sel.select_exclusive("a");
    sel.clear();
    assert!(sel.is_empty());
    assert_eq!(sel.primary(), None);
}

#[test]
fn test_marquee_selects_by_center() {
    let items = vec![centered("in", 50.0, 50.0), centered("out", 150.0, 50.0)];
    let mut sel = SelectionManager::new();
    let count = sel.select_in_rect(&items, Point::new(0.0, 0.0), Point::new(100.0, 100.0));
    assert_eq!(count, 1);
    assert_eq!(sel.ids(), ["in"]);
}

#[test]
fn test_marquee_direction_does_not_matter() {
    let items = vec![centered("a", 50.0, 50.0)];
    let ids = items_in_rect(&items, Point::new(100.0, 100.0), Point::new(0.0, 0.0));
    assert_eq!(ids, vec!["a".to_string()]);
    let ids = items_in_rect(&items, Point::new(100.0, 0.0), Point::new(0.0, 100.0));
    assert_eq!(ids, vec!["a".to_string()]);
}

#[test]
fn test_marquee_bounds_are_inclusive() {
    let items = vec![centered("edge", 100.0, 100.0)];
    let ids = items_in_rect(&items, Point::new(0.0, 0.0), Point::new(100.0, 100.0));
    assert_eq!(ids.len(), 1);
}

#[test]
fn test_marquee_ignores_rotation() {
    // A long wall rotated so its silhouette crosses the rectangle, center outside.
    let mut wall = WorkspaceItem::new(
        "wall",
        ItemType::Wall,
        Category::Structural,
        0.0,
        195.0,
        400.0,
        10.0,
        "wall",
    );
    wall.rotation = 90.0;
    let ids = items_in_rect(&[wall], Point::new(150.0, 0.0), Point::new(250.0, 150.0));
    assert!(ids.is_empty());
}

#[test]
fn test_empty_marquee_clears_selection() {
    let items = vec![centered("a", 50.0, 50.0)];
    let mut sel = SelectionManager::new();
    sel.select_exclusive("a");
    sel.select_in_rect(&items, Point::new(500.0, 500.0), Point::new(600.0, 600.0));
    assert!(sel.is_empty());
}
