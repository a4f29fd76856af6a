use super::*;
use crate::draw::{Point, PolygonId};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn click_all(editor: &mut PolygonEditor, points: &[(f64, f64)]) {
    for &(x, y) in points {
        editor.handle_primary_click(p(x, y), true).unwrap();
    }
}

fn editor_with_triangle() -> PolygonEditor {
    let mut editor = PolygonEditor::new();
    click_all(&mut editor, &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (2.0, 2.0)]);
    assert_eq!(editor.completed().len(), 1);
    editor
}

#[test]
fn test_clicks_append_one_point_each() {
    let mut editor = PolygonEditor::new();
    for i in 0..6 {
        let outcome = editor
            .handle_primary_click(p(100.0 * i as f64, 50.0), true)
            .unwrap();
        assert_eq!(outcome, EditOutcome::PointAdded);
        assert_eq!(editor.in_progress().len(), i + 1);
    }
    assert!(editor.completed().is_empty());
}

#[test]
fn test_closing_click_after_three_points() {
    let mut editor = PolygonEditor::new();
    click_all(&mut editor, &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    let before = editor.in_progress().to_vec();

    let outcome = editor.handle_primary_click(p(2.0, 2.0), true).unwrap();

    assert_eq!(outcome, EditOutcome::Closed(PolygonId(0)));
    assert!(editor.in_progress().is_empty());
    assert_eq!(editor.completed().len(), 1);
    let polygon = &editor.completed()[0];
    assert!(polygon.is_closed);
    assert_eq!(polygon.points, before);
}

#[test]
fn test_two_points_never_close() {
    let mut editor = PolygonEditor::new();
    click_all(&mut editor, &[(0.0, 0.0), (10.0, 0.0)]);

    let outcome = editor.handle_primary_click(p(2.0, 2.0), true).unwrap();

    assert_eq!(outcome, EditOutcome::PointAdded);
    assert!(editor.completed().is_empty());
    assert_eq!(editor.in_progress(), &[p(0.0, 0.0), p(10.0, 0.0), p(2.0, 2.0)]);
}

#[test]
fn test_proximity_to_other_vertices_does_not_close() {
    let mut editor = PolygonEditor::new();
    click_all(&mut editor, &[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);

    // Right next to the last vertex, far from the first.
    editor.handle_primary_click(p(101.0, 101.0), true).unwrap();

    assert!(editor.completed().is_empty());
    assert_eq!(editor.in_progress().len(), 4);
}

#[test]
fn test_close_threshold_is_strict() {
    let mut editor = PolygonEditor::new();
    click_all(&mut editor, &[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);

    // Exactly 15 units away: not closing.
    assert!(!editor.closes_at(p(15.0, 0.0)));
    assert!(editor.closes_at(p(14.9, 0.0)));
    editor.handle_primary_click(p(0.0, 15.0), true).unwrap();
    assert!(editor.completed().is_empty());
    assert_eq!(editor.in_progress().len(), 4);
}

#[test]
fn test_custom_close_threshold() {
    let mut editor = PolygonEditor::with_close_threshold(40.0);
    click_all(&mut editor, &[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
    let outcome = editor.handle_primary_click(p(30.0, 0.0), true).unwrap();
    assert!(matches!(outcome, EditOutcome::Closed(_)));
}

#[test]
fn test_closed_polygons_get_increasing_ids() {
    let mut editor = editor_with_triangle();
    click_all(
        &mut editor,
        &[(200.0, 200.0), (300.0, 200.0), (300.0, 300.0), (201.0, 201.0)],
    );
    let ids: Vec<_> = editor.completed().iter().map(|poly| poly.id).collect();
    assert_eq!(ids, vec![PolygonId(0), PolygonId(1)]);
}

#[test]
fn test_click_rejected_when_tool_inactive() {
    let mut editor = PolygonEditor::new();
    let err = editor.handle_primary_click(p(1.0, 1.0), false).unwrap_err();
    assert_eq!(err, EditError::ToolInactive);
    assert!(editor.in_progress().is_empty());
}

#[test]
fn test_insert_vertex_mid_edge() {
    let mut editor = editor_with_triangle();

    let outcome = editor.insert_vertex(0, 1, p(10.0, 5.0), true).unwrap();

    assert_eq!(outcome, EditOutcome::VertexInserted);
    let polygon = &editor.completed()[0];
    assert_eq!(
        polygon.points,
        vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 5.0), p(10.0, 10.0)]
    );
    assert!(polygon.is_closed);
}

#[test]
fn test_insert_vertex_on_closing_edge_appends() {
    let mut editor = editor_with_triangle();
    editor.insert_vertex(0, 2, p(5.0, 5.0), true).unwrap();
    assert_eq!(editor.completed()[0].points.last(), Some(&p(5.0, 5.0)));
    assert_eq!(editor.completed()[0].len(), 4);
}

#[test]
fn test_insert_vertex_invalid_targets_are_rejected() {
    let mut editor = editor_with_triangle();

    let err = editor.insert_vertex(3, 0, p(1.0, 1.0), true).unwrap_err();
    assert!(err.is_invalid_target());
    let err = editor.insert_vertex(0, 3, p(1.0, 1.0), true).unwrap_err();
    assert_eq!(
        err,
        EditError::InvalidPoint {
            target: EditTarget::Completed(0),
            point_index: 3,
            len: 3
        }
    );
    let err = editor.insert_vertex(0, 0, p(1.0, 1.0), false).unwrap_err();
    assert_eq!(err, EditError::ToolInactive);

    assert_eq!(editor.completed()[0].len(), 3);
}

#[test]
fn test_move_vertex_changes_exactly_one_point() {
    let mut editor = editor_with_triangle();
    let before = editor.completed()[0].points.clone();

    editor
        .move_vertex(EditTarget::Completed(0), 1, p(20.0, -5.0), true)
        .unwrap();

    let after = &editor.completed()[0];
    assert_eq!(after.len(), before.len());
    assert!(after.is_closed);
    let changed: Vec<_> = before
        .iter()
        .zip(&after.points)
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(changed, vec![1]);
    assert_eq!(after.points[1], p(20.0, -5.0));
}

#[test]
fn test_move_in_progress_vertex_never_closes() {
    let mut editor = PolygonEditor::new();
    click_all(&mut editor, &[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);

    editor
        .move_vertex(EditTarget::InProgress, 2, p(1.0, 1.0), true)
        .unwrap();

    assert!(editor.completed().is_empty());
    assert_eq!(editor.in_progress()[2], p(1.0, 1.0));
}

#[test]
fn test_move_vertex_rejections_leave_state_unchanged() {
    let mut editor = editor_with_triangle();
    let before = editor.completed()[0].points.clone();

    assert_eq!(
        editor
            .move_vertex(EditTarget::Completed(0), 0, p(9.0, 9.0), false)
            .unwrap_err(),
        EditError::ToolInactive
    );
    assert!(
        editor
            .move_vertex(EditTarget::Completed(1), 0, p(9.0, 9.0), true)
            .unwrap_err()
            .is_invalid_target()
    );
    assert!(
        editor
            .move_vertex(EditTarget::Completed(0), 7, p(9.0, 9.0), true)
            .unwrap_err()
            .is_invalid_target()
    );
    assert!(
        editor
            .move_vertex(EditTarget::InProgress, 0, p(9.0, 9.0), true)
            .unwrap_err()
            .is_invalid_target()
    );

    assert_eq!(editor.completed()[0].points, before);
}

#[test]
fn test_deactivation_discards_in_progress_only() {
    let mut editor = editor_with_triangle();
    click_all(&mut editor, &[(50.0, 50.0), (60.0, 50.0)]);

    assert_eq!(editor.on_tool_deactivated(), EditOutcome::Discarded(2));
    assert!(editor.in_progress().is_empty());
    assert_eq!(editor.completed().len(), 1);

    // Idempotent.
    assert_eq!(editor.on_tool_deactivated(), EditOutcome::Discarded(0));
    assert_eq!(editor.completed().len(), 1);
}

#[test]
fn test_reactivation_starts_fresh_polygon() {
    let mut editor = PolygonEditor::new();
    click_all(&mut editor, &[(0.0, 0.0), (10.0, 0.0)]);
    editor.on_tool_deactivated();

    editor.handle_primary_click(p(40.0, 40.0), true).unwrap();

    assert_eq!(editor.in_progress(), &[p(40.0, 40.0)]);
}

#[test]
fn test_points_lookup_by_target() {
    let editor = editor_with_triangle();
    assert_eq!(editor.points(EditTarget::Completed(0)).map(<[_]>::len), Some(3));
    assert_eq!(editor.points(EditTarget::InProgress).map(<[_]>::len), Some(0));
    assert!(editor.points(EditTarget::Completed(1)).is_none());
    assert!(editor.polygon(0).is_some());
}
