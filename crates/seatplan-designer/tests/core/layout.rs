use seatplan_designer::{
    parse_seat_table, resolve_sections, Anchor, CanvasBounds, EditorCursor, EditorOptions,
    LayoutGenerator, Placement, Point, RowId, SEAT_GREEN,
};

#[test]
fn test_row_of_eight() {
    let generator = LayoutGenerator::new(&EditorOptions::default());
    let mut cursor = EditorCursor::new(150.0);

    let seats = generator
        .add_row(&RowId::new("A").unwrap(), 8, &mut cursor)
        .unwrap();

    let labels: Vec<_> = seats.iter().map(|s| s.label.clone()).collect();
    assert_eq!(labels, ["A1", "A2", "A3", "A4", "A5", "A6", "A7", "A8"]);
    for pair in seats.windows(2) {
        assert!(pair[1].position.x > pair[0].position.x);
        assert_eq!(pair[1].position.x - pair[0].position.x, 38.0);
        assert_eq!(pair[1].position.y, pair[0].position.y);
    }
    assert!(seats.iter().all(|s| s.rotation == 0.0 && s.scaling_locked));
}

#[test]
fn test_consecutive_rows_step_down() {
    let generator = LayoutGenerator::new(&EditorOptions::default());
    let mut cursor = EditorCursor::new(150.0);

    let first = generator
        .add_row(&cursor.current_row.clone(), 4, &mut cursor)
        .unwrap();
    let second = generator
        .add_row(&cursor.current_row.clone(), 4, &mut cursor)
        .unwrap();

    assert_eq!(first[0].label, "A1");
    assert_eq!(second[0].label, "B1");
    assert_eq!(second[0].position.y - first[0].position.y, 45.0);
    assert_eq!(cursor.current_row.as_str(), "C");
}

#[test]
fn test_row_wider_than_canvas_is_clamped() {
    let mut options = EditorOptions::default();
    options.bounds = CanvasBounds::new(400.0, 300.0);
    let generator = LayoutGenerator::new(&options);
    let mut cursor = EditorCursor::new(150.0);

    let seats = generator
        .add_row(&RowId::new("Z").unwrap(), 20, &mut cursor)
        .unwrap();
    assert!(seats
        .iter()
        .all(|s| s.position.x >= 15.0 && s.position.x <= 385.0));
    assert_eq!(cursor.current_row.as_str(), "AA");
}

#[test]
fn test_top_left_row_matches_center_row() {
    let centered = LayoutGenerator::new(&EditorOptions::default())
        .add_row(&RowId::default(), 3, &mut EditorCursor::new(150.0))
        .unwrap();

    let mut options = EditorOptions::default();
    options.metrics.anchor = Anchor::TopLeft;
    let top_left = LayoutGenerator::new(&options)
        .add_row(&RowId::default(), 3, &mut EditorCursor::new(150.0))
        .unwrap();

    for (c, t) in centered.iter().zip(&top_left) {
        assert_eq!(c.position.x - 15.0, t.position.x);
    }
}

#[test]
fn test_import_aisle_split_numbering() {
    let table = parse_seat_table(
        r#"{
            "left":   {"A": [31, 29, 27]},
            "center": {"A": [1, 2, 3, 4]},
            "right":  {"A": [28, 30, 32]}
        }"#,
    )
    .unwrap();
    let options = EditorOptions::default();
    let sections = resolve_sections(&table, &options.import, SEAT_GREEN).unwrap();
    let seats = LayoutGenerator::new(&options).import_layout(&sections);

    let labels: Vec<_> = seats.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        ["A1", "A2", "A3", "A4", "A31", "A29", "A27", "A28", "A30", "A32"]
    );
    assert_eq!(sections[0].placement, Placement::Center);

    // Center section: 3 * 38 + 30 = 144 wide, centered on 520.
    assert_eq!(seats[0].position, Point::new(520.0 - 72.0 + 15.0, 50.0));
    // Left section starts at the canvas edge.
    assert_eq!(seats[4].position.x, 15.0);
    // Right section ends at the canvas edge.
    assert_eq!(seats[9].position.x, 1025.0);
}

#[test]
fn test_import_stacks_double_letter_rows_last() {
    let table = parse_seat_table(r#"{"left": {"B": [1], "A": [1], "AA": [1]}}"#).unwrap();
    let options = EditorOptions::default();
    let sections = resolve_sections(&table, &options.import, SEAT_GREEN).unwrap();
    let seats = LayoutGenerator::new(&options).import_layout(&sections);

    let stacked: Vec<_> = seats
        .iter()
        .map(|s| (s.label.as_str(), s.position.y))
        .collect();
    assert_eq!(stacked, [("A1", 50.0), ("B1", 95.0), ("AA1", 140.0)]);
}
