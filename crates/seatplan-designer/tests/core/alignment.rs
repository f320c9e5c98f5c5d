use seatplan_core::LayoutError;
use seatplan_designer::{
    AlignmentEngine, Anchor, Axis, CanvasBounds, EditorCursor, EditorOptions, Footprint,
    LayoutGenerator, Point, RowId, Seat, SeatStyle,
};

fn seats(points: &[(f64, f64)]) -> Vec<Seat> {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            Seat::restore(format!("S{}", i), Point::new(*x, *y), SeatStyle::default())
        })
        .collect()
}

#[test]
fn test_generated_row_is_alignment_fixed_point() {
    let options = EditorOptions::default();
    let generator = LayoutGenerator::new(&options);
    let mut row = generator
        .add_row(&RowId::default(), 8, &mut EditorCursor::new(150.0))
        .unwrap();
    let before = row.clone();

    generator.aligner().align(&mut row, Axis::Horizontal).unwrap();
    assert_eq!(row, before);
}

#[test]
fn test_ties_keep_selection_order() {
    let engine = AlignmentEngine::new(
        CanvasBounds::default(),
        Footprint::new(30.0, Anchor::Center),
        38.0,
    );
    let mut row = seats(&[(200.0, 100.0), (200.0, 300.0), (100.0, 200.0)]);
    engine.align(&mut row, Axis::Horizontal).unwrap();

    assert_eq!(row[2].position.x, 100.0);
    assert_eq!(row[0].position.x, 138.0);
    assert_eq!(row[1].position.x, 176.0);
}

#[test]
fn test_vertical_column_fits_canvas() {
    let engine = AlignmentEngine::new(
        CanvasBounds::default(),
        Footprint::new(30.0, Anchor::TopLeft),
        38.0,
    );
    let mut column = seats(&[(50.0, 580.0), (60.0, 590.0), (70.0, 600.0)]);
    engine.align(&mut column, Axis::Vertical).unwrap();

    let ys: Vec<f64> = column.iter().map(|s| s.position.y).collect();
    assert_eq!(ys, [570.0 - 76.0, 570.0 - 38.0, 570.0]);
    assert!(column.iter().all(|s| s.position.x == 60.0));
}

#[test]
fn test_single_seat_is_rejected() {
    let engine = AlignmentEngine::new(
        CanvasBounds::default(),
        Footprint::new(30.0, Anchor::Center),
        38.0,
    );
    assert_eq!(
        engine.plan(&[Point::new(1.0, 1.0)], Axis::Horizontal),
        Err(LayoutError::SelectionRequired { count: 1 })
    );
}
