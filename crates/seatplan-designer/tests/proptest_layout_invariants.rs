use proptest::prelude::*;
use seatplan_designer::{
    AlignmentEngine, Anchor, Axis, CanvasBounds, EditorCursor, EditorOptions, Footprint,
    LayoutDocument, LayoutGenerator, Point, RowId, Seat, SeatStyle,
};

fn anchor() -> impl Strategy<Value = Anchor> {
    prop_oneof![Just(Anchor::Center), Just(Anchor::TopLeft)]
}

fn axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::Horizontal), Just(Axis::Vertical)]
}

fn in_bounds(p: Point, footprint: &Footprint, bounds: &CanvasBounds) -> bool {
    let (min_x, min_y, max_x, max_y) = footprint.bounds_at(p);
    let eps = 1e-9;
    min_x >= -eps && min_y >= -eps && max_x <= bounds.width + eps && max_y <= bounds.height + eps
}

proptest! {
    #[test]
    fn single_seat_always_on_canvas(
        width in 100.0f64..3000.0,
        height in 100.0f64..3000.0,
        start_y in -500.0f64..5000.0,
        anchor in anchor(),
    ) {
        let mut options = EditorOptions::default();
        options.bounds = CanvasBounds::new(width, height);
        options.metrics.anchor = anchor;
        options.metrics.start_y = start_y;

        let generator = LayoutGenerator::new(&options);
        let mut cursor = EditorCursor::new(start_y);
        let seat = generator.add_single_seat(&mut cursor);
        prop_assert!(in_bounds(seat.position, &options.metrics.footprint(), &options.bounds));
    }

    #[test]
    fn rows_are_evenly_spaced_and_on_canvas(count in 1usize..20, anchor in anchor()) {
        let mut options = EditorOptions::default();
        options.metrics.anchor = anchor;
        let generator = LayoutGenerator::new(&options);
        let mut cursor = EditorCursor::new(150.0);

        let seats = generator.add_row(&RowId::default(), count, &mut cursor).unwrap();
        prop_assert_eq!(seats.len(), count);
        for pair in seats.windows(2) {
            prop_assert!((pair[1].position.x - pair[0].position.x - 38.0).abs() < 1e-9);
            prop_assert_eq!(pair[1].position.y, pair[0].position.y);
        }
        for seat in &seats {
            prop_assert!(in_bounds(seat.position, &options.metrics.footprint(), &options.bounds));
        }
    }

    #[test]
    fn alignment_is_idempotent_and_bounded(
        points in prop::collection::vec((-200.0f64..1300.0, -200.0f64..800.0), 2..25),
        axis in axis(),
        anchor in anchor(),
    ) {
        let bounds = CanvasBounds::default();
        let footprint = Footprint::new(30.0, anchor);
        let engine = AlignmentEngine::new(bounds, footprint, 38.0);
        let mut seats: Vec<Seat> = points
            .iter()
            .map(|(x, y)| Seat::restore("S", Point::new(*x, *y), SeatStyle::default()))
            .collect();

        engine.align(&mut seats, axis).unwrap();
        let once = seats.clone();
        engine.align(&mut seats, axis).unwrap();

        prop_assert_eq!(&seats, &once);
        for seat in &seats {
            prop_assert!(in_bounds(seat.position, &footprint, &bounds));
            prop_assert_eq!(seat.position.across(axis), once[0].position.across(axis));
        }
    }

    #[test]
    fn export_restore_export_is_identity(
        points in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 0..30),
    ) {
        let seats: Vec<Seat> = points
            .iter()
            .enumerate()
            .map(|(i, (x, y))| {
                Seat::restore(format!("R{}", i), Point::new(*x, *y), SeatStyle::default())
            })
            .collect();
        let exported = LayoutDocument::from_seats(&seats);
        let json = exported.to_json().unwrap();
        let restored = LayoutDocument::from_json(&json).unwrap().to_seats(&SeatStyle::default());
        prop_assert_eq!(LayoutDocument::from_seats(&restored), exported);
    }
}
