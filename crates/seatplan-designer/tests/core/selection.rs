use seatplan_designer::{
    ConstraintController, EditorOptions, Point, Seat, SeatId, SeatStore, SeatStyle,
    SelectionManager,
};

fn store() -> SeatStore {
    let mut store = SeatStore::new();
    for label in ["A1", "A2", "A3"] {
        store.insert(Seat::restore(label, Point::new(100.0, 100.0), SeatStyle::default()));
    }
    store
}

#[test]
fn test_selection_survives_deletes() {
    let mut store = store();
    let mut selection = SelectionManager::new();
    selection.select(SeatId(1));
    selection.toggle(SeatId(3));
    assert!(selection.is_multi());

    store.remove(SeatId(3));
    selection.prune(&store);
    assert!(!selection.is_multi());
    assert_eq!(selection.primary(), Some(SeatId(1)));
}

#[test]
fn test_selection_change_relocks_every_member() {
    let options = EditorOptions::default();
    let controller = ConstraintController::new(options.bounds, options.metrics.footprint());
    let mut store = store();
    for seat in store.iter_mut() {
        seat.scaling_locked = false;
    }

    let touched = controller.on_selection_changed(&mut store, &[SeatId(1), SeatId(2)]);
    assert_eq!(touched, 2);
    assert!(store.get(SeatId(1)).unwrap().scaling_locked);
    assert!(store.get(SeatId(2)).unwrap().scaling_locked);
    assert!(!store.get(SeatId(3)).unwrap().scaling_locked);
}

#[test]
fn test_drag_ticks_do_not_accumulate() {
    let options = EditorOptions::default();
    let controller = ConstraintController::new(options.bounds, options.metrics.footprint());
    let mut store = store();

    for x in [900.0, 1100.0, 1500.0, 700.0] {
        controller.on_object_moving(&mut store, SeatId(2), Point::new(x, 300.0));
    }
    assert_eq!(store.get(SeatId(2)).unwrap().position, Point::new(700.0, 300.0));
}
