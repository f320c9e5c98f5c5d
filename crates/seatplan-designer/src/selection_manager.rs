use crate::seat::SeatId;
use crate::seat_store::SeatStore;

/// Tracks the active selection of seats.
///
/// # Selection Model
///
/// - **Selection order**: ids are kept in the order they were selected
/// - **Primary selection**: the most recently selected seat (stored in `primary`)
/// - **Multi-select**: a selection of two or more seats; alignment needs one
///
/// The manager only holds ids. Callers prune it when seats are removed.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected: Vec<SeatId>,
    primary: Option<SeatId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatplan_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.primary(), None);
    /// assert!(manager.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the primary selected seat.
    pub fn primary(&self) -> Option<SeatId> {
        self.primary
    }

    /// Selected ids in selection order.
    pub fn selected_ids(&self) -> &[SeatId] {
        &self.selected
    }

    pub fn is_selected(&self, id: SeatId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether the selection is a genuine multi-selection.
    pub fn is_multi(&self) -> bool {
        self.selected.len() >= 2
    }

    /// Replaces the selection with a single seat.
    pub fn select(&mut self, id: SeatId) {
        self.selected.clear();
        self.selected.push(id);
        self.primary = Some(id);
    }

    /// Adds or removes a seat without affecting the rest (Shift+click).
    ///
    /// Returns `true` if the seat is selected afterwards.
    pub fn toggle(&mut self, id: SeatId) -> bool {
        if let Some(index) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(index);
            if self.primary == Some(id) {
                self.primary = self.selected.last().copied();
            }
            false
        } else {
            self.selected.push(id);
            self.primary = Some(id);
            true
        }
    }

    /// Replaces the selection with `ids`, dropping duplicates.
    pub fn set_selection(&mut self, ids: &[SeatId]) {
        self.selected.clear();
        for id in ids {
            if !self.selected.contains(id) {
                self.selected.push(*id);
            }
        }
        self.primary = self.selected.last().copied();
    }

    /// Selects every seat in draw order; the topmost becomes primary.
    pub fn select_all(&mut self, store: &SeatStore) {
        self.set_selection(&store.ids());
    }

    /// Clears the selection.
    pub fn deselect_all(&mut self) {
        self.selected.clear();
        self.primary = None;
    }

    /// Drops ids that are no longer in the store. Returns how many were dropped.
    pub fn prune(&mut self, store: &SeatStore) -> usize {
        let before = self.selected.len();
        self.selected.retain(|id| store.contains(*id));
        if self.primary.is_some_and(|id| !store.contains(id)) {
            self.primary = self.selected.last().copied();
        }
        before - self.selected.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seat::Seat;
    use crate::style::SeatStyle;
    use seatplan_core::Point;

    fn store_with(n: usize) -> SeatStore {
        let mut store = SeatStore::new();
        for i in 0..n {
            store.insert(Seat::restore(
                format!("A{}", i + 1),
                Point::new(0.0, 0.0),
                SeatStyle::default(),
            ));
        }
        store
    }

    #[test]
    fn test_select_and_toggle() {
        let mut manager = SelectionManager::new();
        manager.select(SeatId(1));
        assert!(!manager.is_multi());

        assert!(manager.toggle(SeatId(2)));
        assert!(manager.is_multi());
        assert_eq!(manager.primary(), Some(SeatId(2)));

        assert!(!manager.toggle(SeatId(2)));
        assert_eq!(manager.selected_ids(), &[SeatId(1)]);
        assert_eq!(manager.primary(), Some(SeatId(1)));
    }

    #[test]
    fn test_select_all_and_deselect() {
        let store = store_with(3);
        let mut manager = SelectionManager::new();
        manager.select_all(&store);
        assert_eq!(manager.len(), 3);
        assert_eq!(manager.primary(), Some(SeatId(3)));

        manager.deselect_all();
        assert!(manager.is_empty());
        assert_eq!(manager.primary(), None);
    }

    #[test]
    fn test_set_selection_dedups() {
        let mut manager = SelectionManager::new();
        manager.set_selection(&[SeatId(2), SeatId(1), SeatId(2)]);
        assert_eq!(manager.selected_ids(), &[SeatId(2), SeatId(1)]);
    }

    #[test]
    fn test_prune() {
        let mut store = store_with(3);
        let mut manager = SelectionManager::new();
        manager.select_all(&store);
        store.remove(SeatId(3));

        assert_eq!(manager.prune(&store), 1);
        assert_eq!(manager.selected_ids(), &[SeatId(1), SeatId(2)]);
        assert_eq!(manager.primary(), Some(SeatId(2)));
    }
}
