//! Ordered seat storage.
//!
//! Iteration order is draw order: later seats are drawn on top.

use crate::seat::{Seat, SeatId};

/// Owns every seat of a layout and allocates their ids.
#[derive(Debug, Clone)]
pub struct SeatStore {
    seats: Vec<Seat>,
    next_id: u64,
}

impl Default for SeatStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatStore {
    pub fn new() -> Self {
        Self {
            seats: Vec::new(),
            next_id: 1,
        }
    }

    /// Inserts a seat on top of the draw order and returns its new id.
    pub fn insert(&mut self, mut seat: Seat) -> SeatId {
        let id = SeatId(self.next_id);
        self.next_id += 1;
        seat.id = id;
        self.seats.push(seat);
        id
    }

    pub fn get(&self, id: SeatId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: SeatId) -> Option<&mut Seat> {
        self.seats.iter_mut().find(|s| s.id == id)
    }

    pub fn contains(&self, id: SeatId) -> bool {
        self.get(id).is_some()
    }

    pub fn remove(&mut self, id: SeatId) -> Option<Seat> {
        let index = self.seats.iter().position(|s| s.id == id)?;
        Some(self.seats.remove(index))
    }

    /// Removes every seat. Id allocation restarts at 1.
    pub fn clear(&mut self) {
        self.seats.clear();
        self.next_id = 1;
    }

    /// Moves a seat to the top of the draw order.
    pub fn bring_to_front(&mut self, id: SeatId) -> bool {
        match self.seats.iter().position(|s| s.id == id) {
            Some(index) => {
                let seat = self.seats.remove(index);
                self.seats.push(seat);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Seat> {
        self.seats.iter_mut()
    }

    /// Ids in draw order.
    pub fn ids(&self) -> Vec<SeatId> {
        self.seats.iter().map(|s| s.id).collect()
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}
