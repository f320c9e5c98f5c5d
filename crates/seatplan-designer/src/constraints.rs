//! Live drag and selection constraints.
//!
//! These run on every move tick and every selection change. They never fail
//! and never prompt: positions are clamped and the resize lock is re-applied.

use seatplan_core::{clamp_position, CanvasBounds, Footprint, Point};

use crate::seat::SeatId;
use crate::seat_store::SeatStore;

#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintController {
    bounds: CanvasBounds,
    footprint: Footprint,
}

impl ConstraintController {
    pub fn new(bounds: CanvasBounds, footprint: Footprint) -> Self {
        Self { bounds, footprint }
    }

    /// Clamps a proposed drag position and writes it to the seat.
    ///
    /// The clamp is applied to the proposed position itself, so repeated ticks
    /// never accumulate error. Returns `None` for unknown ids.
    pub fn on_object_moving(
        &self,
        store: &mut SeatStore,
        id: SeatId,
        proposed: Point,
    ) -> Option<Point> {
        let seat = store.get_mut(id)?;
        let position = self.constrain(proposed);
        if position != proposed {
            tracing::debug!(
                "Clamped seat {} from ({:.1}, {:.1}) to ({:.1}, {:.1})",
                id,
                proposed.x,
                proposed.y,
                position.x,
                position.y
            );
        }
        seat.position = position;
        Some(position)
    }

    /// Re-locks scaling on every selected seat. Returns how many seats were touched.
    pub fn on_selection_changed(&self, store: &mut SeatStore, ids: &[SeatId]) -> usize {
        let mut touched = 0;
        for id in ids {
            if let Some(seat) = store.get_mut(*id) {
                seat.lock_scaling();
                touched += 1;
            }
        }
        touched
    }

    /// Position the drag constraint would produce.
    pub fn constrain(&self, proposed: Point) -> Point {
        clamp_position(proposed, &self.footprint, &self.bounds)
    }
}
