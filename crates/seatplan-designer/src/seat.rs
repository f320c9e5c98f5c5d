//! Seat entity and seat factory.

use serde::{Deserialize, Serialize};
use std::fmt;

use seatplan_core::{clamp_position, CanvasBounds, Footprint, Point};

use crate::style::SeatStyle;

/// Identifier of a seat inside a [`SeatStore`](crate::seat_store::SeatStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatId(pub u64);

impl SeatId {
    /// Placeholder carried by seats that have not been inserted into a store yet.
    pub const UNASSIGNED: SeatId = SeatId(0);

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<SeatId> for u64 {
    fn from(id: SeatId) -> Self {
        id.0
    }
}

/// A placed seat token.
///
/// Seats are plain records owned by the editor session; the scene only
/// renders them. Size is a property of the editor, not of the seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    pub label: String,
    pub position: Point,
    /// Rotation in degrees
    pub rotation: f64,
    pub style: SeatStyle,
    /// Seats can be moved and rotated but never resized
    pub scaling_locked: bool,
}

impl Seat {
    /// Recreates a seat from stored data without touching its position.
    pub fn restore(label: impl Into<String>, position: Point, style: SeatStyle) -> Self {
        Self {
            id: SeatId::UNASSIGNED,
            label: label.into(),
            position,
            rotation: 0.0,
            style,
            scaling_locked: true,
        }
    }

    /// Axis-aligned box `(min_x, min_y, max_x, max_y)` covered by the seat.
    pub fn bounds(&self, footprint: &Footprint) -> (f64, f64, f64, f64) {
        footprint.bounds_at(self.position)
    }

    /// Forces the resize lock back on.
    pub fn lock_scaling(&mut self) {
        self.scaling_locked = true;
    }
}

/// Builds seats whose positions are already inside the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatFactory {
    bounds: CanvasBounds,
    footprint: Footprint,
}

impl SeatFactory {
    pub fn new(bounds: CanvasBounds, footprint: Footprint) -> Self {
        Self { bounds, footprint }
    }

    /// Creates a seat at `position` clamped into bounds.
    ///
    /// The label is stored verbatim. Rotation starts at 0 and scaling is locked.
    pub fn create_seat(&self, position: Point, label: impl Into<String>, style: &SeatStyle) -> Seat {
        let position = clamp_position(position, &self.footprint, &self.bounds);
        Seat::restore(label, position, style.clone())
    }

    pub fn bounds(&self) -> &CanvasBounds {
        &self.bounds
    }

    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }
}
