//! Alignment engine.
//!
//! Turns an arbitrary selection into one straight line of seats exactly one
//! pitch apart, sharing the mean cross-axis coordinate, and fully inside the
//! canvas. Applying it twice gives the same positions as applying it once.

use seatplan_core::{clamp, Axis, CanvasBounds, Footprint, LayoutError, Point};

use crate::seat::Seat;

/// Target positions for an alignment, indexed like the input.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentPlan {
    pub axis: Axis,
    pub targets: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentEngine {
    bounds: CanvasBounds,
    footprint: Footprint,
    pitch: f64,
}

impl AlignmentEngine {
    pub fn new(bounds: CanvasBounds, footprint: Footprint, pitch: f64) -> Self {
        Self {
            bounds,
            footprint,
            pitch,
        }
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Computes where each position ends up without mutating anything.
    pub fn plan(&self, positions: &[Point], axis: Axis) -> Result<AlignmentPlan, LayoutError> {
        let count = positions.len();
        if count < 2 {
            return Err(LayoutError::SelectionRequired { count });
        }

        let mut order: Vec<usize> = (0..count).collect();
        // sort_by is stable: equal coordinates keep their selection order
        order.sort_by(|&a, &b| positions[a].along(axis).total_cmp(&positions[b].along(axis)));

        let (along_min, along_max) = self.footprint.range(self.bounds.extent(axis));
        let (across_min, across_max) = self.footprint.range(self.bounds.extent(cross(axis)));

        // Mean taken relative to the first value so an already shared coordinate is returned exactly.
        let base = positions[0].across(axis);
        let offset: f64 = positions.iter().map(|p| p.across(axis) - base).sum();
        let across = clamp(base + offset / count as f64, across_min, across_max);

        let span = (count - 1) as f64 * self.pitch;
        let start = clamp(positions[order[0]].along(axis), along_min, along_max - span);

        let mut targets = vec![Point::default(); count];
        for (rank, &index) in order.iter().enumerate() {
            let along = clamp(start + rank as f64 * self.pitch, along_min, along_max);
            targets[index] = Point::from_axes(axis, along, across);
        }

        Ok(AlignmentPlan { axis, targets })
    }

    /// Aligns seats in place, resetting rotation and re-locking scaling.
    pub fn align(&self, seats: &mut [Seat], axis: Axis) -> Result<AlignmentPlan, LayoutError> {
        let positions: Vec<Point> = seats.iter().map(|s| s.position).collect();
        let plan = self.plan(&positions, axis)?;
        for (seat, target) in seats.iter_mut().zip(&plan.targets) {
            seat.rotation = 0.0;
            seat.lock_scaling();
            seat.position = *target;
        }
        Ok(plan)
    }
}

fn cross(axis: Axis) -> Axis {
    match axis {
        Axis::Horizontal => Axis::Vertical,
        Axis::Vertical => Axis::Horizontal,
    }
}
