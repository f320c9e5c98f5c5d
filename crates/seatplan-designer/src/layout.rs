//! Layout generator.
//!
//! Produces seat placements for the three ways seats enter a layout: a single
//! seat, a whole row, and a bulk seat table. Generation never touches the
//! seat store; callers insert the returned seats.

use seatplan_core::{Axis, CanvasBounds, LayoutError, OverflowPolicy, Point};

use crate::alignment::AlignmentEngine;
use crate::cursor::EditorCursor;
use crate::options::{EditorOptions, LayoutMetrics};
use crate::row_id::RowId;
use crate::seat::{Seat, SeatFactory};
use crate::seat_table::Section;
use crate::style::SeatStyle;

/// Seats per row when the caller does not say otherwise.
pub const DEFAULT_ROW_SEATS: usize = 8;

#[derive(Debug, Clone)]
pub struct LayoutGenerator {
    bounds: CanvasBounds,
    metrics: LayoutMetrics,
    style: SeatStyle,
    overflow: OverflowPolicy,
    factory: SeatFactory,
    aligner: AlignmentEngine,
}

impl LayoutGenerator {
    pub fn new(options: &EditorOptions) -> Self {
        let footprint = options.metrics.footprint();
        Self {
            bounds: options.bounds,
            metrics: options.metrics.clone(),
            style: options.style.clone(),
            overflow: options.import.overflow,
            factory: SeatFactory::new(options.bounds, footprint),
            aligner: AlignmentEngine::new(options.bounds, footprint, options.metrics.pitch()),
        }
    }

    pub fn factory(&self) -> &SeatFactory {
        &self.factory
    }

    pub fn aligner(&self) -> &AlignmentEngine {
        &self.aligner
    }

    /// One seat, horizontally centered at the start height, labeled from the cursor.
    pub fn add_single_seat(&self, cursor: &mut EditorCursor) -> Seat {
        let footprint = self.factory.footprint();
        let x = self.bounds.center().x - self.metrics.seat_size / 2.0 + footprint.lead();
        let seat = self.factory.create_seat(
            Point::new(x, cursor.start_y()),
            cursor.next_label(),
            &self.style,
        );
        cursor.current_seat_number += 1;
        seat
    }

    /// A centered row `{row}1..{row}N` at the cursor's height.
    ///
    /// The row is aligned horizontally after generation so it is evenly spaced
    /// and inside the canvas even when it is wider than the canvas. Advances the
    /// cursor to the next row and the next row height.
    pub fn add_row(
        &self,
        row: &RowId,
        count: usize,
        cursor: &mut EditorCursor,
    ) -> Result<Vec<Seat>, LayoutError> {
        if count == 0 {
            return Err(LayoutError::InvalidSeatCount { count });
        }

        let pitch = self.aligner.pitch();
        let width = self.metrics.run_width(count, pitch);
        let start = self.bounds.center().x - width / 2.0 + self.factory.footprint().lead();

        let mut seats: Vec<Seat> = (0..count)
            .map(|i| {
                self.factory.create_seat(
                    Point::new(start + i as f64 * pitch, cursor.current_y),
                    format!("{}{}", row, i + 1),
                    &self.style,
                )
            })
            .collect();

        if seats.len() >= 2 {
            self.aligner.align(&mut seats, Axis::Horizontal)?;
        }

        cursor.current_row = row.next();
        cursor.current_y += self.metrics.row_pitch;
        Ok(seats)
    }

    /// Lays out every section of a seat table.
    ///
    /// Rows stack downward from the top margin at the row pitch. Each section
    /// is offset horizontally by its placement using the width of its widest
    /// row. Seat numbers are used as given. What happens to seats beyond the
    /// canvas edge depends on the overflow policy.
    pub fn import_layout(&self, sections: &[Section]) -> Vec<Seat> {
        let lead = self.factory.footprint().lead();
        let mut seats = Vec::new();

        for section in sections {
            let widest = section.widest_row();
            let pitch = self.section_pitch(widest);
            let width = self.metrics.run_width(widest, pitch);
            let offset = section.placement.offset(width, &self.bounds);
            let style = self.style.with_fill(section.color);

            tracing::debug!(
                "Section '{}': {} rows, width {:.1}, offset {:.1}",
                section.name,
                section.rows.len(),
                width,
                offset
            );

            for (row_index, row) in section.rows.iter().enumerate() {
                let y = self.metrics.top_margin + row_index as f64 * self.metrics.row_pitch;
                for (i, label) in row.labels().enumerate() {
                    let position = Point::new(offset + lead + i as f64 * pitch, y);
                    seats.push(match self.overflow {
                        OverflowPolicy::Allow => Seat::restore(label, position, style.clone()),
                        OverflowPolicy::Clamp | OverflowPolicy::ScaleToFit => {
                            self.factory.create_seat(position, label, &style)
                        }
                    });
                }
            }
        }

        seats
    }

    /// Gives a seat the cursor's next label and advances the seat number.
    ///
    /// Returns the previous label.
    pub fn relabel_seat(&self, seat: &mut Seat, cursor: &mut EditorCursor) -> String {
        let old = std::mem::replace(&mut seat.label, cursor.next_label());
        cursor.current_seat_number += 1;
        old
    }

    /// Pitch used inside a section; tightened only under `ScaleToFit`.
    fn section_pitch(&self, widest: usize) -> f64 {
        let pitch = self.aligner.pitch();
        if self.overflow != OverflowPolicy::ScaleToFit || widest < 2 {
            return pitch;
        }
        if self.metrics.run_width(widest, pitch) <= self.bounds.width {
            return pitch;
        }
        ((self.bounds.width - self.metrics.seat_size) / (widest - 1) as f64).max(0.0)
    }
}
