//! Editor options: canvas, metrics, styling and import policy.

use std::collections::BTreeMap;

use seatplan_core::{Anchor, CanvasBounds, Footprint, OverflowPolicy, Placement};

use crate::style::{Color, SeatStyle};

/// Seat geometry and spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutMetrics {
    /// Edge length of the square seat footprint
    pub seat_size: f64,
    /// Grid unit used for seat pitch
    pub grid_size: f64,
    /// Extra gap added to the grid unit between adjacent seats
    pub seat_gap: f64,
    /// Vertical distance between consecutive rows
    pub row_pitch: f64,
    /// Vertical position of the first row and of single seats
    pub start_y: f64,
    /// Vertical position of the first imported row
    pub top_margin: f64,
    /// Which point of a seat its position refers to
    pub anchor: Anchor,
}

impl LayoutMetrics {
    /// Center-to-center distance between adjacent seats.
    pub fn pitch(&self) -> f64 {
        self.grid_size + self.seat_gap
    }

    /// Footprint of every seat.
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.seat_size, self.anchor)
    }

    /// Width covered by `count` seats laid out at `pitch`.
    pub fn run_width(&self, count: usize, pitch: f64) -> f64 {
        if count == 0 {
            0.0
        } else {
            (count - 1) as f64 * pitch + self.seat_size
        }
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            seat_size: 30.0,
            grid_size: 34.0,
            seat_gap: 4.0,
            row_pitch: 45.0,
            start_y: 150.0,
            top_margin: 50.0,
            anchor: Anchor::Center,
        }
    }
}

/// Placement and color overrides for a named section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionStyle {
    pub placement: Option<Placement>,
    pub color: Option<Color>,
}

/// Bulk import behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOptions {
    pub overflow: OverflowPolicy,
    /// Opacity applied to section colors
    pub section_alpha: f64,
    pub sections: BTreeMap<String, SectionStyle>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            overflow: OverflowPolicy::Allow,
            section_alpha: 0.7,
            sections: BTreeMap::new(),
        }
    }
}

/// Everything an editor session needs to know about its canvas and seats.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorOptions {
    pub bounds: CanvasBounds,
    pub metrics: LayoutMetrics,
    pub style: SeatStyle,
    pub import: ImportOptions,
    /// Key the layout is saved under
    pub layout_key: String,
}

impl EditorOptions {
    /// Options with the default layout key.
    pub fn new(bounds: CanvasBounds, metrics: LayoutMetrics, style: SeatStyle) -> Self {
        Self {
            bounds,
            metrics,
            style,
            import: ImportOptions::default(),
            layout_key: DEFAULT_LAYOUT_KEY.to_string(),
        }
    }
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self::new(
            CanvasBounds::default(),
            LayoutMetrics::default(),
            SeatStyle::default(),
        )
    }
}

/// Key layouts are saved under unless configured otherwise.
pub const DEFAULT_LAYOUT_KEY: &str = "theatre-layout";
