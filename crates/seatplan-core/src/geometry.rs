//! Geometry and bounds utilities.
//!
//! Every placement rule in the editor funnels through [`clamp_position`], so
//! the anchor convention chosen for seats (centre or top-left) is applied the
//! same way by the seat factory, drag constraints, and alignment.

use serde::{Deserialize, Serialize};

/// A 2D coordinate on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate along the given axis.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Coordinate across the given axis.
    pub fn across(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.y,
            Axis::Vertical => self.x,
        }
    }

    /// Builds a point from an along-axis and a cross-axis coordinate.
    pub fn from_axes(axis: Axis, along: f64, across: f64) -> Self {
        match axis {
            Axis::Horizontal => Self::new(along, across),
            Axis::Vertical => Self::new(across, along),
        }
    }
}

/// Alignment axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Size of the drawable area. Immutable for the lifetime of an editor session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    /// Creates canvas bounds.
    pub fn new(width: f64, height: f64) -> Self {
        debug_assert!(
            width.is_finite() && width > 0.0,
            "width must be positive and finite, got {width}"
        );
        debug_assert!(
            height.is_finite() && height > 0.0,
            "height must be positive and finite, got {height}"
        );
        Self { width, height }
    }

    /// Centre of the canvas.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Canvas dimension along the given axis.
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self::new(1040.0, 600.0)
    }
}

/// Which point of the square seat footprint a position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Position is the centre of the footprint.
    #[default]
    Center,
    /// Position is the top-left corner of the footprint.
    TopLeft,
}

/// Square footprint of an object together with its anchor convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub size: f64,
    pub anchor: Anchor,
}

impl Footprint {
    /// Creates a footprint.
    pub fn new(size: f64, anchor: Anchor) -> Self {
        debug_assert!(
            size.is_finite() && size >= 0.0,
            "size must be non-negative and finite, got {size}"
        );
        Self { size, anchor }
    }

    /// Valid interval for the anchor coordinate on an axis of length `extent`.
    pub fn range(&self, extent: f64) -> (f64, f64) {
        match self.anchor {
            Anchor::TopLeft => (0.0, extent - self.size),
            Anchor::Center => (self.size / 2.0, extent - self.size / 2.0),
        }
    }

    /// Offset from the anchor coordinate to the footprint's leading edge.
    pub fn lead(&self) -> f64 {
        match self.anchor {
            Anchor::TopLeft => 0.0,
            Anchor::Center => self.size / 2.0,
        }
    }

    /// Axis-aligned box `(min_x, min_y, max_x, max_y)` covered at `position`.
    pub fn bounds_at(&self, position: Point) -> (f64, f64, f64, f64) {
        let min_x = position.x - self.lead();
        let min_y = position.y - self.lead();
        (min_x, min_y, min_x + self.size, min_y + self.size)
    }
}

/// Horizontal placement of a block of seats relative to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Left,
    #[default]
    Center,
    Right,
}

impl Placement {
    /// Left edge of a block `total_width` wide placed on `bounds`.
    pub fn offset(&self, total_width: f64, bounds: &CanvasBounds) -> f64 {
        match self {
            Placement::Left => 0.0,
            Placement::Center => bounds.center().x - total_width / 2.0,
            Placement::Right => bounds.width - total_width,
        }
    }

    /// Infers a placement from a section name such as `"left"` or `"Right Balcony"`.
    pub fn infer(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        if name.contains("left") {
            Some(Placement::Left)
        } else if name.contains("right") {
            Some(Placement::Right)
        } else if name.contains("center") || name.contains("centre") {
            Some(Placement::Center)
        } else {
            None
        }
    }
}

/// What to do with generated positions that fall outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Keep positions as computed; the viewport is expected to scroll.
    #[default]
    Allow,
    /// Clamp every seat into bounds.
    Clamp,
    /// Tighten the pitch of blocks wider than the canvas, then clamp.
    ScaleToFit,
}

/// Clamps `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: when `min > max` the upper bound
/// wins.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Clamps both axes independently so the whole footprint stays on the canvas.
pub fn clamp_position(pos: Point, footprint: &Footprint, bounds: &CanvasBounds) -> Point {
    let (min_x, max_x) = footprint.range(bounds.width);
    let (min_y, max_y) = footprint.range(bounds.height);
    Point::new(clamp(pos.x, min_x, max_x), clamp(pos.y, min_y, max_y))
}
