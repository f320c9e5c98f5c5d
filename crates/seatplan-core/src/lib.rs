//! # SeatPlan Core
//!
//! Core types and utilities shared by the SeatPlan crates.
//! Provides the bounds/clamping geometry every placement rule relies on,
//! the error taxonomy, and the application event bus.

pub mod error;
pub mod event_bus;
pub mod geometry;

pub use error::{LayoutError, StorageError};

pub use geometry::{
    clamp, clamp_position, Anchor, Axis, CanvasBounds, Footprint, OverflowPolicy, Placement, Point,
};

// Re-export event bus for convenience
pub use event_bus::{
    event_bus, AppEvent, EventBus, EventCategory, EventFilter, LayoutEvent,
    SelectionEvent, StorageEvent, SubscriptionId,
};
