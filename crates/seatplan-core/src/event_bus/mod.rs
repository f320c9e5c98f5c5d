//! # Event Bus Module
//!
//! Publish/subscribe event bus for decoupled communication between the
//! editor session and whatever presents it (scene views, status bars, logs).
//!
//! ## Usage
//!
//! ```rust
//! use seatplan_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter, LayoutEvent};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Layout]),
//!     |event| {
//!         if let AppEvent::Layout(layout) = event {
//!             println!("Layout event: {:?}", layout);
//!         }
//!     },
//! );
//!
//! bus.publish(AppEvent::Layout(LayoutEvent::CanvasCleared));
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
