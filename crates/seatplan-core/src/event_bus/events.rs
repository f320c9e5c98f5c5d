//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so they can be logged or replayed.

use serde::{Deserialize, Serialize};

use crate::geometry::Axis;

/// Root event enum for all application events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Seats created, moved, renamed or removed
    Layout(LayoutEvent),
    /// Active selection changes
    Selection(SelectionEvent),
    /// Layout persistence
    Storage(StorageEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Layout(_) => EventCategory::Layout,
            AppEvent::Selection(_) => EventCategory::Selection,
            AppEvent::Storage(_) => EventCategory::Storage,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Layout(e) => e.description(),
            AppEvent::Selection(e) => e.description(),
            AppEvent::Storage(e) => e.description(),
        }
    }
}

impl From<LayoutEvent> for AppEvent {
    fn from(event: LayoutEvent) -> Self {
        AppEvent::Layout(event)
    }
}

impl From<SelectionEvent> for AppEvent {
    fn from(event: SelectionEvent) -> Self {
        AppEvent::Selection(event)
    }
}

impl From<StorageEvent> for AppEvent {
    fn from(event: StorageEvent) -> Self {
        AppEvent::Storage(event)
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Layout mutation events.
    Layout,
    /// Selection events.
    Selection,
    /// Persistence events.
    Storage,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Layout => write!(f, "Layout"),
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::Storage => write!(f, "Storage"),
        }
    }
}

/// Layout mutation events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutEvent {
    /// A single seat was placed.
    SeatAdded {
        /// Id of the new seat.
        id: u64,
        /// Label of the new seat.
        label: String,
    },
    /// A full row was generated.
    RowAdded {
        /// Row identifier.
        row: String,
        /// Number of seats in the row.
        seats: usize,
    },
    /// A bulk seat table was imported.
    LayoutImported {
        /// Number of sections in the table.
        sections: usize,
        /// Number of seats created.
        seats: usize,
    },
    /// A selection was normalised into a line.
    SeatsAligned {
        /// Axis of the line.
        axis: Axis,
        /// Number of seats aligned.
        count: usize,
    },
    /// A seat label changed.
    SeatRenamed {
        /// Seat id.
        id: u64,
        /// Label before the change.
        old_label: String,
        /// Label after the change.
        new_label: String,
    },
    /// Seats were deleted.
    SeatsRemoved {
        /// Ids of the deleted seats.
        ids: Vec<u64>,
    },
    /// Every seat was removed and numbering restarted.
    CanvasCleared,
}

impl LayoutEvent {
    fn description(&self) -> String {
        match self {
            LayoutEvent::SeatAdded { id, label } => format!("Seat {} added ({})", label, id),
            LayoutEvent::RowAdded { row, seats } => format!("Row {} added with {} seats", row, seats),
            LayoutEvent::LayoutImported { sections, seats } => {
                format!("Imported {} seats in {} sections", seats, sections)
            }
            LayoutEvent::SeatsAligned { axis, count } => {
                format!("Aligned {} seats {}ly", count, axis)
            }
            LayoutEvent::SeatRenamed {
                old_label,
                new_label,
                ..
            } => format!("Seat {} renamed to {}", old_label, new_label),
            LayoutEvent::SeatsRemoved { ids } => format!("Removed {} seats", ids.len()),
            LayoutEvent::CanvasCleared => "Canvas cleared".to_string(),
        }
    }
}

/// Selection events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectionEvent {
    /// The active selection changed.
    Changed {
        /// Ids of the selected seats, in selection order.
        ids: Vec<u64>,
    },
    /// The selection was cleared.
    Cleared,
}

impl SelectionEvent {
    fn description(&self) -> String {
        match self {
            SelectionEvent::Changed { ids } => format!("Selected {} seats", ids.len()),
            SelectionEvent::Cleared => "Selection cleared".to_string(),
        }
    }
}

/// Persistence events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StorageEvent {
    /// Layout written to a store.
    LayoutSaved {
        /// Storage key.
        key: String,
        /// Number of seats written.
        seats: usize,
    },
    /// Layout restored from a store.
    LayoutLoaded {
        /// Storage key.
        key: String,
        /// Number of seats restored.
        seats: usize,
    },
}

impl StorageEvent {
    fn description(&self) -> String {
        match self {
            StorageEvent::LayoutSaved { key, seats } => {
                format!("Saved {} seats to {}", seats, key)
            }
            StorageEvent::LayoutLoaded { key, seats } => {
                format!("Loaded {} seats from {}", seats, key)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_category() {
        let event = AppEvent::Layout(LayoutEvent::CanvasCleared);
        assert_eq!(event.category(), EventCategory::Layout);

        let event = AppEvent::Storage(StorageEvent::LayoutSaved {
            key: "theatre-layout".to_string(),
            seats: 3,
        });
        assert_eq!(event.category(), EventCategory::Storage);
    }

    #[test]
    fn test_event_description() {
        let event = AppEvent::Layout(LayoutEvent::SeatsAligned {
            axis: Axis::Horizontal,
            count: 4,
        });
        assert_eq!(event.description(), "Aligned 4 seats horizontally");

        let event = AppEvent::Layout(LayoutEvent::RowAdded {
            row: "B".to_string(),
            seats: 8,
        });
        assert_eq!(event.description(), "Row B added with 8 seats");
    }
}
