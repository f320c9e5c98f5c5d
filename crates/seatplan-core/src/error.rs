//! Error handling for SeatPlan
//!
//! Provides error types for the layout engine and its persistence sinks:
//! - Layout errors (precondition and validation failures of editor actions)
//! - Storage errors (saving and loading layout documents)
//!
//! Out-of-bounds coordinates are never errors; they are clamped.
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Layout error type
///
/// Represents a rejected editor action. None of these leave the layout
/// partially mutated: the action either completes or nothing changes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Alignment needs a genuine multi-selection
    #[error("Selection required: select at least 2 seats (got {count})")]
    SelectionRequired {
        /// Number of seats that were selected.
        count: usize,
    },

    /// Row identifier is not a run of ASCII letters
    #[error("Invalid row name '{name}': row names must be letters only")]
    InvalidRowName {
        /// The rejected row name.
        name: String,
    },

    /// A row must contain at least one seat
    #[error("Invalid seat count {count}: a row needs at least one seat")]
    InvalidSeatCount {
        /// The rejected seat count.
        count: usize,
    },

    /// Seat labels may not be empty
    #[error("Seat label cannot be empty")]
    EmptyLabel,

    /// Seat id does not exist in the layout
    #[error("Seat {id} not found")]
    SeatNotFound {
        /// The missing seat id.
        id: u64,
    },
}

/// Storage error type
///
/// Represents failures of the layout persistence sinks.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Storage key cannot be used as a slot name
    #[error("Invalid storage key '{key}'")]
    InvalidKey {
        /// The rejected key.
        key: String,
    },

    /// Layout document could not be encoded or decoded
    #[error("Layout document error: {0}")]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
