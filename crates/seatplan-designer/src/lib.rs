//! # SeatPlan Designer
//!
//! Layout engine for theatre and venue seating charts. Seats are labeled,
//! fixed-size tokens placed on a bounded canvas, one at a time, a row at a
//! time, or from a bulk seat table, then dragged, renamed, aligned and saved.
//!
//! ## Core Components
//!
//! ### Layout
//! - **Seat Factory**: Builds seats already clamped into the canvas
//! - **Layout Generator**: Single seats, centered rows, bulk seat-table import
//! - **Alignment Engine**: Snaps a selection into an evenly spaced line
//! - **Constraints**: Keeps dragged seats on the canvas and locks resizing
//!
//! ### Session
//! - **Editor Session**: Owns seats, numbering cursor and selection
//! - **Collaborators**: Scene, dialog and layout store interfaces
//! - **Serialization**: `{label, position}` layout documents
//!
//! ## Architecture
//!
//! ```text
//! EditorSession
//!   ├── LayoutGenerator
//!   │     ├── SeatFactory ── clamp_position
//!   │     └── AlignmentEngine ── clamp
//!   ├── ConstraintController ── clamp_position
//!   ├── SeatStore / SelectionManager / EditorCursor
//!   └── Scene, Dialog, LayoutStore (external)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use seatplan_designer::{EditorOptions, EditorSession, HeadlessScene, LogDialog, MemoryLayoutStore};
//!
//! let mut session = EditorSession::new(
//!     EditorOptions::default(),
//!     HeadlessScene::new(),
//!     LogDialog::new(true),
//!     MemoryLayoutStore::new(),
//! );
//!
//! let row = session.add_row(Some("A"), Some(8)).done().unwrap();
//! assert_eq!(row.len(), 8);
//! assert_eq!(session.cursor().current_row.as_str(), "B");
//! ```

pub mod alignment;
pub mod collaborators;
pub mod constraints;
pub mod cursor;
pub mod editor_session;
pub mod headless;
pub mod layout;
pub mod layout_store;
pub mod options;
pub mod row_id;
pub mod seat;
pub mod seat_store;
pub mod seat_table;
pub mod selection_manager;
pub mod serialization;
pub mod style;

pub use alignment::{AlignmentEngine, AlignmentPlan};
pub use collaborators::{Dialog, DialogOutcome, NotifyKind, Scene};
pub use constraints::ConstraintController;
pub use cursor::EditorCursor;
pub use editor_session::{ActionOutcome, EditorSession};
pub use headless::{HeadlessScene, LogDialog, Notification, ScriptedDialog};
pub use layout::{LayoutGenerator, DEFAULT_ROW_SEATS};
pub use layout_store::{FileLayoutStore, LayoutStore, MemoryLayoutStore};
pub use options::{EditorOptions, ImportOptions, LayoutMetrics, SectionStyle, DEFAULT_LAYOUT_KEY};
pub use row_id::RowId;
pub use seat::{Seat, SeatFactory, SeatId};
pub use seat_store::SeatStore;
pub use seat_table::{load_seat_table, parse_seat_table, resolve_sections, RowSpec, SeatTable, Section};
pub use selection_manager::SelectionManager;
pub use serialization::{LayoutDocument, LayoutMetadata, RecordPosition, SeatRecord};
pub use style::{Color, ColorParseError, SeatStyle, SEAT_GREEN};

// Re-export the geometry every caller needs
pub use seatplan_core::{Anchor, Axis, CanvasBounds, Footprint, OverflowPolicy, Placement, Point};
