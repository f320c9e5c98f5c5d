//! Serialization and deserialization for layout documents.
//!
//! A layout document is the exported form of a seating chart:
//!
//! ```json
//! {"seats":[{"label":"A1","position":{"left":520.0,"top":150.0}}]}
//! ```
//!
//! Only labels and positions are stored. Restoring a document recreates the
//! seats exactly where they were saved, without clamping.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use seatplan_core::Point;

use crate::seat::Seat;
use crate::style::SeatStyle;

/// Layout file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Exported seating chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub seats: Vec<SeatRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<LayoutMetadata>,
}

/// One exported seat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatRecord {
    pub label: String,
    pub position: RecordPosition,
}

/// Seat position in the exported document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordPosition {
    pub left: f64,
    pub top: f64,
}

/// Document metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetadata {
    pub name: String,
    pub version: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl LayoutMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            version: FILE_FORMAT_VERSION.to_string(),
            created: now,
            modified: now,
        }
    }
}

impl From<Point> for RecordPosition {
    fn from(p: Point) -> Self {
        Self {
            left: p.x,
            top: p.y,
        }
    }
}

impl From<RecordPosition> for Point {
    fn from(p: RecordPosition) -> Self {
        Point::new(p.left, p.top)
    }
}

impl LayoutDocument {
    /// Exports seats in draw order.
    pub fn from_seats<'a>(seats: impl IntoIterator<Item = &'a Seat>) -> Self {
        Self {
            seats: seats
                .into_iter()
                .map(|seat| SeatRecord {
                    label: seat.label.clone(),
                    position: seat.position.into(),
                })
                .collect(),
            metadata: None,
        }
    }

    /// Attaches metadata, keeping the creation time of existing metadata.
    pub fn with_metadata(mut self, name: impl Into<String>) -> Self {
        let mut metadata = LayoutMetadata::new(name);
        if let Some(existing) = &self.metadata {
            metadata.created = existing.created;
        }
        self.metadata = Some(metadata);
        self
    }

    /// Recreates the seats verbatim with the given style.
    pub fn to_seats(&self, style: &SeatStyle) -> Vec<Seat> {
        self.seats
            .iter()
            .map(|record| Seat::restore(record.label.clone(), record.position.into(), style.clone()))
            .collect()
    }

    /// Whether two documents hold the same seats, ignoring metadata.
    pub fn same_seats(&self, other: &LayoutDocument) -> bool {
        self.seats == other.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize layout")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse layout JSON")
    }

    /// Save layout to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize layout")?;
        std::fs::write(path.as_ref(), json)
            .with_context(|| format!("Failed to write layout to {}", path.as_ref().display()))?;
        Ok(())
    }

    /// Load layout from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read layout from {}", path.as_ref().display()))?;
        Self::from_json(&content)
    }
}
