//! Bulk seat tables.
//!
//! A seat table maps section names to rows, and rows to the seat numbers
//! printed on the seats, e.g.
//!
//! ```json
//! { "left": { "A": [31, 29, 27], "B": [33, 31, 29, 27] } }
//! ```
//!
//! Seat numbers are kept exactly as given. They need not be contiguous or
//! ascending, which is how aisle-split numbering is usually written.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;

use seatplan_core::{LayoutError, Placement};

use crate::options::ImportOptions;
use crate::row_id::RowId;
use crate::style::Color;

/// Raw seat table: `{section: {row: [seat numbers]}}`.
pub type SeatTable = BTreeMap<String, BTreeMap<String, Vec<u32>>>;

/// One row of seat numbers in the order they appear left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSpec {
    pub row: RowId,
    pub seat_numbers: Vec<u32>,
}

impl RowSpec {
    pub fn new(row: RowId, seat_numbers: Vec<u32>) -> Self {
        Self { row, seat_numbers }
    }

    /// Labels in left-to-right order, `{row}{number}`.
    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        self.seat_numbers
            .iter()
            .map(move |number| format!("{}{}", self.row, number))
    }
}

/// A named block of rows sharing placement and color.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    pub placement: Placement,
    pub color: Color,
    pub rows: Vec<RowSpec>,
}

impl Section {
    /// Number of seats in the widest row.
    pub fn widest_row(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.seat_numbers.len())
            .max()
            .unwrap_or(0)
    }

    pub fn seat_count(&self) -> usize {
        self.rows.iter().map(|r| r.seat_numbers.len()).sum()
    }
}

/// Parses a seat table from JSON text.
pub fn parse_seat_table(json: &str) -> Result<SeatTable> {
    serde_json::from_str(json).context("Failed to parse seat table")
}

/// Reads a seat table from a JSON file.
pub fn load_seat_table(path: impl AsRef<Path>) -> Result<SeatTable> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seat table {}", path.display()))?;
    parse_seat_table(&content)
}

/// Turns a raw table into sections using the configured overrides.
///
/// Rows are ordered front to back the way row names advance (`Z` before `AA`).
///
/// Placement comes from the section's override, else from its name, else
/// defaults to centered. Color comes from the override, else `default_fill`,
/// and always gets the configured section translucency.
pub fn resolve_sections(
    table: &SeatTable,
    options: &ImportOptions,
    default_fill: Color,
) -> Result<Vec<Section>, LayoutError> {
    table
        .iter()
        .map(|(name, rows)| {
            let overrides = options.sections.get(name);
            let placement = overrides
                .and_then(|o| o.placement)
                .or_else(|| Placement::infer(name))
                .unwrap_or_default();
            let color = overrides
                .and_then(|o| o.color)
                .unwrap_or(default_fill)
                .with_alpha(options.section_alpha);
            let mut rows = rows
                .iter()
                .map(|(row, numbers)| Ok(RowSpec::new(RowId::new(row.as_str())?, numbers.clone())))
                .collect::<Result<Vec<_>, LayoutError>>()?;
            rows.sort_by(|a, b| a.row.cmp(&b.row));

            Ok(Section {
                name: name.clone(),
                placement,
                color,
                rows,
            })
        })
        .collect()
}
