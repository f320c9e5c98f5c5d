//! Row identifiers.
//!
//! Rows are named by runs of ASCII letters and advance in spreadsheet column
//! order: `A`, `B`, ..., `Z`, `AA`, `AB`, ... Case is preserved.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use seatplan_core::LayoutError;

/// Validated row identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RowId(String);

impl RowId {
    /// Parses a row name, rejecting anything that is not a non-empty run of ASCII letters.
    pub fn new(name: impl Into<String>) -> Result<Self, LayoutError> {
        let name = name.into();
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(LayoutError::InvalidRowName { name });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The row after this one.
    pub fn next(&self) -> Self {
        let mut bytes = self.0.clone().into_bytes();
        for byte in bytes.iter_mut().rev() {
            match *byte {
                b'z' => *byte = b'a',
                b'Z' => *byte = b'A',
                _ => {
                    *byte += 1;
                    return Self::from_ascii(bytes);
                }
            }
        }
        // Every letter wrapped: prepend a new leading letter in the case of the old one.
        let lead = if bytes[0].is_ascii_lowercase() { b'a' } else { b'A' };
        bytes.insert(0, lead);
        Self::from_ascii(bytes)
    }

    fn from_ascii(bytes: Vec<u8>) -> Self {
        Self(bytes.into_iter().map(char::from).collect())
    }
}

/// Rows order the way [`RowId::next`] walks them: shorter names first.
impl Ord for RowId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for RowId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for RowId {
    fn default() -> Self {
        Self("A".to_string())
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RowId {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RowId {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RowId> for String {
    fn from(row: RowId) -> Self {
        row.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next(name: &str) -> String {
        RowId::new(name).unwrap().next().to_string()
    }

    #[test]
    fn test_single_letter() {
        assert_eq!(next("A"), "B");
        assert_eq!(next("Y"), "Z");
        assert_eq!(next("c"), "d");
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(next("Z"), "AA");
        assert_eq!(next("AZ"), "BA");
        assert_eq!(next("ZZ"), "AAA");
        assert_eq!(next("z"), "aa");
        assert_eq!(next("Az"), "Ba");
    }

    #[test]
    fn test_rejects_invalid() {
        for bad in ["", "12", "Row-1", "A1", "É"] {
            assert_eq!(
                RowId::new(bad),
                Err(LayoutError::InvalidRowName {
                    name: bad.to_string()
                })
            );
        }
    }

    #[test]
    fn test_order_matches_succession() {
        let mut row = RowId::new("X").unwrap();
        for _ in 0..30 {
            let after = row.next();
            assert!(row < after, "{} should sort before {}", row, after);
            row = after;
        }
        assert!(RowId::new("Z").unwrap() < RowId::new("AA").unwrap());
    }

    #[test]
    fn test_default_is_a() {
        assert_eq!(RowId::default().as_str(), "A");
    }
}
