//! Editor cursor: where the next seat or row goes and what it is called.

use crate::row_id::RowId;

/// Numbering and placement state threaded through the layout generator.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorCursor {
    pub current_row: RowId,
    pub current_seat_number: u32,
    /// Vertical position of the next generated row
    pub current_y: f64,
    start_y: f64,
}

impl EditorCursor {
    pub fn new(start_y: f64) -> Self {
        Self {
            current_row: RowId::default(),
            current_seat_number: 1,
            current_y: start_y,
            start_y,
        }
    }

    pub fn start_y(&self) -> f64 {
        self.start_y
    }

    /// Label for the next single seat, `{row}{number}`.
    pub fn next_label(&self) -> String {
        format!("{}{}", self.current_row, self.current_seat_number)
    }

    /// Back to row `A`, seat 1, at the start height.
    pub fn reset(&mut self) {
        *self = Self::new(self.start_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset() {
        let mut cursor = EditorCursor::new(150.0);
        cursor.current_row = RowId::new("D").unwrap();
        cursor.current_seat_number = 9;
        cursor.current_y = 285.0;
        assert_eq!(cursor.next_label(), "D9");

        cursor.reset();
        assert_eq!(cursor, EditorCursor::new(150.0));
        assert_eq!(cursor.next_label(), "A1");
    }
}
