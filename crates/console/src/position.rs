// Chunk: docs/chunks/coordinate_translation - Row/column to offset translation

//! Translation between 2-D (row, column) coordinates and linear
//! character offsets.
//!
//! The engine only speaks linear offsets; this module is the caller's
//! side of that contract. Rows clamp to the last line, columns to the
//! line length, and offsets to the text length, so any coordinate a
//! front end produces maps to a valid cursor position. Newline is the
//! only line terminator; all offsets and columns count characters, not
//! bytes.

/// A 0-based (row, column) coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Returns the `(start, len)` of the requested row in character
/// offsets, clamped to the last line. The newline is not part of the
/// line.
fn line_bounds(text: &str, row: usize) -> (usize, usize) {
    let mut start = 0;
    let mut len = 0;
    let mut current_row = 0;
    for ch in text.chars() {
        if ch == '\n' {
            if current_row == row {
                return (start, len);
            }
            current_row += 1;
            start += len + 1;
            len = 0;
        } else {
            len += 1;
        }
    }
    (start, len)
}

/// Converts a (row, column) coordinate to a linear character offset.
///
/// Rows past the last line land on the last line; columns past the end
/// of the line land at the end of the line.
pub fn offset_at(text: &str, position: Position) -> usize {
    let (start, len) = line_bounds(text, position.row);
    start + position.col.min(len)
}

/// Converts a linear character offset to a (row, column) coordinate.
///
/// Offsets past end-of-text land at the coordinate of end-of-text.
pub fn position_at(text: &str, offset: usize) -> Position {
    let mut row = 0;
    let mut col = 0;
    for ch in text.chars().take(offset) {
        if ch == '\n' {
            row += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    Position { row, col }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "first\nsecond line\n\nlast";

    #[test]
    fn test_offset_at_line_starts() {
        assert_eq!(offset_at(TEXT, Position::new(0, 0)), 0);
        assert_eq!(offset_at(TEXT, Position::new(1, 0)), 6);
        assert_eq!(offset_at(TEXT, Position::new(2, 0)), 18);
        assert_eq!(offset_at(TEXT, Position::new(3, 0)), 19);
    }

    #[test]
    fn test_offset_at_within_line() {
        assert_eq!(offset_at(TEXT, Position::new(1, 7)), 13);
        assert_eq!(offset_at(TEXT, Position::new(3, 4)), 23);
    }

    #[test]
    fn test_offset_at_clamps_column_to_line_length() {
        // "first" has 5 characters; column 99 lands just before the
        // newline, not inside the next line.
        assert_eq!(offset_at(TEXT, Position::new(0, 99)), 5);
        assert_eq!(offset_at(TEXT, Position::new(2, 99)), 18);
    }

    #[test]
    fn test_offset_at_clamps_row_to_last_line() {
        assert_eq!(offset_at(TEXT, Position::new(99, 0)), 19);
        assert_eq!(offset_at(TEXT, Position::new(99, 99)), 23);
    }

    #[test]
    fn test_offset_at_empty_text() {
        assert_eq!(offset_at("", Position::new(0, 0)), 0);
        assert_eq!(offset_at("", Position::new(5, 5)), 0);
    }

    #[test]
    fn test_position_at_walks_rows_and_columns() {
        assert_eq!(position_at(TEXT, 0), Position::new(0, 0));
        assert_eq!(position_at(TEXT, 5), Position::new(0, 5));
        assert_eq!(position_at(TEXT, 6), Position::new(1, 0));
        assert_eq!(position_at(TEXT, 13), Position::new(1, 7));
        assert_eq!(position_at(TEXT, 23), Position::new(3, 4));
    }

    #[test]
    fn test_position_at_clamps_past_end() {
        assert_eq!(position_at(TEXT, 1000), Position::new(3, 4));
        assert_eq!(position_at("", 10), Position::new(0, 0));
    }

    #[test]
    fn test_round_trip_is_clamping_identity() {
        for row in 0..6 {
            for col in 0..25 {
                let requested = Position::new(row, col);
                let offset = offset_at(TEXT, requested);
                let clamped = position_at(TEXT, offset);
                assert_eq!(
                    offset_at(TEXT, clamped),
                    offset,
                    "round trip drifted for {requested:?}"
                );
            }
        }
    }

    #[test]
    fn test_trailing_newline_has_an_empty_last_line() {
        let text = "one\n";
        assert_eq!(offset_at(text, Position::new(1, 0)), 4);
        assert_eq!(offset_at(text, Position::new(1, 9)), 4);
        assert_eq!(position_at(text, 4), Position::new(1, 0));
    }
}
