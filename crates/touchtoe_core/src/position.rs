//! Named cells of the 3x3 grid.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the tic-tac-toe grid.
///
/// Indices run 0-8 in row-major order: `row = index / 3`, `col = index % 3`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
    strum::IntoStaticStr,
)]
pub enum Position {
    /// Top-left (index 0)
    #[strum(to_string = "Top-left")]
    TopLeft,
    /// Top-center (index 1)
    #[strum(to_string = "Top-center")]
    TopCenter,
    /// Top-right (index 2)
    #[strum(to_string = "Top-right")]
    TopRight,
    /// Middle-left (index 3)
    #[strum(to_string = "Middle-left")]
    MiddleLeft,
    /// Center (index 4)
    #[strum(to_string = "Center")]
    Center,
    /// Middle-right (index 5)
    #[strum(to_string = "Middle-right")]
    MiddleRight,
    /// Bottom-left (index 6)
    #[strum(to_string = "Bottom-left")]
    BottomLeft,
    /// Bottom-center (index 7)
    #[strum(to_string = "Bottom-center")]
    BottomCenter,
    /// Bottom-right (index 8)
    #[strum(to_string = "Bottom-right")]
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for logs and text output.
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Converts the position to its cell index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Grid row (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Grid column (0-2).
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Creates a position from a cell index, `None` when out of range.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from grid coordinates, `None` when out of range.
    #[instrument]
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trips_through_row_col() {
        for pos in Position::iter() {
            assert_eq!(Position::from_row_col(pos.row(), pos.col()), Some(pos));
            assert_eq!(Position::from_index(pos.index()), Some(pos));
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::from_row_col(3, 0), None);
        assert_eq!(Position::from_row_col(0, 3), None);
    }

    #[test]
    fn test_label_matches_display() {
        assert_eq!(Position::MiddleRight.label(), "Middle-right");
        for pos in Position::iter() {
            assert_eq!(pos.to_string(), pos.label());
        }
    }

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL[2], Position::TopRight);
        assert_eq!(Position::ALL[4].row(), 1);
        assert_eq!(Position::ALL[7].col(), 1);
    }
}
