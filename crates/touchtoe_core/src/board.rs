//! Board model: cells, marks and terminal-state detection.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::position::Position;

/// One of the two player symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Cross (always moves first).
    Cross,
    /// Nought.
    Nought,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Cross => Mark::Nought,
            Mark::Nought => Mark::Cross,
        }
    }
}

/// Occupancy of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Occupied by Cross.
    Cross,
    /// Occupied by Nought.
    Nought,
}

impl Cell {
    /// Returns the mark occupying the cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Cross => Some(Mark::Cross),
            Cell::Nought => Some(Mark::Nought),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Cross => Cell::Cross,
            Mark::Nought => Cell::Nought,
        }
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and moves remain.
    InProgress,
    /// The mark completed a line.
    Won(Mark),
    /// All nine cells are filled without a complete line.
    Draw,
}

impl Outcome {
    /// Returns true once the round is decided.
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Errors raised by board mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The target cell is already occupied.
    #[display("Illegal move: {} is already occupied", position)]
    IllegalMove {
        /// The occupied cell.
        position: Position,
    },
}

/// Lines checked for three-in-a-row: rows, then columns, then diagonals.
const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// 3x3 board plus the number of accepted moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
    /// Moves accepted through [`Board::set`] since the last clear.
    moves: u8,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from row-major cells, counting occupied cells as moves.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        let moves = cells.iter().filter(|c| **c != Cell::Empty).count() as u8;
        Self { cells, moves }
    }

    /// Returns the cell at `pos`.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Returns true when nobody has played at `pos`.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of moves accepted since the last clear.
    pub fn move_count(&self) -> u8 {
        self.moves
    }

    /// Places `mark` at `pos` and bumps the move counter.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IllegalMove`] if the cell is occupied; the board
    /// is left untouched.
    #[instrument(skip(self), fields(moves = self.moves))]
    pub fn set(&mut self, pos: Position, mark: Mark) -> Result<(), BoardError> {
        if !self.is_empty(pos) {
            return Err(BoardError::IllegalMove { position: pos });
        }
        self.cells[pos.index()] = mark.into();
        self.moves += 1;
        debug!(moves = self.moves, "Mark placed");
        Ok(())
    }

    /// Resets every cell to empty and the move counter to zero.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
        self.moves = 0;
    }

    /// Overwrites a cell without touching the move counter.
    ///
    /// Used by the search engine for speculative place/undo pairs.
    pub(crate) fn put(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Returns the mark of the first complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|[a, b, c]| {
            let cell = self.cells[*a];
            if cell == self.cells[*b] && cell == self.cells[*c] {
                cell.mark()
            } else {
                None
            }
        })
    }

    /// Evaluates the board.
    ///
    /// A complete line wins; otherwise nine accepted moves make a draw.
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(mark) => Outcome::Won(mark),
            None if self.moves >= 9 => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// Formats the board as three text rows, empty cells numbered 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Cross => "X".to_string(),
                    Cell::Nought => "O".to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(board: &mut Board, moves: &[(Position, Mark)]) {
        for (pos, mark) in moves {
            board.set(*pos, *mark).unwrap();
        }
    }

    #[test]
    fn test_empty_board_in_progress() {
        let board = Board::new();
        assert_eq!(board.outcome(), Outcome::InProgress);
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        play(
            &mut board,
            &[
                (Position::TopLeft, Mark::Cross),
                (Position::MiddleLeft, Mark::Nought),
                (Position::TopCenter, Mark::Cross),
                (Position::Center, Mark::Nought),
                (Position::TopRight, Mark::Cross),
            ],
        );
        assert_eq!(board.outcome(), Outcome::Won(Mark::Cross));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::from_cells([
            Cell::Cross, Cell::Cross, Cell::Nought,
            Cell::Empty, Cell::Nought, Cell::Empty,
            Cell::Nought, Cell::Cross, Cell::Empty,
        ]);
        assert_eq!(board.winner(), Some(Mark::Nought));
    }

    #[test]
    fn test_draw_needs_nine_moves() {
        // X O X / O X X / O X O
        let board = Board::from_cells([
            Cell::Cross, Cell::Nought, Cell::Cross,
            Cell::Nought, Cell::Cross, Cell::Cross,
            Cell::Nought, Cell::Cross, Cell::Nought,
        ]);
        assert_eq!(board.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_win_on_last_move_is_not_draw() {
        // X X X / O O X / X O O
        let board = Board::from_cells([
            Cell::Cross, Cell::Cross, Cell::Cross,
            Cell::Nought, Cell::Nought, Cell::Cross,
            Cell::Cross, Cell::Nought, Cell::Nought,
        ]);
        assert_eq!(board.outcome(), Outcome::Won(Mark::Cross));
    }

    #[test]
    fn test_set_occupied_is_rejected() {
        let mut board = Board::new();
        board.set(Position::Center, Mark::Cross).unwrap();
        let err = board.set(Position::Center, Mark::Nought).unwrap_err();
        assert_eq!(err, BoardError::IllegalMove { position: Position::Center });
        assert_eq!(board.get(Position::Center), Cell::Cross);
        assert_eq!(board.move_count(), 1);
    }

    #[test]
    fn test_clear_resets_cells_and_counter() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Mark::Cross).unwrap();
        board.set(Position::BottomRight, Mark::Nought).unwrap();
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Mark::Cross).unwrap();
        board.set(Position::Center, Mark::Nought).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
