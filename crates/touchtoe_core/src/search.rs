//! Exhaustive minimax search.
//!
//! The engine searches the full game tree without pruning. Scores are from
//! the engine's point of view: `1` win, `0` draw, `-1` loss.

use tracing::{debug, instrument};

use crate::board::{Board, Cell, Mark};
use crate::position::Position;

/// Score of a won position.
pub const SCORE_WIN: i8 = 1;
/// Score of a drawn position.
pub const SCORE_DRAW: i8 = 0;
/// Score of a lost position.
pub const SCORE_LOSS: i8 = -1;

/// Number of plies after which the board is full.
const MAX_DEPTH: u8 = 9;

/// Picks the engine's move for `ai_mark`.
///
/// `move_count` is the number of moves already on the board. With no moves
/// played the search is skipped and the top-left cell is returned. Otherwise
/// every empty cell is tried and the first one with the highest score wins.
///
/// Returns `None` only when no cell is empty.
#[instrument(skip(board), fields(board = %board.display()))]
pub fn best_move(board: &Board, move_count: u8, ai_mark: Mark) -> Option<Position> {
    if move_count == 0 {
        debug!("Opening move, skipping search");
        return Some(Position::TopLeft);
    }

    let mut scratch = *board;
    let mut best: Option<(Position, i8)> = None;

    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }
        scratch.put(pos.index(), ai_mark.into());
        let score = minimax(&mut scratch, move_count + 1, false, ai_mark);
        scratch.put(pos.index(), Cell::Empty);

        debug!(position = %pos, score, "Candidate scored");
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((pos, score)),
        }
    }

    if let Some((pos, score)) = best {
        debug!(position = %pos, score, "Best move selected");
    }
    best.map(|(pos, _)| pos)
}

/// Scores `board` for the engine playing `ai_mark`.
///
/// `mover_is_ai` tells whose turn it is at this ply. A complete line is only
/// noticed here, one ply after it was drawn, so it always belongs to the
/// player who is *not* moving now. The board is restored before returning.
pub fn minimax(board: &mut Board, depth: u8, mover_is_ai: bool, ai_mark: Mark) -> i8 {
    if board.winner().is_some() {
        return if mover_is_ai { SCORE_LOSS } else { SCORE_WIN };
    }

    if depth >= MAX_DEPTH {
        return SCORE_DRAW;
    }

    let mark = if mover_is_ai { ai_mark } else { ai_mark.opponent() };
    let mut best = if mover_is_ai { SCORE_LOSS } else { SCORE_WIN };

    for index in 0..9 {
        if board.cells()[index] != Cell::Empty {
            continue;
        }
        board.put(index, mark.into());
        let score = minimax(board, depth + 1, !mover_is_ai, ai_mark);
        board.put(index, Cell::Empty);

        if (mover_is_ai && score > best) || (!mover_is_ai && score < best) {
            best = score;
        }
    }

    best
}
