//! Engine-vs-engine rounds without a display.

use anyhow::{Context, Result};
use touchtoe_core::{Board, Mark, Outcome, Position, best_move};
use tracing::{info, instrument};

/// Plays a full round with the engine on both sides.
///
/// With `opening` (1-9) Cross's first move is forced to that cell.
#[instrument]
pub fn play_round(opening: Option<u8>) -> Result<Board> {
    let mut board = Board::new();
    let mut turn = Mark::Cross;

    if let Some(cell) = opening {
        let pos = usize::from(cell)
            .checked_sub(1)
            .and_then(Position::from_index)
            .with_context(|| format!("Opening cell {} is not between 1 and 9", cell))?;
        board.set(pos, turn)?;
        info!(%pos, "Forced opening");
        turn = turn.opponent();
    }

    while board.outcome() == Outcome::InProgress {
        let pos = best_move(&board, board.move_count(), turn)
            .context("Engine found no empty cell on an undecided board")?;
        board.set(pos, turn)?;
        info!(mark = %turn, %pos, "Engine moved");
        turn = turn.opponent();
    }

    Ok(board)
}

/// Runs [`play_round`] and prints the final board and outcome.
pub fn run(opening: Option<u8>) -> Result<()> {
    let board = play_round(opening)?;
    println!("{}\n\n{}", board.display(), board.outcome());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use touchtoe_core::Cell;

    #[test]
    fn test_every_opening_draws() {
        for cell in 1..=9 {
            let board = play_round(Some(cell)).unwrap();
            assert_eq!(board.outcome(), Outcome::Draw, "opening {}", cell);
        }
    }

    #[test]
    fn test_unforced_round_draws() {
        assert_eq!(play_round(None).unwrap().outcome(), Outcome::Draw);
    }

    #[test]
    fn test_out_of_range_opening() {
        assert!(play_round(Some(10)).is_err());
        assert!(play_round(Some(0)).is_err());
    }

    #[test]
    fn test_opening_is_one_based() {
        let board = play_round(Some(1)).unwrap();
        assert_eq!(board.get(Position::TopLeft), Cell::Cross);
        let board = play_round(Some(9)).unwrap();
        assert_eq!(board.get(Position::BottomRight), Cell::Cross);
    }
}
