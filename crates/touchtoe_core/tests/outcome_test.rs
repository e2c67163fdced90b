//! Outcome detection over every board reachable by legal play.

use touchtoe_core::{Board, Cell, Mark, Outcome, Position};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn has_line(board: &Board, mark: Mark) -> bool {
    let cell = Cell::from(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|i| board.cells()[*i] == cell))
}

fn expected(board: &Board) -> Outcome {
    match (has_line(board, Mark::Cross), has_line(board, Mark::Nought)) {
        (true, true) => panic!("both marks have a line:\n{}", board.display()),
        (true, false) => Outcome::Won(Mark::Cross),
        (false, true) => Outcome::Won(Mark::Nought),
        (false, false) if board.cells().iter().all(|c| *c != Cell::Empty) => Outcome::Draw,
        (false, false) => Outcome::InProgress,
    }
}

fn explore(board: &Board, turn: Mark, visited: &mut usize) {
    *visited += 1;

    let crosses = board.cells().iter().filter(|c| **c == Cell::Cross).count();
    let noughts = board.cells().iter().filter(|c| **c == Cell::Nought).count();
    assert!(crosses == noughts || crosses == noughts + 1);

    let outcome = board.outcome();
    assert_eq!(outcome, expected(board), "board:\n{}", board.display());
    if outcome.is_over() {
        return;
    }

    for pos in Position::ALL {
        if board.is_empty(pos) {
            let mut next = *board;
            next.set(pos, turn).unwrap();
            explore(&next, turn.opponent(), visited);
        }
    }
}

#[test]
fn test_outcome_matches_oracle_for_all_legal_games() {
    let mut visited = 0;
    explore(&Board::new(), Mark::Cross, &mut visited);
    // Number of nodes in the full tic-tac-toe game tree.
    assert_eq!(visited, 549_946);
}

#[test]
fn test_illegal_move_never_corrupts_board() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Mark::Cross).unwrap();
    let before = board;
    assert!(board.set(Position::TopLeft, Mark::Nought).is_err());
    assert_eq!(board, before);
}
