//! Exhaustive minimax search for Tic-Tac-Toe
//!
//! X is the maximizing player (+1 on an X win), O the minimizing player
//! (-1 on an O win); draws are worth 0. The state space is small enough
//! (<= 9!) that full-depth search without pruning is fine.

use super::board::{BoardState, Player};

/// Utility of a terminal board: +1 for an X win, -1 for an O win, 0 otherwise.
pub fn evaluate(board: &BoardState) -> i32 {
    match board.winner() {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Compute the optimal move for the player to move.
///
/// Returns `None` on terminal boards. Ties between equally-valued moves are
/// broken by keeping the first strictly-better move found, scanning empty
/// cells in row-major order.
pub fn best_move(board: &BoardState) -> Option<usize> {
    if board.is_terminal() {
        return None;
    }

    match board.to_move {
        Player::X => max_value(board).1,
        Player::O => min_value(board).1,
    }
}

fn max_value(board: &BoardState) -> (i32, Option<usize>) {
    if board.is_terminal() {
        return (evaluate(board), None);
    }

    let mut value = i32::MIN;
    let mut best = None;
    for pos in board.legal_moves() {
        let next = board
            .make_move(pos)
            .expect("legal_moves only yields empty cells");
        let (child_value, _) = min_value(&next);
        if child_value > value {
            value = child_value;
            best = Some(pos);
        }
    }
    (value, best)
}

fn min_value(board: &BoardState) -> (i32, Option<usize>) {
    if board.is_terminal() {
        return (evaluate(board), None);
    }

    let mut value = i32::MAX;
    let mut best = None;
    for pos in board.legal_moves() {
        let next = board
            .make_move(pos)
            .expect("legal_moves only yields empty cells");
        let (child_value, _) = max_value(&next);
        if child_value < value {
            value = child_value;
            best = Some(pos);
        }
    }
    (value, best)
}

/// Value of the position for the maximizing player, assuming optimal play
/// from both sides.
pub fn position_value(board: &BoardState) -> i32 {
    if board.is_terminal() {
        return evaluate(board);
    }
    match board.to_move {
        Player::X => max_value(board).0,
        Player::O => min_value(board).0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_board_has_no_move() {
        let board = BoardState::from_string("XXXOO....").unwrap();
        assert!(board.is_terminal());
        assert_eq!(best_move(&board), None);
    }

    #[test]
    fn takes_immediate_win() {
        // X has two in the top row with cell 2 open, X to move
        let board = BoardState::from_string("XX..OO...").unwrap();
        assert_eq!(board.to_move, Player::X);
        assert_eq!(best_move(&board), Some(2));
    }

    #[test]
    fn blocks_opponent_win() {
        // X threatens the top row; blocking at 2 is O's only drawing move
        let board = BoardState::from_string("XX.OOX...").unwrap();
        assert_eq!(board.to_move, Player::O);
        assert_eq!(best_move(&board), Some(2));
        let blocked = board.make_move(2).unwrap();
        assert_eq!(position_value(&blocked), 0);
    }

    #[test]
    fn o_takes_immediate_win() {
        let board = BoardState::from_string("OO.XX.X..").unwrap();
        assert_eq!(board.to_move, Player::O);
        assert_eq!(best_move(&board), Some(2));
    }

    #[test]
    fn empty_board_is_a_draw_under_optimal_play() {
        assert_eq!(position_value(&BoardState::new()), 0);
    }

    #[test]
    fn fork_position_is_winning_for_x() {
        // X holds opposite corners with O in an edge; X to move can force a win
        let board = BoardState::from_string("X...O...X").unwrap();
        assert_eq!(board.to_move, Player::O);
        // O cannot save the game against a perfect X if it plays a corner
        let after = board.make_move(2).unwrap();
        assert_eq!(position_value(&after), 1);
    }
}
