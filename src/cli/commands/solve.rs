//! Solve command - Optimal Tic-Tac-Toe move for a given position

use anyhow::Result;
use clap::Parser;

use crate::tictactoe::{BoardState, minimax};

#[derive(Parser, Debug)]
#[command(about = "Compute the optimal Tic-Tac-Toe move for a position")]
pub struct SolveArgs {
    /// Board as 9 characters, row-major ('X', 'O', '.' or '-' for empty).
    /// The player to move is inferred from the piece counts.
    pub board: String,

    /// Also print the minimax value of the position
    #[arg(long, default_value_t = false)]
    pub value: bool,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = BoardState::from_string(&args.board)?;

    println!("{board}");
    println!();

    if let Some(winner) = board.winner() {
        println!("Game over: {winner} has won");
        return Ok(());
    }
    if board.is_draw() {
        println!("Game over: draw");
        return Ok(());
    }

    match minimax::best_move(&board) {
        Some(pos) => {
            println!(
                "{} should play cell {} (row {}, column {})",
                board.to_move,
                pos,
                pos / 3,
                pos % 3
            );
        }
        None => println!("No move available"),
    }

    if args.value {
        let value = minimax::position_value(&board);
        let verdict = match value {
            1 => "X wins with optimal play",
            -1 => "O wins with optimal play",
            _ => "draw with optimal play",
        };
        println!("Position value: {value} ({verdict})");
    }

    Ok(())
}
