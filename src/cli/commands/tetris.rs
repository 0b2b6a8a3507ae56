//! Tetris command - Suggest the best placement for a piece

use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::print_kv,
    tetris::{PieceKind, TetrisAi, TetrisBoard, features},
};

#[derive(Parser, Debug)]
#[command(about = "Suggest the best Tetris placement for a piece")]
pub struct TetrisArgs {
    /// Piece to place (L, Li, S, Si, M, O, I, or T)
    pub piece: String,

    /// File with the current board: 20 rows of 10 characters,
    /// '.' for empty. Defaults to an empty board.
    #[arg(long, short = 'b')]
    pub board: Option<PathBuf>,

    /// Land the T piece rigidly instead of dissolving it
    #[arg(long, default_value_t = false)]
    pub rigid: bool,

    /// Print every candidate placement with its score
    #[arg(long, default_value_t = false)]
    pub all: bool,
}

pub fn execute(args: TetrisArgs) -> Result<()> {
    let piece: PieceKind = args.piece.parse()?;

    let board = match args.board {
        Some(path) => TetrisBoard::from_rows(&fs::read_to_string(path)?)?,
        None => TetrisBoard::new(),
    };

    let ai = TetrisAi::with_magic_t(!args.rigid);

    if args.all {
        for placement in ai.all_placements(&board, piece) {
            let score = ai.evaluate(&placement.board, placement.lines_cleared);
            println!(
                "rotation {} column {}: score {score}, {} line(s)",
                placement.rotation, placement.column, placement.lines_cleared
            );
        }
        println!();
    }

    match ai.suggest_best_move(&board, piece) {
        None => println!("No legal placement for {piece}: game over."),
        Some(placement) => {
            let features = features::extract(&placement.board);
            println!("Best placement for {piece}:");
            print_kv("Rotation", &placement.rotation.to_string());
            print_kv("Column", &placement.column.to_string());
            print_kv("Lines cleared", &placement.lines_cleared.to_string());
            print_kv(
                "Score",
                &ai.evaluate(&placement.board, placement.lines_cleared).to_string(),
            );
            print_kv("Holes", &features.holes.to_string());
            print_kv("Max height", &features.max_height.to_string());
            println!("\nResulting board:\n{}", placement.board);
        }
    }

    Ok(())
}
