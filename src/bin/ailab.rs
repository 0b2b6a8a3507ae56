//! Game-AI toolkit CLI
//!
//! This CLI provides a unified interface for:
//! - Training a Nim Q-learning agent by self-play
//! - Solving Tic-Tac-Toe positions with exhaustive minimax
//! - Finding degrees of separation in a person/movie graph
//! - Suggesting Tetris placements with the magic T dissolve rule

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ailab")]
#[command(version, about = "Classical game-AI toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a Nim agent by self-play Q-learning
    Train(ailab::cli::commands::train::TrainArgs),

    /// Compute the optimal Tic-Tac-Toe move for a position
    Solve(ailab::cli::commands::solve::SolveArgs),

    /// Find the degrees of separation between two actors
    Degrees(ailab::cli::commands::degrees::DegreesArgs),

    /// Suggest the best Tetris placement for a piece
    Tetris(ailab::cli::commands::tetris::TetrisArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => ailab::cli::commands::train::execute(args),
        Commands::Solve(args) => ailab::cli::commands::solve::execute(args),
        Commands::Degrees(args) => ailab::cli::commands::degrees::execute(args),
        Commands::Tetris(args) => ailab::cli::commands::tetris::execute(args),
    }
}
