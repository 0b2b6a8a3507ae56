//! Classical game-playing AI algorithms
//!
//! This crate provides four independent, pure-computation algorithm
//! components:
//! - Exhaustive minimax search for Tic-Tac-Toe
//! - Tabular Q-learning for misère Nim via self-play
//! - Breadth-first shortest-path search over a person/movie graph
//! - A Tetris placement heuristic with a custom "magic T" dissolve rule
//!
//! The components do not depend on each other; each is consumed directly
//! by the CLI (or by a host application's event handlers).

pub mod cli;
pub mod degrees;
pub mod error;
pub mod nim;
pub mod tetris;
pub mod tictactoe;

pub use degrees::{Graph, MovieId, PersonId};
pub use error::{Error, Result};
pub use nim::{NimAgent, NimMove, NimState, QTable};
pub use tetris::{Placement, TetrisAi, TetrisBoard};
pub use tictactoe::{BoardState, Cell, Player};
