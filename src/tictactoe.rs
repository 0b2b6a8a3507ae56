//! Tic-Tac-Toe game implementation and minimax search

pub mod board;
pub mod lines;
pub mod minimax;

pub use board::{BoardState, Cell, Player};
pub use minimax::{best_move, evaluate};
