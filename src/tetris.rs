//! Tetris placement heuristic engine with the custom "magic T" dissolve rule

pub mod ai;
pub mod board;
pub mod features;
pub mod piece;

pub use ai::{Placement, TetrisAi};
pub use board::{BOARD_HEIGHT, BOARD_WIDTH, TetrisBoard};
pub use features::BoardFeatures;
pub use piece::PieceKind;
