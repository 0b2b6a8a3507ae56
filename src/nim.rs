//! Misère Nim and a tabular Q-learning agent trained by self-play

pub mod agent;
pub mod game;
pub mod q_table;

pub use agent::NimAgent;
pub use game::{NimMove, NimPlayer, NimState, DEFAULT_PILES};
pub use q_table::QTable;
