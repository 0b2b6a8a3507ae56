//! CLI command implementations

pub mod degrees;
pub mod solve;
pub mod tetris;
pub mod train;
