//! CLI infrastructure for the game-AI toolkit
//!
//! This module provides the command-line interface for training the Nim
//! agent, solving Tic-Tac-Toe positions, querying degrees of separation,
//! and suggesting Tetris placements.

pub mod commands;
pub mod output;
