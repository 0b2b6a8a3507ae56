//! Error types for the ailab crate

use thiserror::Error;

/// Main error type for the ailab crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("board string must have exactly {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid pile index {pile} (board has {pile_count} piles)")]
    InvalidPile { pile: usize, pile_count: usize },

    #[error("invalid take: {count} objects from pile {pile} holding {available}")]
    InvalidTake {
        pile: usize,
        count: u32,
        available: u32,
    },

    #[error("no person named '{name}' in the graph")]
    UnknownPerson { name: String },

    #[error("person id '{id}' not found in the graph")]
    UnknownPersonId { id: String },

    #[error("ambiguous name '{name}': candidate ids are {candidates:?}")]
    AmbiguousName {
        name: String,
        candidates: Vec<String>,
    },

    #[error("unknown piece kind '{input}'. Expected one of: {expected}")]
    ParsePieceKind { input: String, expected: String },

    #[error("invalid tetris board: {message}")]
    InvalidTetrisBoard { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
