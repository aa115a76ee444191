//! Error type shared by the engines and the puzzle adapters.

/// Everything that can go wrong while parsing a puzzle or running an engine.
///
/// Every variant is fatal for the puzzle being solved; there is no recovery.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("invalid tile {tile:?} at line {line}, column {column}")]
    InvalidTile {
        tile: char,
        line: usize,
        column: usize,
    },

    #[error("expected every row to be {expected} wide, but line {line} has width {found}")]
    RaggedGrid {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("input has no {0:?} marker")]
    MissingMarker(char),

    #[error("unknown node {0:?}")]
    UnknownNode(String),

    #[error("no path reaches the goal")]
    NoPath,

    #[error("no cycle found within {step_limit} steps")]
    CycleNotFound { step_limit: usize },

    #[error("step {step} lies before the cycle entry at step {mu}")]
    BeforeCycle { step: usize, mu: usize },

    #[error("input not supported: {0}")]
    UnsupportedInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
