//! Error types for the puzzle core and its collaborators.

use thiserror::Error;

/// Errors raised while building or querying a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// A tile value was looked up that the board does not contain.
    #[error("tile {value} not found on board")]
    NotFound { value: u32 },

    #[error("board has no cells")]
    Empty,

    /// A row length differs from the number of rows.
    #[error("row {row} has {len} cells, expected {width}")]
    NotSquare { row: usize, len: usize, width: usize },

    /// A flat cell list whose length is not the square of the width.
    #[error("board has {len} cells, expected {expected}")]
    CellCount { len: usize, expected: usize },

    /// A width whose cell count does not fit the tile value range.
    #[error("board width {width} is too large")]
    TooLarge { width: usize },

    #[error("tile {value} out of range, largest allowed is {max}")]
    OutOfRange { value: u32, max: u32 },

    #[error("tile {value} appears more than once")]
    Duplicate { value: u32 },

    #[error("blank value {blank} out of range, largest allowed is {max}")]
    InvalidBlank { blank: u32, max: u32 },

    #[error("start board is {start} wide but goal board is {goal} wide")]
    WidthMismatch { start: usize, goal: usize },

    #[error("start board uses blank {start} but goal board uses blank {goal}")]
    BlankMismatch { start: u32, goal: u32 },
}

/// Errors returned by the search engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The frontier emptied without reaching the goal.
    #[error("no solution found after expanding {expanded} states")]
    Exhausted { expanded: u64 },

    #[error("search cancelled after expanding {expanded} states")]
    Cancelled { expanded: u64 },

    #[error("expansion limit of {limit} states reached")]
    LimitReached { limit: u64 },

    #[error("invalid search input: {0}")]
    Invalid(#[from] PuzzleError),
}

/// Errors raised while loading a puzzle configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("invalid board: {0}")]
    Puzzle(#[from] PuzzleError),
}

/// Result type alias for board operations.
pub type Result<T> = std::result::Result<T, PuzzleError>;
