//! Errors raised while generating, rendering or parsing mazes

use thiserror::Error;

use crate::grid::{MAX_DIMENSION, MIN_DIMENSION};

#[derive(Debug, Error)]
pub enum MazeError {
    /// Width or height outside of the supported range
    #[error(
        "invalid maze dimensions {width}x{height}: each side must be between {} and {}",
        MIN_DIMENSION,
        MAX_DIMENSION
    )]
    InvalidDimension { width: usize, height: usize },

    /// A character that is neither a corner nor a wall part of the grid
    #[error("unknown grid part `{glyph}` at line {line}, column {column}")]
    UnknownGridPart {
        glyph: char,
        line: usize,
        column: usize,
    },

    /// Maze text whose layout cannot describe a rectangular grid
    #[error("malformed maze text: {0}")]
    MalformedText(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
