use thiserror::Error;

/// Errors surfaced by the engine and by the limits checked in front of it.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A board needs at least one row and one column.
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The final-state search ran out of generations.
    #[error("board did not stabilize after {max_steps} generations")]
    NotStabilized { max_steps: usize },
    #[error("board {width}x{height} exceeds the maximum of {max_width}x{max_height}")]
    BoardTooLarge {
        width: usize,
        height: usize,
        max_width: usize,
        max_height: usize,
    },
    #[error("{requested} generations requested, at most {max} allowed")]
    TooManyGenerations { requested: usize, max: usize },
    #[error("unexpected character {0:?} in board")]
    ParseBoard(char),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
