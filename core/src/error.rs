use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, BoardError>;

/// Anything that keeps a fill cycle from producing a full board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Service responded with status {0}")]
    Status(u16),
    #[error("Unexpected response body: {0}")]
    Decode(String),
    #[error("Service returned {actual} entries, board needs {expected}")]
    Incomplete { expected: usize, actual: usize },
}
