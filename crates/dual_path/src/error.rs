use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    /// Malformed grid: bad dimensions, ragged rows, missing or non-integer cells.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
