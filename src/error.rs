// Errors raised while loading a matrix or computing its statistics.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixError {
    /// A token that isn't a base-10 integer. `line` is 1-based.
    #[error("line {line}: cannot parse {token:?} as an integer")]
    Parse { line: usize, token: String },

    /// Zero rows, zero columns, or rows that don't line up.
    #[error("invalid matrix: {0}")]
    Invalid(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MatrixError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        MatrixError::Invalid(reason.into())
    }
}
