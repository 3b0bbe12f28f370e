//! Errors from the shell around the game: terminal, log file, level text and
//! report export. Game rules never fail; they reject moves instead.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid level: expected {expected} rows of {expected} cells, got {got} in row {row}")]
    InvalidLevelShape { expected: usize, got: usize, row: usize },

    #[error("invalid character '{character}' at row {row}, column {column}")]
    InvalidCellCharacter { character: char, row: usize, column: usize },

    #[error("level is missing the {entity}")]
    MissingEntity { entity: &'static str },

    #[error("level places the {entity} more than once")]
    DuplicateEntity { entity: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}
