//! Error types for upstream-block

use std::path::PathBuf;

/// Result type for upstream-block operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing, validating or storing a block
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Name could not be parsed")]
    NameNotFound,

    #[error("Configuration could not be parsed")]
    BlockNotFound,

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid upstream name: {name:?}")]
    InvalidName { name: String },

    #[error("Invalid token {token:?} on line {line}")]
    InvalidToken { line: usize, token: String },

    #[error("Line {line} has no tokens")]
    EmptyLine { line: usize },

    #[error("Line index {index} out of range (block has {len} lines)")]
    LineOutOfRange { index: usize, len: usize },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The underlying I/O error, if this is an I/O failure.
    pub fn io_source(&self) -> Option<&std::io::Error> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
