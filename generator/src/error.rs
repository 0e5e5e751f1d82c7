//! Error types for generation, writing and reading datasets

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientGenError {
    #[error("ratio must be greater than zero")]
    InvalidRatio,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid client at data row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },
}

impl ClientGenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ClientGenError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientGenError>;
