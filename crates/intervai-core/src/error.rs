//! Error types for session aggregation and persistence.
//!
//! Analysis itself never fails; these cover building sessions and talking to
//! the backing key-value store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when building an interview session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A session needs at least one answered question to compute an average.
    #[error("cannot build a session without any answered questions")]
    NoAnswers,
}

/// Errors that can occur when writing to a session store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a slot on disk failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The session list could not be serialized.
    #[error("failed to serialize sessions: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The slot key cannot be used as a storage name.
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
