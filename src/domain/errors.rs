use thiserror::Error;

use super::value_objects::{JobStatus, MediaCategory};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid state transition from {from:?} to {to:?}")]
    InvalidStateTransition { from: JobStatus, to: JobStatus },

    #[error("File '{filename}' is not an allowed {category} file")]
    UnsupportedExtension {
        filename: String,
        category: MediaCategory,
    },

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid media category: {0}")]
    InvalidCategory(String),

    #[error("Invalid direction: {0}")]
    InvalidDirection(String),
}
