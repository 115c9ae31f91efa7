//! Error types returned by the transform and download use cases

use thiserror::Error;

use crate::application::ports::{CodecError, StorageError};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::Algorithm;

/// Failure of a compress/decompress job.
///
/// Every variant is terminal for the request: the inputs are fixed, so a
/// retry would fail the same way.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Validation error: {0}")]
    Validation(DomainError),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Corrupt {algorithm} stream: {message}")]
    CorruptStream { algorithm: Algorithm, message: String },

    #[error("Codec error: {0}")]
    Codec(CodecError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Transform task failed: {0}")]
    Task(String),
}

impl From<DomainError> for TransformError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnknownAlgorithm(name) => TransformError::UnknownAlgorithm(name),
            other => TransformError::Validation(other),
        }
    }
}

impl From<CodecError> for TransformError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::CorruptStream { algorithm, message } => {
                TransformError::CorruptStream { algorithm, message }
            }
            other => TransformError::Codec(other),
        }
    }
}

/// Failure to fetch a stored file
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
