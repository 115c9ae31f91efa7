use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::domain::value_objects::StorageArea;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage name: {0}")]
    InvalidName(String),
}

/// Port for persisting named files into storage areas.
///
/// Writes replace any existing file of the same name in that area.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StorageSink: Send + Sync {
    /// Write the whole buffer under `name`
    async fn write(&self, area: StorageArea, name: &str, data: &[u8]) -> Result<(), StorageError>;

    /// Read a stored file back into memory
    async fn read(&self, area: StorageArea, name: &str) -> Result<Vec<u8>, StorageError>;

    /// Check if a file exists
    async fn exists(&self, area: StorageArea, name: &str) -> Result<bool, StorageError>;
}
