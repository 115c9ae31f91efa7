use std::sync::Arc;

use crate::application::dto::DownloadedFile;
use crate::application::errors::DownloadError;
use crate::application::ports::{StorageError, StorageSink};
use crate::domain::validation::sanitize_filename;
use crate::domain::value_objects::StorageArea;

/// Use case: fetch a stored file by name
pub struct DownloadFileUseCase {
    sink: Arc<dyn StorageSink>,
}

impl DownloadFileUseCase {
    pub fn new(sink: Arc<dyn StorageSink>) -> Self {
        Self { sink }
    }

    /// Execute download by stored name.
    ///
    /// The area is chosen from the name prefix. Names that are not already
    /// in sanitized form can never have been stored and are not found.
    pub async fn execute(&self, name: &str) -> Result<DownloadedFile, DownloadError> {
        let sanitized =
            sanitize_filename(name).map_err(|_| DownloadError::NotFound(name.to_string()))?;
        if sanitized != name {
            return Err(DownloadError::NotFound(name.to_string()));
        }

        let area = StorageArea::for_stored_name(&sanitized);
        let data = match self.sink.read(area, &sanitized).await {
            Ok(data) => data,
            Err(StorageError::NotFound(_)) => return Err(DownloadError::NotFound(sanitized)),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(name = %sanitized, area = %area, bytes = data.len(), "Serving stored file");

        Ok(DownloadedFile {
            name: sanitized,
            area,
            data,
        })
    }
}
