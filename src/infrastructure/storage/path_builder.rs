use std::path::{Path, PathBuf};

use crate::application::ports::StorageError;
use crate::domain::value_objects::StorageArea;

/// Directory under each area root holding in-flight writes
pub const TEMP_DIR: &str = ".tmp";

/// Utility for generating storage paths
#[derive(Debug, Clone)]
pub struct PathBuilder {
    uploads_root: PathBuf,
    compressed_root: PathBuf,
    decompressed_root: PathBuf,
}

impl PathBuilder {
    pub fn new(uploads_root: PathBuf, compressed_root: PathBuf, decompressed_root: PathBuf) -> Self {
        Self {
            uploads_root,
            compressed_root,
            decompressed_root,
        }
    }

    /// Get root path for storage area
    pub fn root(&self, area: StorageArea) -> &Path {
        match area {
            StorageArea::Uploads => &self.uploads_root,
            StorageArea::Compressed => &self.compressed_root,
            StorageArea::Decompressed => &self.decompressed_root,
        }
    }

    /// Generate temp write path: /root/.tmp/{uuid}
    pub fn temp_path(&self, area: StorageArea, id: uuid::Uuid) -> PathBuf {
        self.root(area).join(TEMP_DIR).join(id.to_string())
    }

    /// Generate final path: /root/{name}
    ///
    /// Only plain file names are accepted; anything that could leave the
    /// area root or collide with the temp directory is rejected.
    pub fn final_path(&self, area: StorageArea, name: &str) -> Result<PathBuf, StorageError> {
        if name.is_empty()
            || name.starts_with('.')
            || name.contains(['/', '\\', '\0'])
        {
            return Err(StorageError::InvalidName(name.to_string()));
        }
        Ok(self.root(area).join(name))
    }
}
