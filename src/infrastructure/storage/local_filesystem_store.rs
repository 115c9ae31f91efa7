use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::application::ports::{StorageError, StorageSink};
use crate::domain::value_objects::StorageArea;
use crate::infrastructure::storage::path_builder::TEMP_DIR;
use crate::infrastructure::storage::PathBuilder;

/// Local filesystem store with one directory per storage area
pub struct LocalFilesystemStore {
    path_builder: PathBuilder,
    durable_writes: bool,
}

impl LocalFilesystemStore {
    pub fn new(uploads_root: PathBuf, compressed_root: PathBuf, decompressed_root: PathBuf) -> Self {
        Self::with_durability(uploads_root, compressed_root, decompressed_root, true)
    }

    pub fn with_durability(
        uploads_root: PathBuf,
        compressed_root: PathBuf,
        decompressed_root: PathBuf,
        durable_writes: bool,
    ) -> Self {
        Self {
            path_builder: PathBuilder::new(uploads_root, compressed_root, decompressed_root),
            durable_writes,
        }
    }

    /// Store rooted at a single directory with the conventional
    /// `uploads/`, `compressed/` and `decompressed/` subdirectories
    pub fn under(base: &Path, durable_writes: bool) -> Self {
        Self::with_durability(
            base.join("uploads"),
            base.join("compressed"),
            base.join("decompressed"),
            durable_writes,
        )
    }

    pub fn root(&self, area: StorageArea) -> &Path {
        self.path_builder.root(area)
    }

    /// Initialize storage directories
    pub async fn init(&self) -> Result<(), StorageError> {
        for area in StorageArea::ALL {
            let root = self.path_builder.root(area);
            fs::create_dir_all(root.join(TEMP_DIR)).await?;
            debug!(area = %area, root = ?root, "Storage area ready");
        }
        Ok(())
    }

    async fn write_temp(&self, temp_path: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut file = File::create(temp_path).await?;
        file.write_all(data).await?;
        file.flush().await?;
        if self.durable_writes {
            file.sync_all().await?;
        }
        Ok(())
    }

    async fn sync_parent(&self, path: &Path) {
        let Some(parent) = path.parent() else {
            return;
        };
        match File::open(parent).await {
            Ok(parent_file) => {
                if let Err(e) = parent_file.sync_all().await {
                    warn!("Failed to sync parent directory after rename: {}", e);
                }
            }
            Err(e) => warn!("Failed to open parent directory for sync: {}", e),
        }
    }
}

fn not_found_or_io(name: &str, e: std::io::Error) -> StorageError {
    if e.kind() == std::io::ErrorKind::NotFound {
        StorageError::NotFound(name.to_string())
    } else {
        StorageError::Io(e)
    }
}

#[async_trait]
impl StorageSink for LocalFilesystemStore {
    async fn write(&self, area: StorageArea, name: &str, data: &[u8]) -> Result<(), StorageError> {
        let final_path = self.path_builder.final_path(area, name)?;
        let temp_path = self.path_builder.temp_path(area, Uuid::new_v4());

        // 1. Write the full buffer to a temp file
        debug!("Writing {} bytes to temp file: {:?}", data.len(), temp_path);
        if let Err(e) = self.write_temp(&temp_path, data).await {
            warn!("Failed to write temp file {:?}: {}", temp_path, e);
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::Io(e));
        }

        // 2. Atomic rename over any previous file of the same name
        debug!("Moving file to final location: {:?}", final_path);
        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::Io(e));
        }

        if self.durable_writes {
            self.sync_parent(&final_path).await;
        }

        Ok(())
    }

    async fn read(&self, area: StorageArea, name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.path_builder.final_path(area, name)?;
        fs::read(&path).await.map_err(|e| not_found_or_io(name, e))
    }

    async fn exists(&self, area: StorageArea, name: &str) -> Result<bool, StorageError> {
        let path = self.path_builder.final_path(area, name)?;
        match fs::metadata(&path).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn store(dir: &TempDir, durable: bool) -> LocalFilesystemStore {
        let store = LocalFilesystemStore::under(dir.path(), durable);
        store.init().await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_store_init_creates_directories() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir, true).await;

        for area in StorageArea::ALL {
            assert!(store.root(area).join(TEMP_DIR).is_dir());
        }
        assert!(dir.path().join("uploads").is_dir());
        assert!(dir.path().join("compressed").is_dir());
        assert!(dir.path().join("decompressed").is_dir());
    }

    #[tokio::test]
    async fn test_write_and_read_file() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir, true).await;

        store
            .write(StorageArea::Compressed, "compressed_a.wav.bin", b"Hello, World!")
            .await
            .unwrap();

        let data = store
            .read(StorageArea::Compressed, "compressed_a.wav.bin")
            .await
            .unwrap();
        assert_eq!(data, b"Hello, World!");
        assert!(dir.path().join("compressed/compressed_a.wav.bin").is_file());
    }

    #[tokio::test]
    async fn test_write_overwrites_and_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir, false).await;

        store.write(StorageArea::Uploads, "a.mp3", b"first").await.unwrap();
        store.write(StorageArea::Uploads, "a.mp3", b"second").await.unwrap();

        assert_eq!(store.read(StorageArea::Uploads, "a.mp3").await.unwrap(), b"second");
        let leftovers = std::fs::read_dir(store.root(StorageArea::Uploads).join(TEMP_DIR))
            .unwrap()
            .count();
        assert_eq!(leftovers, 0);
    }

    #[tokio::test]
    async fn test_exists_is_per_area() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir, true).await;

        store.write(StorageArea::Uploads, "a.png", b"x").await.unwrap();

        assert!(store.exists(StorageArea::Uploads, "a.png").await.unwrap());
        assert!(!store.exists(StorageArea::Compressed, "a.png").await.unwrap());
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir, true).await;

        let err = store.read(StorageArea::Decompressed, "nope.wav").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(ref n) if n == "nope.wav"));
    }

    #[tokio::test]
    async fn test_rejects_unsafe_names() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir, true).await;

        let err = store.write(StorageArea::Uploads, "../escape.mp3", b"x").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidName(_)));
        assert!(!dir.path().join("escape.mp3").exists());
    }
}
