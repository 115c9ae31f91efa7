use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::api::router::AppState;
use crate::application::{
    codec_registry::CodecRegistry,
    ports::StorageSink,
    transform_service::TransformService,
    use_cases::{DownloadFileUseCase, TransformFileUseCase},
};
use crate::config::Config;
use crate::infrastructure::{codecs::default_registry, storage::LocalFilesystemStore};

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    registry: Option<Arc<CodecRegistry>>,
    sink: Option<Arc<dyn StorageSink>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            registry: None,
            sink: None,
        }
    }

    /// Use a custom codec registry instead of the built-in codecs
    pub fn with_registry(mut self, registry: CodecRegistry) -> Self {
        self.registry = Some(Arc::new(registry));
        self
    }

    /// Create the storage area directories and the filesystem sink
    pub async fn with_storage(mut self) -> Result<Self> {
        let store = LocalFilesystemStore::with_durability(
            self.config.upload_folder.clone(),
            self.config.compressed_folder.clone(),
            self.config.decompressed_folder.clone(),
            self.config.durable_writes,
        );
        store
            .init()
            .await
            .context("Failed to create storage directories")?;
        info!(
            uploads = %self.config.upload_folder.display(),
            compressed = %self.config.compressed_folder.display(),
            decompressed = %self.config.decompressed_folder.display(),
            durable_writes = self.config.durable_writes,
            "Storage initialized"
        );

        self.sink = Some(Arc::new(store));
        Ok(self)
    }

    /// Build the application state
    pub fn build(self) -> Result<AppState> {
        let sink = self.sink.context("Storage not initialized")?;
        let registry = self
            .registry
            .unwrap_or_else(|| Arc::new(default_registry()));
        let algorithms = registry.algorithms();
        info!(algorithms = ?algorithms, "Codec registry ready");

        let service = TransformService::new(registry);

        Ok(AppState {
            transform_use_case: Arc::new(TransformFileUseCase::new(service, Arc::clone(&sink))),
            download_use_case: Arc::new(DownloadFileUseCase::new(sink)),
            algorithms: Arc::new(algorithms),
            max_upload_bytes: self.config.max_upload_usize(),
        })
    }
}
