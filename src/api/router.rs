use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;

use crate::api::handlers::{compress_handler, decompress_handler, download_handler, health_handler};
use crate::application::use_cases::{DownloadFileUseCase, TransformFileUseCase};
use crate::domain::value_objects::Algorithm;

/// Application state container
pub struct AppState {
    pub transform_use_case: Arc<TransformFileUseCase>,
    pub download_use_case: Arc<DownloadFileUseCase>,
    /// Algorithms with a registered codec
    pub algorithms: Arc<Vec<Algorithm>>,
    /// Largest accepted request body, multipart framing included
    pub max_upload_bytes: usize,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let transform_state = Arc::clone(&state.transform_use_case);
    let download_state = Arc::clone(&state.download_use_case);

    Router::new()
        .route("/health", get(health_handler).with_state(state.algorithms))
        .route(
            "/compress/{category}",
            post(compress_handler).with_state(Arc::clone(&transform_state)),
        )
        .route(
            "/decompress/{category}",
            post(decompress_handler).with_state(transform_state),
        )
        .route(
            "/download/{filename}",
            get(download_handler).with_state(download_state),
        )
        .layer(
            ServiceBuilder::new()
                .layer(RequestBodyLimitLayer::new(state.max_upload_bytes))
                .layer(DefaultBodyLimit::disable()),
        )
}
