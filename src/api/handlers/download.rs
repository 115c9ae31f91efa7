use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::use_cases::DownloadFileUseCase;

/// GET /download/{filename}
/// Send a stored file as an attachment
pub async fn download_handler(
    State(use_case): State<Arc<DownloadFileUseCase>>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let file = use_case.execute(&filename).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_LENGTH, file.data.len().to_string())
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file.name),
        )
        .header("X-Storage-Area", file.area.to_string())
        .body(Body::from(file.data))
        .map_err(|e| ApiError::internal_error(format!("Failed to build response: {}", e)))?;

    Ok(response)
}
