use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::errors::{DownloadError, TransformError};

/// API error response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));

        (self.status, body).into_response()
    }
}

// Convert use case errors to API errors

impl From<TransformError> for ApiError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::Validation(e) => ApiError::bad_request(e.to_string()),
            TransformError::UnknownAlgorithm(name) => {
                ApiError::bad_request(format!("Unknown algorithm: {}", name))
            }
            e @ TransformError::CorruptStream { .. } => ApiError::unprocessable(e.to_string()),
            TransformError::Codec(e) => ApiError::internal_error(format!("Codec error: {}", e)),
            TransformError::Storage(e) => ApiError::internal_error(format!("Storage error: {}", e)),
            TransformError::Task(msg) => {
                ApiError::internal_error(format!("Transform task failed: {}", msg))
            }
        }
    }
}

impl From<DownloadError> for ApiError {
    fn from(err: DownloadError) -> Self {
        match err {
            DownloadError::NotFound(name) => ApiError::not_found(format!("File not found: {}", name)),
            DownloadError::Storage(e) => ApiError::internal_error(format!("Storage error: {}", e)),
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        ApiError::new(err.status(), err.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::StorageError;
    use crate::domain::errors::DomainError;
    use crate::domain::value_objects::{Algorithm, MediaCategory};

    #[test]
    fn test_transform_error_statuses() {
        let validation: ApiError = TransformError::Validation(DomainError::UnsupportedExtension {
            filename: "a.txt".to_string(),
            category: MediaCategory::Image,
        })
        .into();
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
        assert!(validation.message().contains("a.txt"));

        let unknown: ApiError = TransformError::UnknownAlgorithm("zip".to_string()).into();
        assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);

        let corrupt: ApiError = TransformError::CorruptStream {
            algorithm: Algorithm::Lzma,
            message: "format error".to_string(),
        }
        .into();
        assert_eq!(corrupt.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(corrupt.message(), "Corrupt lzma stream: format error");

        let storage: ApiError =
            TransformError::Storage(StorageError::InvalidName("..".to_string())).into();
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_download_error_statuses() {
        let missing: ApiError = DownloadError::NotFound("x.bin".to_string()).into();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let io: ApiError = DownloadError::Storage(StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        )))
        .into();
        assert_eq!(io.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
