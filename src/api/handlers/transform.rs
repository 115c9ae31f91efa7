use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::Json,
};
use bytes::Bytes;
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::dto::{TransformOutcome, TransformUpload};
use crate::application::use_cases::TransformFileUseCase;
use crate::domain::value_objects::{Direction, MediaCategory};

/// POST /compress/{category}
/// Multipart form with `file` and `algorithm` fields
pub async fn compress_handler(
    State(use_case): State<Arc<TransformFileUseCase>>,
    Path(category): Path<String>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<TransformOutcome>), ApiError> {
    handle(use_case, &category, Direction::Compress, multipart).await
}

/// POST /decompress/{category}
/// The uploaded file must be `.bin`; the category picks the output extension
pub async fn decompress_handler(
    State(use_case): State<Arc<TransformFileUseCase>>,
    Path(category): Path<String>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<TransformOutcome>), ApiError> {
    handle(use_case, &category, Direction::Decompress, multipart).await
}

async fn handle(
    use_case: Arc<TransformFileUseCase>,
    category: &str,
    direction: Direction,
    multipart: Multipart,
) -> Result<(StatusCode, Json<TransformOutcome>), ApiError> {
    let category = parse_media_category(category)?;
    let form = read_form(multipart).await?;

    let upload = TransformUpload {
        filename: form.filename,
        category,
        direction,
        algorithm: form.algorithm,
        data: form.data,
    };

    let outcome = use_case.execute(upload).await?;
    Ok((StatusCode::OK, Json(outcome)))
}

fn parse_media_category(raw: &str) -> Result<MediaCategory, ApiError> {
    let category: MediaCategory = raw.parse().map_err(|e: crate::domain::errors::DomainError| {
        ApiError::bad_request(e.to_string())
    })?;
    if !category.is_media() {
        return Err(ApiError::bad_request(format!(
            "Invalid category: {} is not a media category",
            raw
        )));
    }
    Ok(category)
}

struct UploadForm {
    filename: String,
    algorithm: String,
    data: Bytes,
}

async fn read_form(mut multipart: Multipart) -> Result<UploadForm, ApiError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut algorithm: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                file = Some((filename, data));
            }
            "algorithm" => algorithm = Some(field.text().await?),
            _ => {}
        }
    }

    let (filename, data) = file.ok_or_else(|| ApiError::bad_request("No file part"))?;
    if filename.is_empty() {
        return Err(ApiError::bad_request("No selected file"));
    }
    let algorithm = algorithm.ok_or_else(|| ApiError::bad_request("No algorithm selected"))?;

    Ok(UploadForm {
        filename,
        algorithm,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_media_category() {
        assert_eq!(parse_media_category("Audio").unwrap(), MediaCategory::Audio);
        assert_eq!(
            parse_media_category("compressed").unwrap_err().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            parse_media_category("text").unwrap_err().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
