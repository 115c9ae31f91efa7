use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{TransformRequest, TransformResult};
use crate::domain::value_objects::{Algorithm, Direction, MediaCategory, StorageArea};

/// DTO for a transform submission, as received from a caller
#[derive(Debug, Clone)]
pub struct TransformUpload {
    /// Filename as the client sent it, not yet sanitized
    pub filename: String,
    pub category: MediaCategory,
    pub direction: Direction,
    /// Algorithm name as the client sent it
    pub algorithm: String,
    pub data: Bytes,
}

/// DTO for a finished transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformOutcome {
    pub job_id: String,
    pub task: String,
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub category: MediaCategory,
    pub input_name: String,
    pub output_name: String,
    pub input_size_bytes: u64,
    pub output_size_bytes: u64,
    pub output_size_kib: f64,
    pub elapsed_seconds: f64,
    /// Output size over input size; absent for empty input
    pub compression_ratio: Option<f64>,
    pub output_sha256: String,
    pub download_url: String,
}

impl TransformOutcome {
    pub fn new(
        job_id: String,
        request: &TransformRequest,
        result: &TransformResult,
        output_name: String,
        output_sha256: String,
    ) -> Self {
        let input_size_bytes = request.input_len() as u64;
        let output_size_bytes = result.output_len() as u64;
        let compression_ratio = if input_size_bytes == 0 {
            None
        } else {
            Some(output_size_bytes as f64 / input_size_bytes as f64)
        };

        Self {
            job_id,
            task: request.task_label(),
            algorithm: request.algorithm(),
            direction: request.direction(),
            category: request.category(),
            input_name: request.filename().to_string(),
            download_url: format!("/download/{}", output_name),
            output_name,
            input_size_bytes,
            output_size_bytes,
            output_size_kib: result.output_kib(),
            elapsed_seconds: result.elapsed().as_secs_f64(),
            compression_ratio,
            output_sha256,
        }
    }
}

/// A stored file fetched for download
#[derive(Debug, Clone)]
pub struct DownloadedFile {
    pub name: String,
    pub area: StorageArea,
    pub data: Vec<u8>,
}
