use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::application::dto::{TransformOutcome, TransformUpload};
use crate::application::errors::TransformError;
use crate::application::ports::StorageSink;
use crate::application::transform_service::TransformService;
use crate::domain::entities::{TransformJob, TransformRequest};
use crate::domain::value_objects::StorageArea;

/// Use case: validate, transform, name and persist one uploaded file
pub struct TransformFileUseCase {
    service: TransformService,
    sink: Arc<dyn StorageSink>,
}

impl TransformFileUseCase {
    pub fn new(service: TransformService, sink: Arc<dyn StorageSink>) -> Self {
        Self { service, sink }
    }

    /// Execute the transform workflow
    pub async fn execute(&self, upload: TransformUpload) -> Result<TransformOutcome, TransformError> {
        let mut job = TransformJob::new();

        // 1. Resolve algorithm and validate the filename
        let request = match self.build_request(upload) {
            Ok(request) => request,
            Err(err) => {
                job.mark_rejected()?;
                warn!(job_id = %job.id(), error = %err, "Transform request rejected");
                return Err(err);
            }
        };
        job.mark_validated()?;

        // 2. Keep the raw upload
        self.sink
            .write(StorageArea::Uploads, request.filename(), request.input())
            .await
            .map_err(|e| {
                warn!(job_id = %job.id(), name = %request.filename(), error = %e, "Failed to store upload");
                e
            })?;

        // 3. Run the codec off the async runtime
        let service = self.service.clone();
        let blocking_request = request.clone();
        let joined = tokio::task::spawn_blocking(move || {
            service.transform(&blocking_request).map(|result| {
                let digest = hex::encode(Sha256::digest(result.output()));
                (result, digest)
            })
        })
        .await
        .map_err(|e| TransformError::Task(e.to_string()))?;

        let (result, output_sha256) = match joined {
            Ok(done) => done,
            Err(err) => {
                job.mark_failed()?;
                warn!(
                    job_id = %job.id(),
                    algorithm = %request.algorithm(),
                    direction = %request.direction(),
                    error = %err,
                    "Transform failed"
                );
                return Err(err);
            }
        };
        job.mark_transformed()?;

        // 4. Name and persist the output
        let output_name = request.output_name();
        job.mark_named()?;

        self.sink
            .write(request.direction().output_area(), &output_name, result.output())
            .await
            .map_err(|e| {
                warn!(job_id = %job.id(), name = %output_name, error = %e, "Failed to store output");
                e
            })?;
        job.mark_persisted()?;

        let outcome = TransformOutcome::new(
            job.id().to_string(),
            &request,
            &result,
            output_name,
            output_sha256,
        );

        info!(
            job_id = %outcome.job_id,
            task = %outcome.task,
            algorithm = %outcome.algorithm,
            input = %outcome.input_name,
            output = %outcome.output_name,
            input_bytes = outcome.input_size_bytes,
            output_bytes = outcome.output_size_bytes,
            elapsed_seconds = outcome.elapsed_seconds,
            "Transform completed"
        );

        Ok(outcome)
    }

    fn build_request(&self, upload: TransformUpload) -> Result<TransformRequest, TransformError> {
        let algorithm = self.service.registry().resolve(&upload.algorithm)?;
        let request = TransformRequest::new(
            upload.data,
            &upload.filename,
            upload.category,
            algorithm,
            upload.direction,
        )?;
        Ok(request)
    }
}
