use std::sync::Arc;

use crate::application::codec_registry::CodecRegistry;
use crate::application::errors::TransformError;
use crate::application::executor::execute;
use crate::domain::entities::{TransformRequest, TransformResult};
use crate::domain::value_objects::Direction;

/// Synchronous core transform: registry lookup plus timed codec call.
///
/// CPU-bound and blocking; async callers should run it on a blocking
/// thread.
#[derive(Debug, Clone)]
pub struct TransformService {
    registry: Arc<CodecRegistry>,
}

impl TransformService {
    pub fn new(registry: Arc<CodecRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CodecRegistry {
        &self.registry
    }

    /// Apply the request's codec in the request's direction
    pub fn transform(&self, request: &TransformRequest) -> Result<TransformResult, TransformError> {
        let codec = self.registry.lookup(request.algorithm())?;

        let (output, elapsed) = match request.direction() {
            Direction::Compress => execute(request.input(), |input| codec.compress(input))?,
            Direction::Decompress => execute(request.input(), |input| codec.decompress(input))?,
        };

        Ok(TransformResult::new(output, elapsed))
    }
}
