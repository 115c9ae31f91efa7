//! Static mapping from algorithm tag to codec implementation

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::errors::TransformError;
use crate::application::ports::Codec;
use crate::domain::value_objects::Algorithm;

/// Registry of available codecs, keyed by [`Algorithm`].
///
/// Built once at startup and shared read-only. Lookups never cache
/// results; each transform recomputes from its input.
#[derive(Clone, Default)]
pub struct CodecRegistry {
    codecs: HashMap<Algorithm, Arc<dyn Codec>>,
}

impl CodecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a codec under its own algorithm tag, replacing any
    /// previous entry
    pub fn register(mut self, codec: Arc<dyn Codec>) -> Self {
        self.codecs.insert(codec.algorithm(), codec);
        self
    }

    /// Find the codec for an algorithm
    pub fn lookup(&self, algorithm: Algorithm) -> Result<Arc<dyn Codec>, TransformError> {
        self.codecs
            .get(&algorithm)
            .cloned()
            .ok_or_else(|| TransformError::UnknownAlgorithm(algorithm.to_string()))
    }

    /// Normalize a user-supplied name and confirm a codec is registered
    /// for it
    pub fn resolve(&self, name: &str) -> Result<Algorithm, TransformError> {
        let algorithm: Algorithm = name.parse()?;
        if self.codecs.contains_key(&algorithm) {
            Ok(algorithm)
        } else {
            Err(TransformError::UnknownAlgorithm(name.to_string()))
        }
    }

    pub fn contains(&self, algorithm: Algorithm) -> bool {
        self.codecs.contains_key(&algorithm)
    }

    /// Registered algorithms in declaration order
    pub fn algorithms(&self) -> Vec<Algorithm> {
        Algorithm::ALL
            .into_iter()
            .filter(|a| self.codecs.contains_key(a))
            .collect()
    }
}

impl std::fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("algorithms", &self.algorithms())
            .finish()
    }
}
