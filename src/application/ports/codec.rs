#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::domain::value_objects::Algorithm;

#[derive(Debug, Error)]
pub enum CodecError {
    /// Input is not a valid container for the algorithm
    #[error("Corrupt {algorithm} stream: {message}")]
    CorruptStream { algorithm: Algorithm, message: String },

    /// Encoder failed while writing into memory
    #[error("{algorithm} encoder failed: {message}")]
    Encode { algorithm: Algorithm, message: String },
}

/// Port for a compression codec.
///
/// Both directions are pure functions of the input buffer: no I/O, no
/// shared state, and no caching between calls.
#[cfg_attr(test, automock)]
pub trait Codec: Send + Sync {
    fn algorithm(&self) -> Algorithm;

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError>;

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError>;
}
