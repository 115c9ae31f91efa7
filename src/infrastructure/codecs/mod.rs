//! Compression codecs backing the [`Codec`] port

mod gzip;
mod lzma;

use std::sync::Arc;

pub use gzip::GzipCodec;
pub use lzma::LzmaCodec;

use crate::application::codec_registry::CodecRegistry;
use crate::application::ports::Codec;

/// Registry with every built-in codec at its default settings
pub fn default_registry() -> CodecRegistry {
    CodecRegistry::new()
        .register(Arc::new(GzipCodec::default()) as Arc<dyn Codec>)
        .register(Arc::new(LzmaCodec::default()) as Arc<dyn Codec>)
}
