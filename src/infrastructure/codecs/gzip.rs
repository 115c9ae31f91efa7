use std::io::{Read, Write};

use flate2::bufread::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::application::ports::{Codec, CodecError};
use crate::domain::value_objects::Algorithm;

/// Highest deflate level; what `gzip -9` uses
pub const DEFAULT_LEVEL: u32 = 9;

/// RFC 1952 gzip container over deflate
#[derive(Debug, Clone, Copy)]
pub struct GzipCodec {
    level: Compression,
}

impl GzipCodec {
    fn new(level: u32) -> Self {
        Self {
            level: Compression::new(level.min(9)),
        }
    }

    fn corrupt(message: impl ToString) -> CodecError {
        CodecError::CorruptStream {
            algorithm: Algorithm::Gzip,
            message: message.to_string(),
        }
    }
}

impl Default for GzipCodec {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL)
    }
}

impl Codec for GzipCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Gzip
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        let mut encoder = GzEncoder::new(Vec::with_capacity(input.len() / 2 + 32), self.level);
        let encode_error = |e: std::io::Error| CodecError::Encode {
            algorithm: Algorithm::Gzip,
            message: e.to_string(),
        };
        encoder.write_all(input).map_err(encode_error)?;
        encoder.finish().map_err(encode_error)
    }

    /// Decode one or more concatenated gzip members.
    ///
    /// NUL padding after a member is skipped, as `gzip -d` does.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        if input.is_empty() {
            return Err(Self::corrupt("empty input"));
        }

        let mut output = Vec::with_capacity(input.len() * 2);
        let mut remaining = input;
        while !remaining.is_empty() {
            let mut member = GzDecoder::new(remaining);
            member.read_to_end(&mut output).map_err(Self::corrupt)?;

            let rest = member.into_inner();
            let padding = rest.iter().take_while(|&&b| b == 0).count();
            remaining = &rest[padding..];
        }
        Ok(output)
    }
}
