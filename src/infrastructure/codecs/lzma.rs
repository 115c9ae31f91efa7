use std::io::{Read, Write};

use xz2::read::XzDecoder;
use xz2::stream::{Check, Stream, CONCATENATED};
use xz2::write::XzEncoder;

use crate::application::ports::{Codec, CodecError};
use crate::domain::value_objects::Algorithm;

/// liblzma's default preset
pub const DEFAULT_PRESET: u32 = 6;

/// LZMA2 in the `.xz` container.
///
/// Decoding auto-detects `.xz` and legacy `.lzma` input and accepts
/// concatenated streams.
#[derive(Debug, Clone, Copy)]
pub struct LzmaCodec {
    preset: u32,
}

impl LzmaCodec {
    fn new(preset: u32) -> Self {
        Self {
            preset: preset.min(9),
        }
    }

    fn corrupt(message: impl ToString) -> CodecError {
        CodecError::CorruptStream {
            algorithm: Algorithm::Lzma,
            message: message.to_string(),
        }
    }

    fn encode_error(message: impl ToString) -> CodecError {
        CodecError::Encode {
            algorithm: Algorithm::Lzma,
            message: message.to_string(),
        }
    }
}

impl Default for LzmaCodec {
    fn default() -> Self {
        Self::new(DEFAULT_PRESET)
    }
}

impl Codec for LzmaCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lzma
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        let stream =
            Stream::new_easy_encoder(self.preset, Check::Crc64).map_err(Self::encode_error)?;
        let mut encoder =
            XzEncoder::new_stream(Vec::with_capacity(input.len() / 2 + 64), stream);
        encoder.write_all(input).map_err(Self::encode_error)?;
        encoder.finish().map_err(Self::encode_error)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        if input.is_empty() {
            return Err(Self::corrupt("empty input"));
        }

        let stream = Stream::new_auto_decoder(u64::MAX, CONCATENATED).map_err(Self::corrupt)?;
        let mut output = Vec::with_capacity(input.len() * 3);
        XzDecoder::new_stream(input, stream)
            .read_to_end(&mut output)
            .map_err(Self::corrupt)?;
        Ok(output)
    }
}
