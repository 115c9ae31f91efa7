mod codec;
mod storage_sink;

pub use codec::{Codec, CodecError};
pub use storage_sink::{StorageError, StorageSink};

#[cfg(test)]
pub use codec::MockCodec;
#[cfg(test)]
pub use storage_sink::MockStorageSink;
