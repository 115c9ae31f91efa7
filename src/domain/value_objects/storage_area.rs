use serde::{Deserialize, Serialize};

/// Storage location for a persisted file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageArea {
    /// Raw uploads as received
    Uploads,
    /// Output of compression jobs
    Compressed,
    /// Output of decompression jobs
    Decompressed,
}

impl StorageArea {
    pub const ALL: [StorageArea; 3] = [
        StorageArea::Uploads,
        StorageArea::Compressed,
        StorageArea::Decompressed,
    ];

    /// Route a stored filename to its area by prefix
    pub fn for_stored_name(name: &str) -> Self {
        if name.starts_with("decompressed_") {
            StorageArea::Decompressed
        } else if name.starts_with("compressed_") {
            StorageArea::Compressed
        } else {
            StorageArea::Uploads
        }
    }
}

impl std::fmt::Display for StorageArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageArea::Uploads => write!(f, "uploads"),
            StorageArea::Compressed => write!(f, "compressed"),
            StorageArea::Decompressed => write!(f, "decompressed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_stored_name() {
        assert_eq!(
            StorageArea::for_stored_name("compressed_song.mp3.bin"),
            StorageArea::Compressed
        );
        assert_eq!(
            StorageArea::for_stored_name("decompressed_clip.bin.mp4"),
            StorageArea::Decompressed
        );
        assert_eq!(
            StorageArea::for_stored_name("song.mp3"),
            StorageArea::Uploads
        );
        assert_eq!(
            StorageArea::for_stored_name("my_compressed_song.bin"),
            StorageArea::Uploads
        );
    }
}
