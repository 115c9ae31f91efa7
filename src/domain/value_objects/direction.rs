use serde::{Deserialize, Serialize};

use super::{MediaCategory, StorageArea};
use crate::domain::errors::DomainError;

/// Which way a codec is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Compress,
    Decompress,
}

impl Direction {
    /// Category the uploaded filename is validated against.
    ///
    /// Decompression input is always a compressed container regardless of
    /// the declared target category.
    pub fn input_category(self, declared: MediaCategory) -> MediaCategory {
        match self {
            Direction::Compress => declared,
            Direction::Decompress => MediaCategory::CompressedBinary,
        }
    }

    /// Prefix prepended to stored output names
    pub fn output_prefix(self) -> &'static str {
        match self {
            Direction::Compress => "compressed_",
            Direction::Decompress => "decompressed_",
        }
    }

    /// Storage area receiving the transformed output
    pub fn output_area(self) -> StorageArea {
        match self {
            Direction::Compress => StorageArea::Compressed,
            Direction::Decompress => StorageArea::Decompressed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Compress => "Compression",
            Direction::Decompress => "Decompression",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Compress => write!(f, "compress"),
            Direction::Decompress => write!(f, "decompress"),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compress" => Ok(Direction::Compress),
            "decompress" => Ok(Direction::Decompress),
            _ => Err(DomainError::InvalidDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_category() {
        assert_eq!(
            Direction::Compress.input_category(MediaCategory::Video),
            MediaCategory::Video
        );
        assert_eq!(
            Direction::Decompress.input_category(MediaCategory::Video),
            MediaCategory::CompressedBinary
        );
    }

    #[test]
    fn test_output_area() {
        assert_eq!(Direction::Compress.output_area(), StorageArea::Compressed);
        assert_eq!(
            Direction::Decompress.output_area(),
            StorageArea::Decompressed
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Compress".parse::<Direction>().unwrap(), Direction::Compress);
        assert!("inflate".parse::<Direction>().is_err());
    }
}
