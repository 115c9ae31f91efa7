use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg"];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov"];
const COMPRESSED_EXTENSIONS: &[&str] = &["bin"];

/// Classification of uploaded content.
///
/// Selects the allowed-extension set used by the validator and the
/// extension given to decompressed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Audio,
    Image,
    Video,
    /// Opaque codec container produced by compression
    #[serde(rename = "compressed")]
    CompressedBinary,
}

impl MediaCategory {
    /// Categories a user may upload for compression
    pub const MEDIA: [MediaCategory; 3] = [
        MediaCategory::Audio,
        MediaCategory::Image,
        MediaCategory::Video,
    ];

    /// Lowercase extensions accepted for this category
    pub fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            MediaCategory::Audio => AUDIO_EXTENSIONS,
            MediaCategory::Image => IMAGE_EXTENSIONS,
            MediaCategory::Video => VIDEO_EXTENSIONS,
            MediaCategory::CompressedBinary => COMPRESSED_EXTENSIONS,
        }
    }

    /// Case-insensitive membership test against the allowed set
    pub fn allows(self, extension: &str) -> bool {
        self.allowed_extensions()
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    }

    /// Extension given to files stored under this category.
    ///
    /// For media categories this is a fixed guess; the codec containers
    /// carry no record of the original extension.
    pub fn target_extension(self) -> &'static str {
        match self {
            MediaCategory::Audio => "wav",
            MediaCategory::Image => "jpg",
            MediaCategory::Video => "mp4",
            MediaCategory::CompressedBinary => "bin",
        }
    }

    pub fn is_media(self) -> bool {
        !matches!(self, MediaCategory::CompressedBinary)
    }

    /// Human-readable label, e.g. "Audio"
    pub fn label(self) -> &'static str {
        match self {
            MediaCategory::Audio => "Audio",
            MediaCategory::Image => "Image",
            MediaCategory::Video => "Video",
            MediaCategory::CompressedBinary => "Compressed",
        }
    }
}

impl std::fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaCategory::Audio => write!(f, "audio"),
            MediaCategory::Image => write!(f, "image"),
            MediaCategory::Video => write!(f, "video"),
            MediaCategory::CompressedBinary => write!(f, "compressed"),
        }
    }
}

impl std::str::FromStr for MediaCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "audio" => Ok(MediaCategory::Audio),
            "image" => Ok(MediaCategory::Image),
            "video" => Ok(MediaCategory::Video),
            "compressed" => Ok(MediaCategory::CompressedBinary),
            _ => Err(DomainError::InvalidCategory(s.to_string())),
        }
    }
}
