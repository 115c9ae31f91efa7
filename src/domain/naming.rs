//! Output naming policy
//!
//! Compressed output always ends in `.bin`. Decompressed output gets the
//! declared category's fixed target extension (`wav`, `jpg`, `mp4`); the
//! original extension is not recovered, so a decompressed PNG is still
//! named `.jpg`.

use crate::domain::value_objects::{Direction, MediaCategory};

/// Derive the stored output filename for a job
pub fn derive_output_name(
    original_name: &str,
    direction: Direction,
    category: MediaCategory,
) -> String {
    let extension = match direction {
        Direction::Compress => MediaCategory::CompressedBinary.target_extension(),
        Direction::Decompress => category.target_extension(),
    };

    format!("{}{}.{}", direction.output_prefix(), original_name, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_name() {
        assert_eq!(
            derive_output_name("song.mp3", Direction::Compress, MediaCategory::Audio),
            "compressed_song.mp3.bin"
        );
        assert_eq!(
            derive_output_name("photo.png", Direction::Compress, MediaCategory::Image),
            "compressed_photo.png.bin"
        );
    }

    #[test]
    fn test_decompress_name_uses_category_default() {
        assert_eq!(
            derive_output_name("clip.bin", Direction::Decompress, MediaCategory::Video),
            "decompressed_clip.bin.mp4"
        );
        assert_eq!(
            derive_output_name("a.bin", Direction::Decompress, MediaCategory::Audio),
            "decompressed_a.bin.wav"
        );
        assert_eq!(
            derive_output_name(
                "compressed_photo.png.bin",
                Direction::Decompress,
                MediaCategory::Image
            ),
            "decompressed_compressed_photo.png.bin.jpg"
        );
    }

    #[test]
    fn test_compress_ignores_category() {
        for category in MediaCategory::MEDIA {
            assert_eq!(
                derive_output_name("x.dat", Direction::Compress, category),
                "compressed_x.dat.bin"
            );
        }
    }

    #[test]
    fn test_naming_is_deterministic() {
        let first = derive_output_name("song.mp3", Direction::Compress, MediaCategory::Audio);
        let second = derive_output_name("song.mp3", Direction::Compress, MediaCategory::Audio);
        assert_eq!(first, second);
    }
}
