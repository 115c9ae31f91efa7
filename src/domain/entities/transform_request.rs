use bytes::Bytes;

use crate::domain::{
    errors::DomainError,
    naming::derive_output_name,
    validation::{ensure_allowed, sanitize_filename},
    value_objects::{Algorithm, Direction, MediaCategory},
};

/// One compress-or-decompress job as handed to the codec layer.
///
/// The only constructor validates the filename, so a request that exists
/// has already passed the extension check for its direction.
#[derive(Debug, Clone)]
pub struct TransformRequest {
    input: Bytes,
    filename: String,
    category: MediaCategory,
    algorithm: Algorithm,
    direction: Direction,
}

impl TransformRequest {
    /// Validate and build a request.
    ///
    /// `category` is the media category the caller declared: the upload's
    /// own category when compressing, the desired output category when
    /// decompressing. The raw filename is checked, then sanitized, and the
    /// sanitized name must still carry an allowed extension.
    pub fn new(
        input: Bytes,
        raw_filename: &str,
        category: MediaCategory,
        algorithm: Algorithm,
        direction: Direction,
    ) -> Result<Self, DomainError> {
        if !category.is_media() {
            return Err(DomainError::InvalidCategory(format!(
                "{} is not a media category",
                category
            )));
        }

        let input_category = direction.input_category(category);
        ensure_allowed(raw_filename, input_category)?;

        let filename = sanitize_filename(raw_filename)?;
        if ensure_allowed(&filename, input_category).is_err() {
            return Err(DomainError::InvalidFilename(format!(
                "'{}' loses its extension when sanitized",
                raw_filename
            )));
        }

        Ok(Self {
            input,
            filename,
            category,
            algorithm,
            direction,
        })
    }

    // Getters
    pub fn input(&self) -> &Bytes {
        &self.input
    }

    /// Sanitized upload filename
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn category(&self) -> MediaCategory {
        self.category
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn input_len(&self) -> usize {
        self.input.len()
    }

    /// Name the transformed output will be stored under
    pub fn output_name(&self) -> String {
        derive_output_name(&self.filename, self.direction, self.category)
    }

    /// Display label such as "Audio Compression"
    pub fn task_label(&self) -> String {
        format!("{} {}", self.category.label(), self.direction.label())
    }
}
