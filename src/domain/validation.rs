//! Filename checks applied to uploads
//!
//! Both functions are pure: they look only at the name, never at the
//! file contents or the filesystem.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::MediaCategory;

static UNSAFE_FILENAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("Invalid filename regex"));

/// Suffix after the last `.`, if any
pub fn extension_of(filename: &str) -> Option<&str> {
    filename.rsplit_once('.').map(|(_, ext)| ext)
}

/// Check a filename's final suffix against the category's allowed set.
///
/// Only the last segment counts: `a.tar.gz` is judged on `gz`.
pub fn validate(filename: &str, category: MediaCategory) -> bool {
    match extension_of(filename) {
        Some(ext) => category.allows(ext),
        None => false,
    }
}

/// Like [`validate`] but returns the rejection as a [`DomainError`]
pub fn ensure_allowed(filename: &str, category: MediaCategory) -> Result<(), DomainError> {
    if validate(filename, category) {
        Ok(())
    } else {
        Err(DomainError::UnsupportedExtension {
            filename: filename.to_string(),
            category,
        })
    }
}

/// Reduce an uploaded filename to a flat, ASCII-only name safe to use as a
/// storage key.
///
/// The name is NFKD-decomposed so accented letters keep their base letter.
/// Remaining non-ASCII characters are then dropped, path separators become
/// word breaks, whitespace runs become `_`, anything outside
/// `[A-Za-z0-9_.-]` is removed and leading/trailing `.` and `_` are stripped.
pub fn sanitize_filename(raw: &str) -> Result<String, DomainError> {
    let ascii: String = raw
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    let stripped = UNSAFE_FILENAME_CHARS.replace_all(&joined, "");
    let sanitized = stripped.trim_matches(|c| c == '.' || c == '_');

    if sanitized.is_empty() {
        return Err(DomainError::InvalidFilename(format!(
            "'{}' has no usable characters",
            raw
        )));
    }

    Ok(sanitized.to_string())
}
