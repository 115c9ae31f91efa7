use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Compression algorithm selectable by the caller.
///
/// Adding a variant requires registering a matching codec in
/// `infrastructure::codecs::default_registry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// DEFLATE in a gzip container
    Gzip,
    /// LZMA2 in an xz container
    Lzma,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Gzip, Algorithm::Lzma];

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Gzip => "gzip",
            Algorithm::Lzma => "lzma",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gzip" => Ok(Algorithm::Gzip),
            "lzma" => Ok(Algorithm::Lzma),
            _ => Err(DomainError::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_algorithm_from_str_normalizes() {
        assert_eq!(Algorithm::from_str("gzip").unwrap(), Algorithm::Gzip);
        assert_eq!(Algorithm::from_str(" LZMA\n").unwrap(), Algorithm::Lzma);
    }

    #[test]
    fn test_algorithm_from_str_unknown() {
        let err = Algorithm::from_str("brotli").unwrap_err();
        assert_eq!(err, DomainError::UnknownAlgorithm("brotli".to_string()));
        assert!(Algorithm::from_str("").is_err());
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(Algorithm::Gzip.to_string(), "gzip");
        assert_eq!(Algorithm::Lzma.to_string(), "lzma");
    }
}
