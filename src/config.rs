use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Hard ceiling for `MAX_UPLOAD_BYTES`
pub const MAX_UPLOAD_LIMIT: u64 = 4 * 1024 * 1024 * 1024;

const DEFAULT_MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub upload_folder: PathBuf,
    pub compressed_folder: PathBuf,
    pub decompressed_folder: PathBuf,
    pub max_upload_bytes: u64,
    pub durable_writes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            upload_folder: PathBuf::from("uploads"),
            compressed_folder: PathBuf::from("compressed"),
            decompressed_folder: PathBuf::from("decompressed"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            durable_writes: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Load settings from a TOML file; absent keys keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `CONFIG_FILE` if set, then environment overrides on top
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        Ok(base.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply overrides from a variable lookup. Unparseable numeric or
    /// boolean values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("LISTEN_ADDR") {
            self.listen_addr = addr;
        }
        if let Some(dir) = lookup("UPLOAD_FOLDER") {
            self.upload_folder = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("COMPRESSED_FOLDER") {
            self.compressed_folder = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("DECOMPRESSED_FOLDER") {
            self.decompressed_folder = PathBuf::from(dir);
        }
        if let Some(bytes) = lookup("MAX_UPLOAD_BYTES").and_then(|s| s.parse().ok()) {
            self.max_upload_bytes = bytes;
        }
        if let Some(durable) = lookup("DURABLE_WRITES").and_then(|s| parse_bool(&s)) {
            self.durable_writes = durable;
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listen_addr.trim().is_empty() {
            return Err(ConfigError::Invalid("LISTEN_ADDR cannot be empty".to_string()));
        }

        if self.max_upload_bytes == 0 || self.max_upload_bytes > MAX_UPLOAD_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "MAX_UPLOAD_BYTES must be between 1 and {}",
                MAX_UPLOAD_LIMIT
            )));
        }

        let folders = [
            &self.upload_folder,
            &self.compressed_folder,
            &self.decompressed_folder,
        ];
        for (i, a) in folders.iter().enumerate() {
            if a.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("Storage folders cannot be empty".to_string()));
            }
            if folders[i + 1..].contains(a) {
                return Err(ConfigError::Invalid(format!(
                    "Storage folders must be distinct: {} is used twice",
                    a.display()
                )));
            }
        }

        Ok(())
    }

    /// Upload limit as a `usize` for body limit layers
    pub fn max_upload_usize(&self) -> usize {
        usize::try_from(self.max_upload_bytes).unwrap_or(usize::MAX)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.max_upload_bytes, 100 * 1024 * 1024);
        assert!(config.durable_writes);
        config.validate().unwrap();
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(lookup(&[
            ("LISTEN_ADDR", "127.0.0.1:9000"),
            ("UPLOAD_FOLDER", "/srv/in"),
            ("MAX_UPLOAD_BYTES", "1024"),
            ("DURABLE_WRITES", "off"),
        ]));

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.upload_folder, PathBuf::from("/srv/in"));
        assert_eq!(config.compressed_folder, PathBuf::from("compressed"));
        assert_eq!(config.max_upload_bytes, 1024);
        assert!(!config.durable_writes);
    }

    #[test]
    fn test_bad_override_values_are_ignored() {
        let config = Config::default().with_overrides(lookup(&[
            ("MAX_UPLOAD_BYTES", "lots"),
            ("DURABLE_WRITES", "maybe"),
        ]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "listen_addr = \"127.0.0.1:7000\"").unwrap();
        writeln!(file, "max_upload_bytes = 2048").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:7000");
        assert_eq!(config.max_upload_bytes, 2048);
        assert_eq!(config.decompressed_folder, PathBuf::from("decompressed"));
    }

    #[test]
    fn test_from_file_errors() {
        assert!(matches!(
            Config::from_file("/definitely/not/here.toml"),
            Err(ConfigError::Read { .. })
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_upload_bytes = \"big\"").unwrap();
        assert!(matches!(
            Config::from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = Config {
            listen_addr: " ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            max_upload_bytes: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            max_upload_bytes: MAX_UPLOAD_LIMIT + 1,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            compressed_folder: PathBuf::from("uploads"),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("distinct"));
    }
}
