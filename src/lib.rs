//! # media_codec - Media File Compression Service
//!
//! Compresses and decompresses uploaded audio, image and video files with
//! gzip or lzma, built on Clean Architecture principles.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Extension validation, naming policy, value objects
//! - **Application**: Codec registry, timed executor, use cases and ports
//! - **Infrastructure**: flate2/xz2 codecs and filesystem storage
//! - **API**: HTTP handlers
//!
//! ## Example Usage
//!
//! ```no_run
//! use media_codec::{
//!     application::transform_service::TransformService,
//!     entities::TransformRequest,
//!     infrastructure::codecs::default_registry,
//!     value_objects::{Algorithm, Direction, MediaCategory},
//! };
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = TransformService::new(Arc::new(default_registry()));
//! let request = TransformRequest::new(
//!     bytes::Bytes::from_static(b"RIFF"),
//!     "song.wav",
//!     MediaCategory::Audio,
//!     Algorithm::Gzip,
//!     Direction::Compress,
//! )?;
//! let result = service.transform(&request)?;
//! assert_eq!(request.output_name(), "compressed_song.wav.bin");
//! # let _ = result;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::builder::ApplicationBuilder;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
