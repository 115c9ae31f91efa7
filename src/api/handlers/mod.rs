pub mod download;
pub mod health;
pub mod transform;

pub use download::download_handler;
pub use health::health_handler;
pub use transform::{compress_handler, decompress_handler};
