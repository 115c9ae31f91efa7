pub mod builder;
pub mod codec_registry;
pub mod dto;
pub mod errors;
pub mod executor;
pub mod ports;
pub mod transform_service;
pub mod use_cases;
