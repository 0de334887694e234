// Engine library root: review ingestion, storage and profile aggregation.

pub mod aggregate;
pub mod config;
pub mod data;
pub mod error;
pub mod services;

pub use error::EngineError;
