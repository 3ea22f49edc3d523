//! Static asset server for the converter's browser bundle.

pub mod app;
pub mod config;
pub mod frontend;

pub use config::{ConfigError, ServerConfig};
