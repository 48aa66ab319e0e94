//! Configuration loading and path normalization.

pub mod error;
pub mod parser;
pub mod resource;
pub mod server;

pub use error::ConfigError;
pub use server::ServerConfig;
