//! Shared Module
//!
//! Types used by both the forum core and the HTTP backend: error types and
//! application configuration. Nothing here depends on the `ssr` feature.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
