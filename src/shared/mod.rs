//! Shared Module
//!
//! Types that are not tied to any particular screen: application
//! configuration and the error types produced by the auth flows.

/// Application configuration
pub mod config;

/// Auth flow error types
pub mod error;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::AuthError;
