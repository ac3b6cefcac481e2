//! Shared Module
//!
//! Types that do not depend on the UI toolkit: the on-disk configuration
//! model and the crate's error types.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError, SpringSettings, ThemeChoice};
