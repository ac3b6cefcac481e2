//! Shared Error Types
//!
//! The controller itself never fails; everything fallible sits on the way in,
//! while turning configuration into timings.
//!
//! # Error Categories
//!
//! - `Config` - the TOML file or an environment override was rejected
//! - `ValidationError` - a value passed parsing but cannot be used
//!
//! # Usage
//!
//! ```rust
//! use programmatic_menu::shared::error::SharedError;
//!
//! let error = SharedError::validation("intro_open_delay", "duration overflows");
//! assert!(error.to_string().contains("intro_open_delay"));
//! ```
use thiserror::Error;

use super::config::ConfigError;

/// Crate-level error type
#[derive(Debug, Error)]
pub enum SharedError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
