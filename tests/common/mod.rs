//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Clock helpers for driving the controller
//! - Custom assertion macros

#[macro_use]
pub mod assertions;
pub mod clock;

// Re-export commonly used utilities
pub use clock::*;
