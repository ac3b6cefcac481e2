//! Test suite for the menu demo
//!
//! This module organizes all tests

#[macro_use]
pub mod common;
pub mod property;
