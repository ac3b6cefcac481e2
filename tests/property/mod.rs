//! Property-based tests

mod menu_proptest;
