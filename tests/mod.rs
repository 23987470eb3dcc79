//! Test module organization.
//!
//! This module organizes all integration tests for the register map crate.

/// Chunked read and read-modify-write accessor tests.
mod accessor_tests;



/// Configuration parsing and peripheral wiring tests.
mod config_tests;
