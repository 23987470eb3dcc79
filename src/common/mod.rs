//! Common utilities and types used throughout the register map crate.
//!
//! This module provides the error type, the access classification shared by
//! the bus adapter and statistics, and the width arithmetic every layer of the
//! allocator relies on.

/// Width and chunk arithmetic helpers.
pub mod bits;

/// Bus access type definitions.
pub mod data;

/// Error types.
pub mod error;

pub use bits::{chunk_count, is_valid_ratio, ratio_shift};
pub use data::AccessType;
pub use error::{RegMapError, Result};
