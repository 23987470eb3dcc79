//! Memory-Mapped Register Map Library.
//!
//! This crate allocates a flat, word-addressable register space for a set of
//! independent registers of arbitrary bit width, and synthesises per-register
//! accessors that let a narrower (or equal-width) data bus read and write
//! those registers one data-width chunk at a time.
//!
//! # Architecture
//!
//! * **Allocation**: registers are appended in address order; each reserves
//!   `ceil(width / data_width) * (data_width / word_width)` words.
//! * **Accessors**: reads slice and zero-extend a chunk; writes rebuild the
//!   whole register with one chunk replaced and store it in one update.
//! * **Decoding**: a decode spec sizes an address decoder, which turns a bus
//!   address into a register selection plus raw word offset.
//!
//! # Modules
//!
//! * `common`: Shared types, width arithmetic and error handling.
//! * `config`: Configuration loading and parsing.
//! * `header`: Offset export (C header, JSON) and pretty printing.
//! * `regmap`: Offset allocation and accessor synthesis.
//! * `soc`: Address decoder and bus adapter.
//! * `stats`: Bus access statistics.

/// Shared types, width arithmetic and error handling.
///
/// Provides the error type used by every fallible operation and the chunk
/// arithmetic the allocator, accessors and decoder share.
pub mod common;

/// Configuration system for bus geometry and register declarations.
///
/// Loads and parses TOML files describing the data, word and address widths
/// and the ordered list of registers.
pub mod config;

/// Offset export and layout pretty printing.
///
/// Emits the per-register offset constants consumed by software drivers.
pub mod header;

/// Register map allocation and accessor synthesis.
///
/// Owns offset/id bookkeeping, configuration validation and the read and
/// read-modify-write accessors bound to each register's storage.
pub mod regmap;

/// Address decoding and bus-facing dispatch.
///
/// Implements the decoder side of the decode contract and the adapter that
/// routes bus transactions to register accessors.
pub mod soc;

/// Bus access statistics collection and reporting.
pub mod stats;
