//! Error Types.
//!
//! Configuration problems are fatal and surface as [`RegMapError`] from the
//! builder or the config loader. Runtime accessor calls never fail: an
//! out-of-range chunk reads as zero and a write to it is ignored, so nothing
//! in this module is produced on the access path.

use thiserror::Error;

/// Result type alias for register map operations.
pub type Result<T> = std::result::Result<T, RegMapError>;

/// Errors that can occur while configuring or exporting a register map.
#[derive(Debug, Error)]
pub enum RegMapError {
    /// Data width outside the supported `1..=64` range.
    #[error("unsupported data width {data_width} (must be 1..=64 bits)")]
    UnsupportedDataWidth {
        /// Requested data width in bits
        data_width: usize,
    },

    /// Address width outside the supported `1..=64` range.
    #[error("unsupported address width {address_width} (must be 1..=64 bits)")]
    UnsupportedAddressWidth {
        /// Requested address width in bits
        address_width: usize,
    },

    /// Word width of zero.
    #[error("invalid word width {word_width}")]
    InvalidWordWidth {
        /// Requested word width in bits
        word_width: usize,
    },

    /// Data width is not a 1, 2, 4 or 8 multiple of the word width.
    #[error(
        "data width {data_width} is not a power-of-two multiple (1, 2, 4 or 8) of word width {word_width}"
    )]
    WidthRatio {
        /// Data width in bits
        data_width: usize,
        /// Word width in bits
        word_width: usize,
    },

    /// A register was declared with zero bits.
    #[error("register '{name}' has zero width")]
    ZeroWidth {
        /// Register name
        name: String,
    },

    /// Allocating a register would run past the end of the address space.
    #[error("register '{name}' ends at word {end:#x}, beyond the address space limit {limit:#x}")]
    AddressSpaceExhausted {
        /// Register name
        name: String,
        /// First word past the register
        end: u128,
        /// Number of addressable words
        limit: u128,
    },

    /// A hexadecimal literal in the configuration could not be parsed.
    #[error("invalid hex literal '{value}'")]
    InvalidHex {
        /// Offending literal
        value: String,
    },

    /// I/O error while reading configuration or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for this schema.
    #[error("config parse error: {source}")]
    Toml {
        /// Underlying TOML error
        #[from]
        source: toml::de::Error,
    },

    /// JSON export failed.
    #[error("JSON export error: {source}")]
    Json {
        /// Underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

impl RegMapError {
    /// Returns `true` for errors that make the addressing scheme itself unusable.
    ///
    /// These are the failures raised while constructing a builder or
    /// registering a register, as opposed to file and format errors.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedDataWidth { .. }
                | Self::UnsupportedAddressWidth { .. }
                | Self::InvalidWordWidth { .. }
                | Self::WidthRatio { .. }
                | Self::ZeroWidth { .. }
                | Self::AddressSpaceExhausted { .. }
        )
    }
}
