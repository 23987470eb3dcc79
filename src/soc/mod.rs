//! System-on-Chip side of the register map.
//!
//! The pieces that sit between a frozen [`RegisterMap`](crate::regmap::RegisterMap)
//! and the rest of a design: a reference address decoder, the bus adapter
//! that dispatches transactions to register accessors, and the builder that
//! wires a block from configuration.

/// Peripheral construction from configuration.
pub mod builder;

/// Address decoding into register selections.
pub mod decoder;

/// Transaction dispatch to register accessors.
pub mod interconnect;

/// Device interface seen by the bus protocol layer.
pub mod traits;

pub use builder::Peripheral;
pub use decoder::{AddressDecoder, Selection};
pub use interconnect::RegisterBus;
pub use traits::Device;
