//! Register map allocation and accessor synthesis.
//!
//! Registers are appended to a [`RegisterMapBuilder`] in the order they
//! should appear in the address space. Each registration assigns an offset
//! and a selection index and binds an accessor that slices the register into
//! data-width chunks. [`RegisterMapBuilder::build`] freezes the list into a
//! [`RegisterMap`] used for lookup and bus dispatch.

/// Read/write accessor synthesis.
pub mod accessor;

/// Offset allocation, validation and the frozen map.
pub mod builder;

/// Address decoder sizing metadata.
pub mod decode;

/// Per-register descriptors.
pub mod descriptor;

/// Storage element behind each register.
pub mod storage;

pub use accessor::{ChunkedAccessor, FnAccess, RegisterAccess};
pub use builder::{RegisterMap, RegisterMapBuilder};
pub use decode::AddressDecodeSpec;
pub use descriptor::RegisterDescriptor;
pub use storage::{RegisterBits, RegisterCell};
