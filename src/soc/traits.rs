//! System-on-Chip Traits.
//!
//! This module defines the interface between a bus protocol layer and a
//! memory-mapped block. The protocol layer owns handshaking; once a
//! transaction is accepted it calls into the block with an offset relative to
//! the block's base and a data-width value.

/// Trait for memory-mapped I/O devices.
///
/// Offsets are expressed in units of the device's minimum addressable word.
/// Every transfer carries one full data-width value regardless of which
/// sub-word of a chunk triggered it.
pub trait Device {
    /// Returns the user-friendly name of the device.
    ///
    /// Used for debugging and logging purposes.
    fn name(&self) -> &str;

    /// Returns the address range (Base Address, Size) of the device, in words.
    fn address_range(&self) -> (u64, u64);

    /// Reads one data-width value at the specified offset.
    fn read(&mut self, offset: u64) -> u64;

    /// Writes one data-width value at the specified offset.
    fn write(&mut self, offset: u64, val: u64);

    /// Returns `true` if `addr` (absolute) falls inside the device range.
    fn contains(&self, addr: u64) -> bool {
        let (base, size) = self.address_range();
        addr >= base && addr - base < size
    }
}
