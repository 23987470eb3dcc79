//! Register Descriptors.
//!
//! A descriptor is the allocator's record of one register: where it lives in
//! the word address space, which selection index the decoder uses for it, and
//! the accessor bound to its storage. Descriptors are created only by the
//! builder and never change afterwards.

use crate::regmap::accessor::RegisterAccess;
use std::fmt;
use std::ops::Range;

/// Immutable description of one allocated register.
pub struct RegisterDescriptor {
    pub(crate) name: String,
    pub(crate) width: usize,
    pub(crate) offset: u64,
    pub(crate) id: usize,
    pub(crate) chunks: usize,
    pub(crate) words: u64,
    pub(crate) read_only: bool,
    pub(crate) access: Box<dyn RegisterAccess>,
}

impl RegisterDescriptor {
    /// Returns the register name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the logical register width in bits.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the starting address in word units.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the allocation-order index, used as the decoder selection index.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the number of data-width chunks the register spans.
    pub fn chunks(&self) -> usize {
        self.chunks
    }

    /// Returns the number of addressable words the register reserves.
    pub fn words(&self) -> u64 {
        self.words
    }

    /// Returns the reserved word range `[offset, offset + words)`.
    pub fn word_range(&self) -> Range<u64> {
        self.offset..self.offset + self.words
    }

    /// Returns `true` if bus writes to this register are discarded.
    ///
    /// Always `false` for registers created with caller-supplied accessors.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Reads chunk `chunk` through the bound accessor.
    pub fn read(&self, chunk: usize) -> u64 {
        self.access.read(chunk)
    }

    /// Writes chunk `chunk` through the bound accessor.
    pub fn write(&self, chunk: usize, value: u64) {
        self.access.write(chunk, value)
    }
}

impl fmt::Debug for RegisterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterDescriptor")
            .field("name", &self.name)
            .field("width", &self.width)
            .field("offset", &self.offset)
            .field("id", &self.id)
            .field("chunks", &self.chunks)
            .field("words", &self.words)
            .field("read_only", &self.read_only)
            .finish_non_exhaustive()
    }
}
