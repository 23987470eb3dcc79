//! Register Storage.
//!
//! A [`RegisterCell`] is the storage element behind one logical register: an
//! opaque bit-vector of fixed width that can be read in full and overwritten
//! in full. The enclosing design owns the cell; the register map only keeps a
//! cloned handle inside the accessor it synthesises, in the same way the SoC
//! shares its exit flag with the system controller.

use bitvec::prelude::*;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Bit-vector representation used for register contents.
///
/// Bit 0 is the least significant bit of the register.
pub type RegisterBits = BitVec<u64, Lsb0>;

/// Shared handle to a fixed-width register value.
#[derive(Clone)]
pub struct RegisterCell {
    width: usize,
    bits: Arc<RwLock<RegisterBits>>,
}

impl RegisterCell {
    /// Creates a zero-initialised register of `width` bits.
    pub fn new(width: usize) -> Self {
        Self::from_bits(RegisterBits::repeat(false, width))
    }

    /// Creates a register of `width` bits holding the low bits of `value`.
    ///
    /// Bits of `value` above `width` are discarded; bits of the register
    /// above 64 start cleared.
    pub fn with_value(width: usize, value: u64) -> Self {
        let cell = Self::new(width);
        cell.store_u64(value);
        cell
    }

    /// Wraps an existing bit-vector. The register width is its length.
    pub fn from_bits(bits: RegisterBits) -> Self {
        Self {
            width: bits.len(),
            bits: Arc::new(RwLock::new(bits)),
        }
    }

    /// Returns the register width in bits.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns a copy of the full register value.
    pub fn load(&self) -> RegisterBits {
        self.bits
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Overwrites the full register value.
    ///
    /// `bits` is truncated or zero-extended to the register width.
    pub fn store(&self, mut bits: RegisterBits) {
        bits.resize(self.width, false);
        *self.bits.write().unwrap_or_else(PoisonError::into_inner) = bits;
    }

    /// Performs a read-modify-write of the whole register under one lock.
    ///
    /// `f` receives the current value and returns the replacement, which is
    /// resized to the register width before it is committed.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&BitSlice<u64, Lsb0>) -> RegisterBits,
    {
        let mut guard = self.bits.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = f(guard.as_bitslice());
        next.resize(self.width, false);
        *guard = next;
    }

    /// Returns the low 64 bits of the register, zero-extended.
    pub fn load_u64(&self) -> u64 {
        let guard = self.bits.read().unwrap_or_else(PoisonError::into_inner);
        let end = guard.len().min(64);
        if end == 0 {
            return 0;
        }
        guard[..end].load_le::<u64>()
    }

    /// Overwrites the register with `value`, truncated to the register width.
    ///
    /// Bits above 64 are cleared.
    pub fn store_u64(&self, value: u64) {
        let mut bits = RegisterBits::repeat(false, self.width);
        let end = self.width.min(64);
        if end > 0 {
            bits[..end].store_le(value);
        }
        self.store(bits);
    }
}

impl fmt::Debug for RegisterCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterCell")
            .field("width", &self.width)
            .field("bits", &self.load())
            .finish()
    }
}
