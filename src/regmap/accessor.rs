//! Register Accessors.
//!
//! Every allocated register carries an accessor that the bus adapter calls
//! with a chunk index (already converted from the raw word offset). The
//! accessor exposes the register as a sequence of `data_width`-bit chunks,
//! least significant chunk first:
//!
//! * **Read** returns the addressed slice, zero-extended to `data_width`.
//!   The last chunk of a register whose width is not a multiple of the data
//!   width only carries the remaining bits.
//! * **Write** rebuilds the whole register, taking the addressed chunk from
//!   the incoming value and every other chunk from the current contents, then
//!   replaces the stored value in one update.
//!
//! Indices past the last chunk read as zero and are ignored on write.

use crate::common::bits::{chunk_bounds, chunk_count};
use crate::common::error::{RegMapError, Result};
use crate::regmap::builder::MAX_DATA_WIDTH;
use crate::regmap::storage::{RegisterBits, RegisterCell};
use bitvec::prelude::*;
use tracing::debug;

/// Read/write interface bound to one register.
///
/// Implementations are pure functions of the stored bits, the chunk index and
/// the written value, and must never panic for any index.
pub trait RegisterAccess: Send + Sync {
    /// Returns the `data_width`-bit value of chunk `chunk`.
    fn read(&self, chunk: usize) -> u64;

    /// Merges `value` into chunk `chunk`.
    fn write(&self, chunk: usize, value: u64);
}

/// Accessor synthesised for a [`RegisterCell`].
pub struct ChunkedAccessor {
    name: String,
    cell: RegisterCell,
    data_width: usize,
    chunks: usize,
    read_only: bool,
}

impl ChunkedAccessor {
    /// Creates an accessor slicing `cell` into `data_width`-bit chunks.
    ///
    /// `name` is only used in log output.
    ///
    /// # Errors
    ///
    /// Fails with `UnsupportedDataWidth` unless `data_width` is in `1..=64`,
    /// since chunk values travel as `u64`.
    pub fn new(
        name: &str,
        cell: RegisterCell,
        data_width: usize,
        read_only: bool,
    ) -> Result<Self> {
        if data_width == 0 || data_width > MAX_DATA_WIDTH {
            return Err(RegMapError::UnsupportedDataWidth { data_width });
        }

        let chunks = chunk_count(cell.width(), data_width);
        Ok(Self {
            name: name.to_string(),
            cell,
            data_width,
            chunks,
            read_only,
        })
    }

    /// Returns the number of chunks the register spans.
    pub fn chunks(&self) -> usize {
        self.chunks
    }

    /// Returns `true` if bus writes are suppressed.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Rebuilds the register with chunk `target` replaced by the low bits of `value`.
    fn merge(&self, current: &BitSlice<u64, Lsb0>, target: usize, value: u64) -> RegisterBits {
        let width = self.cell.width();
        let mut next = RegisterBits::with_capacity(width);

        for i in 0..self.chunks {
            let (start, end) = chunk_bounds(i, self.data_width, width);
            if i == target {
                let mut incoming = RegisterBits::repeat(false, end - start);
                incoming.store_le(value);
                next.extend_from_bitslice(incoming.as_bitslice());
            } else {
                next.extend_from_bitslice(&current[start..end]);
            }
        }

        next
    }
}

impl RegisterAccess for ChunkedAccessor {
    fn read(&self, chunk: usize) -> u64 {
        if chunk >= self.chunks {
            return 0;
        }

        let (start, end) = chunk_bounds(chunk, self.data_width, self.cell.width());
        let bits = self.cell.load();
        bits[start..end].load_le::<u64>()
    }

    fn write(&self, chunk: usize, value: u64) {
        if self.read_only {
            debug!(
                register = %self.name,
                chunk,
                value = %format!("{value:#x}"),
                "discarding write to read-only register"
            );
            return;
        }
        if chunk >= self.chunks {
            return;
        }

        self.cell.update(|current| self.merge(current, chunk, value));
    }
}

/// Accessor built from a pair of caller-supplied closures.
pub struct FnAccess<R, W> {
    read: R,
    write: W,
}

impl<R, W> FnAccess<R, W>
where
    R: Fn(usize) -> u64 + Send + Sync,
    W: Fn(usize, u64) + Send + Sync,
{
    /// Wraps a read closure and a write closure.
    pub fn new(read: R, write: W) -> Self {
        Self { read, write }
    }
}

impl<R, W> RegisterAccess for FnAccess<R, W>
where
    R: Fn(usize) -> u64 + Send + Sync,
    W: Fn(usize, u64) + Send + Sync,
{
    fn read(&self, chunk: usize) -> u64 {
        (self.read)(chunk)
    }

    fn write(&self, chunk: usize, value: u64) {
        (self.write)(chunk, value)
    }
}
