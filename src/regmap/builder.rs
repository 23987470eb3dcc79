//! Register Map Builder.
//!
//! This module owns offset and id allocation. A builder is configured once
//! with the bus data width, the address width and the minimum addressable
//! word width. The data/word ratio must be 1, 2, 4 or 8 so that a raw word
//! offset converts to a chunk index with a single right shift.
//!
//! Each register reserves `ceil(width / data_width) * ratio` words starting at
//! the running offset. Offsets are therefore strictly increasing with the id
//! and ranges never overlap.

use crate::common::bits::{chunk_count, is_valid_ratio, ratio_shift};
use crate::common::error::{RegMapError, Result};
use crate::regmap::accessor::{ChunkedAccessor, FnAccess, RegisterAccess};
use crate::regmap::decode::AddressDecodeSpec;
use crate::regmap::descriptor::RegisterDescriptor;
use crate::regmap::storage::RegisterCell;
use std::slice;
use tracing::debug;

/// Largest supported data width. Chunk values travel as `u64`.
pub const MAX_DATA_WIDTH: usize = 64;

/// Largest supported address width.
pub const MAX_ADDRESS_WIDTH: usize = 64;

/// Frozen register map.
///
/// Produced by [`RegisterMapBuilder::build`]. The register list can no longer
/// grow; only the contents of the bound storage change through bus writes.
pub struct RegisterMap {
    data_width: usize,
    word_width: usize,
    address_width: usize,
    ratio: usize,
    registers: Vec<RegisterDescriptor>,
}

impl RegisterMap {
    /// Returns the bus data width in bits.
    pub fn data_width(&self) -> usize {
        self.data_width
    }

    /// Returns the minimum addressable word width in bits.
    pub fn word_width(&self) -> usize {
        self.word_width
    }

    /// Returns the address width in bits.
    pub fn address_width(&self) -> usize {
        self.address_width
    }

    /// Returns the data/word ratio.
    pub fn ratio(&self) -> usize {
        self.ratio
    }

    /// Returns the decoder sizing metadata for the registers allocated so far.
    pub fn address_decode_spec(&self) -> AddressDecodeSpec {
        AddressDecodeSpec {
            data_width: self.data_width,
            address_width: self.address_width,
            chunk_counts: self.registers.iter().map(|r| r.chunks).collect(),
        }
    }

    /// Returns every register in allocation order.
    pub fn registers(&self) -> &[RegisterDescriptor] {
        &self.registers
    }

    /// Iterates over registers in allocation order.
    pub fn iter(&self) -> slice::Iter<'_, RegisterDescriptor> {
        self.registers.iter()
    }

    /// Returns the number of registers.
    pub fn len(&self) -> usize {
        self.registers.len()
    }

    /// Returns `true` if no register has been allocated.
    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }

    /// Returns the register with selection index `id`.
    pub fn get(&self, id: usize) -> Option<&RegisterDescriptor> {
        self.registers.get(id)
    }

    /// Returns the first register named `name`.
    pub fn find(&self, name: &str) -> Option<&RegisterDescriptor> {
        self.registers.iter().find(|r| r.name == name)
    }

    /// Returns the offset of the first register named `name`.
    pub fn offset_of(&self, name: &str) -> Option<u64> {
        self.find(name).map(|r| r.offset)
    }

    /// Returns the total number of words reserved by all registers.
    pub fn span(&self) -> u64 {
        self.registers.last().map_or(0, |r| r.offset + r.words)
    }

    /// Converts a raw intra-register word offset into a chunk index.
    ///
    /// The low `log2(ratio)` bits address sub-words within one data-width
    /// chunk and are dropped.
    pub fn chunk_index(&self, raw_offset: u64) -> usize {
        (raw_offset >> ratio_shift(self.ratio)) as usize
    }

    /// Reads register `id` at raw word offset `raw_offset`.
    ///
    /// An unknown id reads as zero.
    pub fn read(&self, id: usize, raw_offset: u64) -> u64 {
        match self.registers.get(id) {
            Some(reg) => reg.read(self.chunk_index(raw_offset)),
            None => 0,
        }
    }

    /// Writes `value` to register `id` at raw word offset `raw_offset`.
    ///
    /// An unknown id is ignored.
    pub fn write(&self, id: usize, raw_offset: u64, value: u64) {
        if let Some(reg) = self.registers.get(id) {
            reg.write(self.chunk_index(raw_offset), value);
        }
    }
}

impl<'a> IntoIterator for &'a RegisterMap {
    type Item = &'a RegisterDescriptor;
    type IntoIter = slice::Iter<'a, RegisterDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.registers.iter()
    }
}

/// Builder that allocates offsets and synthesises accessors.
pub struct RegisterMapBuilder {
    map: RegisterMap,
    current_offset: u64,
    current_id: usize,
}

impl RegisterMapBuilder {
    /// Creates a builder for the given bus geometry.
    ///
    /// # Arguments
    ///
    /// * `data_width` - Bus data width in bits (1..=64)
    /// * `address_width` - Address width in bits (1..=64)
    /// * `word_width` - Minimum addressable word in bits, defaults to `data_width`
    ///
    /// # Errors
    ///
    /// Fails if either width is out of range, the word width is zero, or the
    /// data width is not a 1, 2, 4 or 8 multiple of the word width.
    pub fn new(data_width: usize, address_width: usize, word_width: Option<usize>) -> Result<Self> {
        if data_width == 0 || data_width > MAX_DATA_WIDTH {
            return Err(RegMapError::UnsupportedDataWidth { data_width });
        }
        if address_width == 0 || address_width > MAX_ADDRESS_WIDTH {
            return Err(RegMapError::UnsupportedAddressWidth { address_width });
        }

        let word_width = word_width.unwrap_or(data_width);
        if word_width == 0 {
            return Err(RegMapError::InvalidWordWidth { word_width });
        }
        if data_width % word_width != 0 || !is_valid_ratio(data_width / word_width) {
            return Err(RegMapError::WidthRatio {
                data_width,
                word_width,
            });
        }

        Ok(Self {
            map: RegisterMap {
                data_width,
                word_width,
                address_width,
                ratio: data_width / word_width,
                registers: Vec::new(),
            },
            current_offset: 0,
            current_id: 0,
        })
    }

    /// Registers a `width`-bit register with caller-supplied accessors.
    ///
    /// `read` maps a chunk index to a data-width value; `write` receives a
    /// chunk index and a data-width value.
    pub fn register_width<R, W>(
        &mut self,
        name: &str,
        width: usize,
        read: R,
        write: W,
    ) -> Result<&RegisterDescriptor>
    where
        R: Fn(usize) -> u64 + Send + Sync + 'static,
        W: Fn(usize, u64) + Send + Sync + 'static,
    {
        self.allocate(name, width, false, Box::new(FnAccess::new(read, write)))
    }

    /// Registers `storage` under `name`, synthesising its accessors.
    ///
    /// The register width is the storage width. When `read_only` is set, bus
    /// writes are discarded and the storage only changes through its owner.
    pub fn create_register(
        &mut self,
        storage: &RegisterCell,
        name: &str,
        read_only: bool,
    ) -> Result<&RegisterDescriptor> {
        let access = ChunkedAccessor::new(name, storage.clone(), self.map.data_width, read_only)?;
        self.allocate(name, storage.width(), read_only, Box::new(access))
    }

    fn allocate(
        &mut self,
        name: &str,
        width: usize,
        read_only: bool,
        access: Box<dyn RegisterAccess>,
    ) -> Result<&RegisterDescriptor> {
        if width == 0 {
            return Err(RegMapError::ZeroWidth {
                name: name.to_string(),
            });
        }

        let chunks = chunk_count(width, self.map.data_width);

        // Sized in u128 so huge widths cannot wrap. The next offset must still
        // fit in a u64, hence the cap on a 64-bit address space.
        let words = chunks as u128 * self.map.ratio as u128;
        let end = self.current_offset as u128 + words;
        let limit = (1u128 << self.map.address_width).min(u64::MAX as u128);
        if end > limit {
            return Err(RegMapError::AddressSpaceExhausted {
                name: name.to_string(),
                end,
                limit,
            });
        }
        let words = words as u64;

        debug!(
            register = name,
            id = self.current_id,
            offset = %format!("{:#x}", self.current_offset),
            words,
            chunks,
            read_only,
            "allocated register"
        );

        self.map.registers.push(RegisterDescriptor {
            name: name.to_string(),
            width,
            offset: self.current_offset,
            id: self.current_id,
            chunks,
            words,
            read_only,
            access,
        });

        self.current_offset += words;
        self.current_id += 1;

        Ok(&self.map.registers[self.current_id - 1])
    }

    /// Returns the data/word ratio.
    pub fn ratio(&self) -> usize {
        self.map.ratio
    }

    /// Returns the bus data width in bits.
    pub fn data_width(&self) -> usize {
        self.map.data_width
    }

    /// Returns the minimum addressable word width in bits.
    pub fn word_width(&self) -> usize {
        self.map.word_width
    }

    /// Returns the address width in bits.
    pub fn address_width(&self) -> usize {
        self.map.address_width
    }

    /// Returns the offset the next register will receive.
    pub fn next_offset(&self) -> u64 {
        self.current_offset
    }

    /// Returns the decoder sizing metadata for the registers allocated so far.
    pub fn address_decode_spec(&self) -> AddressDecodeSpec {
        self.map.address_decode_spec()
    }

    /// Returns every register in allocation order.
    pub fn registers(&self) -> &[RegisterDescriptor] {
        self.map.registers()
    }

    /// Returns the offset of the first register named `name`.
    pub fn offset_of(&self, name: &str) -> Option<u64> {
        self.map.offset_of(name)
    }

    /// Finishes the build phase.
    pub fn build(self) -> RegisterMap {
        self.map
    }
}
