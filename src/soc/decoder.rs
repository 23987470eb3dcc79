//! Address Decoder.
//!
//! Reference implementation of the decoder side of the decode contract. Given
//! an [`AddressDecodeSpec`] and the data/word ratio it lays out one region per
//! register, in allocation order from word 0, each `chunk_counts[id] * ratio`
//! words long. A bus address then resolves to the register selection index
//! and the raw offset within that register.

use crate::regmap::{AddressDecodeSpec, RegisterMap};

/// Result of decoding one bus address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Selected register id.
    pub id: usize,
    /// Offset inside the register, in words.
    pub raw_offset: u64,
}

/// Address decoder built from an [`AddressDecodeSpec`].
#[derive(Clone, Debug)]
pub struct AddressDecoder {
    /// Region start addresses, strictly increasing.
    starts: Vec<u64>,
    /// First address past the last region.
    end: u64,
    /// Number of addressable words (`2^address_width`), saturated.
    limit: u128,
}

impl AddressDecoder {
    /// Creates a decoder for `spec` with the given data/word `ratio`.
    pub fn new(spec: &AddressDecodeSpec, ratio: usize) -> Self {
        let mut starts = Vec::with_capacity(spec.len());
        let mut next = 0u64;
        for &chunks in &spec.chunk_counts {
            starts.push(next);
            next += (chunks * ratio) as u64;
        }

        Self {
            starts,
            end: next,
            limit: 1u128 << spec.address_width.min(64),
        }
    }

    /// Creates a decoder matching a frozen register map.
    pub fn for_map(map: &RegisterMap) -> Self {
        Self::new(&map.address_decode_spec(), map.ratio())
    }

    /// Returns the number of words covered by all regions.
    pub fn span(&self) -> u64 {
        self.end
    }

    /// Returns the number of regions.
    pub fn regions(&self) -> usize {
        self.starts.len()
    }

    /// Resolves `address` to a register selection.
    ///
    /// Returns `None` for addresses past the last region or outside the
    /// address space.
    pub fn decode(&self, address: u64) -> Option<Selection> {
        if address as u128 >= self.limit || address >= self.end {
            return None;
        }

        // Number of regions starting at or before `address`; never zero
        // because the first region starts at 0 and `address < end`.
        let id = self.starts.partition_point(|&start| start <= address) - 1;
        Some(Selection {
            id,
            raw_offset: address - self.starts[id],
        })
    }

    /// Returns the one-hot selection vector for `address`.
    ///
    /// At most one entry is `true`.
    pub fn one_hot(&self, address: u64) -> Vec<bool> {
        let mut select = vec![false; self.starts.len()];
        if let Some(sel) = self.decode(address) {
            select[sel.id] = true;
        }
        select
    }
}
