//! Address Decode Specification.
//!
//! The sizing metadata handed to an address decoder. With it the decoder can
//! lay out one region per register, in allocation order starting at word 0,
//! each `chunk_counts[id] * ratio` words long.

use serde::Serialize;

/// Sizing information consumed by an address decoder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AddressDecodeSpec {
    /// Bus data width in bits.
    pub data_width: usize,
    /// Address width in bits.
    pub address_width: usize,
    /// Per-register chunk counts, `ceil(width / data_width)`, in allocation order.
    pub chunk_counts: Vec<usize>,
}

impl AddressDecodeSpec {
    /// Returns the number of registers described.
    pub fn len(&self) -> usize {
        self.chunk_counts.len()
    }

    /// Returns `true` if no registers are described.
    pub fn is_empty(&self) -> bool {
        self.chunk_counts.is_empty()
    }

    /// Returns the total number of data-width chunks across all registers.
    pub fn total_chunks(&self) -> usize {
        self.chunk_counts.iter().sum()
    }
}
