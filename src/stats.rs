//! Bus access statistics.
//!
//! Tracks how many transactions reached a register peripheral, split by
//! direction, and how many fell outside every register region.

use crate::common::AccessType;

/// Access counters kept by a register bus.
#[derive(Clone, Debug, Default)]
pub struct BusStats {
    pub reads: u64,
    pub writes: u64,
    pub unmapped_reads: u64,
    pub unmapped_writes: u64,
}

impl BusStats {
    /// Records one transaction.
    ///
    /// `mapped` is `false` when the address decoded to no register.
    pub fn record(&mut self, access: AccessType, mapped: bool) {
        match (access, mapped) {
            (AccessType::Read, true) => self.reads += 1,
            (AccessType::Read, false) => self.unmapped_reads += 1,
            (AccessType::Write, true) => self.writes += 1,
            (AccessType::Write, false) => self.unmapped_writes += 1,
        }
    }

    /// Returns the total number of transactions seen, mapped or not.
    pub fn total(&self) -> u64 {
        self.reads + self.writes + self.unmapped_reads + self.unmapped_writes
    }
}
