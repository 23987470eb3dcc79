//! Register Bus Interconnect.
//!
//! This module connects a frozen register map to the bus protocol layer. A
//! transaction offset is resolved by the address decoder into a register
//! selection and a raw word offset; the raw offset is shifted down by
//! `log2(ratio)` to a chunk index and handed to the selected register's
//! accessor.

use super::decoder::{AddressDecoder, Selection};
use super::traits::Device;
use crate::common::AccessType;
use crate::regmap::RegisterMap;
use crate::stats::BusStats;
use tracing::trace;

/// Memory-mapped block exposing a register map on the bus.
pub struct RegisterBus {
    name: String,
    base: u64,
    map: RegisterMap,
    decoder: AddressDecoder,
    /// Access counters.
    pub stats: BusStats,
}

impl RegisterBus {
    /// Creates a bus adapter for `map` mapped at `base`.
    ///
    /// # Arguments
    ///
    /// * `name` - Device name used in logs
    /// * `base` - Base address in words
    /// * `map` - The frozen register map
    pub fn new(name: &str, base: u64, map: RegisterMap) -> Self {
        let decoder = AddressDecoder::for_map(&map);
        Self {
            name: name.to_string(),
            base,
            map,
            decoder,
            stats: BusStats::default(),
        }
    }

    /// Returns the register map behind the bus.
    pub fn map(&self) -> &RegisterMap {
        &self.map
    }

    /// Returns the address decoder.
    pub fn decoder(&self) -> &AddressDecoder {
        &self.decoder
    }

    /// Resolves a device-relative offset and records the access.
    fn select(&mut self, offset: u64, access: AccessType) -> Option<Selection> {
        let selection = self.decoder.decode(offset);
        self.stats.record(access, selection.is_some());

        #[cfg(feature = "always-trace")]
        tracing::info!(device = %self.name, %access, offset, ?selection, "bus access");

        if selection.is_none() {
            trace!(device = %self.name, %access, offset, "unmapped access");
        }
        selection
    }
}

impl Device for RegisterBus {
    fn name(&self) -> &str {
        &self.name
    }

    fn address_range(&self) -> (u64, u64) {
        (self.base, self.decoder.span())
    }

    fn read(&mut self, offset: u64) -> u64 {
        match self.select(offset, AccessType::Read) {
            Some(sel) => self.map.read(sel.id, sel.raw_offset),
            None => 0,
        }
    }

    fn write(&mut self, offset: u64, val: u64) {
        if let Some(sel) = self.select(offset, AccessType::Write) {
            self.map.write(sel.id, sel.raw_offset, val);
        }
    }
}
