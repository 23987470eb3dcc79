//! Peripheral Builder.
//!
//! This module defines the `Peripheral` structure, which acts as the
//! container for one configured register block: the storage cells owned by
//! the design and the bus adapter that exposes them. It handles the
//! initialization and wiring of the block based on the provided configuration.

use crate::common::error::Result;
use crate::config::Config;
use crate::regmap::{RegisterCell, RegisterMapBuilder};
use crate::soc::interconnect::RegisterBus;
use tracing::info;

/// A configured register block.
///
/// Holds the storage behind every register, in allocation order, and the
/// bus adapter bound to it. The storage handles let the owning logic update
/// registers, including read-only ones, outside of bus writes.
pub struct Peripheral {
    /// Bus adapter for the block.
    pub bus: RegisterBus,
    cells: Vec<(String, RegisterCell)>,
}

impl Peripheral {
    /// Creates a peripheral from the given configuration.
    ///
    /// Allocates one storage cell per configured register, initialised to
    /// its reset value, registers them in declaration order and maps the
    /// resulting block at the configured base.
    ///
    /// # Errors
    ///
    /// Any configuration error from the builder, or an invalid hex literal.
    pub fn new(config: &Config) -> Result<Self> {
        let bus_cfg = &config.bus;
        let mut builder =
            RegisterMapBuilder::new(bus_cfg.data_width, bus_cfg.address_width, bus_cfg.word_width)?;

        let mut cells = Vec::with_capacity(config.registers.len());
        for entry in &config.registers {
            let cell = RegisterCell::from_bits(entry.reset_bits()?);
            builder.create_register(&cell, &entry.name, entry.read_only)?;
            cells.push((entry.name.clone(), cell));
        }

        let map = builder.build();
        let base = bus_cfg.base_val()?;
        info!(
            device = %bus_cfg.name,
            base = %format!("{:#x}", base),
            registers = map.len(),
            words = map.span(),
            "register block mapped"
        );

        Ok(Self {
            bus: RegisterBus::new(&bus_cfg.name, base, map),
            cells,
        })
    }

    /// Returns the storage of the first register named `name`.
    pub fn cell(&self, name: &str) -> Option<&RegisterCell> {
        self.cells.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }
}
