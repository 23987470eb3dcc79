//! Bus Access Types.
//!
//! This module defines the classification of bus transactions seen by a
//! register map. The bus adapter tags every transaction with one of these so
//! statistics and trace output can tell reads and writes apart.

use std::fmt;

/// Type of bus access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Data read access.
    ///
    /// The bus layer presents `(selected_id, raw_offset)` and expects one
    /// data-width value back.
    Read,

    /// Data write access.
    ///
    /// The bus layer presents `(selected_id, raw_offset, value)`; the
    /// selected register merges the value into the addressed chunk.
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessType::Read => write!(f, "read"),
            AccessType::Write => write!(f, "write"),
        }
    }
}
