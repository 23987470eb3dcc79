//! Offset export and pretty printing.
//!
//! Software drivers consume register offsets as C preprocessor constants, one
//! per register in allocation order. The same layout is also available as
//! JSON and as a human-readable table via `Display`.

use crate::common::error::Result;
use crate::regmap::{AddressDecodeSpec, RegisterMap};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::{self, Write};

/// Turns a register name into a C identifier.
///
/// Letters are upper-cased, every other non-alphanumeric character becomes
/// `_`, and a leading digit gets a `_` prefix.
pub fn sanitize_name(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Renders the register offsets as a C header.
///
/// `guard` names the include guard; it is sanitised like a register name.
/// When two registers sanitise to the same identifier, every later one gets
/// its id appended so each macro is defined once.
pub fn render_header(map: &RegisterMap, guard: &str) -> String {
    let guard = sanitize_name(guard);
    let mut out = String::new();
    let mut emitted = HashSet::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "/* Register offsets. Generated file, do not edit. */");
    let _ = writeln!(out, "#ifndef {guard}");
    let _ = writeln!(out, "#define {guard}");
    let _ = writeln!(out);
    for reg in map {
        let mut ident = sanitize_name(reg.name());
        while ident == guard || emitted.contains(&ident) {
            ident = format!("{ident}_{}", reg.id());
        }
        let _ = writeln!(out, "#define {ident} {:#x}", reg.offset());
        emitted.insert(ident);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "#endif /* {guard} */");
    out
}

#[derive(Serialize)]
struct LayoutEntry<'a> {
    name: &'a str,
    id: usize,
    width: usize,
    offset: u64,
    words: u64,
    chunks: usize,
    read_only: bool,
}

#[derive(Serialize)]
struct LayoutExport<'a> {
    data_width: usize,
    word_width: usize,
    address_width: usize,
    ratio: usize,
    decode: AddressDecodeSpec,
    registers: Vec<LayoutEntry<'a>>,
}

/// Renders the decode spec and register layout as pretty-printed JSON.
pub fn render_json(map: &RegisterMap) -> Result<String> {
    let export = LayoutExport {
        data_width: map.data_width(),
        word_width: map.word_width(),
        address_width: map.address_width(),
        ratio: map.ratio(),
        decode: map.address_decode_spec(),
        registers: map
            .iter()
            .map(|r| LayoutEntry {
                name: r.name(),
                id: r.id(),
                width: r.width(),
                offset: r.offset(),
                words: r.words(),
                chunks: r.chunks(),
                read_only: r.is_read_only(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

impl fmt::Display for RegisterMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name_w = self
            .iter()
            .map(|r| r.name().len())
            .max()
            .unwrap_or(0)
            .max("Name".len());

        writeln!(
            f,
            "Data width: {} bits, word width: {} bits (ratio {}), address width: {} bits",
            self.data_width(),
            self.word_width(),
            self.ratio(),
            self.address_width()
        )?;
        writeln!(
            f,
            "{:>3}  {:<name_w$}  {:>5}  {:>10}  {:>5}  {:>6}  Access",
            "Id", "Name", "Width", "Offset", "Words", "Chunks"
        )?;
        for r in self {
            writeln!(
                f,
                "{:>3}  {:<name_w$}  {:>5}  {:>#10x}  {:>5}  {:>6}  {}",
                r.id(),
                r.name(),
                r.width(),
                r.offset(),
                r.words(),
                r.chunks(),
                if r.is_read_only() { "RO" } else { "RW" }
            )?;
        }
        Ok(())
    }
}
