use crate::common::error::{RegMapError, Result};
use crate::regmap::RegisterBits;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const DEFAULT_ADDRESS_WIDTH: usize = 32;
const DEFAULT_BASE: u64 = 0x0;
const DEFAULT_NAME: &str = "regmap";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub bus: BusConfig,

    #[serde(default, rename = "register")]
    pub registers: Vec<RegisterEntry>,
}

impl Config {
    /// Loads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[derive(Debug, Deserialize)]
pub struct BusConfig {
    pub data_width: usize,

    #[serde(default = "default_address_width")]
    pub address_width: usize,

    #[serde(default)]
    pub word_width: Option<usize>,

    #[serde(default = "default_base")]
    pub base: String,

    #[serde(default = "default_name")]
    pub name: String,
}

impl BusConfig {
    pub fn base_val(&self) -> Result<u64> {
        parse_hex(&self.base)
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterEntry {
    pub name: String,

    pub width: usize,

    #[serde(default)]
    pub read_only: bool,

    #[serde(default = "default_reset")]
    pub reset: String,
}

impl RegisterEntry {
    /// Returns the reset value as a `width`-bit vector.
    ///
    /// Digits above the register width are dropped.
    pub fn reset_bits(&self) -> Result<RegisterBits> {
        parse_hex_bits(&self.reset, self.width)
    }
}

fn strip_hex(s: &str) -> String {
    let s = s.trim();
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    s.replace('_', "")
}

/// Parses a hexadecimal literal such as `"0x4000_0000"`.
pub fn parse_hex(s: &str) -> Result<u64> {
    u64::from_str_radix(&strip_hex(s), 16).map_err(|_| RegMapError::InvalidHex {
        value: s.to_string(),
    })
}

/// Parses a hexadecimal literal of any length into a `width`-bit vector.
pub fn parse_hex_bits(s: &str, width: usize) -> Result<RegisterBits> {
    let digits = strip_hex(s);
    let invalid = || RegMapError::InvalidHex {
        value: s.to_string(),
    };
    if digits.is_empty() {
        return Err(invalid());
    }

    let mut bits = RegisterBits::repeat(false, width);
    for (nibble_idx, c) in digits.chars().rev().enumerate() {
        let nibble = c.to_digit(16).ok_or_else(invalid)?;
        for bit in 0..4 {
            let pos = nibble_idx * 4 + bit;
            if pos < width && nibble & (1 << bit) != 0 {
                bits.set(pos, true);
            }
        }
    }
    Ok(bits)
}

fn default_address_width() -> usize {
    DEFAULT_ADDRESS_WIDTH
}

fn default_base() -> String {
    format!("{:#x}", DEFAULT_BASE)
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_reset() -> String {
    "0x0".to_string()
}
