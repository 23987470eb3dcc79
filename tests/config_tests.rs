//! Integration tests for configuration loading.

use mmio_regmap::common::RegMapError;
use mmio_regmap::config::{parse_hex, parse_hex_bits, Config};
use mmio_regmap::soc::Peripheral;

/// Tests defaults for optional bus and register fields.
#[test]
fn test_config_defaults() {
    let config = Config::from_toml(
        r#"
        [bus]
        data_width = 16

        [[register]]
        name = "ctrl"
        width = 16
        "#,
    )
    .unwrap();

    assert_eq!(config.bus.address_width, 32);
    assert_eq!(config.bus.word_width, None);
    assert_eq!(config.bus.base_val().unwrap(), 0);
    assert_eq!(config.bus.name, "regmap");

    let reg = &config.registers[0];
    assert!(!reg.read_only);
    assert_eq!(reg.reset_bits().unwrap().count_ones(), 0);
}

/// Tests a configuration with no registers.
#[test]
fn test_config_without_registers() {
    let config = Config::from_toml("[bus]\ndata_width = 8\n").unwrap();
    assert!(config.registers.is_empty());

    let periph = Peripheral::new(&config).unwrap();
    assert!(periph.bus.map().is_empty());
}

/// Tests that a missing data width is a parse error.
#[test]
fn test_config_missing_data_width() {
    let err = Config::from_toml("[bus]\naddress_width = 8\n").err().unwrap();
    assert!(matches!(err, RegMapError::Toml { .. }));
}

/// Tests that a bad width ratio fails peripheral construction.
#[test]
fn test_config_bad_ratio() {
    let config = Config::from_toml("[bus]\ndata_width = 32\nword_width = 24\n").unwrap();
    let err = Peripheral::new(&config).err().unwrap();
    assert!(err.is_configuration());
}

/// Tests hex literal parsing.
#[test]
fn test_parse_hex() {
    assert_eq!(parse_hex("0x4000_0000").unwrap(), 0x4000_0000);
    assert_eq!(parse_hex("ff").unwrap(), 0xFF);
    assert_eq!(parse_hex("0XAB").unwrap(), 0xAB);
    assert!(matches!(
        parse_hex("0xZZ"),
        Err(RegMapError::InvalidHex { .. })
    ));
}

/// Tests wide reset values and truncation to the register width.
#[test]
fn test_parse_hex_bits() {
    let bits = parse_hex_bits("0x1_0000_0000_0000_0001", 72).unwrap();
    assert_eq!(bits.len(), 72);
    assert!(bits[0]);
    assert!(bits[64]);
    assert_eq!(bits.count_ones(), 2);

    let truncated = parse_hex_bits("0xFFF", 6).unwrap();
    assert_eq!(truncated.len(), 6);
    assert_eq!(truncated.count_ones(), 6);

    assert!(parse_hex_bits("0x", 8).is_err());
    assert!(parse_hex_bits("0xG1", 8).is_err());
}

/// Tests loading the shipped default configuration.
#[test]
fn test_load_default_config() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/configs/default.toml");
    let config = Config::load(path).unwrap();
    let periph = Peripheral::new(&config).unwrap();
    let map = periph.bus.map();

    assert_eq!(map.len(), 9);
    assert_eq!(map.offset_of("sdata"), Some(32));
    assert!(map.find("mstatus").unwrap().is_read_only());
    assert_eq!(periph.cell("mbaud").unwrap().load_u64(), 0x1b2);
}

/// Tests that loading a missing file reports an I/O error.
#[test]
fn test_load_missing_file() {
    let err = Config::load("/nonexistent/regmap.toml").err().unwrap();
    assert!(matches!(err, RegMapError::Io { .. }));
}
