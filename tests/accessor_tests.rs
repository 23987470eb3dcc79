//! Integration tests for chunked register accessors.

use mmio_regmap::common::RegMapError;
use mmio_regmap::regmap::{ChunkedAccessor, RegisterAccess, RegisterCell, RegisterMapBuilder};

/// Tests write-then-read at full data width.
#[test]
fn test_full_width_round_trip() {
    let cell = RegisterCell::new(32);
    let acc = ChunkedAccessor::new("reg", cell.clone(), 32, false).unwrap();

    acc.write(0, 0xDEAD_BEEF);
    assert_eq!(acc.read(0), 0xDEAD_BEEF);
    assert_eq!(cell.load_u64(), 0xDEAD_BEEF);
}

/// Tests every value of a register narrower than the data width.
#[test]
fn test_narrow_register_round_trip() {
    let cell = RegisterCell::new(6);
    let acc = ChunkedAccessor::new("narrow", cell, 16, false).unwrap();
    assert_eq!(acc.chunks(), 1);

    for v in 0..(1u64 << 6) {
        acc.write(0, v);
        assert_eq!(acc.read(0), v);
    }

    // Bits above the register width are dropped.
    acc.write(0, 0xFFFF);
    assert_eq!(acc.read(0), 0x3F);
}

/// Tests zero extension of a partial tail chunk.
#[test]
fn test_partial_tail_zero_extension() {
    let cell = RegisterCell::new(20);
    let acc = ChunkedAccessor::new("tail", cell.clone(), 8, false).unwrap();
    assert_eq!(acc.chunks(), 3);

    acc.write(2, 0xFF);
    assert_eq!(acc.read(2), 0x0F);
    assert_eq!(cell.load_u64(), 0xF_0000);
}

/// Tests that a chunk write leaves every other chunk untouched.
#[test]
fn test_chunk_isolation_under_write() {
    let cell = RegisterCell::with_value(20, 0xA_BC_DE);
    let acc = ChunkedAccessor::new("iso", cell.clone(), 8, false).unwrap();

    acc.write(1, 0x55);
    assert_eq!(acc.read(0), 0xDE);
    assert_eq!(acc.read(1), 0x55);
    assert_eq!(acc.read(2), 0x0A);
    assert_eq!(cell.load_u64(), 0xA_55_DE);

    acc.write(0, 0x1_23);
    assert_eq!(acc.read(0), 0x23);
    assert_eq!(acc.read(1), 0x55);
    assert_eq!(acc.read(2), 0x0A);
}

/// Tests a register wider than 64 bits split into 32-bit chunks.
#[test]
fn test_wide_register_chunks() {
    let cell = RegisterCell::new(100);
    let acc = ChunkedAccessor::new("wide", cell.clone(), 32, false).unwrap();
    assert_eq!(acc.chunks(), 4);

    acc.write(0, 0x0000_0001);
    acc.write(1, 0x2222_2222);
    acc.write(2, 0x3333_3333);
    acc.write(3, 0xFFFF_FFFF);

    assert_eq!(acc.read(0), 0x0000_0001);
    assert_eq!(acc.read(1), 0x2222_2222);
    assert_eq!(acc.read(2), 0x3333_3333);
    assert_eq!(acc.read(3), 0xF);

    let bits = cell.load();
    assert_eq!(bits.len(), 100);
    assert_eq!(bits.count_ones(), 1 + 8 + 16 + 4);
}

/// Tests out-of-range chunk indices.
#[test]
fn test_out_of_range_chunk() {
    let cell = RegisterCell::with_value(16, 0xBEEF);
    let acc = ChunkedAccessor::new("oob", cell.clone(), 8, false).unwrap();

    assert_eq!(acc.read(2), 0);
    assert_eq!(acc.read(usize::MAX), 0);

    acc.write(2, 0xFF);
    acc.write(usize::MAX, 0xFF);
    assert_eq!(cell.load_u64(), 0xBEEF);
}

/// Tests that bus writes to a read-only register are discarded.
#[test]
fn test_read_only_suppression() {
    let mut builder = RegisterMapBuilder::new(8, 16, None).unwrap();
    let status = RegisterCell::with_value(24, 0x12_34_56);
    let desc = builder.create_register(&status, "status", true).unwrap();
    assert!(desc.is_read_only());

    for chunk in 0..3 {
        desc.write(chunk, 0xFF);
    }
    assert_eq!(desc.read(0), 0x56);
    assert_eq!(desc.read(1), 0x34);
    assert_eq!(desc.read(2), 0x12);

    // The owning logic can still update the storage.
    status.store_u64(0xAB_CD_EF);
    assert_eq!(desc.read(1), 0xCD);
    desc.write(1, 0x00);
    assert_eq!(desc.read(1), 0xCD);
}

/// Tests that accessors observe storage updates made outside the bus.
#[test]
fn test_accessor_shares_storage() {
    let cell = RegisterCell::new(16);
    let acc = ChunkedAccessor::new("shared", cell.clone(), 8, false).unwrap();

    cell.store_u64(0x1234);
    assert_eq!(acc.read(0), 0x34);
    assert_eq!(acc.read(1), 0x12);

    acc.write(1, 0x56);
    assert_eq!(cell.load_u64(), 0x5634);
}

/// Tests a single-bit register.
#[test]
fn test_single_bit_register() {
    let cell = RegisterCell::new(1);
    let acc = ChunkedAccessor::new("bit", cell, 64, false).unwrap();

    acc.write(0, u64::MAX);
    assert_eq!(acc.read(0), 1);
    acc.write(0, 2);
    assert_eq!(acc.read(0), 0);
}

/// Tests a 64-bit data width carrying full 64-bit chunks.
#[test]
fn test_sixty_four_bit_chunks() {
    let cell = RegisterCell::new(128);
    let acc = ChunkedAccessor::new("dw64", cell, 64, false).unwrap();

    acc.write(1, u64::MAX);
    acc.write(0, 0x0123_4567_89AB_CDEF);
    assert_eq!(acc.read(0), 0x0123_4567_89AB_CDEF);
    assert_eq!(acc.read(1), u64::MAX);
}

/// Tests that unsupported data widths are rejected up front.
#[test]
fn test_rejects_unsupported_data_width() {
    let cell = RegisterCell::new(200);

    let err = ChunkedAccessor::new("wide", cell.clone(), 128, false).err().unwrap();
    assert!(matches!(err, RegMapError::UnsupportedDataWidth { data_width: 128 }));
    assert!(matches!(
        ChunkedAccessor::new("zero", cell.clone(), 0, false).err(),
        Some(RegMapError::UnsupportedDataWidth { data_width: 0 })
    ));

    let acc = ChunkedAccessor::new("max", cell.clone(), 64, false).unwrap();
    acc.write(0, 5);
    assert_eq!(acc.read(0), 5);
    assert_eq!(acc.chunks(), 4);
}
