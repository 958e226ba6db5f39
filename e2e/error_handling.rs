//! E2E Test Suite 03: Malformed and corrupted containers.
//!
//! Every damaged input must come back as a `CodecError`, never a panic and
//! never output of the wrong length.

use cchf::frame::{write_le32, HEADER_SIZE};
use cchf::{compress, decompress, frame_info, CodecError};

const SAMPLE: &[u8] = b"Coding\tChallenges\nAre\tFun!!! :)";

fn container() -> Vec<u8> {
    compress(SAMPLE).unwrap()
}

#[test]
fn empty_input_cannot_be_compressed() {
    assert_eq!(compress(b""), Err(CodecError::EmptyInput));
}

#[test]
fn every_prefix_of_a_container_is_rejected() {
    let c = container();
    for cut in 0..c.len() {
        let r = decompress(&c[..cut]);
        assert!(
            matches!(r, Err(CodecError::TruncatedInput { .. })),
            "cut at {cut}: {r:?}"
        );
    }
}

#[test]
fn magic_is_checked_first() {
    let mut c = container();
    c[3] = b'G';
    assert_eq!(
        decompress(&c),
        Err(CodecError::InvalidMagic { found: *b"CCHG" })
    );
    // Even with nonsense lengths behind it.
    write_le32(&mut c, 8, u32::MAX);
    assert!(matches!(decompress(&c), Err(CodecError::InvalidMagic { .. })));
    assert!(matches!(frame_info(&c), Err(CodecError::InvalidMagic { .. })));
}

#[test]
fn duplicate_table_entry_is_a_collision() {
    // count=2, 'a' -> "0", 'a' -> "1"
    let table = [2u8, b'a', 1, 0x00, b'a', 1, 0x80];
    let mut c = vec![0u8; HEADER_SIZE];
    c[..4].copy_from_slice(b"CCHF");
    write_le32(&mut c, 4, 1);
    write_le32(&mut c, 8, 1);
    write_le32(&mut c, 12, table.len() as u32);
    c.extend_from_slice(&table);
    c.push(0x00);
    assert_eq!(decompress(&c), Err(CodecError::CodeCollision { symbol: b'a' }));
}

#[test]
fn prefix_conflict_is_a_collision() {
    // 'a' -> "0", 'b' -> "01"
    let table = [2u8, b'a', 1, 0x00, b'b', 2, 0x40];
    let mut c = vec![0u8; HEADER_SIZE];
    c[..4].copy_from_slice(b"CCHF");
    write_le32(&mut c, 4, 1);
    write_le32(&mut c, 8, 1);
    write_le32(&mut c, 12, table.len() as u32);
    c.extend_from_slice(&table);
    c.push(0x00);
    assert!(matches!(decompress(&c), Err(CodecError::CodeCollision { .. })));
}

#[test]
fn zero_length_code_is_rejected() {
    let table = [1u8, b'a', 0];
    let mut c = vec![0u8; HEADER_SIZE];
    c[..4].copy_from_slice(b"CCHF");
    write_le32(&mut c, 4, 1);
    write_le32(&mut c, 8, 0);
    write_le32(&mut c, 12, table.len() as u32);
    c.extend_from_slice(&table);
    assert_eq!(
        decompress(&c),
        Err(CodecError::InvalidCodeLength { symbol: b'a', bits: 0 })
    );
}

#[test]
fn single_bit_flips_never_yield_wrong_length() {
    let c = container();
    for byte in 0..c.len() {
        for bit in 0..8 {
            let mut damaged = c.clone();
            damaged[byte] ^= 1 << bit;
            if let Ok(out) = decompress(&damaged) {
                // Only a flip in the original-length field can change it,
                // and then the output must follow the field.
                let declared = u32::from_le_bytes(damaged[4..8].try_into().unwrap());
                assert_eq!(out.len(), declared as usize, "flip {byte}:{bit}");
            }
        }
    }
}

#[test]
fn payload_bit_flips_on_single_symbol_input_are_reported() {
    // 'a' has code "0" and there is no right branch, so any set bit in the
    // payload is undecodable.
    let c = compress(&[b'a'; 40]).unwrap();
    let payload_start = c.len() - 5;
    for byte in payload_start..c.len() {
        let mut damaged = c.clone();
        damaged[byte] |= 0x01;
        assert_eq!(
            decompress(&damaged),
            Err(CodecError::CorruptBitstream { offset: byte })
        );
    }
}
