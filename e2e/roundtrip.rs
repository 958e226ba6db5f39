//! E2E Test Suite 01: Round-trip properties of the public codec API.
//!
//! Coverage:
//! - Reference strings, degenerate and full alphabets
//! - Header length fields against the actual container
//! - Prefix-freeness of the stored code table
//! - Determinism and trace transparency
//! - Larger pseudo-random and skewed buffers

use cchf::frame::{FrameHeader, HEADER_SIZE};
use cchf::huffman::{decode_table, FrequencyTable};
use cchf::{compress, compress_with, decompress, TraceEvent};

fn roundtrip(data: &[u8]) -> Vec<u8> {
    let c = compress(data).expect("compress");
    let d = decompress(&c).expect("decompress");
    assert_eq!(d, data, "round trip mismatch for {} bytes", data.len());
    c
}

/// xorshift64*, enough to fill buffers reproducibly.
fn pseudo_random(len: usize, mut state: u64) -> Vec<u8> {
    (0..len)
        .map(|_| {
            state ^= state >> 12;
            state ^= state << 25;
            state ^= state >> 27;
            (state.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 56) as u8
        })
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════════
// Reference inputs
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn reference_strings() {
    for s in [
        "hello huffman",
        "aaabbcaaabbcaaabbc",
        "Coding\tChallenges\nAre\tFun!!! :)",
        "a",
        "ab",
    ] {
        roundtrip(s.as_bytes());
    }
}

#[test]
fn sixty_six_identical_bytes() {
    let data = [b'a'; 66];
    let c = roundtrip(&data);
    let h = FrameHeader::parse(&c).unwrap();
    // One symbol, one bit each.
    assert_eq!(h.payload_len, 9);
    let table = decode_table(&c[h.table_range()]).unwrap();
    assert_eq!(table.len(), 1);
    assert!(table.get(b'a').unwrap().len() >= 1);
}

#[test]
fn exactly_two_symbols() {
    let data: Vec<u8> = (0..1000).map(|i| if i % 7 == 0 { 0x00 } else { 0xFF }).collect();
    let c = roundtrip(&data);
    let h = FrameHeader::parse(&c).unwrap();
    assert_eq!(h.payload_len, 125);
}

#[test]
fn full_alphabet_triangular() {
    let data: Vec<u8> = (0..=255u8)
        .flat_map(|b| std::iter::repeat(b).take(b as usize + 1))
        .collect();
    let c = roundtrip(&data);
    let h = FrameHeader::parse(&c).unwrap();
    assert_eq!(c[HEADER_SIZE], 0, "256 entries are stored as 0");
    let table = decode_table(&c[h.table_range()]).unwrap();
    assert_eq!(table.len(), 256);
    assert!(table.is_prefix_free());
}

#[test]
fn every_single_byte_value() {
    for b in 0..=255u8 {
        roundtrip(&[b]);
        roundtrip(&[b, b, b]);
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Size accounting
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn header_fields_describe_container() {
    for seed in 1..6u64 {
        let data = pseudo_random(3000 + seed as usize * 517, seed);
        let c = roundtrip(&data);
        let h = FrameHeader::parse(&c).unwrap();
        assert_eq!(h.original_len as usize, data.len());
        assert_eq!(c.len(), HEADER_SIZE + h.table_len as usize + h.payload_len as usize);

        let freq = FrequencyTable::from_bytes(&data);
        let table = decode_table(&c[h.table_range()]).unwrap();
        let bits = table.encoded_bits(&freq);
        assert_eq!(h.payload_len as u64, bits.div_ceil(8));
    }
}

#[test]
fn skewed_data_compresses() {
    let mut data = vec![b'e'; 50_000];
    data.extend(pseudo_random(2_000, 42));
    let c = roundtrip(&data);
    assert!(c.len() < data.len() / 4, "{} vs {}", c.len(), data.len());
}

// ═════════════════════════════════════════════════════════════════════════════
// Determinism
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn tracing_does_not_change_output() {
    let data = pseudo_random(10_000, 7);
    let mut events = 0usize;
    let traced = compress_with(&data, &mut |_: &TraceEvent<'_>| events += 1).unwrap();
    assert_eq!(traced, compress(&data).unwrap());
    assert_eq!(events, 5);
}

#[test]
fn large_buffer() {
    let data = pseudo_random(1 << 20, 99);
    roundtrip(&data);
}
