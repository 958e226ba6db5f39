// Integration tests for src/io/trace_dump.rs: `--debug` rendering.

use cchf::io::TraceDump;
use cchf::{compress_with, decompress_with};

fn dump_compress(data: &[u8]) -> String {
    let mut dump = TraceDump::new(Vec::new());
    compress_with(data, &mut dump).unwrap();
    String::from_utf8(dump.into_inner()).unwrap()
}

#[test]
fn frequency_table_has_32_rows() {
    let text = dump_compress(b"hello huffman");
    let start = text.find("[DEBUG] Frequency table\n").unwrap();
    let body = &text[start..];
    let rows = body
        .lines()
        .skip(1)
        .take_while(|l| !l.starts_with("[DEBUG]"))
        .count();
    assert_eq!(rows, 32);
    assert!(body.contains("     2 h 68  "));
    // Non-printable symbols are shown as '?'.
    assert!(body.contains("     0 ? 0a  "));
}

#[test]
fn sections_in_stage_order() {
    let text = dump_compress(b"Coding\tChallenges\nAre\tFun!!! :)");
    let order = [
        "[DEBUG] Frequency table",
        "[DEBUG] Huffman binary tree",
        "[DEBUG] Prefix table",
        "[DEBUG] Compression size",
        "Encoded and decoded tables match!",
    ];
    let positions: Vec<usize> = order.iter().map(|s| text.find(s).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(text.contains("original size: 31\n"));
}

#[test]
fn decoder_sections() {
    let c = cchf::compress(b"aaabbcaaabbcaaabbc").unwrap();
    let mut dump = TraceDump::new(Vec::new());
    decompress_with(&c, &mut dump).unwrap();
    let text = String::from_utf8(dump.into_inner()).unwrap();
    assert!(text.contains("Decompressed length: 18\nCompressed length: 4\nEncoded prefix table length: 10\n"));
    assert!(text.contains("'a' 97 0\n'b' 98 11\n'c' 99 10\n"));
    assert!(text.contains("node weight:3\n"));
    assert!(text.contains("    char:'a' code:61 weight:1\n"));
}
