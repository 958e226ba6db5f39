// Integration tests for src/frame/decompress.rs: container parsing, decoding
// and `frame_info`.

use cchf::frame::{FrameHeader, HEADER_SIZE};
use cchf::{compress, decompress, decompress_with, frame_info, CodecError, TraceEvent};

#[test]
fn roundtrip_corpus_strings() {
    for data in [
        &b"hello huffman"[..],
        &b"aaabbcaaabbcaaabbc"[..],
        &b"Coding\tChallenges\nAre\tFun!!! :)"[..],
        &[b'a'; 66][..],
    ] {
        assert_eq!(decompress(&compress(data).unwrap()).unwrap(), data);
    }
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut c = compress(b"hello huffman").unwrap();
    c.extend_from_slice(b"garbage after the frame");
    assert_eq!(decompress(&c).unwrap(), b"hello huffman");
}

#[test]
fn short_buffers() {
    assert_eq!(
        decompress(b""),
        Err(CodecError::TruncatedInput {
            needed: 4,
            available: 0
        })
    );
    assert_eq!(
        decompress(b"CCHF"),
        Err(CodecError::TruncatedInput {
            needed: HEADER_SIZE,
            available: 4
        })
    );
}

#[test]
fn wrong_magic() {
    let mut c = compress(b"hello huffman").unwrap();
    c[0] = b'X';
    assert_eq!(
        decompress(&c),
        Err(CodecError::InvalidMagic { found: *b"XCHF" })
    );
}

#[test]
fn declared_lengths_beyond_buffer() {
    let c = compress(b"hello huffman").unwrap();
    let cut = &c[..c.len() - 1];
    assert_eq!(
        decompress(cut),
        Err(CodecError::TruncatedInput {
            needed: c.len(),
            available: c.len() - 1
        })
    );
}

#[test]
fn zero_entry_table_is_rejected() {
    let header = FrameHeader {
        original_len: 3,
        payload_len: 1,
        table_len: 1,
    };
    let mut c = header.to_bytes().to_vec();
    c.push(7); // declares seven entries, holds none
    c.push(0);
    assert_eq!(
        decompress(&c),
        Err(CodecError::InvalidTableSize { entries: 0 })
    );
}

#[test]
fn payload_shorter_than_original_is_truncated() {
    let mut c = compress(b"hello huffman").unwrap();
    let mut h = FrameHeader::parse(&c).unwrap();
    h.original_len += 50;
    c[..HEADER_SIZE].copy_from_slice(&h.to_bytes());
    assert!(matches!(
        decompress(&c),
        Err(CodecError::TruncatedInput { needed: 63, .. })
    ));
}

#[test]
fn decoder_trace_order() {
    let c = compress(b"aaabbcaaabbcaaabbc").unwrap();
    let mut seen = Vec::new();
    let mut trace = |e: &TraceEvent<'_>| {
        seen.push(match e {
            TraceEvent::Header(h) => format!("header {}", h.original_len),
            TraceEvent::DecodedTable(t) => format!("table {}", t.len()),
            TraceEvent::DecoderTree(t) => format!("tree {}", t.leaf_count()),
            other => format!("{other:?}"),
        });
    };
    decompress_with(&c, &mut trace).unwrap();
    assert_eq!(seen, ["header 18", "table 3", "tree 3"]);
}

#[test]
fn frame_info_skips_payload() {
    let c = compress(b"Coding\tChallenges\nAre\tFun!!! :)").unwrap();
    let info = frame_info(&c).unwrap();
    assert_eq!(info.header.original_len, 31);
    assert_eq!(info.table_entries, 21);
    assert_eq!(info.frame_len(), c.len());
    assert!(info.max_code_len >= 4);
    assert!(info.ratio() > 0.0);

    // A corrupt payload does not affect the summary.
    let mut bad = c.clone();
    let start = info.header.payload_range().start;
    for b in &mut bad[start..] {
        *b = 0xFF;
    }
    assert_eq!(frame_info(&bad), Ok(info));
}
