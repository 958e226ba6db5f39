// Integration tests for src/frame/header.rs: the 16-byte container header.

use cchf::frame::{read_le32, write_le32, FrameHeader, CCHF_MAGIC, HEADER_SIZE};
use cchf::CodecError;

#[test]
fn header_constants() {
    assert_eq!(&CCHF_MAGIC, b"CCHF");
    assert_eq!(HEADER_SIZE, 16);
}

#[test]
fn le32_helpers() {
    let mut buf = [0xAAu8; 6];
    write_le32(&mut buf, 1, 0xDEAD_BEEF);
    assert_eq!(buf, [0xAA, 0xEF, 0xBE, 0xAD, 0xDE, 0xAA]);
    assert_eq!(read_le32(&buf, 1), 0xDEAD_BEEF);
}

#[test]
fn parse_inverts_to_bytes() {
    let h = FrameHeader {
        original_len: 1_000_000,
        payload_len: 600_000,
        table_len: 77,
    };
    let bytes = h.to_bytes();
    assert_eq!(&bytes[..4], b"CCHF");
    assert_eq!(FrameHeader::parse(&bytes), Ok(h));
}

#[test]
fn ranges_follow_header() {
    let h = FrameHeader {
        original_len: 18,
        payload_len: 4,
        table_len: 10,
    };
    assert_eq!(h.table_range(), 16..26);
    assert_eq!(h.payload_range(), 26..30);
    assert_eq!(h.frame_len(), 30);
    assert!(h.check_bounds(30).is_ok());
    assert!(h.check_bounds(64).is_ok());
    assert_eq!(
        h.check_bounds(29),
        Err(CodecError::TruncatedInput {
            needed: 30,
            available: 29
        })
    );
}

#[test]
fn parse_errors_in_order() {
    // Fewer than four bytes: cannot even read the magic.
    assert_eq!(
        FrameHeader::parse(b"CC"),
        Err(CodecError::TruncatedInput {
            needed: 4,
            available: 2
        })
    );
    // Wrong magic is reported before the short header.
    assert_eq!(
        FrameHeader::parse(b"LZ4!"),
        Err(CodecError::InvalidMagic { found: *b"LZ4!" })
    );
    assert_eq!(
        FrameHeader::parse(b"CCHF\x01\x00\x00\x00"),
        Err(CodecError::TruncatedInput {
            needed: 16,
            available: 8
        })
    );
}
