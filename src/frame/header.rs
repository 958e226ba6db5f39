//! Little-endian field helpers and the fixed 16-byte container header.

use core::ops::Range;

use super::types::{CCHF_MAGIC, HEADER_SIZE};
use crate::huffman::CodecError;

// ─────────────────────────────────────────────────────────────────────────────
// Byte-order helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Read a little-endian `u32` from `src` at byte `offset`.
///
/// The caller guarantees `offset + 4 <= src.len()`.
#[inline]
pub fn read_le32(src: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        src[offset],
        src[offset + 1],
        src[offset + 2],
        src[offset + 3],
    ])
}

/// Write a little-endian `u32` into `dst` at byte `offset`.
#[inline]
pub fn write_le32(dst: &mut [u8], offset: usize, value: u32) {
    dst[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

// ─────────────────────────────────────────────────────────────────────────────
// Header
// ─────────────────────────────────────────────────────────────────────────────

/// The three length fields following the magic tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Length of the uncompressed data.
    pub original_len: u32,
    /// Length of the packed bitstream.
    pub payload_len: u32,
    /// Length of the serialized code table.
    pub table_len: u32,
}

impl FrameHeader {
    /// Parse the header at the start of `src`.
    ///
    /// The magic tag is checked before anything else. Only the header itself is
    /// validated here; see [`FrameHeader::check_bounds`] for the sections that
    /// follow it.
    pub fn parse(src: &[u8]) -> Result<Self, CodecError> {
        let magic: [u8; 4] = src
            .get(..CCHF_MAGIC.len())
            .and_then(|m| m.try_into().ok())
            .ok_or(CodecError::TruncatedInput {
                needed: CCHF_MAGIC.len(),
                available: src.len(),
            })?;
        if magic != CCHF_MAGIC {
            return Err(CodecError::InvalidMagic { found: magic });
        }
        if src.len() < HEADER_SIZE {
            return Err(CodecError::TruncatedInput {
                needed: HEADER_SIZE,
                available: src.len(),
            });
        }
        Ok(FrameHeader {
            original_len: read_le32(src, 4),
            payload_len: read_le32(src, 8),
            table_len: read_le32(src, 12),
        })
    }

    /// Serialize magic plus length fields.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[..4].copy_from_slice(&CCHF_MAGIC);
        write_le32(&mut out, 4, self.original_len);
        write_le32(&mut out, 8, self.payload_len);
        write_le32(&mut out, 12, self.table_len);
        out
    }

    /// Byte range of the encoded table within the container.
    pub fn table_range(&self) -> Range<usize> {
        HEADER_SIZE..HEADER_SIZE + self.table_len as usize
    }

    /// Byte range of the payload within the container.
    pub fn payload_range(&self) -> Range<usize> {
        let start = self.table_range().end;
        start..start + self.payload_len as usize
    }

    /// Header, table and payload bytes together.
    pub fn frame_len(&self) -> usize {
        self.payload_range().end
    }

    /// Fail with [`CodecError::TruncatedInput`] unless a buffer of `available`
    /// bytes holds the whole table and payload.
    pub fn check_bounds(&self, available: usize) -> Result<(), CodecError> {
        let needed = self.frame_len();
        if needed > available {
            return Err(CodecError::TruncatedInput { needed, available });
        }
        Ok(())
    }
}
