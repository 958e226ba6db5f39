//! `CCHF` container constants and the inspection summary type.
//!
//! ```text
//! offset 0   : 4 bytes  magic "CCHF"
//! offset 4   : u32 LE   original length
//! offset 8   : u32 LE   payload length
//! offset 12  : u32 LE   encoded table length
//! offset 16  : encoded table
//! offset 16+table length : payload
//! ```

use super::header::FrameHeader;

/// Container tag at offset 0.
pub const CCHF_MAGIC: [u8; 4] = *b"CCHF";

/// Size of one length field.
pub const FIELD_SIZE: usize = 4;

/// Magic plus three length fields.
pub const HEADER_SIZE: usize = CCHF_MAGIC.len() + 3 * FIELD_SIZE;

/// Container summary returned by [`frame_info`](super::frame_info) without
/// decoding the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    pub header: FrameHeader,
    /// Number of entries in the encoded code table.
    pub table_entries: usize,
    /// Longest code in the table, in bits.
    pub max_code_len: usize,
}

impl FrameInfo {
    /// Total bytes the container occupies (header, table and payload).
    pub fn frame_len(&self) -> usize {
        self.header.frame_len()
    }

    /// Container size divided by the original size; 0.0 for an empty original.
    pub fn ratio(&self) -> f64 {
        match self.header.original_len {
            0 => 0.0,
            n => self.frame_len() as f64 / n as f64,
        }
    }
}
