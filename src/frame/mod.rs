//! `CCHF` container: header, encoded code table, packed payload.
//!
//! This is the layer that drives the [`huffman`](crate::huffman) stages in
//! order and the one library users normally call.

pub mod compress;
pub mod decompress;
pub mod header;
pub mod types;

pub use compress::{compress, compress_with};
pub use decompress::{decompress, decompress_with, frame_info};
pub use header::{read_le32, write_le32, FrameHeader};
pub use types::{FrameInfo, CCHF_MAGIC, FIELD_SIZE, HEADER_SIZE};
