//! One-shot `CCHF` decompression and header inspection.

use super::header::FrameHeader;
use super::types::FrameInfo;
use crate::huffman::{decode_table, rebuild_tree, unpack, CodecError};
use crate::trace::{NoTrace, Trace, TraceEvent};

/// Decompress a complete `CCHF` container.
///
/// The magic tag is checked first, then the declared table and payload lengths
/// against `src.len()`. Bytes after the declared payload are ignored.
pub fn decompress(src: &[u8]) -> Result<Vec<u8>, CodecError> {
    decompress_with(src, &mut NoTrace)
}

/// [`decompress`], reporting intermediate state to `trace`.
pub fn decompress_with(src: &[u8], trace: &mut dyn Trace) -> Result<Vec<u8>, CodecError> {
    let header = FrameHeader::parse(src)?;
    trace.event(&TraceEvent::Header(&header));
    header.check_bounds(src.len())?;

    let table = decode_table(&src[header.table_range()])?;
    trace.event(&TraceEvent::DecodedTable(&table));

    let root = rebuild_tree(&table)?;
    trace.event(&TraceEvent::DecoderTree(&root));

    let payload = header.payload_range();
    unpack(&src[payload.clone()], &root, header.original_len as usize)
        .map_err(|e| e.offset_by(payload.start))
}

/// Validate the header and code table of `src` and summarize them, without
/// touching the payload.
pub fn frame_info(src: &[u8]) -> Result<FrameInfo, CodecError> {
    let header = FrameHeader::parse(src)?;
    header.check_bounds(src.len())?;
    let table = decode_table(&src[header.table_range()])?;
    Ok(FrameInfo {
        header,
        table_entries: table.len(),
        max_code_len: table.max_len().unwrap_or(0),
    })
}
