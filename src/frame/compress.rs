//! One-shot `CCHF` compression.

use super::header::FrameHeader;
use crate::huffman::{
    build_tree, decode_table, encode_table, pack, CodeTable, CodecError, FrequencyTable,
};
use crate::trace::{NoTrace, Trace, TraceEvent};

/// Compress `src` into a complete `CCHF` container.
///
/// Fails with [`CodecError::EmptyInput`] for an empty buffer and
/// [`CodecError::InputTooLarge`] when a length does not fit a `u32` field.
pub fn compress(src: &[u8]) -> Result<Vec<u8>, CodecError> {
    compress_with(src, &mut NoTrace)
}

/// [`compress`], reporting intermediate state to `trace`.
pub fn compress_with(src: &[u8], trace: &mut dyn Trace) -> Result<Vec<u8>, CodecError> {
    if src.is_empty() {
        return Err(CodecError::EmptyInput);
    }
    let original_len =
        u32::try_from(src.len()).map_err(|_| CodecError::InputTooLarge { len: src.len() })?;

    let freq = FrequencyTable::from_bytes(src);
    trace.event(&TraceEvent::Frequencies(&freq));

    let tree = build_tree(&freq)?;
    trace.event(&TraceEvent::EncoderTree(&tree));

    let table = CodeTable::from_tree(&tree)?;
    trace.event(&TraceEvent::CodeTable(&table));

    let predicted_payload = table.encoded_bits(&freq).div_ceil(8) as usize;
    trace.event(&TraceEvent::SizeEstimate {
        original: src.len(),
        predicted_payload,
    });

    let encoded_table = encode_table(&table)?;
    if trace.enabled() {
        let matches = decode_table(&encoded_table).is_ok_and(|decoded| decoded == table);
        trace.event(&TraceEvent::TableSelfCheck { matches });
    }

    let packed = pack(src, &table)?;
    debug_assert_eq!(packed.bytes.len(), predicted_payload);

    let header = FrameHeader {
        original_len,
        payload_len: u32::try_from(packed.bytes.len())
            .map_err(|_| CodecError::InputTooLarge { len: src.len() })?,
        table_len: encoded_table.len() as u32,
    };

    let mut out = Vec::with_capacity(header.frame_len());
    out.extend_from_slice(&header.to_bytes());
    out.extend_from_slice(&encoded_table);
    out.extend_from_slice(&packed.bytes);
    Ok(out)
}
