//! Structured debug events emitted by the codec.
//!
//! The codec never prints. Callers that want to see intermediate state pass a
//! [`Trace`] implementation to [`compress_with`](crate::frame::compress_with)
//! or [`decompress_with`](crate::frame::decompress_with); everybody else uses
//! [`NoTrace`]. Closures taking a `&TraceEvent` implement `Trace` directly.

use crate::frame::FrameHeader;
use crate::huffman::{CodeNode, CodeTable, FrequencyTable};

/// One observable step of a compression or decompression call.
#[derive(Debug, Clone, Copy)]
pub enum TraceEvent<'a> {
    /// Symbol counts of the input.
    Frequencies(&'a FrequencyTable),
    /// Tree built from the frequencies.
    EncoderTree(&'a CodeNode),
    /// Codes derived from the encoder tree.
    CodeTable(&'a CodeTable),
    /// Payload size predicted from code lengths, before packing.
    SizeEstimate {
        original: usize,
        predicted_payload: usize,
    },
    /// Result of decoding the freshly encoded table and comparing it with the
    /// table it came from.
    TableSelfCheck { matches: bool },
    /// Header fields as read by the decoder.
    Header(&'a FrameHeader),
    /// Table recovered from the container.
    DecodedTable(&'a CodeTable),
    /// Decoder tree rebuilt from the recovered table.
    DecoderTree(&'a CodeNode),
}

/// Receiver of [`TraceEvent`]s.
pub trait Trace {
    fn event(&mut self, event: &TraceEvent<'_>) {
        let _ = event;
    }

    /// Whether events are wanted at all. Work that only exists to feed the
    /// trace (the table self-check) is skipped when this is `false`.
    fn enabled(&self) -> bool {
        true
    }
}

/// Discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl Trace for NoTrace {
    fn enabled(&self) -> bool {
        false
    }
}

impl<F> Trace for F
where
    F: FnMut(&TraceEvent<'_>),
{
    fn event(&mut self, event: &TraceEvent<'_>) {
        self(event)
    }
}
