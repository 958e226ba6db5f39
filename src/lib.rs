// cchf: Huffman container codec and command-line tool

pub mod config;
pub mod huffman;
pub mod frame;
pub mod trace;
pub mod util;
pub mod io;
pub mod cli;

// ── Version constants ────────────────────────────────────────────────────────
pub const CCHF_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version string.
pub fn version_string() -> &'static str {
    CCHF_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use frame::{compress, compress_with, decompress, decompress_with, frame_info, FrameInfo};
pub use huffman::CodecError;
pub use trace::{NoTrace, Trace, TraceEvent};
