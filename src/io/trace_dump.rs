//! Human-readable rendering of codec [`TraceEvent`]s for `--debug`.
//!
//! Output is best-effort: a failed write to the dump stream is ignored, it
//! never fails the file operation.

use std::io::{self, Write};

use crate::huffman::{CodeNode, CodeTable, FrequencyTable};
use crate::trace::{Trace, TraceEvent};

/// Writes every event to `out` as a `[DEBUG]` section.
#[derive(Debug)]
pub struct TraceDump<W: Write> {
    out: W,
}

impl<W: Write> TraceDump<W> {
    pub fn new(out: W) -> Self {
        TraceDump { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, event: &TraceEvent<'_>) -> io::Result<()> {
        let out = &mut self.out;
        match *event {
            TraceEvent::Frequencies(freq) => {
                writeln!(out, "[DEBUG] Frequency table")?;
                write_frequencies(out, freq)
            }
            TraceEvent::EncoderTree(root) => {
                writeln!(out, "[DEBUG] Huffman binary tree")?;
                write_tree(out, root, 0)
            }
            TraceEvent::CodeTable(table) => {
                writeln!(out, "[DEBUG] Prefix table")?;
                write_table(out, table)
            }
            TraceEvent::SizeEstimate {
                original,
                predicted_payload,
            } => {
                writeln!(out, "[DEBUG] Compression size")?;
                writeln!(out, "original size: {original}")?;
                writeln!(out, "predicted compressed size: {predicted_payload}")?;
                let ratio = if original == 0 {
                    0.0
                } else {
                    predicted_payload as f64 / original as f64
                };
                writeln!(out, "compression ratio: {ratio:.6}")
            }
            TraceEvent::TableSelfCheck { matches } => {
                writeln!(out, "[DEBUG] Decoded table")?;
                if matches {
                    writeln!(out, "Encoded and decoded tables match!")
                } else {
                    writeln!(out, "Encoded and decoded tables differ!")
                }
            }
            TraceEvent::Header(h) => {
                writeln!(out, "[DEBUG] Header lengths")?;
                writeln!(out, "Decompressed length: {}", h.original_len)?;
                writeln!(out, "Compressed length: {}", h.payload_len)?;
                writeln!(out, "Encoded prefix table length: {}", h.table_len)
            }
            TraceEvent::DecodedTable(table) => {
                writeln!(out, "[DEBUG] Decoded prefix table")?;
                write_table(out, table)
            }
            TraceEvent::DecoderTree(root) => {
                writeln!(out, "[DEBUG] Decoded Huffman binary tree")?;
                write_tree(out, root, 0)
            }
        }
    }
}

impl<W: Write> Trace for TraceDump<W> {
    fn event(&mut self, event: &TraceEvent<'_>) {
        let _ = self.render(event);
    }
}

/// Control and non-ASCII bytes print as `?`.
fn printable(b: u8) -> char {
    if (32..127).contains(&b) {
        b as char
    } else {
        '?'
    }
}

fn write_frequencies(out: &mut impl Write, freq: &FrequencyTable) -> io::Result<()> {
    for (symbol, count) in freq.as_array().iter().enumerate() {
        write!(out, "{count:6} {} {symbol:02x}  ", printable(symbol as u8))?;
        if (symbol + 1) % 8 == 0 {
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_tree(out: &mut impl Write, node: &CodeNode, depth: usize) -> io::Result<()> {
    write!(out, "{}", "    ".repeat(depth))?;
    match node {
        CodeNode::Leaf { symbol, weight } => writeln!(
            out,
            "char:'{}' code:{symbol:02x} weight:{weight}",
            printable(*symbol)
        ),
        CodeNode::Internal { weight, left, right } => {
            writeln!(out, "node weight:{weight}")?;
            for child in [left, right].into_iter().flatten() {
                write_tree(out, child, depth + 1)?;
            }
            Ok(())
        }
    }
}

fn write_table(out: &mut impl Write, table: &CodeTable) -> io::Result<()> {
    for (symbol, code) in table.iter() {
        writeln!(out, "'{}' {symbol} {code}", printable(symbol))?;
    }
    writeln!(out, "minlen: {}", table.min_len().unwrap_or(0))?;
    writeln!(out, "maxlen: {}", table.max_len().unwrap_or(0))
}
