//! Bit-level packing of the encoded payload and tree-walking decode.
//!
//! Bits are stored most-significant-bit first. The final byte of a payload is
//! zero-padded in its low bits; the decoder relies on the declared output
//! length, not on the padding, to know where the data ends.

use super::code::CodeTable;
use super::tree::CodeNode;
use super::types::{BitCode, CodecError};

/// Packed payload plus the exact number of meaningful bits in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBits {
    pub bytes: Vec<u8>,
    pub bit_count: u64,
}

/// MSB-first byte accumulator.
#[derive(Debug, Default)]
struct BitWriter {
    out: Vec<u8>,
    acc: u8,
    filled: u8,
    bit_count: u64,
}

impl BitWriter {
    fn with_capacity(bytes: usize) -> Self {
        BitWriter {
            out: Vec::with_capacity(bytes),
            ..Default::default()
        }
    }

    #[inline]
    fn push(&mut self, bit: bool) {
        if bit {
            self.acc |= 0x80 >> self.filled;
        }
        self.filled += 1;
        self.bit_count += 1;
        if self.filled == 8 {
            self.out.push(self.acc);
            self.acc = 0;
            self.filled = 0;
        }
    }

    fn push_code(&mut self, code: &BitCode) {
        for bit in code.iter() {
            self.push(bit);
        }
    }

    fn finish(mut self) -> PackedBits {
        if self.filled != 0 {
            self.out.push(self.acc);
        }
        PackedBits {
            bytes: self.out,
            bit_count: self.bit_count,
        }
    }
}

/// Encode every byte of `src` with its code from `table`.
///
/// Every byte of `src` must have a code; a missing one is reported as
/// [`CodecError::InvalidCodeLength`] with `bits: 0`.
pub fn pack(src: &[u8], table: &CodeTable) -> Result<PackedBits, CodecError> {
    let mut writer = BitWriter::with_capacity(src.len());
    for &symbol in src {
        let code = table
            .get(symbol)
            .ok_or(CodecError::InvalidCodeLength { symbol, bits: 0 })?;
        writer.push_code(code);
    }
    Ok(writer.finish())
}

/// Decode `original_len` symbols from `payload` by walking the tree at `root`.
///
/// Decoding stops as soon as `original_len` symbols are produced; any bits
/// left in `payload` are padding. A bit that leads to a missing child is
/// [`CodecError::CorruptBitstream`] carrying the payload byte offset. Running
/// out of payload before `original_len` symbols is
/// [`CodecError::TruncatedInput`].
pub fn unpack(payload: &[u8], root: &CodeNode, original_len: usize) -> Result<Vec<u8>, CodecError> {
    if original_len == 0 {
        return Ok(Vec::new());
    }
    if root.is_leaf() {
        return Err(CodecError::CorruptBitstream { offset: 0 });
    }

    // Every symbol costs at least one bit, so the payload bounds the output.
    let mut out = Vec::with_capacity(original_len.min(payload.len().saturating_mul(8)));
    let mut node = root;
    for (offset, &byte) in payload.iter().enumerate() {
        for shift in (0..8).rev() {
            let bit = (byte >> shift) & 1 == 1;
            node = node
                .child(bit)
                .ok_or(CodecError::CorruptBitstream { offset })?;
            if let CodeNode::Leaf { symbol, .. } = node {
                out.push(*symbol);
                if out.len() == original_len {
                    return Ok(out);
                }
                node = root;
            }
        }
    }

    Err(CodecError::TruncatedInput {
        needed: original_len,
        available: out.len(),
    })
}
