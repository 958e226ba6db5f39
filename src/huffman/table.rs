//! Binary serialization of a [`CodeTable`] and tree reconstruction from it.
//!
//! Layout:
//!
//! ```text
//! +-------+----------------------------------------------+
//! | count | entry * count                                |
//! +-------+----------------------------------------------+
//!   1 B     symbol (1 B) | bits (1 B) | code (ceil(bits/8) B)
//! ```
//!
//! `count` holds the number of entries with 256 written as 0. `bits` is the
//! code length, 1..=255. The code is packed MSB-first; unused low bits of its
//! last byte are zero. Entries are written in ascending symbol order.

use super::code::CodeTable;
use super::tree::CodeNode;
use super::types::{BitCode, CodecError, ALPHABET_SIZE, MAX_CODE_BITS};

/// Serialize `table`.
pub fn encode_table(table: &CodeTable) -> Result<Vec<u8>, CodecError> {
    let entries = table.len();
    if entries == 0 || entries > ALPHABET_SIZE {
        return Err(CodecError::InvalidTableSize { entries });
    }

    let body: usize = table.iter().map(|(_, c)| 2 + c.len().div_ceil(8)).sum();
    let mut out = Vec::with_capacity(1 + body);
    // 256 wraps to 0.
    out.push(entries as u8);

    for (symbol, code) in table.iter() {
        let bits = code.len();
        if bits == 0 || bits > MAX_CODE_BITS {
            return Err(CodecError::InvalidCodeLength { symbol, bits });
        }
        out.push(symbol);
        out.push(bits as u8);
        out.extend_from_slice(code.packed());
    }
    Ok(out)
}

/// Parse a serialized table.
///
/// Reading stops after the declared number of entries, or earlier if the
/// buffer ends cleanly between two entries. A buffer that ends in the middle
/// of an entry is [`CodecError::TruncatedInput`].
pub fn decode_table(src: &[u8]) -> Result<CodeTable, CodecError> {
    let (&count, mut rest) = src.split_first().ok_or(CodecError::TruncatedInput {
        needed: 1,
        available: 0,
    })?;
    let declared = if count == 0 { ALPHABET_SIZE } else { count as usize };

    let mut table = CodeTable::new();
    let mut entries = 0usize;
    while entries < declared && !rest.is_empty() {
        let consumed = src.len() - rest.len();
        let &[symbol, bits, ..] = rest else {
            return Err(CodecError::TruncatedInput {
                needed: consumed + 2,
                available: src.len(),
            });
        };
        let bits = bits as usize;
        if bits == 0 {
            return Err(CodecError::InvalidCodeLength { symbol, bits });
        }
        let n = bits.div_ceil(8);
        let packed = rest.get(2..2 + n).ok_or(CodecError::TruncatedInput {
            needed: consumed + 2 + n,
            available: src.len(),
        })?;
        let code = BitCode::from_packed(packed, bits)
            .ok_or(CodecError::InvalidCodeLength { symbol, bits })?;
        if table.insert(symbol, code).is_some() {
            return Err(CodecError::CodeCollision { symbol });
        }
        rest = &rest[2 + n..];
        entries += 1;
    }

    if entries == 0 {
        return Err(CodecError::InvalidTableSize { entries });
    }
    Ok(table)
}

/// Rebuild a decoding tree from `table` alone.
///
/// Starting from an empty root, each code is walked bit by bit (`0` = left,
/// `1` = right), creating internal nodes as needed; the last node becomes the
/// symbol's leaf with weight 1, so internal weights count the leaves below.
/// A code that passes through an existing leaf, or that ends on a node already
/// in use, is [`CodecError::CodeCollision`].
pub fn rebuild_tree(table: &CodeTable) -> Result<CodeNode, CodecError> {
    let mut root = CodeNode::empty();
    for (symbol, code) in table.iter() {
        insert_code(&mut root, symbol, code)?;
    }
    Ok(root)
}

fn insert_code(root: &mut CodeNode, symbol: u8, code: &BitCode) -> Result<(), CodecError> {
    let last = code
        .len()
        .checked_sub(1)
        .ok_or(CodecError::InvalidCodeLength { symbol, bits: 0 })?;

    let mut node = root;
    for (i, bit) in code.iter().enumerate() {
        let CodeNode::Internal { weight, left, right } = node else {
            return Err(CodecError::CodeCollision { symbol });
        };
        *weight += 1;
        let slot = if bit { right } else { left };
        if i == last {
            if slot.is_some() {
                return Err(CodecError::CodeCollision { symbol });
            }
            *slot = Some(Box::new(CodeNode::Leaf { symbol, weight: 1 }));
            return Ok(());
        }
        node = slot.get_or_insert_with(|| Box::new(CodeNode::empty()));
    }
    Ok(())
}
