//! Symbol → code mapping derived from a [`CodeNode`] tree.

use super::freq::FrequencyTable;
use super::tree::CodeNode;
use super::types::{BitCode, CodecError, ALPHABET_SIZE, MAX_CODE_BITS};

/// Per-symbol prefix codes. Only symbols that occur have an entry.
#[derive(Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Box<[Option<BitCode>; ALPHABET_SIZE]>,
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeTable {
    /// An empty table.
    pub fn new() -> Self {
        CodeTable {
            codes: Box::new([None; ALPHABET_SIZE]),
        }
    }

    /// Derive the code of every leaf by a depth-first walk: `0` for a left
    /// edge, `1` for a right edge.
    ///
    /// Each pending branch carries its own [`BitCode`] value, so appending a
    /// bit for one subtree can never leak into its sibling.
    pub fn from_tree(root: &CodeNode) -> Result<Self, CodecError> {
        let mut table = CodeTable::new();
        let mut stack: Vec<(&CodeNode, BitCode)> = vec![(root, BitCode::EMPTY)];

        while let Some((node, code)) = stack.pop() {
            match node {
                CodeNode::Leaf { symbol, .. } => {
                    if code.is_empty() {
                        return Err(CodecError::InvalidCodeLength {
                            symbol: *symbol,
                            bits: 0,
                        });
                    }
                    table.insert(*symbol, code);
                }
                CodeNode::Internal { left, right, .. } => {
                    for (bit, child) in [(true, right), (false, left)] {
                        let Some(child) = child.as_deref() else {
                            continue;
                        };
                        let next = code.appended(bit).ok_or(CodecError::InvalidCodeLength {
                            symbol: first_symbol(child),
                            bits: MAX_CODE_BITS + 1,
                        })?;
                        stack.push((child, next));
                    }
                }
            }
        }
        Ok(table)
    }

    /// Set the code for `symbol`, returning the previous one if any.
    pub fn insert(&mut self, symbol: u8, code: BitCode) -> Option<BitCode> {
        self.codes[symbol as usize].replace(code)
    }

    #[inline]
    pub fn get(&self, symbol: u8) -> Option<&BitCode> {
        self.codes[symbol as usize].as_ref()
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(Option::is_none)
    }

    /// Defined entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitCode)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(s, c)| c.as_ref().map(|c| (s as u8, c)))
    }

    /// Total number of payload bits needed to encode a buffer with frequencies
    /// `freq`. Symbols absent from the table contribute nothing.
    pub fn encoded_bits(&self, freq: &FrequencyTable) -> u64 {
        self.iter()
            .map(|(s, code)| freq.count(s) * code.len() as u64)
            .sum()
    }

    pub fn min_len(&self) -> Option<usize> {
        self.iter().map(|(_, c)| c.len()).min()
    }

    pub fn max_len(&self) -> Option<usize> {
        self.iter().map(|(_, c)| c.len()).max()
    }

    /// `true` when no code is a prefix of another code in the table.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&BitCode> = self.iter().map(|(_, c)| c).collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.is_prefix_of(b))
        })
    }
}

impl core::fmt::Debug for CodeTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Some symbol stored below `node`, for error reporting.
fn first_symbol(node: &CodeNode) -> u8 {
    let mut node = node;
    loop {
        match node {
            CodeNode::Leaf { symbol, .. } => return *symbol,
            CodeNode::Internal { left, right, .. } => {
                match left.as_deref().or(right.as_deref()) {
                    Some(next) => node = next,
                    None => return 0,
                }
            }
        }
    }
}
