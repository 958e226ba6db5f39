//! Shared constants, the codec error type, and the immutable [`BitCode`]
//! bit-sequence used by every Huffman stage.

use core::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Number of distinct symbols (one per byte value).
pub const ALPHABET_SIZE: usize = 256;

/// Longest code the serialized table can describe (the length field is one byte
/// and zero is reserved as invalid).
pub const MAX_CODE_BITS: usize = 255;

/// Storage for the longest code, rounded up to whole bytes.
const CODE_STORAGE_BYTES: usize = (MAX_CODE_BITS + 7) / 8;

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Every failure the codec core can report.
///
/// Errors are raised at the boundary of the stage that detects them and are
/// never recovered internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// `compress` was called with a zero-length buffer.
    EmptyInput,
    /// The input length does not fit the container's 32-bit length fields.
    InputTooLarge { len: usize },
    /// The buffer does not start with the `CCHF` tag.
    InvalidMagic { found: [u8; 4] },
    /// A code table declares (or decodes to) zero entries, or more than 256.
    InvalidTableSize { entries: usize },
    /// A table entry declares a code of 0 or more than 255 bits.
    InvalidCodeLength { symbol: u8, bits: usize },
    /// A declared length runs past the end of the available bytes.
    TruncatedInput { needed: usize, available: usize },
    /// The bitstream walked into a missing tree branch at byte `offset`.
    CorruptBitstream { offset: usize },
    /// Two table entries claim the same symbol, or one code is a prefix of
    /// another.
    CodeCollision { symbol: u8 },
}

impl CodecError {
    /// Shift the byte offset carried by a [`CodecError::CorruptBitstream`] so it
    /// is relative to an enclosing buffer starting `base` bytes earlier.
    pub fn offset_by(self, base: usize) -> Self {
        match self {
            CodecError::CorruptBitstream { offset } => CodecError::CorruptBitstream {
                offset: offset + base,
            },
            other => other,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::EmptyInput => f.write_str("input is empty, nothing to compress"),
            CodecError::InputTooLarge { len } => {
                write!(f, "input of {len} bytes exceeds the 4 GiB container limit")
            }
            CodecError::InvalidMagic { found } => {
                write!(f, "not a cchf container (magic {found:02x?})")
            }
            CodecError::InvalidTableSize { entries } => {
                write!(f, "invalid code table size: {entries} entries")
            }
            CodecError::InvalidCodeLength { symbol, bits } => {
                write!(f, "invalid code length {bits} for symbol 0x{symbol:02x}")
            }
            CodecError::TruncatedInput { needed, available } => {
                write!(f, "truncated input: need {needed} bytes, have {available}")
            }
            CodecError::CorruptBitstream { offset } => {
                write!(f, "invalid encoding at offset {offset}")
            }
            CodecError::CodeCollision { symbol } => {
                write!(f, "code for symbol 0x{symbol:02x} collides with another code")
            }
        }
    }
}

impl std::error::Error for CodecError {}

// ─────────────────────────────────────────────────────────────────────────────
// BitCode
// ─────────────────────────────────────────────────────────────────────────────

/// An owned, fixed-capacity sequence of 1..=255 bits.
///
/// Bits are packed most-significant-bit first, which is also the order the
/// table serializer writes them. The value is `Copy` and never mutated in
/// place: [`BitCode::appended`] returns a new code, so sibling branches of a
/// tree walk each hold their own snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitCode {
    bits: [u8; CODE_STORAGE_BYTES],
    len: u8,
}

impl BitCode {
    /// The zero-length code, used as the seed of a tree walk.
    pub const EMPTY: BitCode = BitCode {
        bits: [0; CODE_STORAGE_BYTES],
        len: 0,
    };

    /// Build a code from individual bits. Returns `None` when `bits` is longer
    /// than [`MAX_CODE_BITS`].
    pub fn from_bits(bits: &[bool]) -> Option<Self> {
        bits.iter()
            .try_fold(BitCode::EMPTY, |code, &bit| code.appended(bit))
    }

    /// Build a code of `len` bits from bytes packed MSB-first. Padding bits
    /// beyond `len` are ignored. Returns `None` if `len` is out of range or
    /// `packed` is too short.
    pub fn from_packed(packed: &[u8], len: usize) -> Option<Self> {
        if len > MAX_CODE_BITS || packed.len() < len.div_ceil(8) {
            return None;
        }
        let mut code = BitCode::EMPTY;
        let n = len.div_ceil(8);
        code.bits[..n].copy_from_slice(&packed[..n]);
        // Clear padding so equal codes compare equal.
        if len % 8 != 0 {
            code.bits[n - 1] &= 0xFFu8 << (8 - len % 8);
        }
        code.len = len as u8;
        Some(code)
    }

    /// Returns a copy of this code with `bit` appended, or `None` if the result
    /// would exceed [`MAX_CODE_BITS`].
    #[must_use]
    pub fn appended(&self, bit: bool) -> Option<Self> {
        let len = self.len();
        if len >= MAX_CODE_BITS {
            return None;
        }
        let mut next = *self;
        if bit {
            next.bits[len / 8] |= 0x80 >> (len % 8);
        }
        next.len += 1;
        Some(next)
    }

    /// Number of bits in the code.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bit `i` (0 = first bit on the path from the root).
    #[inline]
    pub fn bit(&self, i: usize) -> bool {
        debug_assert!(i < self.len());
        self.bits[i / 8] & (0x80 >> (i % 8)) != 0
    }

    /// Iterate over the bits in path order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(move |i| self.bit(i))
    }

    /// The code packed MSB-first into ⌈len/8⌉ bytes, padding bits zero.
    #[inline]
    pub fn packed(&self) -> &[u8] {
        &self.bits[..self.len().div_ceil(8)]
    }

    /// `true` when `self` is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &BitCode) -> bool {
        self.len() <= other.len() && (0..self.len()).all(|i| self.bit(i) == other.bit(i))
    }
}

impl fmt::Debug for BitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitCode({self})")
    }
}

impl fmt::Display for BitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
