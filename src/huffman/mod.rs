//! Huffman coding stages used by the `CCHF` container.
//!
//! Encoder order: [`freq`] → [`tree`] → [`code`] → [`table::encode_table`] →
//! [`bitstream::pack`]. The decoder never sees frequencies: it goes
//! [`table::decode_table`] → [`table::rebuild_tree`] → [`bitstream::unpack`].

pub mod bitstream;
pub mod code;
pub mod freq;
pub mod table;
pub mod tree;
pub mod types;

pub use bitstream::{pack, unpack, PackedBits};
pub use code::CodeTable;
pub use freq::FrequencyTable;
pub use table::{decode_table, encode_table, rebuild_tree};
pub use tree::{build_tree, CodeNode};
pub use types::{BitCode, CodecError, ALPHABET_SIZE, MAX_CODE_BITS};
