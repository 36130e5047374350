//! # byte_huffman
//!
//! Lossless byte-stream compression with Huffman coding.
//!
//! The packed output carries no header. The frequency table and the exact
//! number of valid bits travel next to it in [`CompressedData`], and the
//! decoder rebuilds the same tree from that table.
//!
//! ## Quick Start
//!
//! ```rust
//! use byte_huffman::HuffmanCodec;
//!
//! let codec = HuffmanCodec::new();
//! let compressed = codec.compress(b"aaabbc")?;
//! assert_eq!(compressed.bit_count, 9);
//!
//! let restored = codec.decompress(&compressed)?;
//! assert_eq!(restored, b"aaabbc");
//! # Ok::<(), byte_huffman::HuffmanError>(())
//! ```
//!
//! The individual stages are available on their own:
//!
//! ```rust
//! use byte_huffman::{decode, encode, CodeTable, FrequencyTable, HuffmanTree, TieBreak};
//!
//! let data = b"mississippi";
//! let frequencies = FrequencyTable::from_bytes(data);
//! let tree = HuffmanTree::build(&frequencies, TieBreak::SymbolValue)?;
//! let codes = CodeTable::from_tree(&tree);
//! let (packed, bit_count) = encode(data, &codes)?;
//! assert_eq!(decode(&packed, bit_count, &tree)?, data);
//! # Ok::<(), byte_huffman::HuffmanError>(())
//! ```

pub mod bit_vec;
pub mod code_table;
pub mod compressed_data;
pub mod config;
pub mod error;
pub mod frequency;
pub mod huffman_codec;
pub mod hufftree;

// Internal modules - not part of public API
mod min_heap;

pub use min_heap::HeapErr;

// Re-export main types for convenience
pub use bit_vec::{BitReader, BitVec};
pub use code_table::{Code, CodeTable};
pub use compressed_data::CompressedData;
pub use config::{CodecConfig, TieBreak};
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use huffman_codec::{decode, encode, HuffmanCodec};
pub use hufftree::{HuffNode, HuffmanTree};
