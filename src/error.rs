//! Error types for the codec.

use thiserror::Error;

use crate::min_heap::HeapErr;

/// Errors produced while building trees, encoding or decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    /// There were no symbols to build a tree from.
    #[error("cannot build a Huffman tree from an empty frequency table")]
    EmptyInput,

    /// A byte had no code in the code table used for encoding.
    #[error("byte {symbol:#04x} is not in the code table")]
    UnknownSymbol {
        /// The offending byte
        symbol: u8,
    },

    /// The declared bits ran out part way through a code.
    #[error("bitstream ended mid-code after {bit_count} bits")]
    TruncatedStream {
        /// Number of valid bits that were declared
        bit_count: usize,
    },

    /// More valid bits were declared than the packed buffer holds.
    #[error("declared {bit_count} valid bits but only {available} are present")]
    InvalidBitCount {
        /// Declared number of valid bits
        bit_count: usize,
        /// Bits physically present (8 per packed byte)
        available: usize,
    },

    /// A bit selected a branch that does not exist in the tree.
    #[error("bit {position} selects a branch absent from the tree")]
    InvalidCode {
        /// Index of the offending bit
        position: usize,
    },

    /// Decoding produced a different number of bytes than were compressed.
    #[error("expected {expected} decoded bytes, got {actual}")]
    LengthMismatch {
        /// Recorded original length
        expected: usize,
        /// Number of bytes actually decoded
        actual: usize,
    },

    /// Summed symbol weights do not fit in a `usize`.
    #[error("symbol weights overflow usize")]
    WeightOverflow,

    /// Priority queue misuse while combining nodes.
    #[error("heap error: {0}")]
    Heap(#[from] HeapErr),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HuffmanError>;
