#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::frequency::FrequencyTable;

/// Output of compression: the packed payload plus what must travel
/// alongside it to decode it again.
///
/// Nothing about the tree is stored inside `packed`; the decoder rebuilds
/// the tree from `frequencies`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompressedData {
    pub packed: Vec<u8>,
    /// Valid bits in `packed`; the rest of the last byte is padding.
    pub bit_count: usize,
    pub frequencies: FrequencyTable,
    pub original_length: usize,
}

impl CompressedData {
    pub fn packed_len(&self) -> usize {
        self.packed.len()
    }

    /// Packed size over original size, `0.0` for empty input.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_length == 0 {
            return 0.0;
        }
        self.packed.len() as f64 / self.original_length as f64
    }
}
