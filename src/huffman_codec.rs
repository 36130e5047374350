use crate::bit_vec::{BitReader, BitVec};
use crate::code_table::CodeTable;
use crate::compressed_data::CompressedData;
use crate::config::CodecConfig;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::hufftree::{HuffNode, HuffmanTree};

/// Replaces every byte of `data` with its code and packs the result.
///
/// Returns the packed bytes and the number of valid bits in them.
pub fn encode(data: &[u8], table: &CodeTable) -> Result<(Vec<u8>, usize)> {
    // an optimal code never averages more than 8 bits per byte
    let mut bit_vec = BitVec::with_capacity(data.len().saturating_mul(8));
    for &byte in data {
        let code = table
            .get(byte)
            .ok_or(HuffmanError::UnknownSymbol { symbol: byte })?;
        bit_vec.push_bits(code.bits());
    }
    Ok(bit_vec.into_parts())
}

/// Walks `tree` over the first `bit_count` bits of `packed`.
pub fn decode(packed: &[u8], bit_count: usize, tree: &HuffmanTree) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(packed, bit_count)?;
    let root = tree.root();
    let mut result = Vec::new();
    let mut current_node = root;

    while let Some(bit) = reader.read_bit() {
        let position = reader.position() - 1;
        let next = match current_node {
            HuffNode::Internal { left, right, .. } => {
                if bit {
                    right
                        .as_deref()
                        .ok_or(HuffmanError::InvalidCode { position })?
                } else {
                    &**left
                }
            }
            // only reachable if the root itself were a leaf
            HuffNode::Leaf { .. } => return Err(HuffmanError::InvalidCode { position }),
        };

        current_node = match next {
            HuffNode::Leaf { byte, .. } => {
                result.push(*byte);
                root
            }
            internal => internal,
        };
    }

    if !std::ptr::eq(current_node, root) {
        return Err(HuffmanError::TruncatedStream { bit_count });
    }
    Ok(result)
}

/// Compression pipeline: frequencies, tree, codes, packed bits.
///
/// Holds no state between calls beyond its configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec {
    config: CodecConfig,
}

impl HuffmanCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CodecConfig) -> Self {
        HuffmanCodec { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn build_tree(&self, frequencies: &FrequencyTable) -> Result<HuffmanTree> {
        HuffmanTree::build(frequencies, self.config.tie_break)
    }

    pub fn compress(&self, data: &[u8]) -> Result<CompressedData> {
        if data.is_empty() {
            log::debug!("compress: empty input");
            return Ok(CompressedData::default());
        }

        let frequencies = FrequencyTable::from_bytes(data);
        let tree = self.build_tree(&frequencies)?;
        let table = CodeTable::from_tree(&tree);
        let (packed, bit_count) = encode(data, &table)?;

        log::debug!(
            "compress: {} bytes, {} symbols, {} bits, {} packed bytes",
            data.len(),
            frequencies.len(),
            bit_count,
            packed.len()
        );

        Ok(CompressedData {
            packed,
            bit_count,
            frequencies,
            original_length: data.len(),
        })
    }

    pub fn decompress(&self, compressed: &CompressedData) -> Result<Vec<u8>> {
        let result = if compressed.frequencies.is_empty() && compressed.bit_count == 0 {
            Vec::new()
        } else {
            let tree = self.build_tree(&compressed.frequencies)?;
            decode(&compressed.packed, compressed.bit_count, &tree)?
        };

        if self.config.verify_length && result.len() != compressed.original_length {
            return Err(HuffmanError::LengthMismatch {
                expected: compressed.original_length,
                actual: result.len(),
            });
        }

        log::debug!(
            "decompress: {} bits into {} bytes",
            compressed.bit_count,
            result.len()
        );
        Ok(result)
    }
}
