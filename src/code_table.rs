use std::collections::BTreeMap;
use std::fmt;

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::hufftree::{HuffNode, HuffmanTree};

/// Path from the root to a leaf: `false` is left, `true` is right.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        let mut path = Vec::new();
        generate_table(tree.root(), &mut path, &mut codes);
        log::trace!(
            "code table: {:?}",
            codes
                .iter()
                .map(|(byte, code)| (*byte, code.to_string()))
                .collect::<Vec<_>>()
        );
        CodeTable { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Codes in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes.iter().map(|(byte, code)| (*byte, code))
    }

    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// Number of bits encoding a buffer with these frequencies would take.
    /// Symbols without a code contribute nothing.
    pub fn encoded_bit_len(&self, frequencies: &FrequencyTable) -> Result<usize> {
        frequencies
            .iter()
            .filter_map(|(byte, count)| self.get(byte).map(|code| code.len().checked_mul(count)))
            .try_fold(0usize, |total, bits| bits.and_then(|bits| total.checked_add(bits)))
            .ok_or(HuffmanError::WeightOverflow)
    }
}

// Left = 0 is visited before right = 1.
fn generate_table(node: &HuffNode, path: &mut Vec<bool>, codes: &mut BTreeMap<u8, Code>) {
    match node {
        HuffNode::Leaf { byte, .. } => {
            codes.insert(*byte, Code { bits: path.clone() });
        }
        HuffNode::Internal { left, right, .. } => {
            path.push(false);
            generate_table(left, path, codes);
            path.pop();

            if let Some(right) = right {
                path.push(true);
                generate_table(right, path, codes);
                path.pop();
            }
        }
    }
}
