use std::cmp::Ordering;

use crate::config::TieBreak;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::min_heap::MinHeap;

/// A node of a Huffman tree. Each parent owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        weight: usize,
        byte: u8,
    },
    Internal {
        weight: usize,
        left: Box<HuffNode>,
        /// Only `None` for the wrapper above a lone leaf, so that a
        /// single-symbol tree still hands out a one-bit code.
        right: Option<Box<HuffNode>>,
    },
}

impl HuffNode {
    pub fn new(b: u8, f: usize) -> Self {
        HuffNode::Leaf { weight: f, byte: b }
    }

    pub fn weight(&self) -> usize {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn merge(a: Self, b: Self) -> Result<Self> {
        // a was extracted first and goes left
        let weight = a
            .weight()
            .checked_add(b.weight())
            .ok_or(HuffmanError::WeightOverflow)?;
        Ok(HuffNode::Internal {
            weight,
            left: Box::new(a),
            right: Some(Box::new(b)),
        })
    }

    fn wrap(leaf: Self) -> Self {
        HuffNode::Internal {
            weight: leaf.weight(),
            left: Box::new(leaf),
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right, .. } => {
                let r = right.as_deref().map_or(0, HuffNode::depth);
                1 + left.depth().max(r)
            }
        }
    }

    fn collect_leaves(&self, out: &mut Vec<(u8, usize)>) {
        match self {
            HuffNode::Leaf { byte, weight } => out.push((*byte, *weight)),
            HuffNode::Internal { left, right, .. } => {
                left.collect_leaves(out);
                if let Some(right) = right {
                    right.collect_leaves(out);
                }
            }
        }
    }
}

/// Heap item: a subtree plus the key it is ordered by.
///
/// Leaves rank below 256 according to the tie-break rule; combined nodes
/// rank from 256 upward in creation order, so the ordering is total.
#[derive(Debug)]
struct Pending {
    rank: usize,
    node: HuffNode,
}

impl Pending {
    fn key(&self) -> (usize, usize) {
        (self.node.weight(), self.rank)
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffNode,
}

impl HuffmanTree {
    /// Counts `bytes` and builds a tree with the default tie-break.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::build(&FrequencyTable::from_bytes(bytes), TieBreak::default())
    }

    /// Greedy minimum-combination over the symbols of `frequencies`.
    pub fn build(frequencies: &FrequencyTable, tie_break: TieBreak) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        let leaves = frequencies
            .iter()
            .enumerate()
            .map(|(position, (byte, count))| {
                let rank = match tie_break {
                    TieBreak::SymbolValue => byte as usize,
                    TieBreak::InsertionOrder => position,
                };
                Pending {
                    rank,
                    node: HuffNode::new(byte, count),
                }
            })
            .collect();

        let mut heap = MinHeap::build(leaves)?;
        if heap.heap_size() == 1 {
            let only = heap.extract_min()?;
            log::trace!("single symbol tree: {:?}", only.node);
            return Ok(HuffmanTree {
                root: HuffNode::wrap(only.node),
            });
        }

        let mut next_rank = 256;
        while heap.heap_size() > 1 {
            let x = heap.extract_min()?;
            let y = heap.extract_min()?;

            heap.insert(Pending {
                rank: next_rank,
                node: HuffNode::merge(x.node, y.node)?,
            });
            next_rank += 1;
        }

        let root = heap.extract_min()?.node;
        log::trace!("huffman tree: {:?}", root);
        Ok(HuffmanTree { root })
    }

    pub fn root(&self) -> &HuffNode {
        &self.root
    }

    /// Total weight, equal to the sum of all symbol frequencies.
    pub fn weight(&self) -> usize {
        self.root.weight()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn leaf_count(&self) -> usize {
        let mut leaves = Vec::new();
        self.root.collect_leaves(&mut leaves);
        leaves.len()
    }

    /// Recovers the frequency table from the leaves, in left-to-right order.
    ///
    /// First-appearance order is lost, so only a [`TieBreak::SymbolValue`]
    /// tree is guaranteed to be rebuilt identically from the result.
    pub fn frequencies(&self) -> Result<FrequencyTable> {
        let mut leaves = Vec::new();
        self.root.collect_leaves(&mut leaves);
        FrequencyTable::from_counts(leaves)
    }
}
