//! Property-based tests for the codec using proptest.

use byte_huffman::{
    decode, encode, CodeTable, CodecConfig, FrequencyTable, HuffNode, HuffmanCodec, HuffmanTree,
    TieBreak,
};
use proptest::prelude::*;

fn tie_break_strategy() -> impl Strategy<Value = TieBreak> {
    prop_oneof![Just(TieBreak::SymbolValue), Just(TieBreak::InsertionOrder)]
}

/// Skewed byte buffers: a small alphabet gives long codes and many ties.
fn skewed_bytes_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop_oneof![8 => 0u8..4, 2 => any::<u8>()], 0..2000)
}

fn check_weights(node: &HuffNode) -> usize {
    match node {
        HuffNode::Leaf { weight, .. } => *weight,
        HuffNode::Internal {
            weight,
            left,
            right,
        } => {
            let sum = check_weights(left) + right.as_deref().map_or(0, check_weights);
            assert_eq!(*weight, sum);
            sum
        }
    }
}

proptest! {
    #[test]
    fn prop_roundtrip(data in prop::collection::vec(any::<u8>(), 0..4096), tie_break in tie_break_strategy()) {
        let codec = HuffmanCodec::with_config(CodecConfig::default().with_tie_break(tie_break));
        let compressed = codec.compress(&data).unwrap();
        prop_assert_eq!(compressed.original_length, data.len());
        prop_assert!(compressed.bit_count <= compressed.packed.len() * 8);
        prop_assert!(compressed.packed.len() == compressed.bit_count.div_ceil(8));
        prop_assert_eq!(codec.decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn prop_roundtrip_skewed(data in skewed_bytes_strategy()) {
        let codec = HuffmanCodec::new();
        let compressed = codec.compress(&data).unwrap();
        prop_assert_eq!(codec.decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn prop_prefix_free(data in prop::collection::vec(any::<u8>(), 1..1024), tie_break in tie_break_strategy()) {
        let frequencies = FrequencyTable::from_bytes(&data);
        let tree = HuffmanTree::build(&frequencies, tie_break).unwrap();
        let table = CodeTable::from_tree(&tree);

        prop_assert_eq!(table.len(), frequencies.len());
        for (a, code_a) in table.iter() {
            prop_assert!(!code_a.is_empty());
            for (b, code_b) in table.iter() {
                if a != b {
                    prop_assert!(!code_a.is_prefix_of(code_b));
                }
            }
        }
    }

    #[test]
    fn prop_weight_invariant(data in skewed_bytes_strategy().prop_filter("non-empty", |d| !d.is_empty())) {
        let tree = HuffmanTree::from_bytes(&data).unwrap();
        prop_assert_eq!(check_weights(tree.root()), data.len());
        prop_assert_eq!(tree.weight(), data.len());
    }

    #[test]
    fn prop_deterministic(data in prop::collection::vec(any::<u8>(), 1..1024), tie_break in tie_break_strategy()) {
        let frequencies = FrequencyTable::from_bytes(&data);
        let first = CodeTable::from_tree(&HuffmanTree::build(&frequencies, tie_break).unwrap());
        let second = CodeTable::from_tree(&HuffmanTree::build(&frequencies.clone(), tie_break).unwrap());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_encoded_length_matches_code_table(data in prop::collection::vec(any::<u8>(), 1..1024)) {
        let frequencies = FrequencyTable::from_bytes(&data);
        let tree = HuffmanTree::build(&frequencies, TieBreak::SymbolValue).unwrap();
        let table = CodeTable::from_tree(&tree);
        let (packed, bit_count) = encode(&data, &table).unwrap();
        prop_assert_eq!(bit_count, table.encoded_bit_len(&frequencies).unwrap());
        prop_assert_eq!(decode(&packed, bit_count, &tree).unwrap(), data);
    }
}
