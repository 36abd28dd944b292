// src/huffman/code_table.rs

//! Derivation of the symbol-to-bitcode mapping from a Huffman tree.

use crate::huffman::tree::HuffmanNode;
use bitvec::order::Msb0;
use bitvec::vec::BitVec;
use std::collections::HashMap;

/// A variable-length Huffman code, MSB-first like the stream itself.
pub type Code = BitVec<u8, Msb0>;

/// Maps each symbol to its prefix-free code.
///
/// Derived fresh from the tree on both sides of the pipeline; the same
/// tree shape always yields the same table.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: HashMap<u8, Code>,
}

impl CodeTable {
    /// Walks the tree depth-first, appending 0 for a left edge and 1 for
    /// a right edge, binding the accumulated bits at each leaf.
    ///
    /// A single-leaf tree has no edges, so its one symbol is assigned
    /// the one-bit code `0`.
    pub fn from_tree(root: &HuffmanNode) -> Self {
        let mut codes = HashMap::new();
        if let HuffmanNode::Leaf { symbol, .. } = root {
            let mut code = Code::new();
            code.push(false);
            codes.insert(*symbol, code);
        } else {
            let mut scratch = Code::new();
            Self::walk(root, &mut scratch, &mut codes);
        }
        Self { codes }
    }

    fn walk(node: &HuffmanNode, scratch: &mut Code, codes: &mut HashMap<u8, Code>) {
        match node {
            HuffmanNode::Leaf { symbol, .. } => {
                codes.insert(*symbol, scratch.clone());
            }
            HuffmanNode::Internal { left, right, .. } => {
                scratch.push(false);
                Self::walk(left, scratch, codes);
                scratch.pop();

                scratch.push(true);
                Self::walk(right, scratch, codes);
                scratch.pop();
            }
        }
    }

    /// The code bound to a symbol, if the symbol occurs in the tree.
    pub fn code(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// Number of symbols with a bound code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Total encoded bit length for the given frequency-weighted symbols.
    pub fn encoded_bits(&self, freqs: impl Iterator<Item = (u8, u64)>) -> u64 {
        freqs
            .filter_map(|(sym, count)| self.code(sym).map(|c| c.len() as u64 * count))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::tree::{build_tree, FrequencyTable};
    use bitvec::bitvec;

    #[test]
    fn test_two_symbol_codes() {
        let freqs = FrequencyTable::from_bytes(b"aaab");
        let table = CodeTable::from_tree(&build_tree(&freqs).unwrap());
        assert_eq!(table.len(), 2);
        assert_eq!(table.code(b'b').unwrap(), &bitvec![u8, Msb0; 0]);
        assert_eq!(table.code(b'a').unwrap(), &bitvec![u8, Msb0; 1]);
        assert!(table.code(b'c').is_none());
    }

    #[test]
    fn test_single_leaf_gets_code_zero() {
        let freqs = FrequencyTable::from_bytes(&[b'x'; 100]);
        let table = CodeTable::from_tree(&build_tree(&freqs).unwrap());
        assert_eq!(table.len(), 1);
        assert_eq!(table.code(b'x').unwrap(), &bitvec![u8, Msb0; 0]);
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let data: Vec<u8> = (0u8..=255).flat_map(|b| vec![b; b as usize + 1]).collect();
        let freqs = FrequencyTable::from_bytes(&data);
        let table = CodeTable::from_tree(&build_tree(&freqs).unwrap());
        assert_eq!(table.len(), 256);

        let codes: Vec<&Code> = (0u8..=255).map(|s| table.code(s).unwrap()).collect();
        for (i, a) in codes.iter().enumerate() {
            assert!(!a.is_empty());
            for (j, b) in codes.iter().enumerate() {
                if i != j && a.len() <= b.len() {
                    assert_ne!(&b[..a.len()], a.as_bitslice(), "code {} prefixes {}", i, j);
                }
            }
        }
    }

    #[test]
    fn test_rarer_symbols_get_longer_codes() {
        let mut data = vec![b'a'; 1000];
        data.extend_from_slice(&[b'b'; 50]);
        data.extend_from_slice(&[b'c'; 3]);
        let freqs = FrequencyTable::from_bytes(&data);
        let table = CodeTable::from_tree(&build_tree(&freqs).unwrap());

        let a = table.code(b'a').unwrap().len();
        let c = table.code(b'c').unwrap().len();
        assert!(a <= table.code(b'b').unwrap().len());
        assert!(table.code(b'b').unwrap().len() <= c);
        assert!(a < c);
    }
}
