// src/huffman/tree.rs

//! Huffman tree construction and its canonical serialization.
//!
//! The tree is a full binary tree: every node has either zero or two
//! children, and the single root owns the whole structure recursively.
//! Recursion depth is bounded by the 256-symbol alphabet, so plain
//! `Box`ed children are safe without an arena.

use crate::bitstream::{BitReader, BitWriter};
use crate::pqueue::PQueue;
use crate::utils::error::{Result, ZapError};
use std::io::{Read, Write};
use tracing::trace;

/// Upper bound on node depth in a well-formed tree (alphabet size).
pub const MAX_TREE_DEPTH: usize = 256;

/// Per-symbol occurrence counts for one compression run.
///
/// Present symbols iterate in ascending symbol order, which keeps tree
/// construction deterministic.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl FrequencyTable {
    /// Counts every byte of the input.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &byte in data {
            counts[byte as usize] += 1;
        }
        Self { counts }
    }

    /// Number of distinct symbols present.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Iterates `(symbol, count)` pairs for present symbols, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(sym, &c)| (sym as u8, c))
    }
}

/// Node in a Huffman tree.
#[derive(Debug, Clone)]
pub enum HuffmanNode {
    Leaf {
        symbol: u8,
        frequency: u64,
    },
    Internal {
        frequency: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    pub fn frequency(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { frequency, .. } => *frequency,
            HuffmanNode::Internal { frequency, .. } => *frequency,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// The leaf's symbol, or `None` for internal nodes.
    pub fn symbol(&self) -> Option<u8> {
        match self {
            HuffmanNode::Leaf { symbol, .. } => Some(*symbol),
            HuffmanNode::Internal { .. } => None,
        }
    }
}

// A precedes B on lower frequency; equal-frequency leaves order by
// symbol. Remaining ties (internal nodes) fall through to the queue's
// insertion order.
fn node_precedes(a: &HuffmanNode, b: &HuffmanNode) -> bool {
    match a.frequency().cmp(&b.frequency()) {
        std::cmp::Ordering::Less => true,
        std::cmp::Ordering::Greater => false,
        std::cmp::Ordering::Equal => match (a.symbol(), b.symbol()) {
            (Some(x), Some(y)) => x < y,
            _ => false,
        },
    }
}

/// Builds the Huffman tree for a frequency table.
///
/// The two minimal nodes are merged repeatedly until one root remains;
/// the first node popped becomes the left child. A table with a single
/// distinct symbol yields a single-leaf tree. An empty table (empty
/// input) yields a sentinel single-leaf tree carrying placeholder
/// symbol 0, so the stream stays self-describing.
pub fn build_tree(freqs: &FrequencyTable) -> Result<HuffmanNode> {
    if freqs.is_empty() {
        trace!("empty frequency table, emitting sentinel leaf");
        return Ok(HuffmanNode::Leaf {
            symbol: 0,
            frequency: 0,
        });
    }

    let mut queue = PQueue::new(node_precedes);
    for (symbol, frequency) in freqs.iter() {
        queue.push(HuffmanNode::Leaf { symbol, frequency });
    }

    while queue.len() > 1 {
        let left = queue.pop()?;
        let right = queue.pop()?;
        queue.push(HuffmanNode::Internal {
            frequency: left.frequency() + right.frequency(),
            left: Box::new(left),
            right: Box::new(right),
        });
    }

    queue.pop()
}

/// Serializes a tree in pre-order: flag bit 1 + 8-bit symbol for a leaf,
/// flag bit 0 then both subtrees for an internal node.
pub fn serialize<W: Write>(node: &HuffmanNode, writer: &mut BitWriter<W>) -> Result<()> {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            writer.put_bit(true)?;
            writer.put_byte(*symbol)?;
        }
        HuffmanNode::Internal { left, right, .. } => {
            writer.put_bit(false)?;
            serialize(left, writer)?;
            serialize(right, writer)?;
        }
    }
    Ok(())
}

/// Reconstructs a tree from its pre-order serialization.
///
/// Frequencies are not transmitted; leaves come back with frequency 0
/// and internal nodes with the sum of their children. Only the shape
/// matters for decoding.
pub fn deserialize<R: Read>(reader: &mut BitReader<R>) -> Result<HuffmanNode> {
    deserialize_at(reader, 0)
}

fn deserialize_at<R: Read>(reader: &mut BitReader<R>, depth: usize) -> Result<HuffmanNode> {
    if depth > MAX_TREE_DEPTH {
        return Err(ZapError::CorruptStream(format!(
            "serialized tree deeper than {} levels",
            MAX_TREE_DEPTH
        )));
    }

    if reader.get_bit()? {
        let symbol = reader.get_byte()?;
        Ok(HuffmanNode::Leaf {
            symbol,
            frequency: 0,
        })
    } else {
        let left = deserialize_at(reader, depth + 1)?;
        let right = deserialize_at(reader, depth + 1)?;
        Ok(HuffmanNode::Internal {
            frequency: left.frequency() + right.frequency(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}
