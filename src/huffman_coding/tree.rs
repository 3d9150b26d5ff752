//! Huffman tree construction.
//!
//! Nodes live in an arena (a Vec) and refer to their children by index. The tree is built by repeatedly
//! merging the two lightest nodes taken from a min-heap.
//!
//! Ties are broken by node index. Leaves are created in ascending symbol order and every merged node gets
//! the next free index, so the same frequencies always give the same tree.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::trace;

use crate::error::{HuffError, Result};
use crate::tools::freq_count::distinct;

/// Index of a node in the tree arena.
pub type NodeId = usize;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Node {
    /// A terminal symbol and its count.
    Leaf { sym: u8, weight: u64 },
    /// Branch node. Weight is the sum of both subtrees.
    Kids {
        weight: u64,
        left: NodeId,
        right: NodeId,
    },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Kids { weight, .. } => *weight,
        }
    }
}

/// A full binary tree: every node is either a leaf or has exactly two kids.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct HuffTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffTree {
    /// Build the tree from a 256 entry frequency table. Fails on an all-zero table.
    ///
    /// With only one distinct symbol the tree is that single leaf. The code table gives it a one bit code.
    pub fn from_freqs(freqs: &[u64]) -> Result<Self> {
        let syms = distinct(freqs);
        if syms.is_empty() {
            return Err(HuffError::EmptyInput);
        }

        let mut tree = HuffTree {
            nodes: Vec::with_capacity(syms.len() * 2 - 1),
            root: 0,
        };
        // Heap entries are (weight, node index). Reverse turns the max-heap into a min-heap.
        let mut heap = BinaryHeap::with_capacity(syms.len());
        for (sym, weight) in syms {
            let id = tree.push(Node::Leaf { sym, weight });
            heap.push(Reverse((weight, id)));
        }

        // Pull off the two lightest nodes and join them until one is left.
        tree.root = loop {
            let Reverse((l_weight, left)) = match heap.pop() {
                Some(entry) => entry,
                None => return Err(HuffError::EmptyInput),
            };
            let Reverse((r_weight, right)) = match heap.pop() {
                Some(entry) => entry,
                None => break left,
            };
            let weight = l_weight + r_weight;
            let id = tree.push(Node::Kids {
                weight,
                left,
                right,
            });
            trace!("merged {} + {} into node {} ({})", left, right, id, weight);
            heap.push(Reverse((weight, id)));
        };
        Ok(tree)
    }

    /// Add a node to the arena and return its index. Used while building or reading a tree.
    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub(crate) fn set_root(&mut self, root: NodeId) {
        self.root = root;
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// True when the whole tree is one leaf (input with a single distinct symbol).
    pub fn is_single_leaf(&self) -> bool {
        matches!(self.nodes[self.root], Node::Leaf { .. })
    }

    /// Leaf symbols in left-to-right order.
    pub fn leaves(&self) -> Vec<u8> {
        let mut leaves = Vec::with_capacity(256);
        self.collect_leaves(self.root, &mut leaves);
        leaves
    }

    fn collect_leaves(&self, id: NodeId, leaves: &mut Vec<u8>) {
        match self.nodes[id] {
            Node::Leaf { sym, .. } => leaves.push(sym),
            Node::Kids { left, right, .. } => {
                self.collect_leaves(left, leaves);
                self.collect_leaves(right, leaves);
            }
        }
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.depth_from(self.root)
    }

    fn depth_from(&self, id: NodeId) -> usize {
        match self.nodes[id] {
            Node::Leaf { .. } => 0,
            Node::Kids { left, right, .. } => 1 + self.depth_from(left).max(self.depth_from(right)),
        }
    }

    /// Compare two trees by shape and leaf symbols only. Weights and arena layout are ignored, so a
    /// built tree can be checked against one read back from a stream.
    #[cfg(test)]
    pub(crate) fn same_shape(&self, other: &HuffTree) -> bool {
        self.shape_eq(self.root, other, other.root)
    }

    #[cfg(test)]
    fn shape_eq(&self, a: NodeId, other: &HuffTree, b: NodeId) -> bool {
        match (&self.nodes[a], &other.nodes[b]) {
            (Node::Leaf { sym: x, .. }, Node::Leaf { sym: y, .. }) => x == y,
            (
                Node::Kids {
                    left: al,
                    right: ar,
                    ..
                },
                Node::Kids {
                    left: bl,
                    right: br,
                    ..
                },
            ) => self.shape_eq(*al, other, *bl) && self.shape_eq(*ar, other, *br),
            _ => false,
        }
    }
}
