//! Derives the bit code of every symbol from a Huffman tree.
//!
//! Walking left appends a 0, walking right appends a 1. The path to a leaf is that leaf's code. Since the
//! tree is full, no code is the prefix of another.

use std::fmt::{Display, Formatter};

use rustc_hash::FxHashMap;

use super::tree::{HuffTree, Node, NodeId};

/// A code of up to 128 bits, right aligned in `bits`, written most significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Code {
    pub len: u8,
    pub bits: u128,
}

impl Code {
    /// The code one level further down the tree.
    fn child(self, bit: bool) -> Code {
        debug_assert!(self.len < 128);
        Code {
            len: self.len + 1,
            bits: self.bits << 1 | bit as u128,
        }
    }

    /// True if self is a (non-strict) prefix of other.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        if self.len == 0 {
            return true;
        }
        self.len <= other.len && other.bits >> (other.len - self.len) == self.bits
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for shift in (0..self.len).rev() {
            write!(f, "{}", (self.bits >> shift) & 1)?;
        }
        Ok(())
    }
}

/// Symbol to code lookup.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    codes: FxHashMap<u8, Code>,
}

impl CodeTable {
    /// Walk the tree and record the path to every leaf.
    pub fn from_tree(tree: &HuffTree) -> Self {
        let mut table = CodeTable::default();
        if tree.is_single_leaf() {
            // A lone leaf has an empty path. Give it the code "0" so every symbol costs a bit.
            if let Node::Leaf { sym, .. } = tree.node(tree.root()) {
                table.codes.insert(*sym, Code::default().child(false));
            }
        } else {
            table.fill(tree, tree.root(), Code::default());
        }
        debug_assert!(table.is_prefix_free());
        table
    }

    /// True if no code in the table is a prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        self.codes.iter().all(|(a_sym, a)| {
            self.codes
                .iter()
                .all(|(b_sym, b)| a_sym == b_sym || !a.is_prefix_of(b))
        })
    }

    /// Recursively walk the tree, pushing each leaf's path into the table.
    fn fill(&mut self, tree: &HuffTree, id: NodeId, code: Code) {
        match tree.node(id) {
            Node::Kids { left, right, .. } => {
                self.fill(tree, *left, code.child(false));
                self.fill(tree, *right, code.child(true));
            }
            Node::Leaf { sym, .. } => {
                self.codes.insert(*sym, code);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, sym: u8) -> Option<Code> {
        self.codes.get(&sym).copied()
    }

    /// Number of symbols with a code.
    pub(crate) fn len(&self) -> usize {
        self.codes.len()
    }

    /// (symbol, code) pairs in ascending symbol order.
    pub fn sorted(&self) -> Vec<(u8, Code)> {
        let mut pairs: Vec<(u8, Code)> = self.codes.iter().map(|(&s, &c)| (s, c)).collect();
        pairs.sort_unstable_by_key(|&(s, _)| s);
        pairs
    }

    /// Flat 256 entry lookup for the encoding loop. Absent symbols get an empty code.
    pub fn dense(&self) -> Vec<Code> {
        let mut dense = vec![Code::default(); 256];
        self.codes
            .iter()
            .for_each(|(&sym, &code)| dense[sym as usize] = code);
        dense
    }

    /// Number of payload bits needed to encode data with these frequencies.
    pub fn payload_bits(&self, freqs: &[u64]) -> u64 {
        self.codes
            .iter()
            .map(|(&sym, code)| freqs[sym as usize] * code.len as u64)
            .sum()
    }
}
