//! Writes a Huffman tree onto the bitstream and reads it back.
//!
//! The tree is written in preorder. A leaf is a 1 bit followed by its 8 bit symbol. A branch is a 0 bit
//! followed by the left subtree and then the right subtree. No length is stored: the reader knows the
//! tree is complete when the last open branch has both kids.

use log::trace;

use super::tree::{HuffTree, Node, NodeId};
use crate::bitstream::bitpacker::BitPacker;
use crate::bitstream::bitreader::BitReader;
use crate::error::{HuffError, Result};

/// A full binary tree with at most 256 distinct leaves can never be deeper than this.
const MAX_DEPTH: usize = 255;

/// Put the serialized tree on the stream.
pub fn write_tree(tree: &HuffTree, bp: &mut BitPacker) {
    write_node(tree, tree.root(), bp);
}

fn write_node(tree: &HuffTree, id: NodeId, bp: &mut BitPacker) {
    match tree.node(id) {
        Node::Leaf { sym, .. } => {
            bp.out_bit(true);
            bp.out8(*sym);
        }
        Node::Kids { left, right, .. } => {
            bp.out_bit(false);
            write_node(tree, *left, bp);
            write_node(tree, *right, bp);
        }
    }
}

/// Number of bits write_tree will emit: 9 per leaf, 1 per branch (there is one branch fewer than leaves).
pub fn tree_bit_len(tree: &HuffTree) -> usize {
    let leaves = tree.leaves().len();
    leaves * 9 + leaves - 1
}

/// Read a serialized tree, leaving the reader on the first bit after it.
pub fn read_tree(br: &mut BitReader<'_>) -> Result<HuffTree> {
    let mut tree = HuffTree::default();
    // Track which symbols we have seen. A symbol may only appear once in a valid tree.
    let mut seen = [false; 256];
    let root = read_node(br, &mut tree, &mut seen, 0)?;
    tree.set_root(root);
    trace!("Read tree ending at {}.", br.loc());
    Ok(tree)
}

fn read_node(
    br: &mut BitReader<'_>,
    tree: &mut HuffTree,
    seen: &mut [bool; 256],
    depth: usize,
) -> Result<NodeId> {
    match br.bool_bit() {
        None => Err(corrupt(br, "stream ended inside the tree")),
        Some(true) => {
            let sym = br
                .byte()
                .ok_or_else(|| corrupt(br, "stream ended inside a leaf symbol"))?;
            if seen[sym as usize] {
                return Err(corrupt(br, "symbol appears twice"));
            }
            seen[sym as usize] = true;
            Ok(tree.push(Node::Leaf { sym, weight: 0 }))
        }
        Some(false) => {
            if depth >= MAX_DEPTH {
                return Err(corrupt(br, "tree is too deep"));
            }
            let left = read_node(br, tree, seen, depth + 1)?;
            let right = read_node(br, tree, seen, depth + 1)?;
            Ok(tree.push(Node::Kids {
                weight: 0,
                left,
                right,
            }))
        }
    }
}

fn corrupt(br: &BitReader<'_>, reason: &'static str) -> HuffError {
    HuffError::CorruptTree {
        bit: br.position(),
        reason,
    }
}
