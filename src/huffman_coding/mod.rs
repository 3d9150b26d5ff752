//! The huffman module builds the coding tree and turns it into bit codes for the huffzip library.
//! Decoding the payload happens in the decompress function.
//!
//! One tree is built for the whole input. It is written ahead of the payload so the decoder can rebuild it
//! without any frequency table:
//! - tree: Merge the two lightest nodes on a min-heap until one node is left.
//! - code_table: Walk the tree, 0 for left and 1 for right, to get each symbol's code.
//! - tree_codec: Write the tree in preorder (0 = branch, 1 + 8 bits = leaf) and read it back.
//!

pub mod code_table;
pub mod tree;
pub mod tree_codec;
