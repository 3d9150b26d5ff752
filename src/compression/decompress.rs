use log::{debug, error, info};

use crate::bitstream::bitreader::BitReader;
use crate::error::{HuffError, Result};
use crate::huffman_coding::tree::{HuffTree, Node};
use crate::huffman_coding::tree_codec::read_tree;
use crate::tools::cli::HzOpts;
use crate::tools::report::Ratio;

use super::compress::encode;
use super::data_io::{read_input, unzip_name, write_output};

/// Restore the original bytes from a compressed stream.
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    let mut br = BitReader::new(data);

    // The tree is self delimiting, so the reader ends up right on the pad count field.
    let tree = read_tree(&mut br)?;
    debug!(
        "Found a tree with {} symbols, ending at {}.",
        tree.leaves().len(),
        br.loc()
    );

    // Get the pad count and skip that many zeros.
    let bit = br.position();
    let pad = br
        .bint(8)
        .ok_or(HuffError::TruncatedPayload { bit })?;
    if pad > 7 || !br.skip(pad) {
        error!("Bad pad count {} at {}.", pad, br.loc());
        return Err(HuffError::BadPadding { pad, bit });
    }

    walk(&mut br, &tree)
}

/// Walk the tree bit by bit, emitting a symbol every time a leaf is reached.
fn walk(br: &mut BitReader<'_>, tree: &HuffTree) -> Result<Vec<u8>> {
    let root = tree.root();
    let mut out = Vec::new();

    // A tree that is only a leaf has one code, "0".
    if let Node::Leaf { sym, .. } = *tree.node(root) {
        while let Some(bit) = br.bool_bit() {
            if bit {
                return Err(HuffError::InvalidCode {
                    bit: br.position() - 1,
                });
            }
            out.push(sym);
        }
        return Ok(out);
    }

    let mut node = root;
    while let Some(bit) = br.bool_bit() {
        node = match *tree.node(node) {
            Node::Kids { left, right, .. } => {
                if bit {
                    right
                } else {
                    left
                }
            }
            // The walk always resets at a leaf, so it never sits on one here.
            Node::Leaf { .. } => {
                return Err(HuffError::InvalidCode {
                    bit: br.position() - 1,
                })
            }
        };
        if let Node::Leaf { sym, .. } = *tree.node(node) {
            out.push(sym);
            node = root;
        }
    }

    // Running out of bits part way down the tree means the payload was cut short.
    if node != root {
        error!("Payload ended inside a code at {}.", br.loc());
        return Err(HuffError::TruncatedPayload {
            bit: br.position(),
        });
    }
    Ok(out)
}

/// Decompress the file specified in opts (HzOpts).
pub fn decompress(opts: &HzOpts) -> Result<()> {
    let data = read_input(opts)?;
    let restored = decode(&data)?;
    write_output(opts, &unzip_name(opts.file.as_deref()), &restored)?;
    info!("Restored {} bytes from {} bytes.", restored.len(), data.len());
    Ok(())
}

/// Compress and decompress the input in memory and check that nothing changed. Nothing is written.
pub fn verify(opts: &HzOpts) -> Result<()> {
    let data = read_input(opts)?;
    let packed = encode(&data)?;
    let restored = decode(&packed)?;
    if restored != data {
        error!("Round trip failed: restored data does not match the input.");
        return Err(HuffError::Mismatch);
    }
    info!("Round trip ok. {}", Ratio::new(data.len(), packed.len()));
    Ok(())
}
