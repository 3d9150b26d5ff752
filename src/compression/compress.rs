use log::{debug, error, info, log_enabled, trace, Level};

use crate::bitstream::bitpacker::BitPacker;
use crate::bitstream::bitreader::bit_string;
use crate::error::Result;
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::tree::HuffTree;
use crate::huffman_coding::tree_codec::{tree_bit_len, write_tree};
use crate::tools::cli::HzOpts;
use crate::tools::freq_count::{distinct, freqs};
use crate::tools::report::Ratio;

use super::data_io::{read_input, write_output, zip_name};

/// Number of zero bits needed in front of the payload so the whole stream ends on a byte boundary.
/// The 8 bit pad count field itself does not change the alignment.
pub fn pad_count(tree_bits: usize, payload_bits: usize) -> usize {
    (8 - (tree_bits + payload_bits) % 8) % 8
}

/// Compress a byte slice. The stream is laid out as
/// [tree][8 bit pad count][pad count zero bits][payload codes]
/// and ends on a byte boundary. Empty input is refused with HuffError::EmptyInput.
pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
    // Count symbols, build the tree and derive the codes
    let freqs = freqs(data);
    let tree = HuffTree::from_freqs(&freqs)?;
    let table = CodeTable::from_tree(&tree);
    debug!("Frequencies: {:?}", distinct(&freqs));
    debug!(
        "Tree holds {} symbols, weight {}, depth {}.",
        table.len(),
        tree.node(tree.root()).weight(),
        tree.depth()
    );
    trace!(
        "Code table: {:?}",
        table
            .sorted()
            .iter()
            .map(|(s, c)| format!("{}={}", s, c))
            .collect::<Vec<String>>()
    );

    // Work out the field sizes up front so the padding can go ahead of the payload
    let tree_bits = tree_bit_len(&tree);
    let payload_bits = table.payload_bits(&freqs) as usize;
    let pad = pad_count(tree_bits, payload_bits);
    let total_bits = tree_bits + 8 + pad + payload_bits;
    debug!(
        "Tree is {} bits, payload is {} bits, padding is {} bits.",
        tree_bits, payload_bits, pad
    );

    let mut bp = BitPacker::new(total_bits / 8);
    write_tree(&tree, &mut bp);
    bp.out8(pad as u8);
    bp.out_zeros(pad);

    // Now the payload, one code per input byte
    let codes = table.dense();
    data.iter().for_each(|&b| {
        let code = codes[b as usize];
        bp.out_code(code.len, code.bits);
    });

    // Everything was sized to land on a byte boundary, so there should be nothing to flush.
    if bp.flush() != 0 {
        error!("Stream was not byte aligned at {}.", bp.loc());
    }
    if log_enabled!(Level::Debug) {
        debug!("Encoded tree: {}", bit_string(&bp.output, tree_bits));
    }
    debug_assert_eq!(bp.output.len() * 8, total_bits);
    Ok(bp.output)
}

/// Compress the input defined in opts <HzOpts> and report the compression ratio.
pub fn compress(opts: &HzOpts) -> Result<()> {
    let data = read_input(opts)?;
    let packed = encode(&data)?;
    write_output(opts, &zip_name(opts.file.as_deref()), &packed)?;
    info!("{}", Ratio::new(data.len(), packed.len()));
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bitstream::bitreader::BitReader;
    use crate::error::HuffError;
    use crate::huffman_coding::tree_codec::read_tree;

    #[test]
    fn pad_count_test() {
        assert_eq!(pad_count(19, 5), 0);
        assert_eq!(pad_count(19, 6), 7);
        assert_eq!(pad_count(9, 0), 7);
        assert_eq!(pad_count(16, 0), 0);
        for t in 0..40 {
            for p in 0..40 {
                let pad = pad_count(t, p);
                assert!(pad < 8);
                assert_eq!((t + 8 + pad + p) % 8, 0);
            }
        }
    }

    #[test]
    fn empty_input_test() {
        assert!(matches!(encode(&[]), Err(HuffError::EmptyInput)));
    }

    #[test]
    fn abb_layout_test() {
        // tree: 0 1 01100001 1 01100010 (19 bits), payload: 0 1 1 (3 bits), pad = 2
        let out = encode(b"abb").unwrap();
        let mut br = BitReader::new(&out);
        assert_eq!(br.bint(19), Some(0b0_1_01100001_1_01100010));
        assert_eq!(br.bint(8), Some(2));
        assert_eq!(br.bint(2), Some(0));
        assert_eq!(br.bint(3), Some(0b011));
        assert_eq!(br.remaining(), 0);
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn tree_dump_test() {
        // The debug dump shows exactly the serialized tree at the head of the stream
        let out = encode(b"abb").unwrap();
        assert_eq!(bit_string(&out, 19), "0101100001101100010");
        let tree = HuffTree::from_freqs(&freqs(b"abb")).unwrap();
        assert_eq!(tree_bit_len(&tree), 19);
    }

    #[test]
    fn byte_alignment_test() {
        let samples: [&[u8]; 5] = [
            b"a",
            b"ab",
            b"hello world",
            b"mississippi river",
            &[0, 255, 0, 255, 7, 7, 7],
        ];
        for data in samples {
            let out = encode(data).unwrap();
            let mut br = BitReader::new(&out);
            read_tree(&mut br).unwrap();
            let pad = br.bint(8).unwrap();
            assert!(pad < 8);
            // Pad bits are zeros
            assert_eq!(br.bint(pad), Some(0));
        }
    }

    #[test]
    fn single_symbol_test() {
        // Tree is one leaf (9 bits), each symbol costs 1 bit
        let out = encode(&[0x41; 1000]).unwrap();
        let pad = pad_count(9, 1000);
        assert_eq!(pad, 7);
        assert_eq!(out.len() * 8, 9 + 8 + pad + 1000);
        let mut br = BitReader::new(&out);
        let tree = read_tree(&mut br).unwrap();
        assert_eq!(tree.leaves(), vec![0x41]);
    }

    #[test]
    fn full_alphabet_size_test() {
        // Uniform data: every code is 8 bits, so the output is the input plus the tree and pad field
        let data: Vec<u8> = (0..=255).collect();
        let out = encode(&data).unwrap();
        assert_eq!(out.len() * 8, 2559 + 8 + 1 + 256 * 8);
    }

    #[test]
    fn compresses_text_test() {
        let data = "the quick brown fox jumps over the lazy dog ".repeat(50);
        let out = encode(data.as_bytes()).unwrap();
        assert!(out.len() < data.len() * 2 / 3);
    }
}
