//! Huffman coding file compressor.
//!
//! Version 0.1.0
//!
//! Compresses any byte sequence with a single Huffman tree built for that input. The tree travels in front
//! of the data, so no side tables are needed to decompress.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> huffzip -z test.txt`
//!
//! This will compress the file and create the file test.txt.hz. `huffzip -d test.txt.hz` restores it.
//!
//! The library calls are `encode` and `decode`:
//!
//! ```
//! let packed = huffzip::encode(b"abracadabra").unwrap();
//! assert_eq!(huffzip::decode(&packed).unwrap(), b"abracadabra");
//! ```
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::encode;
pub use compression::decompress::decode;
pub use error::{HuffError, Result};

use compression::compress::compress;
use compression::decompress::{decompress, verify};
use tools::cli::{HzOpts, Mode};

/// Run the operation selected in opts. Errors are handed back to the caller, which reports them once.
pub fn run(opts: &HzOpts) -> Result<()> {
    match opts.op_mode {
        Mode::Zip => compress(opts),
        Mode::Unzip => decompress(opts),
        Mode::Test => verify(opts),
    }
}
