//! The compression module manages both directions of the huffzip library.
//!
//! Compression happens in the following steps:
//! - Frequency count: Count how often each byte value occurs.
//! - Tree build: Merge the two rarest nodes until one tree is left.
//! - Code table: Read each symbol's code off its path through the tree.
//! - Packing: Write the tree, the pad count, the padding and then one code per input byte.
//!
//! The padding goes in front of the payload rather than at the end of the stream. The tree marks its own end
//! and the pad count says how many zeros follow, so the decoder always knows where the first code starts.
//!
//! Decompression reverses this: read the tree, read the pad count, skip the padding, then walk the tree one
//! bit at a time until the stream runs out.
//!
//! Both directions hold the whole input and output in memory. Each call builds its own tree and keeps nothing
//! once it returns.
//!

pub mod compress;
pub mod data_io;
pub mod decompress;
