//! The bitstream module forms the I/O subsystem for the huffzip library.
//!
//! A huffzip stream is not byte oriented: the tree, the pad count and the payload codes all have their
//! own bit lengths. BitPacker queues bits and packs them into bytes, BitReader walks them back out.
//! Both work most significant bit first.
//!
//! Neither side deals with files. The whole stream lives in memory for the length of one call.
//!
pub mod bitpacker;
pub mod bitreader;
