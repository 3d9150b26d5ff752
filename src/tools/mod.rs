//! The tools module provides several helper functions for the huffzip library.
//!
//! The tools are:
//! - cli: Command line interface for huffzip.
//! - freq_count: Frequency count of the input bytes.
//! - report: Compression ratio reporting.
//!
pub mod cli;
pub mod freq_count;
pub mod report;
