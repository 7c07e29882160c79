//! Mask generation logic.
//!
//! This module contains the algorithmic core:
//! - [`memo`] - Table of solved intervals, seeded with canonical sub-ranges
//! - [`compress`] - Integer interval to octet patterns
//! - [`assemble`] - Cartesian assembly of octet patterns into masks
//! - [`compact`] - Removal of unused class declarations
//! - [`expand`] - Enumeration of the strings a mask denotes

mod assemble;
mod compact;
mod compress;
mod expand;
mod memo;

use lazy_static::lazy_static;

// Re-export public types and functions
pub use assemble::{assemble, build_mask, for_each_mask, octet_patterns, Mask, MAX_CLASSES};
pub use compact::{compact, split_declarations};
pub use compress::RangeCompressor;
pub use expand::{expand, for_each_expansion};
pub use memo::{digit_run, MemoTable, Origin, FULL_RANGE};

lazy_static! {
    static ref SHARED_COMPRESSOR: RangeCompressor = RangeCompressor::new();
}

/// Process-wide compressor, its memo table shared by every caller.
pub fn shared_compressor() -> &'static RangeCompressor {
    &SHARED_COMPRESSOR
}
