//! Convert IPv4 address blocks into hashcat masks.
//!
//! Each octet range of a block is compressed into patterns made of literal digits,
//! `?d` and positional charset wildcards, then the four octets are combined into
//! complete masks.
//!
//! # Example
//!
//! ```rust
//! use cidr_hcmask::cidr_to_masks;
//!
//! let masks = cidr_to_masks("192.168.1.0/28").unwrap();
//! assert_eq!(
//!     masks,
//!     vec![
//!         "01234,012345,123456789,192.168.1.?d",
//!         "01234,012345,123456789,192.168.1.1?2",
//!     ]
//! );
//! ```

pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;

use std::error::Error;

pub use models::{AddressBlock, CidrError, MaskError};
pub use processing::{assemble, compact, Mask, RangeCompressor};

/// Masks for a block given in CIDR notation, using the shared compressor.
pub fn cidr_to_masks(cidr: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let block = AddressBlock::parse(cidr)?;
    let masks = assemble(&block, processing::shared_compressor())?;
    Ok(masks.iter().map(Mask::to_string).collect())
}

/// Same as [`cidr_to_masks`] with unused declarations removed.
pub fn cidr_to_compact_masks(cidr: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let block = AddressBlock::parse(cidr)?;
    let masks = assemble(&block, processing::shared_compressor())?;
    Ok(masks.iter().map(Mask::compacted).collect())
}
