//! Domain models for the mask engine.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`AddressBlock`] - IPv4 base address with prefix length
//! - [`Pattern`], [`Token`], [`CharClass`] - typed octet patterns
//! - [`MaskError`], [`CidrError`] - error types

mod error;
mod ipv4;
mod pattern;

// Re-export public types
pub use error::{CidrError, MaskError};
pub use ipv4::{get_cidr_mask, AddressBlock, MAX_LENGTH};
pub use pattern::{decimal_literals, BuiltinClass, CharClass, Pattern, Token, DIGITS};
