//! Error types.
//!
//! [`MaskError`] reports a broken invariant inside the mask engine: a state the
//! compression rules should never reach, or a table corruption. [`CidrError`] is the
//! user-facing parse failure for CIDR notation.

use super::AddressBlock;
use std::error::Error;
use std::fmt;

/// Internal invariant violations of the mask engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// An interval with `start > end` was requested.
    InvalidInterval { start: u8, end: u8 },
    /// No rule produced any pattern for the interval.
    NoCoverage { start: u8, end: u8 },
    /// The produced patterns do not denote exactly `end - start + 1` strings.
    CoverageMismatch { start: u8, end: u8, covered: usize },
    /// The memo table already holds a solution for this interval.
    DuplicateEntry { start: u8, end: u8 },
    /// An assembled mask would need more class declarations than the grammar allows.
    TooManyClasses { count: usize },
    /// A mask contains a wildcard selector that cannot be resolved.
    InvalidToken { mask: String, position: usize },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval { start, end } => {
                write!(f, "invalid interval [{start}, {end}]: start > end")
            }
            Self::NoCoverage { start, end } => {
                write!(f, "no coverage found for [{start}, {end}]")
            }
            Self::CoverageMismatch {
                start,
                end,
                covered,
            } => write!(
                f,
                "coverage mismatch for [{start}, {end}]: {covered} strings, {} expected",
                *end as usize - *start as usize + 1
            ),
            Self::DuplicateEntry { start, end } => {
                write!(f, "duplicate insert: [{start}, {end}]")
            }
            Self::TooManyClasses { count } => {
                write!(f, "mask needs {count} class declarations, at most 4 allowed")
            }
            Self::InvalidToken { mask, position } => {
                write!(f, "invalid wildcard at byte {position} in mask {mask:?}")
            }
        }
    }
}

impl Error for MaskError {}

/// CIDR notation parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    /// The input is not `a.b.c.d/n` with canonical decimal fields.
    Syntax(String),
    /// The address has bits set beyond the prefix length.
    NonZeroBits {
        input: String,
        expected: AddressBlock,
    },
}

impl fmt::Display for CidrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(input) => write!(f, "syntax error: {input:?}"),
            Self::NonZeroBits { input, expected } => {
                write!(f, "{input}: non-zero bits ({expected} expected)")
            }
        }
    }
}

impl Error for CidrError {}
