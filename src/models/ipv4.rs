//! IPv4 address block and CIDR notation parsing.
//!
//! Provides [`AddressBlock`], the base address plus prefix length handed to the mask
//! engine, along with the netmask helper used to validate host bits.

use super::CidrError;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

/// Maximum prefix length for an IPv4 block (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Regex for `a.b.c.d/n` with ASCII decimal fields.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})/([0-9]{1,2})$")
            .expect("Invalid Regex")
    })
}

/// Convert a CIDR prefix length to a netmask as u32.
///
/// # Examples
/// ```
/// use cidr_hcmask::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), Some(0xFFFFFF00));
/// assert_eq!(get_cidr_mask(33), None);
/// ```
pub fn get_cidr_mask(len: u8) -> Option<u32> {
    if len > MAX_LENGTH {
        None
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;
        Some(((all_bits >> right_len) << right_len) as u32)
    }
}

/// Block of IPv4 addresses given as base address and prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct AddressBlock {
    /// Base address, host bits all zero.
    pub octets: [u8; 4],
    /// Number of fixed leading bits (0-32).
    pub prefix_bits: u8,
}

impl AddressBlock {
    /// Create a block, rejecting prefix lengths over 32 and non-zero host bits.
    pub fn new(octets: [u8; 4], prefix_bits: u8) -> Result<AddressBlock, CidrError> {
        let mask = get_cidr_mask(prefix_bits)
            .ok_or_else(|| CidrError::Syntax(format!("/{prefix_bits}")))?;
        let bits = u32::from_be_bytes(octets);
        if bits & !mask != 0 {
            let expected = AddressBlock {
                octets: (bits & mask).to_be_bytes(),
                prefix_bits,
            };
            return Err(CidrError::NonZeroBits {
                input: format!("{}/{prefix_bits}", Ipv4Addr::from(octets)),
                expected,
            });
        }
        Ok(AddressBlock {
            octets,
            prefix_bits,
        })
    }

    /// Parse CIDR notation such as `192.168.2.0/24`.
    ///
    /// Leading zeros are rejected in every field. Host bits are only checked once the
    /// whole string is syntactically valid.
    pub fn parse(s: &str) -> Result<AddressBlock, CidrError> {
        let syntax = || CidrError::Syntax(s.to_string());
        let caps = get_cidr_regex().captures(s).ok_or_else(syntax)?;

        let mut fields = [0u8; 5];
        for (i, field) in fields.iter_mut().enumerate() {
            let text = &caps[i + 1];
            if text.len() > 1 && text.starts_with('0') {
                return Err(syntax());
            }
            *field = text.parse().map_err(|_| syntax())?;
        }
        let prefix_bits = fields[4];
        if prefix_bits > MAX_LENGTH {
            return Err(syntax());
        }

        let octets = [fields[0], fields[1], fields[2], fields[3]];
        AddressBlock::new(octets, prefix_bits).map_err(|e| match e {
            CidrError::NonZeroBits { expected, .. } => CidrError::NonZeroBits {
                input: s.to_string(),
                expected,
            },
            other => other,
        })
    }

    /// Number of prefix bits falling into octet `i` (0..=8).
    pub fn octet_bits(&self, i: usize) -> u8 {
        let used = 8 * i as u32;
        (self.prefix_bits as u32).saturating_sub(used).min(8) as u8
    }

    /// Number of addresses in the block.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix_bits)
    }

    /// Base address as [`Ipv4Addr`].
    pub fn addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.octets)
    }
}

impl FromStr for AddressBlock {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddressBlock::parse(s)
    }
}

impl fmt::Display for AddressBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr(), self.prefix_bits)
    }
}

impl Serialize for AddressBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AddressBlock {
    fn deserialize<D>(deserializer: D) -> Result<AddressBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AddressBlock::parse(&s).map_err(de::Error::custom)
    }
}
