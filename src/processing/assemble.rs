//! Mask assembly from per-octet pattern lists.
//!
//! Each octet of an [`AddressBlock`] becomes a list of patterns: a literal for a fully
//! fixed octet, the compressed range for the partially fixed one, and [`FULL_RANGE`]
//! for free octets. Masks are the cartesian product of the four lists, first octet
//! varying slowest.

use super::compress::RangeCompressor;
use super::memo::FULL_RANGE;
use crate::models::{AddressBlock, BuiltinClass, MaskError, Pattern};
use colored::Colorize;
use itertools::Itertools;
use std::error::Error;
use std::fmt;

/// Maximum number of class declarations in one mask.
pub const MAX_CLASSES: usize = 4;

/// A complete mask: class declarations followed by the dotted pattern body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mask {
    classes: Vec<String>,
    body: String,
}

impl Mask {
    /// The mask with unused declarations dropped, see [`super::compact`].
    pub fn compacted(&self) -> String {
        super::compact(&self.to_string())
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in &self.classes {
            write!(f, "{class},")?;
        }
        f.write_str(&self.body)
    }
}

/// Pattern lists for the four octets of `block`.
pub fn octet_patterns(
    block: &AddressBlock,
    compressor: &RangeCompressor,
) -> Result<[Vec<Pattern>; 4], MaskError> {
    let mut octets: [Vec<Pattern>; 4] = Default::default();
    for (i, slot) in octets.iter_mut().enumerate() {
        let base = block.octets[i];
        *slot = match block.octet_bits(i) {
            8 => vec![Pattern::literal(base)],
            0 => FULL_RANGE.clone(),
            bits => {
                let span = ((1u16 << (8 - bits)) - 1) as u8;
                compressor.compress(base, base | span)?
            }
        };
        log::trace!("octet {i}: {}", slot.iter().join(" "));
    }
    Ok(octets)
}

/// Join one pattern per octet into a mask, renumbering custom classes after the
/// builtin declarations.
pub fn build_mask(fragments: &[&Pattern]) -> Result<Mask, MaskError> {
    let mut classes: Vec<String> = BuiltinClass::ALL
        .iter()
        .map(|c| c.as_str().to_string())
        .collect();
    let mut body = String::new();
    for (i, pattern) in fragments.iter().enumerate() {
        if i > 0 {
            body.push('.');
        }
        body.push_str(&pattern.body(classes.len()));
        classes.extend(pattern.classes().iter().map(|c| c.to_string()));
    }
    if classes.len() > MAX_CLASSES {
        return Err(MaskError::TooManyClasses {
            count: classes.len(),
        });
    }
    Ok(Mask { classes, body })
}

fn masks(octets: &[Vec<Pattern>; 4]) -> impl Iterator<Item = Result<Mask, MaskError>> + '_ {
    octets
        .iter()
        .map(|list| list.iter())
        .multi_cartesian_product()
        .map(|fragments| build_mask(&fragments))
}

/// Every mask for `block`, in cartesian order.
pub fn assemble(
    block: &AddressBlock,
    compressor: &RangeCompressor,
) -> Result<Vec<Mask>, MaskError> {
    let octets = octet_patterns(block, compressor)?;
    let result: Vec<Mask> = masks(&octets).collect::<Result<_, _>>()?;
    log::info!(
        "{block} => {count} masks",
        block = block.to_string().on_blue(),
        count = result.len()
    );
    Ok(result)
}

/// Stream every mask for `block` to `visit`, stopping at the first error.
pub fn for_each_mask<F>(
    block: &AddressBlock,
    compressor: &RangeCompressor,
    mut visit: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnMut(Mask) -> Result<(), Box<dyn Error>>,
{
    let octets = octet_patterns(block, compressor)?;
    for mask in masks(&octets) {
        visit(mask?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CharClass, Token};

    fn shown(cidr: &str) -> Vec<String> {
        let block = AddressBlock::parse(cidr).unwrap();
        assemble(&block, &RangeCompressor::new())
            .unwrap()
            .iter()
            .map(Mask::to_string)
            .collect()
    }

    #[test]
    fn test_assemble_28() {
        assert_eq!(
            shown("192.168.1.0/28"),
            vec![
                "01234,012345,123456789,192.168.1.?d",
                "01234,012345,123456789,192.168.1.1?2",
            ]
        );
    }

    #[test]
    fn test_assemble_32() {
        assert_eq!(
            shown("192.168.1.1/32"),
            vec!["01234,012345,123456789,192.168.1.1"]
        );
    }

    #[test]
    fn test_assemble_24() {
        assert_eq!(
            shown("192.168.0.0/24"),
            vec![
                "01234,012345,123456789,192.168.0.1?d?d",
                "01234,012345,123456789,192.168.0.2?1?d",
                "01234,012345,123456789,192.168.0.25?2",
                "01234,012345,123456789,192.168.0.?3?d",
                "01234,012345,123456789,192.168.0.?d",
            ]
        );
    }

    #[test]
    fn test_assemble_group_tens() {
        assert_eq!(
            shown("0.0.0.32/27"),
            vec![
                "01234,012345,123456789,23456789,0.0.0.3?4",
                "01234,012345,123456789,45,0.0.0.?4?d",
                "01234,012345,123456789,0123,0.0.0.6?4",
            ]
        );
        assert_eq!(
            shown("0.0.0.128/26"),
            vec![
                "01234,012345,123456789,89,0.0.0.12?4",
                "01234,012345,123456789,345678,0.0.0.1?4?d",
                "01234,012345,123456789,01,0.0.0.19?4",
            ]
        );
    }

    #[test]
    fn test_custom_class_in_middle_octet() {
        let masks = shown("10.32.0.0/11");
        assert_eq!(masks.len(), 3 * 25);
        assert_eq!(masks[0], "01234,012345,123456789,23456789,10.3?4.1?d?d.1?d?d");
        assert_eq!(masks[1], "01234,012345,123456789,23456789,10.3?4.1?d?d.2?1?d");
        assert_eq!(masks[25], "01234,012345,123456789,45,10.?4?d.1?d?d.1?d?d");
    }

    #[test]
    fn test_cartesian_order() {
        let masks = shown("0.0.0.0/0");
        assert_eq!(masks.len(), 625);
        assert_eq!(masks[0], "01234,012345,123456789,1?d?d.1?d?d.1?d?d.1?d?d");
        assert_eq!(masks[1], "01234,012345,123456789,1?d?d.1?d?d.1?d?d.2?1?d");
        assert_eq!(masks[5], "01234,012345,123456789,1?d?d.1?d?d.2?1?d.1?d?d");
        assert_eq!(masks[624], "01234,012345,123456789,?d.?d.?d.?d");
    }

    #[test]
    fn test_for_each_mask_matches_assemble() {
        let compressor = RangeCompressor::new();
        let block = AddressBlock::parse("172.16.0.0/13").unwrap();
        let mut streamed = Vec::new();
        for_each_mask(&block, &compressor, |mask| {
            streamed.push(mask);
            Ok(())
        })
        .unwrap();
        assert_eq!(streamed, assemble(&block, &compressor).unwrap());
    }

    #[test]
    fn test_for_each_mask_stops_on_error() {
        let block = AddressBlock::parse("10.0.0.0/8").unwrap();
        let mut seen = 0;
        let result = for_each_mask(&block, &RangeCompressor::new(), |_| {
            seen += 1;
            if seen == 3 {
                Err("stop".into())
            } else {
                Ok(())
            }
        });
        assert_eq!(result.unwrap_err().to_string(), "stop");
        assert_eq!(seen, 3);
    }

    #[test]
    fn test_too_many_classes() {
        let custom = Pattern::new(vec![CharClass::digits(2, 3)], vec![Token::Custom(0)]);
        let literal = Pattern::literal(1);
        assert!(build_mask(&[&custom, &literal, &literal, &literal]).is_ok());
        assert_eq!(
            build_mask(&[&custom, &custom, &literal, &literal]),
            Err(MaskError::TooManyClasses { count: 5 })
        );
    }
}
