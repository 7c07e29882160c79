//! Line oriented output.

use crate::processing::for_each_expansion;
use std::error::Error;
use std::fmt::Display;
use std::io::{self, Write};

/// Write each mask on its own line, returning the number written.
pub fn write_masks<W, I>(writer: &mut W, masks: I) -> io::Result<usize>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    let mut count = 0;
    for mask in masks {
        writeln!(writer, "{mask}")?;
        count += 1;
    }
    Ok(count)
}

/// Write every concrete string of `mask` on its own line.
pub fn write_expansions<W: Write + ?Sized>(
    writer: &mut W,
    mask: &str,
) -> Result<usize, Box<dyn Error>> {
    let mut count = 0;
    let mut failed = None;
    for_each_expansion(mask, |s| {
        if failed.is_none() {
            match writeln!(writer, "{s}") {
                Ok(()) => count += 1,
                Err(e) => failed = Some(e),
            }
        }
    })?;
    match failed {
        Some(e) => Err(e.into()),
        None => Ok(count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_masks() {
        let mut out = Vec::new();
        let n = write_masks(&mut out, ["a?d", "b"]).unwrap();
        assert_eq!(n, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "a?d\nb\n");
    }

    #[test]
    fn test_write_expansions() {
        let mut out = Vec::new();
        let n = write_expansions(&mut out, "89,10.0.0.12?1").unwrap();
        assert_eq!(n, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "10.0.0.128\n10.0.0.129\n");
    }

    #[test]
    fn test_write_expansions_invalid_mask() {
        let mut out = Vec::new();
        assert!(write_expansions(&mut out, "10.0.0.?7").is_err());
        assert!(out.is_empty());
    }
}
