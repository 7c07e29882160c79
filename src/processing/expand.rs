//! Mask expansion into concrete strings.

use super::compact::split_declarations;
use crate::models::{MaskError, DIGITS};

/// Remove backslash escapes from a class declaration.
fn unescape(declaration: &str) -> String {
    let mut out = String::with_capacity(declaration.len());
    let mut chars = declaration.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.extend(chars.next()),
            c => out.push(c),
        }
    }
    out
}

/// Visit every concrete string denoted by `mask`.
///
/// `?d` is any digit, `?1`..`?4` the declared classes and `??` a literal `?`.
pub fn for_each_expansion<F>(mask: &str, mut visit: F) -> Result<(), MaskError>
where
    F: FnMut(&str),
{
    let (declarations, body) = split_declarations(mask);
    let classes: Vec<String> = declarations.iter().map(|d| unescape(d)).collect();
    let offset = mask.len() - body.len();
    let invalid = |pos: usize| MaskError::InvalidToken {
        mask: mask.to_string(),
        position: offset + pos,
    };

    let mut slots: Vec<Vec<char>> = Vec::new();
    let mut chars = body.char_indices();
    while let Some((pos, c)) = chars.next() {
        if c != '?' {
            slots.push(vec![c]);
            continue;
        }
        let choices = match chars.next() {
            Some((_, 'd')) => DIGITS.chars().collect(),
            Some((_, '?')) => vec!['?'],
            Some((_, n @ '1'..='4')) => classes
                .get(n as usize - '1' as usize)
                .ok_or_else(|| invalid(pos))?
                .chars()
                .collect(),
            _ => return Err(invalid(pos)),
        };
        slots.push(choices);
    }

    let mut buf = String::with_capacity(slots.len());
    expand_rec(&slots, &mut buf, &mut visit);
    Ok(())
}

fn expand_rec<F: FnMut(&str)>(slots: &[Vec<char>], buf: &mut String, visit: &mut F) {
    match slots.split_first() {
        None => visit(buf),
        Some((first, rest)) => {
            for &c in first {
                buf.push(c);
                expand_rec(rest, buf, visit);
                buf.pop();
            }
        }
    }
}

/// Every concrete string denoted by `mask`, in enumeration order.
pub fn expand(mask: &str) -> Result<Vec<String>, MaskError> {
    let mut out = Vec::new();
    for_each_expansion(mask, |s| out.push(s.to_string()))?;
    Ok(out)
}
