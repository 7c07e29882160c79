//! Mask compaction.
//!
//! Drops class declarations a mask never references and renumbers the remaining
//! `?N` references so the kept declarations stay gap-free.

use super::assemble::MAX_CLASSES;

/// Split up to four leading class declarations off `mask`.
///
/// A declaration ends at the first comma not preceded by a backslash. Escapes are
/// kept verbatim in the returned slices.
pub fn split_declarations(mask: &str) -> (Vec<&str>, &str) {
    let bytes = mask.as_bytes();
    let mut declarations = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() && declarations.len() < MAX_CLASSES {
        match bytes[i] {
            b',' => {
                declarations.push(&mask[start..i]);
                start = i + 1;
            }
            b'\\' => i += 1,
            _ => {}
        }
        i += 1;
    }
    (declarations, &mask[start..])
}

/// Remove unused class declarations from `mask`.
///
/// Returns the input unchanged when every declaration is used, and the bare body when
/// none is.
///
/// A body holding unescaped commas re-splits once declarations are dropped, so for
/// such masks the result may denote other strings and compacting it again may change
/// it further. Assembled masks never have commas in their body.
pub fn compact(mask: &str) -> String {
    let (declarations, body) = split_declarations(mask);

    let bytes = body.as_bytes();
    let mut used = 0u8;
    let mut refs = Vec::new();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] != b'?' {
            i += 1;
            continue;
        }
        let selector = bytes[i + 1];
        let slot = selector.wrapping_sub(b'0') as usize;
        if (1..=MAX_CLASSES).contains(&slot) && slot <= declarations.len() {
            used |= 1 << (selector - b'1');
            refs.push(i + 1);
        }
        i += 2;
    }

    if used == (1u8 << declarations.len()) - 1 {
        return mask.to_string();
    }
    if used == 0 {
        return body.to_string();
    }

    let mut out = String::with_capacity(mask.len());
    let mut renumber = [b'0'; MAX_CLASSES];
    let mut next = b'0';
    for (slot, declaration) in declarations.iter().enumerate() {
        if used & (1 << slot) != 0 {
            next += 1;
            renumber[slot] = next;
            out.push_str(declaration);
            out.push(',');
        }
    }

    let mut last = 0;
    for r in refs {
        out.push_str(&body[last..r]);
        out.push(char::from(renumber[(bytes[r] - b'1') as usize]));
        last = r + 1;
    }
    out.push_str(&body[last..]);
    out
}
