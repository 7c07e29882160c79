//! Memo table of solved intervals.
//!
//! For every start value the table keeps the solved intervals `[start, end]` ordered by
//! descending end. Seeded entries are the hand-derived canonical sub-ranges; the range
//! compressor appends its own results as it goes. Entries are never replaced.

use crate::models::{decimal_literals, BuiltinClass, CharClass, MaskError, Pattern, Token};
use lazy_static::lazy_static;

/// Century bands with their first and last tens digit.
const TENS_BANDS: [(u8, u8, u8); 3] = [(0, 1, 9), (1, 0, 9), (2, 0, 4)];

lazy_static! {
    /// Patterns for a free octet, in emission order: three digit numbers first, then
    /// two digit, then one digit.
    pub static ref FULL_RANGE: Vec<Pattern> = vec![
        digit_run(1, 0, 9, &[Token::AnyDigit]),
        digit_run(2, 0, 4, &[Token::AnyDigit]),
        digit_run(25, 0, 5, &[]),
        digit_run(0, 1, 9, &[Token::AnyDigit]),
        digit_run(0, 0, 9, &[]),
    ];
}

/// Where a table entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Seeded sub-range, usable as a prefix of larger requests.
    Canonical,
    /// Memoized result, only reused for the exact same interval.
    Solved,
}

#[derive(Debug, Clone)]
struct Entry {
    end: u8,
    origin: Origin,
    patterns: Vec<Pattern>,
}

/// Solved intervals indexed by start value.
#[derive(Debug, Clone)]
pub struct MemoTable {
    rows: Vec<Vec<Entry>>,
}

impl MemoTable {
    /// A table without any entry.
    pub fn empty() -> MemoTable {
        MemoTable {
            rows: vec![Vec::new(); 256],
        }
    }

    /// A table holding the canonical decade and century sub-ranges.
    pub fn seeded() -> MemoTable {
        let mut table = MemoTable::empty();
        table.seed();
        log::debug!("memo table seeded with {} entries", table.len());
        table
    }

    fn seed(&mut self) {
        let mut canonical = Vec::new();
        for (century, first, last) in TENS_BANDS {
            let base = century * 100;
            for tens in first..=last {
                let start = base + tens * 10;
                // decade: 0..9 has no prefix, 10..19 is "1", 190..199 is "19"
                let decade = century as u32 * 10 + tens as u32;
                canonical.push((start, start + 9, digit_run(decade, 0, 9, &[])));
                for hi in tens + 1..=last {
                    let end = base + hi * 10 + 9;
                    let pattern = digit_run(century as u32, tens, hi, &[Token::AnyDigit]);
                    canonical.push((start, end, pattern));
                }
            }
        }
        canonical.push((0, 9, digit_run(0, 0, 9, &[])));
        canonical.push((250, 255, digit_run(25, 0, 5, &[])));

        for (start, end, pattern) in canonical {
            self.insert(start, end, Origin::Canonical, vec![pattern])
                .unwrap_or_else(|e| panic!("canonical seed: {e}"));
        }
    }

    /// Patterns stored for exactly `[start, end]`.
    pub fn get(&self, start: u8, end: u8) -> Option<&[Pattern]> {
        let row = &self.rows[start as usize];
        row.binary_search_by(|e| e.end.cmp(&end).reverse())
            .ok()
            .map(|i| row[i].patterns.as_slice())
    }

    /// The widest canonical entry starting at `start` and ending before `end`.
    pub fn longest_canonical_prefix(&self, start: u8, end: u8) -> Option<(u8, &[Pattern])> {
        self.rows[start as usize]
            .iter()
            .find(|e| e.origin == Origin::Canonical && e.end < end)
            .map(|e| (e.end, e.patterns.as_slice()))
    }

    /// Record the solution of `[start, end]`.
    pub fn insert(
        &mut self,
        start: u8,
        end: u8,
        origin: Origin,
        patterns: Vec<Pattern>,
    ) -> Result<(), MaskError> {
        let row = &mut self.rows[start as usize];
        match row.binary_search_by(|e| e.end.cmp(&end).reverse()) {
            Ok(_) => Err(MaskError::DuplicateEntry { start, end }),
            Err(i) => {
                row.insert(
                    i,
                    Entry {
                        end,
                        origin,
                        patterns,
                    },
                );
                Ok(())
            }
        }
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoTable {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Pattern for the numbers `prefix` followed by one digit in `lo..=hi`, then `tail`.
///
/// A zero prefix is omitted, so `digit_run(0, 0, 9, &[])` is plain `?d`. Digit runs
/// matching a builtin class reuse it; any other run gets its own custom class.
pub fn digit_run(prefix: u32, lo: u8, hi: u8, tail: &[Token]) -> Pattern {
    let mut classes = Vec::new();
    let mut tokens = if prefix > 0 {
        decimal_literals(prefix)
    } else {
        Vec::new()
    };
    let wildcard = if (lo, hi) == (0, 9) {
        Token::AnyDigit
    } else if let Some(builtin) = BuiltinClass::for_digits(lo, hi) {
        Token::Builtin(builtin)
    } else {
        classes.push(CharClass::digits(lo, hi));
        Token::Custom(0)
    };
    tokens.push(wildcard);
    tokens.extend_from_slice(tail);
    Pattern::new(classes, tokens)
}
