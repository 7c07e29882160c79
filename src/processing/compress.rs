//! Range compression: integer interval to octet patterns.
//!
//! [`RangeCompressor::compress`] turns `[start, end]` into the smallest list of
//! [`Pattern`]s it can find whose expansions are exactly the decimal strings of the
//! integers in the interval. Rules are tried in a fixed order: exact memo hit, widest
//! canonical prefix, hundreds boundary split, tens boundary split, then the single
//! decade formula. That order fixes the output.

use super::memo::{digit_run, MemoTable, Origin};
use crate::models::{MaskError, Pattern};
use itertools::Itertools;
use std::sync::{Mutex, PoisonError};

/// Compression engine owning its memo table.
///
/// The table lock is held for a whole request, so concurrent callers never race on
/// the read-then-insert of a new entry.
#[derive(Debug)]
pub struct RangeCompressor {
    table: Mutex<MemoTable>,
}

impl RangeCompressor {
    /// Compressor over a freshly seeded table.
    pub fn new() -> RangeCompressor {
        RangeCompressor::with_table(MemoTable::seeded())
    }

    pub fn with_table(table: MemoTable) -> RangeCompressor {
        RangeCompressor {
            table: Mutex::new(table),
        }
    }

    /// Compressor with every interval of 0..=255 already solved.
    pub fn precomputed() -> Result<RangeCompressor, MaskError> {
        let compressor = RangeCompressor::new();
        for start in 0..=255u8 {
            for end in start..=255u8 {
                compressor.compress(start, end)?;
            }
        }
        log::debug!(
            "precomputed compressor holds {} entries",
            compressor.memo_len()
        );
        Ok(compressor)
    }

    /// Patterns covering exactly the decimal strings of `start..=end`.
    pub fn compress(&self, start: u8, end: u8) -> Result<Vec<Pattern>, MaskError> {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        solve(&mut table, start, end)
    }

    /// Number of entries currently in the memo table.
    pub fn memo_len(&self) -> usize {
        self.table
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for RangeCompressor {
    fn default() -> Self {
        Self::new()
    }
}

fn solve(table: &mut MemoTable, start: u8, end: u8) -> Result<Vec<Pattern>, MaskError> {
    if start > end {
        return Err(MaskError::InvalidInterval { start, end });
    }
    if start == end {
        return Ok(vec![Pattern::literal(start)]);
    }
    if let Some(found) = table.get(start, end) {
        return Ok(found.to_vec());
    }

    let mut patterns = Vec::new();
    let mut s = start;
    loop {
        if s == end {
            patterns.push(Pattern::literal(s));
            break;
        }
        if let Some(found) = table.get(s, end) {
            patterns.extend_from_slice(found);
            break;
        }
        if let Some((prefix_end, found)) = table.longest_canonical_prefix(s, end) {
            patterns.extend_from_slice(found);
            s = prefix_end + 1;
            continue;
        }

        let (s_c, e_c) = (s / 100, end / 100);
        if s_c < e_c {
            let next = (s_c + 1) * 100;
            patterns.extend(solve(table, s, next - 1)?);
            s = next;
            continue;
        }

        let (s_d, e_d) = (s / 10, end / 10);
        if s_d < e_d {
            let next = (s_d + 1) * 10;
            patterns.extend(solve(table, s, next - 1)?);
            s = next;
            continue;
        }

        patterns.push(digit_run(s_d as u32, s % 10, end % 10, &[]));
        break;
    }

    if patterns.is_empty() {
        return Err(MaskError::NoCoverage { start, end });
    }
    let covered: usize = patterns.iter().map(Pattern::cardinality).sum();
    if covered != end as usize - start as usize + 1 {
        return Err(MaskError::CoverageMismatch {
            start,
            end,
            covered,
        });
    }

    log::debug!("solved [{start}, {end}] => {}", patterns.iter().join(" "));
    table.insert(start, end, Origin::Solved, patterns.clone())?;
    Ok(patterns)
}
