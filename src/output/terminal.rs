//! Terminal output utilities.
//!
//! Provides colored message helpers for stderr.

use crate::models::AddressBlock;
use colored::Colorize;
use std::fmt::Display;

/// Format an error for the terminal, prefixed with a red `error:`.
pub fn format_error<E: Display + ?Sized>(err: &E) -> String {
    format!("{} {err}", "error:".red().bold())
}

/// One line summary of the output for a block.
///
/// # Arguments
/// * `block` - The address block
/// * `masks` - Number of masks written
pub fn format_summary(block: &AddressBlock, masks: usize) -> String {
    format!(
        "{block}: {masks} mask{s} for {size} address{es}",
        block = block.to_string().green(),
        s = if masks == 1 { "" } else { "s" },
        size = block.size(),
        es = if block.size() == 1 { "" } else { "es" }
    )
}
