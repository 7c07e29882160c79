//! Output formatting for generated masks.
//!
//! This module handles writing masks out:
//! - [`lines`] - One mask (or expanded address) per line
//! - [`json`] - JSON report per address block
//! - [`terminal`] - Colored messages for the terminal

pub mod json;
pub mod lines;
mod terminal;

pub use json::{write_report, MaskReport};
pub use lines::{write_expansions, write_masks};
pub use terminal::{format_error, format_summary};
