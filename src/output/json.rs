//! JSON report output.

use crate::models::{AddressBlock, MaskError};
use crate::processing::{assemble, RangeCompressor};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::io::Write;

/// Masks generated for one address block.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MaskReport {
    /// The block, as CIDR notation.
    pub cidr: AddressBlock,
    /// Number of masks.
    pub count: usize,
    /// Masks in generation order.
    pub masks: Vec<String>,
}

impl MaskReport {
    /// Assemble the masks of `block`, compacting them when asked.
    pub fn generate(
        block: &AddressBlock,
        compressor: &RangeCompressor,
        compact: bool,
    ) -> Result<MaskReport, MaskError> {
        let masks: Vec<String> = assemble(block, compressor)?
            .iter()
            .map(|m| if compact { m.compacted() } else { m.to_string() })
            .collect();
        Ok(MaskReport {
            cidr: *block,
            count: masks.len(),
            masks,
        })
    }
}

/// Write `reports` as a pretty printed JSON array.
pub fn write_report<W: Write + ?Sized>(
    writer: &mut W,
    reports: &[MaskReport],
) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer_pretty(&mut *writer, reports)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    writeln!(writer)?;
    Ok(())
}
