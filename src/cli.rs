//! Command line interface.

use crate::config::Settings;
use crate::models::AddressBlock;
use crate::output::{format_summary, write_expansions, write_masks, write_report, MaskReport};
use crate::processing::{for_each_mask, shared_compressor};
use clap::Parser;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Convert IPv4 blocks in CIDR notation into hashcat masks.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// IPv4 blocks, e.g. 192.168.1.0/28
    #[arg(value_name = "CIDR", required = true)]
    pub cidrs: Vec<String>,

    /// Drop unused charset declarations from each mask
    #[arg(short = 'c', long)]
    pub compact: bool,

    /// Print every address instead of the masks
    #[arg(short = 'e', long, conflicts_with = "json")]
    pub expand: bool,

    /// Print a JSON report
    #[arg(long)]
    pub json: bool,

    /// Write to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Run the command, writing to the requested destination.
pub fn run(args: &Args, settings: &Settings) -> Result<(), Box<dyn Error>> {
    let blocks = args
        .cidrs
        .iter()
        .map(|s| AddressBlock::parse(s))
        .collect::<Result<Vec<_>, _>>()?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).map_err(|e| {
            format!("Error creating output file {}: {e}", path.display())
        })?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    write_blocks(&mut writer, &blocks, args, settings)?;
    writer.flush()?;
    Ok(())
}

/// Write the masks (or addresses, or report) for every block to `writer`.
pub fn write_blocks<W: Write + ?Sized>(
    writer: &mut W,
    blocks: &[AddressBlock],
    args: &Args,
    settings: &Settings,
) -> Result<(), Box<dyn Error>> {
    let compact = args.compact || settings.compact;
    let compressor = shared_compressor();

    if args.json {
        let reports = blocks
            .iter()
            .map(|block| MaskReport::generate(block, compressor, compact))
            .collect::<Result<Vec<_>, _>>()?;
        return write_report(writer, &reports);
    }

    for block in blocks {
        let mut masks = 0;
        for_each_mask(block, compressor, |mask| {
            let text = if compact {
                mask.compacted()
            } else {
                mask.to_string()
            };
            if args.expand {
                write_expansions(writer, &text)?;
            } else {
                write_masks(writer, [text])?;
            }
            masks += 1;
            Ok(())
        })?;
        log::info!("{}", format_summary(block, masks));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_of(argv: &[&str]) -> String {
        let args = Args::try_parse_from(argv.iter().copied()).unwrap();
        let blocks: Vec<AddressBlock> = args
            .cidrs
            .iter()
            .map(|s| AddressBlock::parse(s).unwrap())
            .collect();
        let mut out = Vec::new();
        write_blocks(&mut out, &blocks, &args, &Settings::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_args_parse() {
        let argv = ["cidr-hcmask", "-c", "-o", "out.txt", "10.0.0.0/8"];
        let args = Args::try_parse_from(argv).unwrap();
        assert!(args.compact);
        assert!(!args.expand);
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert_eq!(args.cidrs, vec!["10.0.0.0/8"]);
    }

    #[test]
    fn test_args_require_cidr() {
        assert!(Args::try_parse_from(["cidr-hcmask"]).is_err());
        assert!(Args::try_parse_from(["cidr-hcmask", "--json", "-e", "10.0.0.0/8"]).is_err());
    }

    #[test]
    fn test_masks_output() {
        assert_eq!(
            output_of(&["cidr-hcmask", "192.168.1.0/28"]),
            "01234,012345,123456789,192.168.1.?d\n01234,012345,123456789,192.168.1.1?2\n"
        );
        assert_eq!(
            output_of(&["cidr-hcmask", "--compact", "192.168.1.0/28", "10.0.0.1/32"]),
            "192.168.1.?d\n012345,192.168.1.1?1\n10.0.0.1\n"
        );
    }

    #[test]
    fn test_expand_output() {
        let out = output_of(&["cidr-hcmask", "-e", "10.1.2.8/30"]);
        assert_eq!(out, "10.1.2.8\n10.1.2.9\n10.1.2.10\n10.1.2.11\n");
    }

    #[test]
    fn test_json_output() {
        let out = output_of(&["cidr-hcmask", "--json", "-c", "192.168.1.1/32"]);
        let reports: Vec<MaskReport> = serde_json::from_str(&out).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].masks, vec!["192.168.1.1"]);
    }

    #[test]
    fn test_settings_enable_compaction() {
        let args = Args::try_parse_from(["cidr-hcmask", "192.168.1.0/28"]).unwrap();
        let settings = Settings {
            compact: true,
            ..Settings::default()
        };
        let mut out = Vec::new();
        let blocks = [AddressBlock::parse("192.168.1.0/28").unwrap()];
        write_blocks(&mut out, &blocks, &args, &settings).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "192.168.1.?d\n012345,192.168.1.1?1\n"
        );
    }

    #[test]
    fn test_run_rejects_bad_cidr() {
        let args = Args::try_parse_from(["cidr-hcmask", "10.0.0.1/8"]).unwrap();
        let err = run(&args, &Settings::default()).unwrap_err();
        assert_eq!(err.to_string(), "10.0.0.1/8: non-zero bits (10.0.0.0/8 expected)");
    }
}
