//! Integration tests for cidr-hcmask
//!
//! These tests verify the complete workflow from CIDR parsing to mask expansion.

use cidr_hcmask::processing::{expand, for_each_expansion, for_each_mask};
use cidr_hcmask::{cidr_to_compact_masks, cidr_to_masks, AddressBlock, RangeCompressor};

#[test]
fn test_example_28() {
    let masks = cidr_to_masks("192.168.1.0/28").expect("Failed to generate masks");
    assert_eq!(
        masks,
        vec![
            "01234,012345,123456789,192.168.1.?d",
            "01234,012345,123456789,192.168.1.1?2",
        ]
    );
}

#[test]
fn test_example_24() {
    let masks = cidr_to_masks("192.168.0.0/24").expect("Failed to generate masks");
    assert_eq!(
        masks,
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
fn test_example_24_compacted() {
    let masks = cidr_to_compact_masks("192.168.0.0/24").expect("Failed to generate masks");
    assert_eq!(
        masks,
        vec![
            "192.168.0.1?d?d",
            "01234,192.168.0.2?1?d",
            "012345,192.168.0.25?1",
            "123456789,192.168.0.?1?d",
            "192.168.0.?d",
        ]
    );
}

#[test]
fn test_single_address() {
    const IP: &str = "192.168.1.1";
    let masks = cidr_to_masks(&format!("{IP}/32")).expect("Failed to generate masks");
    assert_eq!(masks.len(), 1);
    assert_eq!(expand(&masks[0]).unwrap(), vec![IP]);
}

#[test]
fn test_invalid_cidr() {
    let err = cidr_to_masks("192.168.1.0/33").unwrap_err();
    assert!(err.to_string().contains("syntax error"), "{err}");
    let err = cidr_to_masks("192.168.1.1/24").unwrap_err();
    assert_eq!(
        err.to_string(),
        "192.168.1.1/24: non-zero bits (192.168.1.0/24 expected)"
    );
}

#[test]
fn test_last_octet_blocks_cover_exactly() {
    let compressor = RangeCompressor::new();
    for bits in 24..=32u8 {
        let width = 1usize << (32 - bits);
        for start in (0..256).step_by(width) {
            let cidr = format!("10.20.30.{start}/{bits}");
            let block = AddressBlock::parse(&cidr).unwrap();
            let mut found = Vec::new();
            for_each_mask(&block, &compressor, |mask| {
                for_each_expansion(&mask.to_string(), |s| found.push(s.to_string()))?;
                Ok(())
            })
            .unwrap();
            let expected: Vec<String> = (start..start + width)
                .map(|n| format!("10.20.30.{n}"))
                .collect();
            found.sort_by_key(|s| {
                s.rsplit('.')
                    .next()
                    .and_then(|n| n.parse::<usize>().ok())
            });
            assert_eq!(found, expected, "{cidr}");
        }
    }
}

#[test]
fn test_all_third_octet_blocks() {
    const PREFIX: &str = "192.168.";
    let compressor = RangeCompressor::new();
    let mut patterns_count = 0;

    for bits in 16..24u8 {
        let width = 1usize << (24 - bits);
        let mut found = vec![false; 256 * 256];
        let mut found_count = 0;

        for start in (0..256).step_by(width) {
            let cidr = format!("{PREFIX}{start}.0/{bits}");
            let block = AddressBlock::parse(&cidr).unwrap();
            let mut count = 0;
            for_each_mask(&block, &compressor, |mask| {
                patterns_count += 1;
                for_each_expansion(&mask.compacted(), |s| {
                    let rest = s.strip_prefix(PREFIX).expect("prefix kept");
                    let (p, q) = rest.split_once('.').expect("two octets left");
                    let p: usize = p.parse().unwrap();
                    let q: usize = q.parse().unwrap();
                    assert_eq!(format!("{p}.{q}"), rest, "leading zero in {s}");
                    assert!(p < 256 && q < 256, "{s} out of range");
                    let pq = (p << 8) + q;
                    assert!(!found[pq], "duplicate {s}");
                    found[pq] = true;
                    count += 1;
                    found_count += 1;
                })?;
                Ok(())
            })
            .unwrap();
            assert_eq!(count, width * 256, "{cidr}");
        }
        assert_eq!(found_count, 65536, "/{bits}");
    }

    assert!(
        patterns_count <= 1710,
        "Regression in the count of patterns produced: got {patterns_count}, expected 1710"
    );
}

#[test]
fn test_shared_and_fresh_compressors_agree() {
    for cidr in ["0.0.0.0/0", "10.0.0.0/9", "172.16.0.0/12", "192.168.100.64/26"] {
        let block = AddressBlock::parse(cidr).unwrap();
        let fresh: Vec<String> = cidr_hcmask::assemble(&block, &RangeCompressor::new())
            .unwrap()
            .iter()
            .map(|m| m.to_string())
            .collect();
        assert_eq!(cidr_to_masks(cidr).unwrap(), fresh, "{cidr}");
    }
}
