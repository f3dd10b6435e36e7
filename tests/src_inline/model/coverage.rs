use std::collections::HashSet;

use crate::model::coverage::{PanelCoverage, TargetInterval};
use crate::model::position::position_key;

fn interval(chrom: &str, start: i64, end: i64) -> TargetInterval {
    TargetInterval {
        chrom: chrom.to_string(),
        start,
        end,
    }
}

fn expand(intervals: &[TargetInterval]) -> HashSet<String> {
    let mut keys = HashSet::new();
    for iv in intervals {
        for pos in iv.start..=iv.end {
            keys.insert(position_key(&iv.chrom, &pos.to_string()));
        }
    }
    keys
}

#[test]
fn test_single_interval_inclusive() {
    let cov = PanelCoverage::from_intervals(vec![interval("chr1", 100, 104)]);
    assert_eq!(cov.covered_bases(), 5);
    assert!(!cov.contains("chr1", 99));
    assert!(cov.contains("chr1", 100));
    assert!(cov.contains("chr1", 104));
    assert!(!cov.contains("chr1", 105));
    assert!(!cov.contains("chr2", 100));
}

#[test]
fn test_overlaps_counted_once() {
    let intervals = vec![
        interval("chr1", 10, 20),
        interval("chr1", 15, 30),
        interval("chr1", 31, 35),
        interval("chr2", 1, 1),
        interval("chr1", 50, 40),
        interval("chr1", 12, 13),
    ];
    let cov = PanelCoverage::from_intervals(intervals.clone());
    let expanded = expand(&intervals);

    assert_eq!(cov.covered_bases(), expanded.len() as u64);
    assert_eq!(cov.covered_bases(), 27);
    assert_eq!(cov.n_intervals(), 6);
    assert_eq!(cov.n_chromosomes(), 2);
}

#[test]
fn test_membership_matches_expanded_key_set() {
    let intervals = vec![
        interval("chr1", 5, 9),
        interval("chr1", 20, 22),
        interval("chr1", 8, 12),
        interval("chrX", 0, 2),
        interval("chr_alt", 3, 4),
        interval("chrM", -2, 1),
    ];
    let cov = PanelCoverage::from_intervals(intervals.clone());
    let expanded = expand(&intervals);

    for chrom in ["chr1", "chrX", "chr_alt", "chrM", "chr9"] {
        for pos in -5..30i64 {
            let key = position_key(chrom, &pos.to_string());
            assert_eq!(cov.contains_key(&key), expanded.contains(&key), "{key}");
        }
    }
}

#[test]
fn test_non_canonical_keys_never_match() {
    let cov = PanelCoverage::from_intervals(vec![interval("chr1", 1, 100)]);
    assert!(cov.contains_key("chr1_7"));
    assert!(!cov.contains_key("chr1_007"));
    assert!(!cov.contains_key("chr1_+7"));
    assert!(!cov.contains_key("chr1"));
    assert!(!cov.contains_key("_"));
}

#[test]
fn test_empty_panel() {
    let cov = PanelCoverage::from_intervals(Vec::new());
    assert!(cov.is_empty());
    assert_eq!(cov.covered_bases(), 0);
    assert!(!cov.contains_key("chr1_1"));
}

#[test]
fn test_covered_bases_saturates_on_full_range() {
    let cov = PanelCoverage::from_intervals(vec![
        interval("chr1", i64::MIN, i64::MAX),
        interval("chr2", 1, 10),
    ]);
    assert_eq!(cov.covered_bases(), u64::MAX);
    assert!(cov.contains("chr1", i64::MIN));
    assert!(cov.contains("chr1", i64::MAX));
}
