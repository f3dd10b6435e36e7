use std::collections::HashMap;

use crate::model::position::split_position_key;

/// One BED record, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetInterval {
    pub chrom: String,
    pub start: i64,
    pub end: i64,
}

/// Every base covered by the target panel.
///
/// Intervals are kept per chromosome, sorted and merged, so membership is a
/// binary search instead of a lookup in a per-base key set. Answers are the
/// same as for the expanded set of `<chrom>_<offset>` keys.
#[derive(Debug, Clone, Default)]
pub struct PanelCoverage {
    by_chrom: HashMap<String, Vec<(i64, i64)>>,
    n_intervals: usize,
}

impl PanelCoverage {
    pub fn from_intervals<I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = TargetInterval>,
    {
        let mut by_chrom: HashMap<String, Vec<(i64, i64)>> = HashMap::new();
        let mut n_intervals = 0usize;

        for interval in intervals {
            n_intervals += 1;
            // start > end spans no positions
            if interval.start > interval.end {
                continue;
            }
            by_chrom
                .entry(interval.chrom)
                .or_default()
                .push((interval.start, interval.end));
        }

        for ranges in by_chrom.values_mut() {
            merge_ranges(ranges);
        }

        Self {
            by_chrom,
            n_intervals,
        }
    }

    pub fn contains(&self, chrom: &str, offset: i64) -> bool {
        let Some(ranges) = self.by_chrom.get(chrom) else {
            return false;
        };
        let idx = ranges.partition_point(|&(start, _)| start <= offset);
        idx > 0 && ranges[idx - 1].1 >= offset
    }

    pub fn contains_key(&self, key: &str) -> bool {
        match split_position_key(key) {
            Some((chrom, offset)) => self.contains(chrom, offset),
            None => false,
        }
    }

    /// Number of distinct positions covered; overlapping intervals count once.
    /// Saturates at `u64::MAX`.
    pub fn covered_bases(&self) -> u64 {
        self.by_chrom
            .values()
            .flat_map(|ranges| ranges.iter())
            .map(|&(start, end)| end.abs_diff(start).saturating_add(1))
            .fold(0u64, u64::saturating_add)
    }

    pub fn n_intervals(&self) -> usize {
        self.n_intervals
    }

    pub fn n_chromosomes(&self) -> usize {
        self.by_chrom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_chrom.is_empty()
    }
}

fn merge_ranges(ranges: &mut Vec<(i64, i64)>) {
    ranges.sort_unstable();
    let mut merged: Vec<(i64, i64)> = Vec::with_capacity(ranges.len());
    for &(start, end) in ranges.iter() {
        match merged.last_mut() {
            Some(last) if start <= last.1.saturating_add(1) => {
                last.1 = last.1.max(end);
            }
            _ => merged.push((start, end)),
        }
    }
    *ranges = merged;
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/coverage.rs"]
mod tests;
