use std::path::Path;

use tracing::debug;

use crate::input::{InputError, LineStats, read_data_lines};
use crate::model::mutations::MutationSet;
use crate::model::position::position_key;

pub const MAF_HEADER_PREFIX: &str = "Hugo_Symbol";
pub const MAF_CHROM_COL: usize = 4;
pub const MAF_START_COL: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MafScan {
    pub lines: LineStats,
    pub headers: usize,
    pub records: usize,
    pub duplicates: usize,
}

/// Collects one `<Chromosome>_<Start_Position>` key per MAF record.
pub fn read_maf_positions(path: &Path) -> Result<(MutationSet, MafScan), InputError> {
    let mut mutations = MutationSet::new();
    let mut scan = MafScan::default();

    // a trailing newline leaves an empty last line; it is not a record
    let lines = read_data_lines(path, true, |line_no, line| {
        if line.starts_with(MAF_HEADER_PREFIX) {
            scan.headers += 1;
            return Ok(());
        }
        let key = record_key(path, line_no, line)?;
        scan.records += 1;
        if !mutations.insert(key) {
            scan.duplicates += 1;
            debug!("duplicate mutation position at {}:{}", path.display(), line_no);
        }
        Ok(())
    })?;
    scan.lines = lines;

    Ok((mutations, scan))
}

fn record_key(path: &Path, line_no: usize, line: &str) -> Result<String, InputError> {
    let mut fields = line.split_whitespace().skip(MAF_CHROM_COL);
    match (fields.next(), fields.next()) {
        (Some(chrom), Some(start)) => Ok(position_key(chrom, start)),
        _ => Err(InputError::malformed(
            path,
            line_no,
            format!(
                "expected at least {} fields (Chromosome in column {}, Start_Position in column {})",
                MAF_START_COL + 1,
                MAF_CHROM_COL + 1,
                MAF_START_COL + 1
            ),
        )),
    }
}
