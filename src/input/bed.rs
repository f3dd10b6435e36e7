use std::path::Path;

use crate::input::{InputError, LineStats, read_data_lines};
use crate::model::coverage::TargetInterval;

pub const BED_MIN_FIELDS: usize = 3;

pub fn read_bed_intervals(path: &Path) -> Result<(Vec<TargetInterval>, LineStats), InputError> {
    let mut intervals = Vec::new();
    let stats = read_data_lines(path, false, |line_no, line| {
        intervals.push(parse_bed_line(path, line_no, line)?);
        Ok(())
    })?;
    Ok((intervals, stats))
}

fn parse_bed_line(path: &Path, line_no: usize, line: &str) -> Result<TargetInterval, InputError> {
    let mut fields = line.split_whitespace();
    let (Some(chrom), Some(start), Some(end)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(InputError::malformed(
            path,
            line_no,
            format!("expected at least {BED_MIN_FIELDS} fields (chrom, start, end)"),
        ));
    };

    Ok(TargetInterval {
        chrom: chrom.to_string(),
        start: parse_coord(path, line_no, "start", start)?,
        end: parse_coord(path, line_no, "end", end)?,
    })
}

fn parse_coord(path: &Path, line_no: usize, name: &str, raw: &str) -> Result<i64, InputError> {
    raw.parse::<i64>().map_err(|_| {
        InputError::malformed(path, line_no, format!("non-integer {name} position: {raw:?}"))
    })
}
