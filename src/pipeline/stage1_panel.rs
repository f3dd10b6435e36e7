use std::path::Path;

use tracing::{info, warn};

use crate::input::InputError;
use crate::input::bed::read_bed_intervals;
use crate::model::coverage::PanelCoverage;

#[derive(Debug)]
pub struct Stage1Output {
    pub coverage: PanelCoverage,
}

pub fn run_stage1(bed_path: &Path) -> Result<Stage1Output, InputError> {
    let (intervals, lines) = read_bed_intervals(bed_path)?;
    let coverage = PanelCoverage::from_intervals(intervals);

    info!(
        "loaded target panel {}: intervals={}, chromosomes={}, covered_bases={}, comment_lines={}",
        bed_path.display(),
        coverage.n_intervals(),
        coverage.n_chromosomes(),
        coverage.covered_bases(),
        lines.comments
    );
    if coverage.is_empty() {
        warn!(
            "target panel {} covers no positions; every mutation is off-target",
            bed_path.display()
        );
    }

    Ok(Stage1Output { coverage })
}
