use std::path::Path;

use tracing::{info, warn};

use crate::input::InputError;
use crate::input::maf::read_maf_positions;
use crate::model::coverage::PanelCoverage;
use crate::model::mutations::MutationCounts;

#[derive(Debug)]
pub struct Stage2Output {
    pub counts: MutationCounts,
}

pub fn run_stage2(maf_path: &Path, coverage: &PanelCoverage) -> Result<Stage2Output, InputError> {
    let (mutations, scan) = read_maf_positions(maf_path)?;
    info!(
        "read mutations {}: data_lines={}, records={}, unique_positions={}, duplicates={}, header_lines={}, comment_lines={}, blank_lines={}",
        maf_path.display(),
        scan.lines.data,
        scan.records,
        mutations.len(),
        scan.duplicates,
        scan.headers,
        scan.lines.comments,
        scan.lines.blank
    );
    if mutations.is_empty() {
        warn!("no mutation records found in {}", maf_path.display());
    }

    let counts = mutations.classify(coverage);
    info!(
        "classified mutations: on_target={}, off_target={}",
        counts.on_target, counts.off_target
    );

    Ok(Stage2Output { counts })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_mutations.rs"]
mod tests;
