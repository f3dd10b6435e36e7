pub mod stage1_panel;
pub mod stage2_mutations;
pub mod stage3_tmb;
pub mod stage4_report;

use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;

use crate::input::InputError;
use crate::model::tmb::TmbError;
use crate::report::{PanelSummary, TmbReport};
use stage1_panel::run_stage1;
use stage2_mutations::run_stage2;
use stage3_tmb::run_stage3;
use stage4_report::write_reports;

pub const TOOL_NAME: &str = "kira-tmb";

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub maf_file: PathBuf,
    pub targets_bed_file: PathBuf,
    pub targets_length: u64,
    pub output_filename: Option<PathBuf>,
    pub summary_json: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Tmb(#[from] TmbError),
    #[error("failed to write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write report to stdout: {0}")]
    Stdout(#[source] std::io::Error),
    #[error("failed to serialize summary: {0}")]
    Summary(#[from] serde_json::Error),
}

/// Panel coverage, mutation counting and TMB, then the report. The TMB is
/// computed before anything is printed so a failing run emits no values.
pub fn run_pipeline<W: Write>(config: &RunConfig, out: &mut W) -> Result<TmbReport, PipelineError> {
    let stage1 = run_stage1(&config.targets_bed_file)?;
    let stage2 = run_stage2(&config.maf_file, &stage1.coverage)?;
    let stage3 = run_stage3(
        &stage2.counts,
        config.targets_length,
        stage1.coverage.covered_bases(),
    )?;

    let report = TmbReport {
        tool_name: TOOL_NAME.to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        maf_file: config.maf_file.clone(),
        targets_bed_file: config.targets_bed_file.clone(),
        targets_length: config.targets_length,
        panel: PanelSummary {
            intervals: stage1.coverage.n_intervals(),
            chromosomes: stage1.coverage.n_chromosomes(),
            covered_bases: stage1.coverage.covered_bases(),
        },
        counts: stage2.counts,
        tmb: stage3.tmb,
    };

    write_reports(&report, config, out)?;
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/tests.rs"]
mod tests;
