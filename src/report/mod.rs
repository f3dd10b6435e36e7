pub mod json;
pub mod text;

use std::path::PathBuf;

use crate::model::mutations::MutationCounts;

#[derive(Debug, Clone)]
pub struct PanelSummary {
    pub intervals: usize,
    pub chromosomes: usize,
    pub covered_bases: u64,
}

#[derive(Debug, Clone)]
pub struct TmbReport {
    pub tool_name: String,
    pub tool_version: String,
    pub maf_file: PathBuf,
    pub targets_bed_file: PathBuf,
    pub targets_length: u64,
    pub panel: PanelSummary,
    pub counts: MutationCounts,
    pub tmb: f64,
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tests.rs"]
mod tests;
