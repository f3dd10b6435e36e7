use serde::Serialize;

use crate::model::mutations::MutationCounts;
use crate::report::TmbReport;

#[derive(Debug, Serialize)]
struct SummaryJson<'a> {
    tool: ToolMeta<'a>,
    input: InputMeta,
    panel: PanelMeta,
    mutations: MutationCounts,
    tmb: f64,
}

#[derive(Debug, Serialize)]
struct ToolMeta<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct InputMeta {
    maf_file: String,
    targets_bed_file: String,
    targets_length: u64,
}

#[derive(Debug, Serialize)]
struct PanelMeta {
    intervals: usize,
    chromosomes: usize,
    covered_bases: u64,
}

pub fn render_summary_json(report: &TmbReport) -> serde_json::Result<String> {
    let summary = SummaryJson {
        tool: ToolMeta {
            name: &report.tool_name,
            version: &report.tool_version,
        },
        input: InputMeta {
            maf_file: report.maf_file.display().to_string(),
            targets_bed_file: report.targets_bed_file.display().to_string(),
            targets_length: report.targets_length,
        },
        panel: PanelMeta {
            intervals: report.panel.intervals,
            chromosomes: report.panel.chromosomes,
            covered_bases: report.panel.covered_bases,
        },
        mutations: report.counts,
        tmb: report.tmb,
    };
    let mut out = serde_json::to_string_pretty(&summary)?;
    out.push('\n');
    Ok(out)
}
