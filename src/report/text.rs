use crate::model::tmb::format_tmb;
use crate::report::TmbReport;

pub fn render_report_text(report: &TmbReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Total number of unique mutations: {}\n",
        report.counts.total
    ));
    out.push_str(&format!(
        "Number of on-target mutations: {}\n",
        report.counts.on_target
    ));
    out.push_str(&format!(
        "Number of off-target mutations: {}\n",
        report.counts.off_target
    ));
    out.push_str(&format!("TMB value: {}\n", format_tmb(report.tmb)));
    out
}

/// Content of `--output_filename`.
pub fn render_tmb_value(tmb: f64) -> String {
    format!("{}\n", format_tmb(tmb))
}
