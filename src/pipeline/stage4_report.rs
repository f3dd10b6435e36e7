use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::pipeline::{PipelineError, RunConfig};
use crate::report::TmbReport;
use crate::report::json::render_summary_json;
use crate::report::text::{render_report_text, render_tmb_value};

pub fn write_reports<W: Write>(
    report: &TmbReport,
    config: &RunConfig,
    out: &mut W,
) -> Result<(), PipelineError> {
    out.write_all(render_report_text(report).as_bytes())
        .and_then(|_| out.flush())
        .map_err(PipelineError::Stdout)?;

    if let Some(path) = &config.output_filename {
        write_text(path, &render_tmb_value(report.tmb))?;
        info!("wrote TMB value to {}", path.display());
    }

    if let Some(path) = &config.summary_json {
        let json = render_summary_json(report)?;
        write_text(path, &json)?;
        info!("wrote summary to {}", path.display());
    }

    Ok(())
}

fn write_text(path: &Path, contents: &str) -> Result<(), PipelineError> {
    let to_err = |source: std::io::Error| PipelineError::Output {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_err)?;
    }
    let mut w = BufWriter::new(File::create(path).map_err(to_err)?);
    w.write_all(contents.as_bytes()).map_err(to_err)?;
    w.flush().map_err(to_err)?;
    Ok(())
}
