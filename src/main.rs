mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::Parser;

use crate::pipeline::{RunConfig, run_pipeline};

/// Tumor mutational burden (mutations per megabase) from a MAF and a target BED.
#[derive(Debug, Parser)]
#[command(name = "kira-tmb", version, about)]
struct Args {
    /// Input MAF file
    #[arg(long = "maf_file", value_name = "PATH")]
    maf_file: PathBuf,

    /// Target regions BED file (chrom, start, end; inclusive)
    #[arg(long = "targets_bed_file", value_name = "PATH")]
    targets_bed_file: PathBuf,

    /// Sequenced panel size in bases
    #[arg(long = "targets_length", value_name = "BASES")]
    targets_length: u64,

    /// Write the TMB value to this file
    #[arg(long = "output_filename", value_name = "PATH")]
    output_filename: Option<PathBuf>,

    /// Write a JSON run summary to this file
    #[arg(long = "summary_json", value_name = "PATH")]
    summary_json: Option<PathBuf>,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        RunConfig {
            maf_file: args.maf_file,
            targets_bed_file: args.targets_bed_file,
            targets_length: args.targets_length,
            output_filename: args.output_filename,
            summary_json: args.summary_json,
        }
    }
}

fn main() {
    let args = Args::parse();
    logging::init_logging();
    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), pipeline::PipelineError> {
    let config = RunConfig::from(args);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_pipeline(&config, &mut out)?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
