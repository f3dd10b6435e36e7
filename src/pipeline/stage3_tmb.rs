use tracing::{info, warn};

use crate::model::mutations::MutationCounts;
use crate::model::tmb::{TmbError, compute_tmb, format_tmb};

#[derive(Debug, Clone, Copy)]
pub struct Stage3Output {
    pub tmb: f64,
}

pub fn run_stage3(
    counts: &MutationCounts,
    targets_length: u64,
    covered_bases: u64,
) -> Result<Stage3Output, TmbError> {
    if targets_length != covered_bases {
        warn!(
            "--targets_length ({}) differs from bases covered by the BED file ({}); using --targets_length",
            targets_length, covered_bases
        );
    }
    let tmb = compute_tmb(counts.on_target, targets_length)?;
    info!("TMB = {} mutations/Mb", format_tmb(tmb));
    Ok(Stage3Output { tmb })
}
