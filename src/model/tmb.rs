use thiserror::Error;

pub const PER_MEGABASE: f64 = 1_000_000.0;
pub const TMB_DECIMALS: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TmbError {
    #[error("division by zero: --targets_length must be greater than 0")]
    ZeroTargetLength,
}

/// On-target mutations per megabase of panel, rounded to three decimals.
pub fn compute_tmb(on_target: usize, targets_length: u64) -> Result<f64, TmbError> {
    if targets_length == 0 {
        return Err(TmbError::ZeroTargetLength);
    }
    let raw = on_target as f64 / targets_length as f64 * PER_MEGABASE;
    Ok(round_decimals(raw, TMB_DECIMALS))
}

/// Correctly rounded to `decimals` places: the decimal expansion of the
/// exact binary value is rounded, ties to even.
pub fn round_decimals(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Shortest round-trip rendering, always with a fractional part.
pub fn format_tmb(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/tmb.rs"]
mod tests;
