use crate::cli::TrendArgs;
use crate::trend::classify_trend_with;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::write_output;

#[must_use]
pub fn run_trend(args: &TrendArgs) -> i32 {
    match run_trend_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Classifies a delta and prints its badge.
///
/// # Errors
/// Returns an error if the trend cannot be formatted.
pub fn run_trend_impl(args: &TrendArgs) -> Result<()> {
    let trend = classify_trend_with(args.delta, args.unit, args.locale);
    log::debug!("delta {:?} classified as {}", args.delta, trend.state.as_str());
    let content = args.format.formatter(args.locale).format_trend(&trend)?;
    write_output(None, &content)
}
