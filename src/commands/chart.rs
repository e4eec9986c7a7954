use crate::chart::{BarConfig, ChartRequest, LineConfig, compute_geometry};
use crate::cli::{BarArgs, ChartOutputArgs, LineArgs};
use crate::record::{Record, load_records};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::write_output;

#[must_use]
pub fn run_bar(args: &BarArgs) -> i32 {
    match run_bar_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Computes and prints bar chart geometry for a records file.
///
/// # Errors
/// Returns an error if the records cannot be loaded or the output cannot be written.
pub fn run_bar_impl(args: &BarArgs) -> Result<()> {
    let records = load_records(&args.records)?;
    let config = BarConfig::new(&args.category, &args.value).with_locale(args.output.locale);
    emit_chart(&records, &ChartRequest::Bar(config), &args.output)
}

#[must_use]
pub fn run_line(args: &LineArgs) -> i32 {
    match run_line_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Computes and prints line chart geometry for a records file.
///
/// # Errors
/// Returns an error if the records cannot be loaded or the output cannot be written.
pub fn run_line_impl(args: &LineArgs) -> Result<()> {
    let records = load_records(&args.records)?;
    let config =
        LineConfig::new(&args.category, args.series.clone()).with_locale(args.output.locale);
    emit_chart(&records, &ChartRequest::Line(config), &args.output)
}

fn emit_chart(records: &[Record], request: &ChartRequest, output: &ChartOutputArgs) -> Result<()> {
    let geometry = compute_geometry(records, request);
    let title = if output.title.is_empty() {
        request.kind()
    } else {
        output.title.as_str()
    };
    let content = output
        .format
        .formatter(output.locale)
        .format_chart(title, &geometry)?;
    write_output(output.output.as_deref(), &content)
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
