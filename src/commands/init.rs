use std::fs;

use crate::{ChartError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a starter configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ChartError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r##"# console-charts configuration file
# Render with: console-charts render --config charts.toml

# Directory for rendered files, relative to this file (default: "charts")
output_dir = "charts"

# Output format: "text", "json", or "svg" (default: "text")
format = "svg"

# Number locale for hover labels and badges: en, de, fr, es, it, pt, nl
locale = "en"

# Bar chart: one bar per record, heights relative to the largest value
[[chart]]
name = "revenue"
kind = "bar"
title = "Revenue by month"
records = "data/revenue.json"
category_field = "month"
value_field = "revenue"

# Line chart: any number of series over one shared, zero-based domain
[[chart]]
name = "traffic"
kind = "line"
title = "Daily traffic"
records = "data/traffic.json"
category_field = "day"
series = [
    { field = "visits", label = "Visits", color = "#3b82f6" },
    { field = "signups", label = "Sign-ups" },
]
# locale = "de"

# Stat cards are written to stats.<ext>
[[stat]]
title = "Revenue"
value = "$12,000"
delta = 5.0
description = "vs last month"

# [[stat]]
# title = "Open tickets"
# value = "42"
# delta = -3
# unit = "absolute"
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
