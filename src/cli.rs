use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::chart::SeriesDescriptor;
use crate::config::DEFAULT_CONFIG_NAME;
use crate::format::NumberLocale;
use crate::output::OutputFormat;
use crate::trend::TrendUnit;

#[derive(Parser, Debug)]
#[command(name = "console-charts")]
#[command(author, version, about = "Chart geometry for back-office dashboards")]
#[command(long_about = "Computes bar and line chart geometry and stat trend badges from JSON \
    records, and prints it as text, JSON, or SVG.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute bar chart geometry from a records file
    Bar(BarArgs),

    /// Compute line chart geometry from a records file
    Line(LineArgs),

    /// Classify a delta into a trend badge
    Trend(TrendArgs),

    /// Render every chart and stat card in a configuration file
    Render(RenderArgs),

    /// Generate a starter configuration file
    Init(InitArgs),
}

/// Options shared by the single-chart commands.
#[derive(Parser, Debug)]
pub struct ChartOutputArgs {
    /// Chart title
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Output format [possible values: text, json, svg]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number locale for display values (en, de, fr, es, it, pt, nl)
    #[arg(long, default_value = "en")]
    pub locale: NumberLocale,
}

#[derive(Parser, Debug)]
pub struct BarArgs {
    /// JSON file holding an array of records
    pub records: PathBuf,

    /// Field holding the category label
    #[arg(short, long)]
    pub category: String,

    /// Field holding the bar value
    #[arg(long)]
    pub value: String,

    #[command(flatten)]
    pub output: ChartOutputArgs,
}

#[derive(Parser, Debug)]
pub struct LineArgs {
    /// JSON file holding an array of records
    pub records: PathBuf,

    /// Field holding the x-axis label
    #[arg(short, long)]
    pub category: String,

    /// Series as `field[:label[:color]]`, can be specified multiple times.
    /// Colors are hex, `rgb(...)`, CSS names, or a `--color-<name>` variable
    #[arg(short, long = "series", value_parser = parse_series, required = true)]
    pub series: Vec<SeriesDescriptor>,

    #[command(flatten)]
    pub output: ChartOutputArgs,
}

#[derive(Parser, Debug)]
pub struct TrendArgs {
    /// Change versus the comparison period; omit when there is none
    #[arg(allow_negative_numbers = true)]
    pub delta: Option<f64>,

    /// How the delta is printed [possible values: percent, absolute]
    #[arg(short, long, default_value = "percent")]
    pub unit: TrendUnit,

    /// Number locale for the delta text
    #[arg(long, default_value = "en")]
    pub locale: NumberLocale,

    /// Output format [possible values: text, json, svg]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_NAME)]
    pub config: PathBuf,

    /// Output directory (overrides config `output_dir`)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Output format (overrides config `format`)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Parse `field[:label[:color]]` into a series descriptor.
///
/// # Errors
/// Returns an error message when the field part is empty.
pub fn parse_series(s: &str) -> std::result::Result<SeriesDescriptor, String> {
    let mut parts = s.splitn(3, ':');
    let field = parts.next().unwrap_or_default().trim();
    if field.is_empty() {
        return Err(format!("Series '{s}' has no field"));
    }
    let label = parts.next().unwrap_or_default().trim();
    let color = parts.next().unwrap_or_default().trim();
    Ok(SeriesDescriptor::new(field, label, color))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
