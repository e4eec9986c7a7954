use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rayon::prelude::*;

use crate::chart::ChartRequest;
use crate::cli::RenderArgs;
use crate::config::{ConfigLoader, FileConfigLoader, LoadedConfig};
use crate::memo::GeometryCache;
use crate::output::OutputFormat;
use crate::record::{Record, load_records};
use crate::trend::StatCard;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

/// File stem for the stat card output.
const STATS_FILE_STEM: &str = "stats";

/// What a batch render produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub output_dir: PathBuf,
    /// Chart files written, in config order.
    pub charts: Vec<PathBuf>,
    pub stats: Option<PathBuf>,
    /// Charts whose geometry came from an identical earlier chart.
    pub reused: usize,
}

#[must_use]
pub fn run_render(args: &RenderArgs) -> i32 {
    match run_render_impl(args) {
        Ok(summary) => {
            println!(
                "Rendered {} chart(s){} to {}",
                summary.charts.len(),
                if summary.stats.is_some() {
                    " and stat cards"
                } else {
                    ""
                },
                summary.output_dir.display()
            );
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Loads the configuration and renders every chart and stat card it lists.
///
/// # Errors
/// Returns an error if the configuration or a records file cannot be loaded,
/// or an output file cannot be written.
pub fn run_render_impl(args: &RenderArgs) -> Result<RenderSummary> {
    let loaded = FileConfigLoader::new().load_from_path(&args.config)?;
    render_config(&loaded, args.output_dir.as_deref(), args.format)
}

/// Renders a loaded configuration, writing `<output_dir>/<name>.<ext>` per chart
/// and `<output_dir>/stats.<ext>` for the stat cards.
///
/// Each distinct records file is read once and each distinct chart is computed once.
///
/// # Errors
/// Returns an error if a records file cannot be loaded or an output file cannot be written.
pub fn render_config(
    loaded: &LoadedConfig,
    output_dir: Option<&Path>,
    format: Option<OutputFormat>,
) -> Result<RenderSummary> {
    let config = &loaded.config;
    let format = format.unwrap_or(config.format);
    let output_dir = output_dir.map_or_else(|| loaded.output_dir(), Path::to_path_buf);

    let record_paths: Vec<PathBuf> = config
        .charts
        .iter()
        .map(|chart| loaded.records_path(&chart.records))
        .collect();
    let datasets = load_datasets(&record_paths)?;

    let requests: Vec<ChartRequest> = config
        .charts
        .iter()
        .map(|chart| chart.request(config.locale))
        .collect();
    let jobs: Vec<(&[Record], &ChartRequest)> = record_paths
        .iter()
        .zip(&requests)
        .map(|(path, request)| {
            let records = datasets.get(path).map_or(&[][..], Vec::as_slice);
            (records, request)
        })
        .collect();

    let mut cache = GeometryCache::new();
    let geometries = cache.compute_all(&jobs);
    log::debug!(
        "Computed {} distinct geometries for {} chart(s)",
        cache.misses(),
        jobs.len()
    );

    fs::create_dir_all(&output_dir)?;

    let rendered: Vec<(PathBuf, String)> = config
        .charts
        .par_iter()
        .zip(geometries.par_iter())
        .map(|(chart, geometry)| -> Result<(PathBuf, String)> {
            let locale = chart.locale.unwrap_or(config.locale);
            let content = format
                .formatter(locale)
                .format_chart(chart.display_title(), geometry)?;
            let path = output_dir.join(format!("{}.{}", chart.name.trim(), format.extension()));
            Ok((path, content))
        })
        .collect::<Result<_>>()?;

    let mut charts = Vec::with_capacity(rendered.len());
    for (path, content) in rendered {
        fs::write(&path, content)?;
        log::info!("Wrote {}", path.display());
        charts.push(path);
    }

    let stats = if config.stats.is_empty() {
        None
    } else {
        let cards: Vec<StatCard> = config
            .stats
            .iter()
            .map(|stat| stat.card(config.locale))
            .collect();
        let content = format.formatter(config.locale).format_stats(&cards)?;
        let path = output_dir.join(format!("{STATS_FILE_STEM}.{}", format.extension()));
        fs::write(&path, content)?;
        log::info!("Wrote {} stat card(s) to {}", cards.len(), path.display());
        Some(path)
    };

    Ok(RenderSummary {
        output_dir,
        charts,
        stats,
        reused: cache.hits(),
    })
}

/// Read every distinct records file once, keyed by resolved path.
fn load_datasets(paths: &[PathBuf]) -> Result<IndexMap<PathBuf, Vec<Record>>> {
    let mut datasets = IndexMap::new();
    for path in paths {
        if !datasets.contains_key(path) {
            let records = load_records(path)?;
            datasets.insert(path.clone(), records);
        }
    }
    Ok(datasets)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
