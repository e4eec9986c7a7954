mod chart;
mod init;
mod render;
mod trend;

pub use chart::{run_bar, run_bar_impl, run_line, run_line_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use render::{RenderSummary, render_config, run_render, run_render_impl};
pub use trend::{run_trend, run_trend_impl};

use std::fs;
use std::path::Path;

use crate::Result;

/// Write `content` to `output_path`, or to stdout when no path is given.
fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
        log::info!("Wrote {}", path.display());
    } else if content.ends_with('\n') {
        print!("{content}");
    } else {
        println!("{content}");
    }
    Ok(())
}
