pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod memo;
pub mod output;
pub mod record;
pub mod scale;
pub mod trend;

pub use chart::{
    BarConfig, BarGeometry, ChartGeometry, ChartRequest, LineConfig, LineGeometry,
    SeriesDescriptor, compute_bar_geometry, compute_line_geometry,
};
pub use error::{ChartError, Result};
pub use trend::{Trend, TrendState, classify_trend};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
