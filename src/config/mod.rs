mod loader;
mod model;

pub use loader::{
    ConfigLoader, DEFAULT_CONFIG_NAME, FileConfigLoader, FileSystem, LoadedConfig, RealFileSystem,
};
pub use model::{ChartEntry, ChartKind, Config, DEFAULT_OUTPUT_DIR, StatEntry};
