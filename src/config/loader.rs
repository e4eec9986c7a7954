use std::path::{Path, PathBuf};

use crate::error::{ChartError, Result};

use super::Config;

pub const DEFAULT_CONFIG_NAME: &str = "charts.toml";

/// A parsed config and the directory its relative paths resolve against.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: Config,
    pub base_dir: PathBuf,
}

impl LoadedConfig {
    /// Resolve a records path from the config against the config's directory.
    #[must_use]
    pub fn records_path(&self, records: &Path) -> PathBuf {
        if records.is_absolute() {
            records.to_path_buf()
        } else {
            self.base_dir.join(records)
        }
    }

    /// Resolve the output directory, unless overridden on the command line.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.records_path(&self.config.output_dir)
    }
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load `charts.toml` from the current directory.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read, parsed, or validated.
    fn load(&self) -> Result<LoadedConfig>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated.
    fn load_from_path(&self, path: &Path) -> Result<LoadedConfig>;
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content).map_err(ChartError::from)?;
        config.validate()?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadedConfig> {
        let path = self.fs.current_dir()?.join(DEFAULT_CONFIG_NAME);
        self.load_from_path(&path)
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadedConfig> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| ChartError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::parse_config(&content)?;
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        log::debug!(
            "Loaded {} chart(s) and {} stat card(s) from {}",
            config.charts.len(),
            config.stats.len(),
            path.display()
        );
        Ok(LoadedConfig { config, base_dir })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
