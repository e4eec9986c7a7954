use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid records: {0}")]
    InvalidRecords(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ChartError {
    /// Short, stable name of the error kind for diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::JsonParse { .. } => "JsonParse",
            Self::InvalidRecords(_) => "InvalidRecords",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
