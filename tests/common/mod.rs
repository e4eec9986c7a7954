#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the console-charts binary.
#[macro_export]
macro_rules! console_charts {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("console-charts"))
    };
}

/// Monthly sales records shared by most tests.
pub const SALES_JSON: &str = r#"[
    {"month": "Jan", "revenue": 1200, "cost": 800},
    {"month": "Feb", "revenue": 600, "cost": 900},
    {"month": "Mar", "revenue": 1500.5, "cost": null}
]"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `data/sales.json` with [`SALES_JSON`].
    pub fn create_sales(&self) {
        self.create_file("data/sales.json", SALES_JSON);
    }

    /// Writes `charts.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file("charts.toml", content);
    }

    /// Reads a file relative to the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}
