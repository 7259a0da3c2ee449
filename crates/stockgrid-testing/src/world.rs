//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated data directory
//! - Writing a catalog file for the `file` source
//! - Configuring CLI commands with the right flags

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use stockgrid_types::Product;
use tempfile::TempDir;

use crate::fixtures::{sample_products, write_catalog};

/// Declarative test environment builder.
///
/// # Example
/// ```ignore
/// use assert_cmd::cargo::cargo_bin_cmd;
/// use stockgrid_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_catalog();
/// let mut cmd = cargo_bin_cmd!("stockgrid");
/// world.configure_command(&mut cmd).arg("categories");
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    catalog_path: Option<PathBuf>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".stockgrid");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            catalog_path: None,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }

    /// Write `products` to `catalog.json` and point commands at it.
    pub fn with_catalog(mut self, products: &[Product]) -> Self {
        let path = self.temp_dir.path().join("catalog.json");
        write_catalog(&path, products).expect("Failed to write catalog");
        self.catalog_path = Some(path);
        self
    }

    pub fn with_sample_catalog(self) -> Self {
        self.with_catalog(&sample_products())
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write a config file into the data directory.
    pub fn write_config(&self, toml: &str) -> Result<()> {
        std::fs::write(self.config_path(), toml)?;
        Ok(())
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller provides the base command (e.g. from `cargo_bin_cmd!("stockgrid")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .arg("--log-level")
            .arg("error");

        if let Some(path) = &self.catalog_path {
            cmd.arg("--source").arg("file").arg("--catalog").arg(path);
        }

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("STOCKGRID_PATH");
        cmd.env_remove("RUST_LOG");
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }
}
