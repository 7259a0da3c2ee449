use crate::session::{GridSettings, SessionOptions};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use stockgrid_providers::{DEFAULT_BASE_URL, SourceKind, SourceOptions};
use stockgrid_types::MAX_INFLATION_ROUNDS;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. STOCKGRID_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.stockgrid (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("STOCKGRID_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("stockgrid"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".stockgrid"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub source: SourceKind,
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            path: None,
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub inflation_rounds: u32,
    pub cache_ttl_secs: u64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            inflation_rounds: MAX_INFLATION_ROUNDS,
            cache_ttl_secs: 300,
        }
    }
}

/// Card footprint in terminal cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub card_width: f64,
    pub card_height: f64,
    pub overscan_rows: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            card_width: 28.0,
            card_height: 7.0,
            overscan_rows: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub grid: GridConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    pub fn validate(&self) -> Result<()> {
        let rounds = self.inventory.inflation_rounds;
        if rounds == 0 || rounds > MAX_INFLATION_ROUNDS {
            return Err(Error::Config(format!(
                "inventory.inflation_rounds must be within 1..={}, got {}",
                MAX_INFLATION_ROUNDS, rounds
            )));
        }

        for (name, value) in [
            ("grid.card_width", self.grid.card_width),
            ("grid.card_height", self.grid.card_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::Config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if self.catalog.timeout_secs == 0 {
            return Err(Error::Config(
                "catalog.timeout_secs must be at least 1".to_string(),
            ));
        }

        if self.catalog.source == SourceKind::File && self.catalog.path.is_none() {
            return Err(Error::Config(
                "catalog.path is required for the file source".to_string(),
            ));
        }

        Ok(())
    }

    pub fn source_options(&self) -> SourceOptions {
        SourceOptions {
            kind: self.catalog.source,
            base_url: self.catalog.base_url.clone(),
            path: self.catalog.path.clone(),
            timeout: Duration::from_secs(self.catalog.timeout_secs),
        }
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            rounds: self.inventory.inflation_rounds,
            cache_ttl: Duration::from_secs(self.inventory.cache_ttl_secs),
            grid: GridSettings {
                card_width: self.grid.card_width,
                card_height: self.grid.card_height,
                overscan_rows: self.grid.overscan_rows,
            },
        }
    }
}
