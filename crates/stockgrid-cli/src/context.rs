use crate::args::{OutputFormat, SourceArg};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use stockgrid_engine::StockCache;
use stockgrid_providers::{SourceKind, create_source};
use stockgrid_runtime::{Config, InventorySession};

/// Command-line values that take precedence over config.toml
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source: Option<SourceArg>,
    pub catalog: Option<PathBuf>,
    pub base_url: Option<String>,
    pub rounds: Option<u32>,
}

impl Overrides {
    pub fn apply(&self, config: &mut Config) {
        match (self.source, &self.catalog) {
            (Some(source), _) => config.catalog.source = source.into(),
            (None, Some(_)) => config.catalog.source = SourceKind::File,
            (None, None) => {}
        }
        if let Some(path) = &self.catalog {
            config.catalog.path = Some(path.clone());
        }
        if let Some(base_url) = &self.base_url {
            config.catalog.base_url = base_url.clone();
        }
        if let Some(rounds) = self.rounds {
            config.inventory.inflation_rounds = rounds;
        }
    }
}

pub struct ExecutionContext {
    data_dir: PathBuf,
    config: Config,
    format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, overrides: &Overrides, format: OutputFormat) -> Result<Self> {
        let config_path = Config::path_in(&data_dir);
        let mut config = Config::load_from(&config_path)
            .with_context(|| format!("failed to load {}", config_path.display()))?;
        overrides.apply(&mut config);
        config.validate()?;

        Ok(Self {
            data_dir,
            config,
            format,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn json_mode(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Build a fresh session on the configured source
    pub fn open_session(&self) -> Result<InventorySession> {
        let source = create_source(&self.config.source_options())?;
        let session =
            InventorySession::new(source, StockCache::new(), self.config.session_options())?;
        Ok(session)
    }

    /// How long one-shot commands wait for the catalog
    pub fn settle_timeout(&self) -> Duration {
        Duration::from_secs(self.config.catalog.timeout_secs + 5)
    }
}
