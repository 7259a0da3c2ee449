use crate::file::JsonFileCatalog;
use crate::http::{DEFAULT_BASE_URL, HttpCatalog};
use crate::memory::StaticCatalog;
use crate::traits::CatalogSource;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Available catalog source implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Http,
    File,
    #[default]
    Demo,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [SourceKind::Http, SourceKind::File, SourceKind::Demo];

    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Http => "http",
            SourceKind::File => "file",
            SourceKind::Demo => "demo",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::Config(format!("unknown catalog source: {}", s)))
    }
}

/// Everything needed to build a source
#[derive(Debug, Clone)]
pub struct SourceOptions {
    pub kind: SourceKind,
    pub base_url: String,
    pub path: Option<PathBuf>,
    pub timeout: Duration,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            path: None,
            timeout: Duration::from_secs(10),
        }
    }
}

pub fn create_source(options: &SourceOptions) -> Result<Arc<dyn CatalogSource>> {
    let source: Arc<dyn CatalogSource> = match options.kind {
        SourceKind::Http => Arc::new(HttpCatalog::new(&options.base_url, options.timeout)?),
        SourceKind::File => {
            let path = options.path.clone().ok_or_else(|| {
                Error::Config("the file source needs a catalog path".to_string())
            })?;
            Arc::new(JsonFileCatalog::new(path))
        }
        SourceKind::Demo => Arc::new(StaticCatalog::demo()),
    };

    tracing::info!(source = source.id(), "catalog source ready");
    Ok(source)
}
