pub mod config;
pub mod error;
pub mod fetcher;
pub mod query_cache;
pub mod session;

pub use config::{CatalogConfig, Config, GridConfig, InventoryConfig, resolve_data_dir};
pub use error::{Error, Result};
pub use fetcher::{CatalogFetcher, FetchOutcome, Served};
pub use query_cache::{DEFAULT_TTL, Lookup, QueryCache};
pub use session::{
    CATEGORIES_ERROR, CatalogState, GridFrame, GridSettings, InventorySession, PRODUCTS_ERROR,
    SessionOptions, Viewport,
};
