// Error types
pub mod error;

// Trait-based architecture (public API)
pub mod traits;

// Source implementations
pub mod file;
pub mod http;
pub mod memory;

// Source registry
pub mod registry;

pub use error::{Error, Result};
pub use file::JsonFileCatalog;
pub use http::{DEFAULT_BASE_URL, HttpCatalog};
pub use memory::StaticCatalog;
pub use registry::{SourceKind, SourceOptions, create_source};
pub use traits::CatalogSource;
