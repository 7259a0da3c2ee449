use crate::traits::{CatalogSource, categories_in_order, products_in_category};
use crate::Result;
use std::path::{Path, PathBuf};
use stockgrid_types::Product;

/// Catalog stored as a JSON array of products on disk
///
/// The file is re-read on every call so edits show up on the next fetch.
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Product>> {
        let content = std::fs::read_to_string(&self.path)?;
        let products: Vec<Product> = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), count = products.len(), "loaded catalog file");
        Ok(products)
    }
}

impl CatalogSource for JsonFileCatalog {
    fn id(&self) -> &'static str {
        "file"
    }

    fn list_categories(&self) -> Result<Vec<String>> {
        Ok(categories_in_order(&self.load()?))
    }

    fn list_products(&self, category: &str) -> Result<Vec<Product>> {
        Ok(products_in_category(&self.load()?, category))
    }
}
