use crate::Result;
use stockgrid_types::Product;

/// Upstream catalog capability
///
/// Responsibilities:
/// - List the available categories
/// - List the products of one category, in catalog order
///
/// Calls may block, be slow, or fail; callers run them off the UI thread.
/// An unknown category yields an empty list, mirroring the REST catalog.
pub trait CatalogSource: Send + Sync {
    /// Short source identifier (e.g., "http", "file", "demo")
    fn id(&self) -> &'static str;

    fn list_categories(&self) -> Result<Vec<String>>;

    fn list_products(&self, category: &str) -> Result<Vec<Product>>;
}

/// Categories in first-seen order
pub(crate) fn categories_in_order(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in products {
        if !categories.iter().any(|c| c == &product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}

pub(crate) fn products_in_category(products: &[Product], category: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product.category == category)
        .cloned()
        .collect()
}
