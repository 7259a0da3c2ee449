use serde::Serialize;

use super::common::StatusLevel;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryListViewModel {
    pub source: String,
    pub categories: Vec<CategoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryEntry {
    /// Catalog key, as sent to the source
    pub name: String,
    /// Capitalized display label
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductListViewModel {
    pub category: String,
    /// Cards in the category after inflation
    pub total: usize,
    pub low_stock_only: bool,
    pub products: Vec<ProductCardViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCardViewModel {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub price: f64,
    pub price_label: String,
    pub stock: u32,
    pub level: StatusLevel,
}
