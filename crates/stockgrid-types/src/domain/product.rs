use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Product identifier as issued by the catalog (unique within a category)
pub type ProductId = u64;

/// Customer rating attached to a catalog record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// Immutable catalog record
///
/// Field names follow the upstream REST shape so records deserialize
/// directly from the catalog response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: String,
    /// Image reference (URL or opaque key)
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Minimal constructor used by in-memory catalogs and tests
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            description: String::new(),
            category: category.into(),
            image: String::new(),
            rating: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Synthetic replica of a catalog record
///
/// `product.id` and `product.title` carry the rewritten identity; the
/// original id and the replica index are kept alongside so the replica can
/// be traced back to its source record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflatedProduct {
    #[serde(flatten)]
    pub product: Product,
    pub base_id: ProductId,
    /// Zero-based inflation round that produced this replica
    pub replica: u32,
}

impl InflatedProduct {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn title(&self) -> &str {
        &self.product.title
    }
}

impl Deref for InflatedProduct {
    type Target = Product;

    fn deref(&self) -> &Self::Target {
        &self.product
    }
}
