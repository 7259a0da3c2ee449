//! Sample catalog records shared by the integration tests.

use anyhow::Result;
use std::path::Path;
use stockgrid_types::{Product, Rating};

/// Six products over three categories.
///
/// `tools` holds exactly two records (ids 7 and 8) so that 50 inflation
/// rounds yield a 100-item grid.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(7, "Claw Hammer", 9.99, "tools")
            .with_description("16oz steel head")
            .with_image("https://img.example/hammer.png"),
        Product::new(4, "Folding Trowel", 15.99, "garden"),
        Product::new(8, "Torque Wrench", 48.0, "tools")
            .with_image("https://img.example/wrench.png"),
        Product::new(5, "Pruning Shears", 34.5, "garden"),
        Product::new(6, "Raised Bed Kit", 168.0, "garden"),
        Product {
            rating: Some(Rating {
                rate: 4.8,
                count: 319,
            }),
            ..Product::new(12, "Portable SSD 1TB", 109.0, "electronics")
        },
    ]
}

/// Products of one sample category, in catalog order
pub fn sample_category(category: &str) -> Vec<Product> {
    sample_products()
        .into_iter()
        .filter(|product| product.category == category)
        .collect()
}

/// Write `products` as a JSON catalog file
pub fn write_catalog(path: &Path, products: &[Product]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(products)?;
    std::fs::write(path, json)?;
    Ok(())
}
