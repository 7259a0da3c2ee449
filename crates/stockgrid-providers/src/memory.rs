use crate::Result;
use crate::traits::{CatalogSource, categories_in_order, products_in_category};
use stockgrid_types::{Product, Rating};

/// In-memory catalog
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Small built-in catalog so the dashboard runs offline
    pub fn demo() -> Self {
        let entries: [(u64, &str, f64, &str, f64, u32); 12] = [
            (1, "Trail Backpack 22L", 109.95, "outdoor", 3.9, 120),
            (2, "Insulated Bottle 750ml", 22.30, "outdoor", 4.1, 259),
            (3, "Camp Headlamp", 55.99, "outdoor", 4.7, 500),
            (4, "Folding Trowel", 15.99, "garden", 2.1, 430),
            (5, "Pruning Shears", 34.50, "garden", 4.6, 400),
            (6, "Raised Bed Kit", 168.00, "garden", 3.9, 70),
            (7, "Claw Hammer 16oz", 9.99, "tools", 3.0, 400),
            (8, "Torque Wrench 1/2in", 48.00, "tools", 3.6, 145),
            (9, "Cordless Drill 18V", 114.00, "tools", 4.8, 319),
            (10, "USB-C Power Bank", 64.00, "electronics", 3.3, 203),
            (11, "27in IPS Monitor", 599.00, "electronics", 2.9, 250),
            (12, "Portable SSD 1TB", 109.00, "electronics", 4.8, 319),
        ];

        let products = entries
            .into_iter()
            .map(|(id, title, price, category, rate, count)| Product {
                id,
                title: title.to_string(),
                price,
                description: format!("{} from the demo warehouse", title),
                category: category.to_string(),
                image: format!("demo://{}/{}", category, id),
                rating: Some(Rating { rate, count }),
            })
            .collect();

        Self::new(products)
    }
}

impl CatalogSource for StaticCatalog {
    fn id(&self) -> &'static str {
        "demo"
    }

    fn list_categories(&self) -> Result<Vec<String>> {
        Ok(categories_in_order(&self.products))
    }

    fn list_products(&self, category: &str) -> Result<Vec<Product>> {
        Ok(products_in_category(&self.products, category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_categories_in_first_seen_order() {
        let catalog = StaticCatalog::demo();
        assert_eq!(
            catalog.list_categories().unwrap(),
            vec!["outdoor", "garden", "tools", "electronics"]
        );
    }

    #[test]
    fn test_products_keep_catalog_order() {
        let catalog = StaticCatalog::demo();
        let ids: Vec<u64> = catalog
            .list_products("tools")
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![7, 8, 9]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(StaticCatalog::demo().list_products("toys").unwrap().is_empty());
    }
}
