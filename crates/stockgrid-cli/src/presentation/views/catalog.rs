use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::truncate;
use crate::presentation::view_models::{
    CategoryListViewModel, ProductCardViewModel, ProductListViewModel, StatusLevel,
};

// --------------------------------------------------------
// Category List View
// --------------------------------------------------------

pub struct CategoryListView<'a> {
    data: &'a CategoryListViewModel,
}

impl<'a> CategoryListView<'a> {
    pub fn new(data: &'a CategoryListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for CategoryListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.data.categories {
            writeln!(f, "{}", entry.name)?;
        }
        Ok(())
    }
}

impl fmt::Display for CategoryListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        CategoryListView::new(self).fmt(f)
    }
}

// --------------------------------------------------------
// Product List View
// --------------------------------------------------------

pub struct ProductListView<'a> {
    data: &'a ProductListViewModel,
    colored: bool,
}

impl<'a> ProductListView<'a> {
    pub fn new(data: &'a ProductListViewModel) -> Self {
        Self {
            data,
            colored: false,
        }
    }

    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    fn stock_cell(&self, card: &ProductCardViewModel) -> String {
        let text = format!("{:>5}", card.stock);
        if !self.colored {
            return text;
        }
        match card.level {
            StatusLevel::Error => text.red().to_string(),
            StatusLevel::Warning => text.yellow().to_string(),
            _ => text.green().to_string(),
        }
    }
}

impl<'a> fmt::Display for ProductListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.products.is_empty() {
            return Ok(());
        }

        writeln!(f, "{:<10} {:<40} {:>10} {:>5}", "ID", "TITLE", "PRICE", "STOCK")?;
        writeln!(f, "{}", "-".repeat(68))?;

        for card in &self.data.products {
            writeln!(
                f,
                "{:<10} {:<40} {:>10} {}",
                card.id,
                truncate(&card.title, 40),
                card.price_label,
                self.stock_cell(card)
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for ProductListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        ProductListView::new(self)
            .with_color(std::io::stdout().is_terminal())
            .fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u64, title: &str, stock: u32, level: StatusLevel) -> ProductCardViewModel {
        ProductCardViewModel {
            id,
            title: title.to_string(),
            category: "tools".to_string(),
            price: 9.99,
            price_label: "$9.99".to_string(),
            stock,
            level,
        }
    }

    #[test]
    fn test_product_table_plain() {
        let data = ProductListViewModel {
            category: "tools".to_string(),
            total: 2,
            low_stock_only: false,
            products: vec![
                card(70, "Claw Hammer (Copy 1)", 3, StatusLevel::Warning),
                card(80, "Torque Wrench (Copy 1)", 12, StatusLevel::Success),
            ],
        };

        let text = ProductListView::new(&data).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].starts_with("70"));
        assert!(lines[2].contains("Claw Hammer (Copy 1)"));
        assert!(lines[2].ends_with("    3"));
        assert!(lines[3].ends_with("   12"));
    }

    #[test]
    fn test_category_list_prints_keys() {
        let data = CategoryListViewModel {
            source: "demo".to_string(),
            categories: vec![crate::presentation::view_models::CategoryEntry {
                name: "men's clothing".to_string(),
                label: "Men's clothing".to_string(),
            }],
        };
        assert_eq!(CategoryListView::new(&data).to_string(), "men's clothing\n");
    }
}
