use stockgrid_types::{InflatedProduct, StockLevel};

use crate::presentation::formatters::{capitalize, format_price};
use crate::presentation::view_models::{
    CategoryEntry, CategoryListViewModel, CommandResultViewModel, Guidance, ProductCardViewModel,
    ProductListViewModel, StatusBadge, StatusLevel,
};

pub fn stock_status(stock: u32) -> StatusLevel {
    match StockLevel::classify(stock) {
        StockLevel::Out => StatusLevel::Error,
        StockLevel::Low => StatusLevel::Warning,
        StockLevel::Healthy => StatusLevel::Success,
    }
}

pub fn category_entry(name: &str) -> CategoryEntry {
    CategoryEntry {
        name: name.to_string(),
        label: capitalize(name),
    }
}

pub fn product_card(product: &InflatedProduct, stock: u32) -> ProductCardViewModel {
    ProductCardViewModel {
        id: product.id(),
        title: product.title().to_string(),
        category: product.category.clone(),
        price: product.price,
        price_label: format_price(product.price),
        stock,
        level: stock_status(stock),
    }
}

pub fn present_categories(
    source: &str,
    categories: &[String],
) -> CommandResultViewModel<CategoryListViewModel> {
    let content = CategoryListViewModel {
        source: source.to_string(),
        categories: categories.iter().map(|c| category_entry(c)).collect(),
    };

    if categories.is_empty() {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::info(format!("No categories found in {}", source)));
    }

    let label = format!("{} categories from {}", categories.len(), source);
    CommandResultViewModel::new(content).with_badge(StatusBadge::success(label))
}

/// `rows` are the products to list with their stock, already filtered by
/// the caller; `total` is the category size before filtering.
pub fn present_products<'a>(
    category: &str,
    total: usize,
    rows: impl IntoIterator<Item = (&'a InflatedProduct, u32)>,
    low_stock_only: bool,
    limit: Option<usize>,
) -> CommandResultViewModel<ProductListViewModel> {
    let products: Vec<ProductCardViewModel> = rows
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|(product, stock)| product_card(product, stock))
        .collect();

    let badge = if total == 0 {
        StatusBadge::warning(format!("No products in category '{}'", category))
    } else if products.is_empty() && low_stock_only {
        StatusBadge::success("No low stock items")
    } else if low_stock_only {
        StatusBadge::warning(format!(
            "{} low stock products in {}",
            products.len(),
            capitalize(category)
        ))
    } else {
        StatusBadge::success(format!(
            "{} of {} products in {}",
            products.len(),
            total,
            capitalize(category)
        ))
    };

    let content = ProductListViewModel {
        category: category.to_string(),
        total,
        low_stock_only,
        products,
    };

    let mut result = CommandResultViewModel::new(content).with_badge(badge);
    if total == 0 {
        result = result.with_suggestion(
            Guidance::new("List the available categories").with_command("stockgrid categories"),
        );
    }
    result
}
