use stockgrid_runtime::{CatalogState, InventorySession};
use stockgrid_types::ProductId;

use super::catalog::{category_entry, product_card, stock_status};
use crate::presentation::formatters::{capitalize, format_clock};
use crate::presentation::view_models::{
    CardStockViewModel, DashboardViewModel, LowStockEntry, LowStockViewModel, ProductGridViewModel,
    SidebarViewModel, StatusBarViewModel, StatusLevel, StockPatchViewModel,
};

pub const SIDEBAR_TITLE: &str = "Warehouse Inventory";
pub const LOW_STOCK_TITLE: &str = "Low Stock";
pub const NO_LOW_STOCK: &str = "No low stock items";
pub const LOADING: &str = "Loading...";

fn state_message(state: &CatalogState) -> Option<(String, StatusLevel)> {
    match state {
        CatalogState::Loading => Some((LOADING.to_string(), StatusLevel::Info)),
        CatalogState::Error(message) => Some((message.clone(), StatusLevel::Error)),
        CatalogState::Idle | CatalogState::Ready => None,
    }
}

fn present_sidebar(session: &InventorySession) -> SidebarViewModel {
    let categories: Vec<_> = session
        .categories()
        .iter()
        .map(|c| category_entry(c))
        .collect();
    let selected = session
        .selected_category()
        .and_then(|name| categories.iter().position(|entry| entry.name == name));
    let (message, message_level) = match state_message(session.categories_state()) {
        Some((message, level)) => (Some(message), level),
        None => (None, StatusLevel::Info),
    };

    SidebarViewModel {
        title: SIDEBAR_TITLE.to_string(),
        categories,
        selected,
        message,
        message_level,
    }
}

fn present_grid(session: &InventorySession) -> ProductGridViewModel {
    let category = session.selected_category().map(str::to_string);
    let cards = if session.products_state().is_ready() {
        session
            .products()
            .iter()
            .map(|product| product_card(product, session.stock_of(product.id())))
            .collect()
    } else {
        Vec::new()
    };

    let (message, message_level) = match state_message(session.products_state()) {
        Some((message, level)) => (Some(message), level),
        None if category.is_none() => (Some("Select a category".to_string()), StatusLevel::Info),
        None if cards.is_empty() => (
            Some("No products in this category".to_string()),
            StatusLevel::Info,
        ),
        None => (None, StatusLevel::Info),
    };

    ProductGridViewModel {
        category,
        cards,
        message,
        message_level,
    }
}

fn present_low_stock(session: &InventorySession) -> LowStockViewModel {
    let items = session
        .low_stock()
        .iter()
        .map(|item| LowStockEntry {
            id: item.product.id(),
            label: format!("{} - {}", item.product.title(), item.stock),
            level: stock_status(item.stock),
        })
        .collect();

    LowStockViewModel {
        title: LOW_STOCK_TITLE.to_string(),
        items,
        empty_message: NO_LOW_STOCK.to_string(),
    }
}

fn present_status_bar(session: &InventorySession, low_stock: &LowStockViewModel) -> StatusBarViewModel {
    let (status_message, status_level) = match (
        session.categories_state(),
        session.products_state(),
        session.selected_category(),
    ) {
        (CatalogState::Error(message), _, _) | (_, CatalogState::Error(message), _) => {
            (message.clone(), StatusLevel::Error)
        }
        (_, CatalogState::Loading, Some(category)) => {
            (format!("Loading {}...", capitalize(category)), StatusLevel::Info)
        }
        (CatalogState::Loading, _, _) => (LOADING.to_string(), StatusLevel::Info),
        _ if !low_stock.items.is_empty() => (
            format!("{} products running low", low_stock.items.len()),
            StatusLevel::Warning,
        ),
        _ => ("Ready".to_string(), StatusLevel::Success),
    };
    let product_count = if session.products_state().is_ready() {
        session.products().len()
    } else {
        0
    };

    StatusBarViewModel {
        source: session.source_id().to_string(),
        product_count,
        low_stock_count: low_stock.items.len(),
        last_update: session.last_update().map(format_clock),
        status_message,
        status_level,
    }
}

/// Snapshot of the whole session for one dashboard frame
pub fn present_dashboard(session: &InventorySession) -> DashboardViewModel {
    let sidebar = present_sidebar(session);
    let grid = present_grid(session);
    let low_stock = present_low_stock(session);
    let status_bar = present_status_bar(session, &low_stock);

    DashboardViewModel {
        sidebar,
        grid,
        low_stock,
        status_bar,
    }
}

/// Stock of `product_ids` plus the panels that depend on it
pub fn present_stock_patch(
    session: &InventorySession,
    product_ids: &[ProductId],
) -> StockPatchViewModel {
    let cards = product_ids
        .iter()
        .map(|&id| {
            let stock = session.stock_of(id);
            CardStockViewModel {
                id,
                stock,
                level: stock_status(stock),
            }
        })
        .collect();
    let low_stock = present_low_stock(session);
    let status_bar = present_status_bar(session, &low_stock);

    StockPatchViewModel {
        cards,
        low_stock,
        status_bar,
    }
}
