use serde::Serialize;
use stockgrid_types::ProductId;

use super::catalog::{CategoryEntry, ProductCardViewModel};
use super::common::StatusLevel;

/// Everything the dashboard draws in one frame
#[derive(Debug, Clone, Serialize)]
pub struct DashboardViewModel {
    pub sidebar: SidebarViewModel,
    pub grid: ProductGridViewModel,
    pub low_stock: LowStockViewModel,
    pub status_bar: StatusBarViewModel,
}

impl DashboardViewModel {
    /// Fold a stock patch into this screen; cards not named keep their values
    pub fn apply(&mut self, patch: StockPatchViewModel) {
        for change in patch.cards {
            if let Some(card) = self.grid.cards.iter_mut().find(|card| card.id == change.id) {
                card.stock = change.stock;
                card.level = change.level;
            }
        }
        self.low_stock = patch.low_stock;
        self.status_bar = patch.status_bar;
    }
}

/// What changed since the previous frame
#[derive(Debug, Clone, Serialize)]
pub enum DashboardUpdate {
    Full(DashboardViewModel),
    Stock(StockPatchViewModel),
}

impl DashboardUpdate {
    pub fn apply_to(self, screen: &mut Option<DashboardViewModel>) {
        match self {
            Self::Full(next) => *screen = Some(next),
            Self::Stock(patch) => {
                if let Some(screen) = screen {
                    screen.apply(patch);
                }
            }
        }
    }
}

/// Stock edits only touch the cards they name plus the summary panels
#[derive(Debug, Clone, Serialize)]
pub struct StockPatchViewModel {
    pub cards: Vec<CardStockViewModel>,
    pub low_stock: LowStockViewModel,
    pub status_bar: StatusBarViewModel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardStockViewModel {
    pub id: ProductId,
    pub stock: u32,
    pub level: StatusLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct SidebarViewModel {
    pub title: String,
    pub categories: Vec<CategoryEntry>,
    pub selected: Option<usize>,
    /// Shown instead of the list while loading or after a failure
    pub message: Option<String>,
    pub message_level: StatusLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductGridViewModel {
    pub category: Option<String>,
    pub cards: Vec<ProductCardViewModel>,
    pub message: Option<String>,
    pub message_level: StatusLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct LowStockViewModel {
    pub title: String,
    pub items: Vec<LowStockEntry>,
    pub empty_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowStockEntry {
    pub id: u64,
    pub label: String,
    pub level: StatusLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub source: String,
    pub product_count: usize,
    pub low_stock_count: usize,
    pub last_update: Option<String>,
    pub status_message: String,
    pub status_level: StatusLevel,
}
