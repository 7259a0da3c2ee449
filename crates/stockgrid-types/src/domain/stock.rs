use super::product::{InflatedProduct, ProductId};
use crate::limits::LOW_STOCK_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current stock per product id for one category
pub type StockEntries = HashMap<ProductId, u32>;

/// A product whose stock sits below [`LOW_STOCK_THRESHOLD`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockItem {
    pub product: InflatedProduct,
    pub stock: u32,
}

/// Coarse stock classification used for card colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    Out,
    Low,
    Healthy,
}

impl StockLevel {
    pub fn classify(stock: u32) -> Self {
        if stock == 0 {
            StockLevel::Out
        } else if stock < LOW_STOCK_THRESHOLD {
            StockLevel::Low
        } else {
            StockLevel::Healthy
        }
    }

    pub fn is_low(self) -> bool {
        !matches!(self, StockLevel::Healthy)
    }
}
