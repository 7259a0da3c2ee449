// Engine module - inventory grid logic (inflation, stock, low-stock view, layout)
// This layer sits between catalog records (types) and the runtime session.

pub mod error;
pub mod inflate;
pub mod layout;
pub mod low_stock;
pub mod stock;

pub use error::{Error, Result};
pub use inflate::{InflationCache, inflate, replica_digits};
pub use layout::{
    cell_of, cells_in_window, compute_geometry, max_scroll, overscan, resolve_cell, scroll_to_row,
    visible_window,
};
pub use low_stock::{ActiveProducts, LowStockDetector, SharedActiveProducts, project_low_stock};
pub use stock::{StockCache, StockChange, StockNotice, StockObserver, SubscriptionId};

use stockgrid_types::{GridGeometry, RowWindow};

// Façade API - the renderer's per-frame query

/// Geometry plus the overscanned row window for one frame.
///
/// `None` window means nothing is on screen (empty grid, zero-height
/// viewport, or an offset past the content).
pub fn frame_layout(
    viewport_width: f64,
    viewport_height: f64,
    scroll_top: f64,
    item_count: usize,
    min_card_width: f64,
    card_height: f64,
    overscan_rows: usize,
) -> Result<(GridGeometry, Option<RowWindow>)> {
    let geometry = compute_geometry(
        viewport_width,
        viewport_height,
        item_count,
        min_card_width,
        card_height,
    )?;
    let window = visible_window(scroll_top, viewport_height, &geometry)
        .map(|window| overscan(window, overscan_rows, &geometry));
    Ok((geometry, window))
}
