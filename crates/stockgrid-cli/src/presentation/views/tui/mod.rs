//! Dashboard widgets.
//!
//! Each view is a thin wrapper around a view model that implements
//! Ratatui's `Widget`. Views never compute: stock colours come from the
//! `StatusLevel` the presenter already chose.

pub mod components;
pub mod low_stock_panel;
pub mod product_card;
pub mod product_grid;
pub mod sidebar;
pub mod status_bar;

pub use low_stock_panel::LowStockPanelView;
pub use product_card::ProductCardView;
pub use product_grid::{PlacedCard, ProductGridView};
pub use sidebar::SidebarView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::{Color, Style};

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

pub(crate) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}
