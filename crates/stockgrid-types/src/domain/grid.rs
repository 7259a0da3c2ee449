use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Derived grid shape for one viewport size and item count
///
/// Never persisted; recomputed whenever the viewport or the item count
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    /// Always at least 1
    pub column_count: usize,
    pub row_count: usize,
    /// Cards stretch so that `column_count * cell_width == viewport width`
    pub cell_width: f64,
    pub cell_height: f64,
    pub item_count: usize,
}

impl GridGeometry {
    /// Total scrollable height of the grid
    pub fn content_height(&self) -> f64 {
        self.row_count as f64 * self.cell_height
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

/// Pixel rectangle of one grid cell, relative to the grid's content origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CellRect {
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// A grid cell that maps onto a real item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedCell {
    pub item_index: usize,
    pub row: usize,
    pub column: usize,
    pub rect: CellRect,
}

/// Contiguous, inclusive range of rows to realize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowWindow {
    pub first_row: usize,
    pub last_row: usize,
}

impl RowWindow {
    pub fn new(first_row: usize, last_row: usize) -> Self {
        debug_assert!(first_row <= last_row);
        Self {
            first_row,
            last_row,
        }
    }

    pub fn rows(&self) -> RangeInclusive<usize> {
        self.first_row..=self.last_row
    }

    /// Number of rows in the window (a window is never empty)
    pub fn row_span(&self) -> usize {
        self.last_row - self.first_row + 1
    }

    pub fn contains(&self, row: usize) -> bool {
        self.rows().contains(&row)
    }
}
