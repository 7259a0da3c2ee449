//! Viewport grid layout
//!
//! Maps a viewport size and a fixed card footprint onto a row-major grid,
//! and a scroll position onto the minimal window of rows to realize. All
//! functions are pure and cheap enough to run on every scroll or resize.
//!
//! Units are abstract "pixels": the terminal renderer feeds character cells.

use crate::{Error, Result};
use stockgrid_types::{CellRect, GridGeometry, ResolvedCell, RowWindow};

fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidViewport(format!(
            "{} must be positive, got {}",
            name, value
        )))
    }
}

/// Derive the grid shape.
///
/// - `column_count = max(1, floor(viewport_width / min_card_width))`
/// - `cell_width = viewport_width / column_count` (cards stretch to fill)
/// - `row_count = ceil(item_count / column_count)`
/// - `cell_height = card_height`
pub fn compute_geometry(
    viewport_width: f64,
    viewport_height: f64,
    item_count: usize,
    min_card_width: f64,
    card_height: f64,
) -> Result<GridGeometry> {
    ensure_positive("viewport width", viewport_width)?;
    ensure_positive("card width", min_card_width)?;
    ensure_positive("card height", card_height)?;
    if !viewport_height.is_finite() || viewport_height < 0.0 {
        return Err(Error::InvalidViewport(format!(
            "viewport height must not be negative, got {}",
            viewport_height
        )));
    }

    let column_count = ((viewport_width / min_card_width).floor() as usize).max(1);

    Ok(GridGeometry {
        column_count,
        row_count: item_count.div_ceil(column_count),
        cell_width: viewport_width / column_count as f64,
        cell_height: card_height,
        item_count,
    })
}

/// Map a grid cell to its item, or `None` for trailing cells of the last
/// row (and for coordinates outside the grid).
pub fn resolve_cell(row: usize, column: usize, geometry: &GridGeometry) -> Option<ResolvedCell> {
    if column >= geometry.column_count {
        return None;
    }

    let item_index = row
        .checked_mul(geometry.column_count)?
        .checked_add(column)?;
    if item_index >= geometry.item_count {
        return None;
    }

    Some(ResolvedCell {
        item_index,
        row,
        column,
        rect: CellRect {
            x: column as f64 * geometry.cell_width,
            y: row as f64 * geometry.cell_height,
            width: geometry.cell_width,
            height: geometry.cell_height,
        },
    })
}

/// Row and column of an item index
pub fn cell_of(item_index: usize, geometry: &GridGeometry) -> Option<(usize, usize)> {
    if item_index >= geometry.item_count {
        return None;
    }
    Some((
        item_index / geometry.column_count,
        item_index % geometry.column_count,
    ))
}

/// Minimal row range overlapping `[scroll_top, scroll_top + viewport_height)`.
///
/// Rows are half-open pixel spans, so a row that starts exactly at the
/// bottom edge is not included. A negative scroll offset (overscroll) reads
/// as zero. `None` when the grid has no rows, the viewport has no height,
/// or the offset lies past the content.
pub fn visible_window(
    scroll_top: f64,
    viewport_height: f64,
    geometry: &GridGeometry,
) -> Option<RowWindow> {
    if geometry.row_count == 0 || !viewport_height.is_finite() || viewport_height <= 0.0 {
        return None;
    }

    let scroll_top = if scroll_top.is_finite() {
        scroll_top.max(0.0)
    } else {
        0.0
    };
    if scroll_top >= geometry.content_height() {
        return None;
    }

    let last_index = geometry.row_count - 1;
    let first_row = ((scroll_top / geometry.cell_height).floor() as usize).min(last_index);
    let bottom = scroll_top + viewport_height;
    let last_row = ((bottom / geometry.cell_height).ceil() as usize)
        .saturating_sub(1)
        .clamp(first_row, last_index);

    Some(RowWindow::new(first_row, last_row))
}

/// Widen a window by `rows` on both sides, clamped to the grid
pub fn overscan(window: RowWindow, rows: usize, geometry: &GridGeometry) -> RowWindow {
    let last_index = geometry.row_count.saturating_sub(1);
    RowWindow::new(
        window.first_row.saturating_sub(rows).min(window.first_row),
        window.last_row.saturating_add(rows).min(last_index).max(window.last_row),
    )
}

/// Every realizable cell in `window`, row-major
pub fn cells_in_window(
    window: RowWindow,
    geometry: &GridGeometry,
) -> impl Iterator<Item = ResolvedCell> + '_ {
    window.rows().flat_map(move |row| {
        (0..geometry.column_count).filter_map(move |column| resolve_cell(row, column, geometry))
    })
}

/// Largest meaningful scroll offset
pub fn max_scroll(viewport_height: f64, geometry: &GridGeometry) -> f64 {
    (geometry.content_height() - viewport_height.max(0.0)).max(0.0)
}

/// Smallest scroll change that brings `row` fully into view.
///
/// When the row is taller than the viewport its top edge wins.
pub fn scroll_to_row(
    row: usize,
    viewport_height: f64,
    geometry: &GridGeometry,
    current_scroll: f64,
) -> f64 {
    let row_top = row.min(geometry.row_count.saturating_sub(1)) as f64 * geometry.cell_height;
    let row_bottom = row_top + geometry.cell_height;

    let target = if row_top < current_scroll || geometry.cell_height >= viewport_height {
        row_top
    } else if row_bottom > current_scroll + viewport_height {
        row_bottom - viewport_height
    } else {
        current_scroll
    };

    target.clamp(0.0, max_scroll(viewport_height, geometry))
}
