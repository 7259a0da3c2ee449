use stockgrid_types::{GridGeometry, RowWindow};

use crate::presentation::view_models::{
    CommandResultViewModel, LayoutViewModel, RowSpanViewModel, StatusBadge,
};

/// Inputs and engine results for one layout query
pub struct LayoutFacts {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub scroll_top: f64,
    pub card_width: f64,
    pub card_height: f64,
    pub geometry: GridGeometry,
    pub visible: Option<RowWindow>,
    pub rendered: Option<RowWindow>,
    pub max_scroll: f64,
    pub rendered_cells: usize,
}

fn span(window: RowWindow) -> RowSpanViewModel {
    RowSpanViewModel {
        first_row: window.first_row,
        last_row: window.last_row,
    }
}

pub fn present_layout(facts: LayoutFacts) -> CommandResultViewModel<LayoutViewModel> {
    let geometry = facts.geometry;
    let badge = if geometry.is_empty() {
        StatusBadge::info("Nothing to lay out")
    } else if facts.visible.is_none() {
        StatusBadge::warning("Scroll offset is past the content")
    } else {
        StatusBadge::success(format!(
            "{} columns x {} rows",
            geometry.column_count, geometry.row_count
        ))
    };

    let content = LayoutViewModel {
        viewport_width: facts.viewport_width,
        viewport_height: facts.viewport_height,
        scroll_top: facts.scroll_top,
        card_width: facts.card_width,
        card_height: facts.card_height,
        items: geometry.item_count,
        columns: geometry.column_count,
        rows: geometry.row_count,
        cell_width: geometry.cell_width,
        content_height: geometry.content_height(),
        max_scroll: facts.max_scroll,
        visible: facts.visible.map(span),
        rendered: facts.rendered.map(span),
        rendered_cells: facts.rendered_cells,
    };

    CommandResultViewModel::new(content).with_badge(badge)
}
