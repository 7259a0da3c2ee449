use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LayoutViewModel {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub scroll_top: f64,
    pub card_width: f64,
    pub card_height: f64,
    pub items: usize,
    pub columns: usize,
    pub rows: usize,
    pub cell_width: f64,
    pub content_height: f64,
    pub max_scroll: f64,
    /// Rows intersecting the viewport
    pub visible: Option<RowSpanViewModel>,
    /// Visible rows plus overscan
    pub rendered: Option<RowSpanViewModel>,
    pub rendered_cells: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RowSpanViewModel {
    pub first_row: usize,
    pub last_row: usize,
}
