use std::fmt;

use crate::presentation::view_models::{LayoutViewModel, RowSpanViewModel};

pub struct LayoutView<'a> {
    data: &'a LayoutViewModel,
}

impl<'a> LayoutView<'a> {
    pub fn new(data: &'a LayoutViewModel) -> Self {
        Self { data }
    }
}

fn rows(span: Option<RowSpanViewModel>) -> String {
    match span {
        Some(span) => format!("{}..={}", span.first_row, span.last_row),
        None => "none".to_string(),
    }
}

impl<'a> fmt::Display for LayoutView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        writeln!(
            f,
            "Viewport:       {} x {} (scroll {})",
            d.viewport_width, d.viewport_height, d.scroll_top
        )?;
        writeln!(f, "Card:           {} x {}", d.card_width, d.card_height)?;
        writeln!(f, "Items:          {}", d.items)?;
        writeln!(f, "Columns:        {}", d.columns)?;
        writeln!(f, "Rows:           {}", d.rows)?;
        writeln!(f, "Cell width:     {:.2}", d.cell_width)?;
        writeln!(f, "Content height: {}", d.content_height)?;
        writeln!(f, "Max scroll:     {}", d.max_scroll)?;
        writeln!(f, "Visible rows:   {}", rows(d.visible))?;
        writeln!(f, "Rendered rows:  {}", rows(d.rendered))?;
        writeln!(f, "Rendered cells: {}", d.rendered_cells)
    }
}

impl fmt::Display for LayoutViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        LayoutView::new(self).fmt(f)
    }
}
