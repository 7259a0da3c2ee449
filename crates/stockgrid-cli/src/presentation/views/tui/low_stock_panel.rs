use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

use crate::presentation::view_models::LowStockViewModel;

use super::status_level_to_color;

pub struct LowStockPanelView<'a> {
    model: &'a LowStockViewModel,
}

impl<'a> LowStockPanelView<'a> {
    pub fn new(model: &'a LowStockViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for LowStockPanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!("{} ({})", self.model.title, self.model.items.len());
        let block = Block::default().title(title).borders(Borders::ALL);

        if self.model.items.is_empty() {
            Paragraph::new(self.model.empty_message.as_str())
                .style(Style::default().add_modifier(Modifier::DIM))
                .block(block)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .model
            .items
            .iter()
            .map(|entry| {
                ListItem::new(entry.label.as_str())
                    .style(Style::default().fg(status_level_to_color(entry.level)))
            })
            .collect();

        Widget::render(List::new(items).block(block), area, buf);
    }
}
