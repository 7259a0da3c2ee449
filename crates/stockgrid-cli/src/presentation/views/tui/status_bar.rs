//! Status Bar View Component
//!
//! Source, counts and the latest status message on the left, key help on
//! the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.status_level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        let updated = self.model.last_update.as_deref().unwrap_or("-");
        let status_line = Line::from(vec![
            Span::raw(format!("Source: {} ", self.model.source)),
            Span::raw("| "),
            Span::raw(format!("Products: {} ", self.model.product_count)),
            Span::raw("| "),
            Span::raw(format!("Low: {} ", self.model.low_stock_count)),
            Span::raw("| "),
            Span::raw(format!("Updated: {} ", updated)),
            Span::raw("| "),
            Span::styled(self.model.status_message.as_str(), Style::default().fg(color)),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let help_line = Line::from(vec![
            key("[q]"),
            Span::raw("uit "),
            key("[tab]"),
            Span::raw("focus "),
            key("[←↑↓→]"),
            Span::raw("move "),
            key("[d]"),
            Span::raw("ecrease "),
            key("[r]"),
            Span::raw("eload"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
