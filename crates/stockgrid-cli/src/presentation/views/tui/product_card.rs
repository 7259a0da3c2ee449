use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::ProductCardViewModel;

use super::status_level_to_color;

/// One product card: title, category, price, stock and the decrease hint
pub struct ProductCardView<'a> {
    model: &'a ProductCardViewModel,
    selected: bool,
}

impl<'a> ProductCardView<'a> {
    pub fn new(model: &'a ProductCardViewModel, selected: bool) -> Self {
        Self { model, selected }
    }
}

impl<'a> Widget for ProductCardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let hint = if self.selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let lines = vec![
            Line::from(Span::styled(
                self.model.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Category: {}", self.model.category),
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::from(self.model.price_label.as_str()),
            Line::from(Span::styled(
                format!("Stock: {}", self.model.stock),
                Style::default().fg(status_level_to_color(self.model.level)),
            )),
            Line::from(Span::styled("[d] Decrease Stock", hint)),
        ];

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).border_style(border))
            .render(area, buf);
    }
}
