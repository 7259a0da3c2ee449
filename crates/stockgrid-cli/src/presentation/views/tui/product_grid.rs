//! Virtualized product grid.
//!
//! The grid component decides which cards are realized and where; this
//! view only paints them.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::formatters::capitalize;
use crate::presentation::view_models::ProductGridViewModel;

use super::{ProductCardView, border_style, status_level_to_color};

/// A realized card and its on-screen rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedCard {
    pub index: usize,
    pub area: Rect,
}

pub struct ProductGridView<'a> {
    model: &'a ProductGridViewModel,
    placed: &'a [PlacedCard],
    selected: Option<usize>,
    focused: bool,
}

impl<'a> ProductGridView<'a> {
    pub fn new(
        model: &'a ProductGridViewModel,
        placed: &'a [PlacedCard],
        selected: Option<usize>,
        focused: bool,
    ) -> Self {
        Self {
            model,
            placed,
            selected,
            focused,
        }
    }

    pub fn block(model: &ProductGridViewModel, focused: bool) -> Block<'static> {
        let title = match &model.category {
            Some(category) => format!("Products - {} ({})", capitalize(category), model.cards.len()),
            None => "Products".to_string(),
        };
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style(focused))
    }
}

impl<'a> Widget for ProductGridView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Self::block(self.model, self.focused);

        if let Some(message) = &self.model.message {
            let color = status_level_to_color(self.model.message_level);
            Paragraph::new(message.as_str())
                .style(Style::default().fg(color))
                .block(block)
                .render(area, buf);
            return;
        }

        block.render(area, buf);
        for placed in self.placed {
            if let Some(card) = self.model.cards.get(placed.index) {
                ProductCardView::new(card, self.selected == Some(placed.index))
                    .render(placed.area, buf);
            }
        }
    }
}
