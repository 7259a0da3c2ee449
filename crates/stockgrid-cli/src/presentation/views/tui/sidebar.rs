//! Category sidebar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

use crate::presentation::view_models::SidebarViewModel;

use super::{border_style, status_level_to_color};

pub struct SidebarView<'a> {
    model: &'a SidebarViewModel,
    focused: bool,
}

impl<'a> SidebarView<'a> {
    pub fn new(model: &'a SidebarViewModel, focused: bool) -> Self {
        Self { model, focused }
    }

    fn block(&self) -> Block<'static> {
        Block::default()
            .title(self.model.title.clone())
            .borders(Borders::ALL)
            .border_style(border_style(self.focused))
    }

    /// List widget for stateful rendering, used when there is no message
    pub fn build_list(self) -> List<'static> {
        let items: Vec<ListItem<'static>> = self
            .model
            .categories
            .iter()
            .map(|entry| ListItem::new(entry.label.clone()))
            .collect();

        List::new(items)
            .block(self.block())
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ")
    }

    pub fn has_message(&self) -> bool {
        self.model.message.is_some()
    }
}

impl<'a> Widget for SidebarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let model = self.model;
        match &model.message {
            Some(message) => {
                let color = status_level_to_color(model.message_level);
                Paragraph::new(message.as_str())
                    .style(Style::default().fg(color))
                    .block(self.block())
                    .render(area, buf);
            }
            None => Widget::render(self.build_list(), area, buf),
        }
    }
}
