use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, widgets::ListState};

use crate::presentation::view_models::SidebarViewModel;
use crate::presentation::views::tui::SidebarView;

use super::DashboardAction;

/// Category list; the highlighted row always mirrors the session's selection
#[derive(Default)]
pub struct SidebarComponent {
    state: ListState,
}

impl SidebarComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        model: &SidebarViewModel,
    ) -> Option<DashboardAction> {
        let last = model.categories.len().checked_sub(1)?;
        let current = model.selected.unwrap_or(0).min(last);

        let target = match key.code {
            KeyCode::Up | KeyCode::Char('k') => current.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => (current + 1).min(last),
            KeyCode::Home => 0,
            KeyCode::End => last,
            KeyCode::Enter => current,
            _ => return None,
        };

        if model.selected == Some(target) {
            return None;
        }
        model
            .categories
            .get(target)
            .map(|entry| DashboardAction::SelectCategory(entry.name.clone()))
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, model: &SidebarViewModel, focused: bool) {
        let view = SidebarView::new(model, focused);
        if view.has_message() {
            f.render_widget(view, area);
            return;
        }

        let selected = model.selected.filter(|&i| i < model.categories.len());
        self.state.select(selected);
        f.render_stateful_widget(view.build_list(), area, &mut self.state);
    }
}
