//! Product grid component.
//!
//! Owns the selected card and the scroll offset, both in terminal cells.
//! The session supplies the geometry and row window for each frame; only
//! cards inside that window are placed and drawn.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Margin, Rect},
    widgets::{Block, Borders, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use stockgrid_engine::{cell_of, cells_in_window, max_scroll, scroll_to_row};
use stockgrid_runtime::{GridFrame, Viewport};
use stockgrid_types::GridGeometry;

use crate::presentation::view_models::ProductGridViewModel;
use crate::presentation::views::tui::{PlacedCard, ProductGridView};

use super::DashboardAction;

/// Screen rectangles for the cards inside `frame.window`, clipped to `inner`
pub fn place_cards(inner: Rect, frame: &GridFrame, scroll_top: f64) -> Vec<PlacedCard> {
    let Some(window) = frame.window else {
        return Vec::new();
    };
    let width = f64::from(inner.width);
    let height = f64::from(inner.height);

    cells_in_window(window, &frame.geometry)
        .filter_map(|cell| {
            let top = (cell.rect.y - scroll_top).floor().max(0.0);
            let bottom = (cell.rect.bottom() - scroll_top).floor().min(height);
            let left = cell.rect.x.floor();
            let right = cell.rect.right().floor().min(width);
            if bottom <= top || right <= left {
                return None;
            }

            Some(PlacedCard {
                index: cell.item_index,
                area: Rect::new(
                    inner.x + left as u16,
                    inner.y + top as u16,
                    (right - left) as u16,
                    (bottom - top) as u16,
                ),
            })
        })
        .collect()
}

pub struct GridComponent {
    selected: usize,
    scroll_top: f64,
    category: Option<String>,
}

impl GridComponent {
    pub fn new() -> Self {
        Self {
            selected: 0,
            scroll_top: 0.0,
            category: None,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn inner(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    pub fn viewport(&self, area: Rect) -> Viewport {
        let inner = Self::inner(area);
        Viewport {
            width: f64::from(inner.width),
            height: f64::from(inner.height),
            scroll_top: self.scroll_top,
        }
    }

    /// Start from the top whenever another category is shown
    pub fn sync(&mut self, model: &ProductGridViewModel) {
        if self.category != model.category {
            self.category = model.category.clone();
            self.selected = 0;
            self.scroll_top = 0.0;
        }
    }

    /// Keep selection and scroll inside the grid; true when the scroll moved
    pub fn clamp(&mut self, frame: &GridFrame, viewport_height: f64) -> bool {
        let geometry = &frame.geometry;
        self.selected = self.selected.min(geometry.item_count.saturating_sub(1));

        let clamped = self
            .scroll_top
            .clamp(0.0, max_scroll(viewport_height, geometry));
        let moved = clamped != self.scroll_top;
        self.scroll_top = clamped;
        moved
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        model: &ProductGridViewModel,
        frame: Option<&GridFrame>,
        viewport_height: f64,
    ) -> Option<DashboardAction> {
        let geometry = &frame?.geometry;
        let last = geometry.item_count.checked_sub(1)?;
        let columns = geometry.column_count.max(1);
        let page_rows = ((viewport_height / geometry.cell_height).floor() as usize).max(1);
        let page = page_rows * columns;

        let target = match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.selected.saturating_sub(1),
            KeyCode::Right | KeyCode::Char('l') => (self.selected + 1).min(last),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected.checked_sub(columns).unwrap_or(self.selected)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let below = self.selected + columns;
                if below <= last { below } else { self.selected }
            }
            KeyCode::PageUp => self.selected.saturating_sub(page),
            KeyCode::PageDown => (self.selected + page).min(last),
            KeyCode::Home => 0,
            KeyCode::End => last,
            KeyCode::Enter | KeyCode::Char('d') | KeyCode::Char('-') => {
                return model
                    .cards
                    .get(self.selected)
                    .map(|card| DashboardAction::Decrease(card.id));
            }
            _ => return None,
        };

        self.select(target, geometry, viewport_height);
        None
    }

    fn select(&mut self, index: usize, geometry: &GridGeometry, viewport_height: f64) {
        self.selected = index;
        if let Some((row, _)) = cell_of(index, geometry) {
            self.scroll_top = scroll_to_row(row, viewport_height, geometry, self.scroll_top);
        }
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        model: &ProductGridViewModel,
        frame: Option<&GridFrame>,
        focused: bool,
    ) {
        let inner = Self::inner(area);
        let frame = frame.filter(|_| model.message.is_none());
        let placed = frame
            .map(|frame| place_cards(inner, frame, self.scroll_top))
            .unwrap_or_default();
        let selected = (!model.cards.is_empty()).then_some(self.selected);

        f.render_widget(ProductGridView::new(model, &placed, selected, focused), area);

        if let Some(frame) = frame {
            let max = max_scroll(f64::from(inner.height), &frame.geometry);
            if max > 0.0 {
                let mut state =
                    ScrollbarState::new(max as usize + 1).position(self.scroll_top as usize);
                f.render_stateful_widget(
                    Scrollbar::new(ScrollbarOrientation::VerticalRight),
                    area.inner(Margin {
                        vertical: 1,
                        horizontal: 0,
                    }),
                    &mut state,
                );
            }
        }
    }
}

impl Default for GridComponent {
    fn default() -> Self {
        Self::new()
    }
}
