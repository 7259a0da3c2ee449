//! Dashboard Component (Page-level)
//!
//! Lays out sidebar, grid, low-stock panel and status bar, tracks which
//! pane has focus and routes keys to it.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};
use stockgrid_runtime::{GridFrame, Viewport};

use crate::presentation::view_models::DashboardViewModel;
use crate::presentation::views::tui::{LowStockPanelView, StatusBarView};

use super::{GridComponent, SidebarComponent};

/// Domain requests a component hands back to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    SelectCategory(String),
    /// Decrease the stock of one product by one
    Decrease(u64),
    Reload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardAreas {
    pub sidebar: Rect,
    pub grid: Rect,
    pub low_stock: Rect,
    pub status: Rect,
}

impl DashboardAreas {
    /// Sidebar and panel take a fifth of the width each
    pub fn split(size: Rect) -> Self {
        let rows = Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).split(size);
        let columns = Layout::horizontal([
            Constraint::Ratio(1, 5),
            Constraint::Ratio(3, 5),
            Constraint::Ratio(1, 5),
        ])
        .split(rows[0]);

        Self {
            sidebar: columns[0],
            grid: columns[1],
            low_stock: columns[2],
            status: rows[1],
        }
    }
}

pub struct DashboardComponent {
    sidebar: SidebarComponent,
    grid: GridComponent,
    focus: Focus,
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self {
            sidebar: SidebarComponent::new(),
            grid: GridComponent::new(),
            focus: Focus::Grid,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn grid(&self) -> &GridComponent {
        &self.grid
    }

    /// Grid viewport for a terminal of `size`, at the current scroll offset
    pub fn grid_viewport(&self, size: Rect) -> Viewport {
        self.grid.viewport(DashboardAreas::split(size).grid)
    }

    pub fn sync(&mut self, screen: &DashboardViewModel) {
        self.grid.sync(&screen.grid);
    }

    /// See [`GridComponent::clamp`]
    pub fn clamp(&mut self, frame: &GridFrame, viewport_height: f64) -> bool {
        self.grid.clamp(frame, viewport_height)
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        screen: &DashboardViewModel,
        frame: Option<&GridFrame>,
        size: Rect,
    ) -> Option<DashboardAction> {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Sidebar => Focus::Grid,
                    Focus::Grid => Focus::Sidebar,
                };
                None
            }
            KeyCode::Char('r') => Some(DashboardAction::Reload),
            _ => match self.focus {
                Focus::Sidebar => self.sidebar.handle_input(key, &screen.sidebar),
                Focus::Grid => {
                    let viewport = self.grid_viewport(size);
                    self.grid
                        .handle_input(key, &screen.grid, frame, viewport.height)
                }
            },
        }
    }

    pub fn render(&mut self, f: &mut Frame, screen: &DashboardViewModel, frame: Option<&GridFrame>) {
        let areas = DashboardAreas::split(f.area());

        self.sidebar.render(
            f,
            areas.sidebar,
            &screen.sidebar,
            self.focus == Focus::Sidebar,
        );
        self.grid.render(
            f,
            areas.grid,
            &screen.grid,
            frame,
            self.focus == Focus::Grid,
        );
        f.render_widget(LowStockPanelView::new(&screen.low_stock), areas.low_stock);
        f.render_widget(StatusBarView::new(&screen.status_bar), areas.status);
    }
}

impl Default for DashboardComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{
        CategoryEntry, LowStockEntry, LowStockViewModel, ProductCardViewModel,
        ProductGridViewModel, SidebarViewModel, StatusBarViewModel, StatusLevel,
    };
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};
    use stockgrid_engine::frame_layout;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> DashboardViewModel {
        let categories = ["tools", "garden", "men's clothing"]
            .into_iter()
            .map(|name| CategoryEntry {
                name: name.to_string(),
                label: crate::presentation::formatters::capitalize(name),
            })
            .collect();
        let cards = vec![ProductCardViewModel {
            id: 70,
            title: "Claw Hammer (Copy 1)".to_string(),
            category: "tools".to_string(),
            price: 9.99,
            price_label: "$9.99".to_string(),
            stock: 3,
            level: StatusLevel::Warning,
        }];

        DashboardViewModel {
            sidebar: SidebarViewModel {
                title: "Warehouse Inventory".to_string(),
                categories,
                selected: Some(0),
                message: None,
                message_level: StatusLevel::Info,
            },
            grid: ProductGridViewModel {
                category: Some("tools".to_string()),
                cards,
                message: None,
                message_level: StatusLevel::Info,
            },
            low_stock: LowStockViewModel {
                title: "Low Stock".to_string(),
                items: vec![LowStockEntry {
                    id: 70,
                    label: "Claw Hammer (Copy 1) - 3".to_string(),
                    level: StatusLevel::Warning,
                }],
                empty_message: "No low stock items".to_string(),
            },
            status_bar: StatusBarViewModel {
                source: "demo".to_string(),
                product_count: 1,
                low_stock_count: 1,
                last_update: Some("12:00:00".to_string()),
                status_message: "1 products running low".to_string(),
                status_level: StatusLevel::Warning,
            },
        }
    }

    #[test]
    fn test_tab_moves_focus_and_sidebar_selects_next_category() {
        let mut dashboard = DashboardComponent::new();
        let screen = screen();
        let size = Rect::new(0, 0, 150, 40);

        assert_eq!(dashboard.focus(), Focus::Grid);
        assert_eq!(dashboard.handle_input(press(KeyCode::Tab), &screen, None, size), None);
        assert_eq!(dashboard.focus(), Focus::Sidebar);

        let action = dashboard.handle_input(press(KeyCode::Down), &screen, None, size);
        assert_eq!(action, Some(DashboardAction::SelectCategory("garden".to_string())));

        let action = dashboard.handle_input(press(KeyCode::Up), &screen, None, size);
        assert_eq!(action, None);
    }

    #[test]
    fn test_reload_from_any_pane() {
        let mut dashboard = DashboardComponent::new();
        let action =
            dashboard.handle_input(press(KeyCode::Char('r')), &screen(), None, Rect::new(0, 0, 80, 24));
        assert_eq!(action, Some(DashboardAction::Reload));
    }

    #[test]
    fn test_render_draws_every_pane() {
        let screen = screen();
        let size = Rect::new(0, 0, 150, 40);
        let mut dashboard = DashboardComponent::new();
        let viewport = dashboard.grid_viewport(size);
        let (geometry, window) =
            frame_layout(viewport.width, viewport.height, 0.0, 1, 28.0, 7.0, 1).unwrap();
        let frame = GridFrame { geometry, window };

        let mut terminal = Terminal::new(TestBackend::new(size.width, size.height)).unwrap();
        terminal
            .draw(|f| dashboard.render(f, &screen, Some(&frame)))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        for expected in [
            "Warehouse Inventory",
            "Men's clothing",
            "Products - Tools (1)",
            "Claw Hammer (Copy 1)",
            "Stock: 3",
            "[d] Decrease Stock",
            "Low Stock (1)",
            "Claw Hammer (Copy 1) - 3",
            "Source: demo",
        ] {
            assert!(text.contains(expected), "missing {:?}", expected);
        }
    }
}
