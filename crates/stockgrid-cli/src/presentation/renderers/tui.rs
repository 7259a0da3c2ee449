//! TUI Renderer for the dashboard
//!
//! Runs the event loop on the calling thread. Data comes from a
//! [`DashboardDriver`]: the renderer asks it for screen updates between
//! frames and hands user requests back as [`DashboardAction`]s.
//!
//! ## Design:
//! - Renderer owns UI state (focus, selection, scroll) through components
//! - Renderer does NOT own data; the driver does
//! - Grid layout is recomputed from the terminal size before every draw

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
};
use stockgrid_runtime::{GridFrame, Viewport};

use crate::presentation::view_models::{DashboardUpdate, DashboardViewModel};
use crate::presentation::views::tui::components::DashboardComponent;

pub use crate::presentation::views::tui::components::DashboardAction;

/// Data side of the dashboard
pub trait DashboardDriver {
    /// Apply finished background work; `Some` when the screen changed
    fn tick(&mut self) -> Result<Option<DashboardUpdate>>;

    fn dispatch(&mut self, action: DashboardAction) -> Result<()>;

    fn layout(&self, viewport: Viewport) -> Result<GridFrame>;
}

pub struct TuiRenderer {
    /// Latest snapshot from the driver
    screen: Option<DashboardViewModel>,

    dashboard: DashboardComponent,

    should_quit: bool,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            screen: None,
            dashboard: DashboardComponent::new(),
            should_quit: false,
        }
    }

    /// Take over the terminal until the user quits
    pub fn run<D: DashboardDriver>(mut self, driver: &mut D) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, driver);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<D: DashboardDriver>(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        driver: &mut D,
    ) -> Result<()> {
        loop {
            if let Some(update) = driver.tick()? {
                update.apply_to(&mut self.screen);
            }

            let size = terminal.size()?;
            let area = Rect::new(0, 0, size.width, size.height);
            let frame = self.layout(area, driver);

            terminal.draw(|f| self.render(f, frame.as_ref()))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
                && let Some(action) = self.handle_key_event(key, frame.as_ref(), area)
            {
                tracing::debug!(?action, "dashboard action");
                driver.dispatch(action)?;
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Grid frame for the current terminal size, with scroll clamped to it
    fn layout<D: DashboardDriver>(&mut self, area: Rect, driver: &D) -> Option<GridFrame> {
        let screen = self.screen.as_ref()?;
        self.dashboard.sync(screen);

        let viewport = self.dashboard.grid_viewport(area);
        let frame = match driver.layout(viewport) {
            Ok(frame) => frame,
            Err(err) => {
                tracing::debug!(error = %err, "no room for the grid");
                return None;
            }
        };

        if self.dashboard.clamp(&frame, viewport.height) {
            return driver.layout(self.dashboard.grid_viewport(area)).ok();
        }
        Some(frame)
    }

    fn handle_key_event(
        &mut self,
        key: KeyEvent,
        frame: Option<&GridFrame>,
        area: Rect,
    ) -> Option<DashboardAction> {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                None
            }
            _ => {
                let screen = self.screen.as_ref()?;
                self.dashboard.handle_input(key, screen, frame, area)
            }
        }
    }

    fn render(&mut self, f: &mut Frame, frame: Option<&GridFrame>) {
        let Some(screen) = &self.screen else {
            let loading = Paragraph::new("Loading...")
                .block(Block::default().title("stockgrid").borders(Borders::ALL));
            f.render_widget(loading, f.area());
            return;
        };

        self.dashboard.render(f, screen, frame);
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}
