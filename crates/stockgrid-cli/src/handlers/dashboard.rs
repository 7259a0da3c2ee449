use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::renderers::{DashboardAction, DashboardDriver, TuiRenderer};
use crate::presentation::view_models::DashboardUpdate;
use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use std::cell::Cell;
use std::rc::Rc;
use stockgrid_runtime::{GridFrame, InventorySession, Viewport};
use stockgrid_types::ProductId;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!(
            "the dashboard needs an interactive terminal; use `stockgrid categories` or `stockgrid products <category>` instead"
        );
    }

    let mut controller = DashboardController::new(ctx.open_session()?);
    TuiRenderer::new().run(&mut controller)
}

/// Drives one inventory session for the dashboard
pub struct DashboardController {
    session: InventorySession,
    /// Next frame is presented from scratch
    rebuild: bool,
    /// Products whose stock changed since the last frame
    decreased: Vec<ProductId>,
    low_stock_changed: Rc<Cell<bool>>,
}

impl DashboardController {
    pub fn new(mut session: InventorySession) -> Self {
        let low_stock_changed = Rc::new(Cell::new(false));

        let flag = Rc::clone(&low_stock_changed);
        session.subscribe_low_stock(move |items| {
            tracing::debug!(count = items.len(), "low stock updated");
            flag.set(true);
        });
        session.load_categories();

        Self {
            session,
            rebuild: true,
            decreased: Vec::new(),
            low_stock_changed,
        }
    }

    pub fn session(&self) -> &InventorySession {
        &self.session
    }

    /// The first category is picked as soon as the list is known
    fn auto_select(&mut self) {
        if self.session.selected_category().is_some() {
            return;
        }
        if let Some(first) = self.session.categories().first().cloned() {
            tracing::info!(category = %first, "selecting first category");
            self.session.select_category(&first);
            self.rebuild = true;
        }
    }
}

impl DashboardDriver for DashboardController {
    fn tick(&mut self) -> Result<Option<DashboardUpdate>> {
        if self.session.poll()? > 0 {
            self.rebuild = true;
        }
        self.auto_select();

        let low_stock_changed = self.low_stock_changed.replace(false);
        if std::mem::take(&mut self.rebuild) {
            self.decreased.clear();
            let screen = presenters::present_dashboard(&self.session);
            return Ok(Some(DashboardUpdate::Full(screen)));
        }
        if self.decreased.is_empty() && !low_stock_changed {
            return Ok(None);
        }

        let changed = std::mem::take(&mut self.decreased);
        let patch = presenters::present_stock_patch(&self.session, &changed);
        Ok(Some(DashboardUpdate::Stock(patch)))
    }

    fn dispatch(&mut self, action: DashboardAction) -> Result<()> {
        match action {
            DashboardAction::SelectCategory(category) => {
                self.session.select_category(&category);
                self.rebuild = true;
            }
            DashboardAction::Decrease(product_id) => {
                match self.session.decrease(product_id) {
                    Some(stock) => {
                        tracing::info!(product_id, stock, "stock decreased");
                        self.decreased.push(product_id);
                    }
                    None => tracing::warn!(product_id, "decrease ignored"),
                }
            }
            DashboardAction::Reload => {
                self.session.reload();
                self.rebuild = true;
            }
        }
        Ok(())
    }

    fn layout(&self, viewport: Viewport) -> Result<GridFrame> {
        Ok(self.session.geometry(viewport)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::stock_status;
    use crate::presentation::view_models::{CardStockViewModel, DashboardViewModel};
    use std::sync::Arc;
    use std::time::{Duration, Instant};
    use stockgrid_engine::StockCache;
    use stockgrid_providers::StaticCatalog;
    use stockgrid_runtime::SessionOptions;
    use stockgrid_testing::sample_products;

    fn controller(rounds: u32) -> DashboardController {
        let source = Arc::new(StaticCatalog::new(sample_products()));
        let options = SessionOptions {
            rounds,
            ..SessionOptions::default()
        };
        let session = InventorySession::new(source, StockCache::with_seed(11), options).unwrap();
        DashboardController::new(session)
    }

    /// Tick, folding updates into `screen`, until `done` holds for it
    fn tick_until(
        controller: &mut DashboardController,
        screen: &mut Option<DashboardViewModel>,
        done: impl Fn(&DashboardViewModel) -> bool,
    ) -> DashboardViewModel {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(update) = controller.tick().unwrap() {
                update.apply_to(screen);
                if let Some(current) = screen.as_ref()
                    && done(current)
                {
                    return current.clone();
                }
            }
            assert!(Instant::now() < deadline, "dashboard never settled");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_first_category_is_selected_automatically() {
        let mut controller = controller(2);
        let screen = tick_until(&mut controller, &mut None, |s| !s.grid.cards.is_empty());

        assert_eq!(screen.sidebar.selected, Some(0));
        assert_eq!(screen.grid.category.as_deref(), Some("tools"));
        assert_eq!(screen.grid.cards.len(), 4);
    }

    #[test]
    fn test_tick_is_quiet_without_changes() {
        let mut controller = controller(1);
        tick_until(&mut controller, &mut None, |s| !s.grid.cards.is_empty());

        assert!(controller.tick().unwrap().is_none());
    }

    #[test]
    fn test_decrease_patches_only_that_card() {
        let mut controller = controller(2);
        let mut screen = None;
        let before = tick_until(&mut controller, &mut screen, |s| !s.grid.cards.is_empty());
        let card = before.grid.cards[1].clone();

        controller
            .dispatch(DashboardAction::Decrease(card.id))
            .unwrap();
        let Some(DashboardUpdate::Stock(patch)) = controller.tick().unwrap() else {
            panic!("expected a stock patch");
        };
        let stock = card.stock.saturating_sub(1);
        assert_eq!(
            patch.cards,
            vec![CardStockViewModel {
                id: card.id,
                stock,
                level: stock_status(stock),
            }]
        );

        DashboardUpdate::Stock(patch).apply_to(&mut screen);
        let after = screen.unwrap();
        assert_eq!(after.grid.cards[1].stock, stock);
        assert_eq!(after.grid.cards[1].title, card.title);
        for (i, (old, new)) in before.grid.cards.iter().zip(&after.grid.cards).enumerate() {
            if i != 1 {
                assert_eq!(old, new);
            }
        }
        assert_eq!(after.status_bar.product_count, 4);
    }

    #[test]
    fn test_ignored_decrease_leaves_screen_alone() {
        let mut controller = controller(1);
        tick_until(&mut controller, &mut None, |s| !s.grid.cards.is_empty());

        controller
            .dispatch(DashboardAction::Decrease(999_999))
            .unwrap();
        assert!(controller.tick().unwrap().is_none());
    }

    #[test]
    fn test_switching_category_updates_grid() {
        let mut controller = controller(1);
        let mut screen = None;
        tick_until(&mut controller, &mut screen, |s| !s.grid.cards.is_empty());

        controller
            .dispatch(DashboardAction::SelectCategory("garden".to_string()))
            .unwrap();
        let screen = tick_until(&mut controller, &mut screen, |s| {
            s.grid.category.as_deref() == Some("garden") && !s.grid.cards.is_empty()
        });

        assert_eq!(screen.sidebar.selected, Some(1));
        assert_eq!(screen.grid.cards.len(), 3);
        assert_eq!(controller.session().selected_category(), Some("garden"));
    }

    #[test]
    fn test_layout_uses_session_geometry() {
        let mut controller = controller(50);
        tick_until(&mut controller, &mut None, |s| s.grid.cards.len() == 100);

        let frame = controller
            .layout(Viewport {
                width: 120.0,
                height: 21.0,
                scroll_top: 0.0,
            })
            .unwrap();
        assert_eq!(frame.geometry.column_count, 4);
        assert_eq!(frame.geometry.row_count, 25);
    }
}
