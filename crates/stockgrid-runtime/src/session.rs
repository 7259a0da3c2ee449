//! Inventory session: the single owner of stock state for one run.
//!
//! The session wires the catalog fetcher, the inflation cache, the stock
//! cache and the low-stock detector together. It runs on the UI thread;
//! only the catalog calls happen elsewhere, and their results come back
//! through [`InventorySession::poll`].
//!
//! A product result is applied only when its category is still selected.
//! Late results for other categories land in the query cache (so switching
//! back is instant) but never inflate or initialize stock.

use crate::fetcher::{CatalogFetcher, FetchOutcome, Served};
use crate::query_cache::DEFAULT_TTL;
use crate::Result;
use chrono::{DateTime, Local};
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use stockgrid_engine::{
    ActiveProducts, InflationCache, LowStockDetector, SharedActiveProducts, StockCache,
    frame_layout,
};
use stockgrid_providers::CatalogSource;
use stockgrid_types::{
    GridGeometry, InflatedProduct, LowStockItem, MAX_INFLATION_ROUNDS, Product, ProductId,
    RowWindow, StockEntries,
};

pub const CATEGORIES_ERROR: &str = "Failed to load categories";
pub const PRODUCTS_ERROR: &str = "Error loading products.";

/// Fetch state of one UI surface
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogState {
    #[default]
    Idle,
    Loading,
    /// Generic, user-facing message; the cause is only logged
    Error(String),
    Ready,
}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, CatalogState::Ready)
    }
}

/// Card footprint and overscan used by [`InventorySession::geometry`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSettings {
    pub card_width: f64,
    pub card_height: f64,
    pub overscan_rows: usize,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            card_width: 28.0,
            card_height: 7.0,
            overscan_rows: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionOptions {
    pub rounds: u32,
    pub cache_ttl: Duration,
    pub grid: GridSettings,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            rounds: MAX_INFLATION_ROUNDS,
            cache_ttl: DEFAULT_TTL,
            grid: GridSettings::default(),
        }
    }
}

/// Visible area of the grid, in the same unit as the card footprint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_top: f64,
}

/// Layout for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridFrame {
    pub geometry: GridGeometry,
    /// Rows to realize, overscan included; `None` when nothing is visible
    pub window: Option<RowWindow>,
}

type LowStockListener = Box<dyn FnMut(&[LowStockItem])>;

/// Latest low-stock set plus the listeners it is pushed to
#[derive(Default)]
struct LowStockHub {
    current: Vec<LowStockItem>,
    listeners: Vec<LowStockListener>,
}

impl LowStockHub {
    fn publish(&mut self, items: Vec<LowStockItem>) {
        self.current = items;
        for listener in self.listeners.iter_mut() {
            listener(&self.current);
        }
    }
}

pub struct InventorySession {
    fetcher: CatalogFetcher,
    stock: StockCache,
    inflation: InflationCache,
    options: SessionOptions,
    categories: Vec<String>,
    categories_state: CatalogState,
    selected: Option<String>,
    products_state: CatalogState,
    active: SharedActiveProducts,
    hub: Rc<RefCell<LowStockHub>>,
    last_update: Option<DateTime<Local>>,
}

impl InventorySession {
    /// Build a session around an injected stock cache.
    ///
    /// The cache keeps its maps; the session registers a low-stock detector
    /// on it.
    pub fn new(
        source: Arc<dyn CatalogSource>,
        mut stock: StockCache,
        options: SessionOptions,
    ) -> Result<Self> {
        if options.rounds == 0 || options.rounds > MAX_INFLATION_ROUNDS {
            return Err(stockgrid_engine::Error::InvalidRounds {
                rounds: options.rounds,
                max: MAX_INFLATION_ROUNDS,
            }
            .into());
        }

        let fetcher = CatalogFetcher::new(source, options.cache_ttl)?;
        let active = SharedActiveProducts::default();
        let hub = Rc::new(RefCell::new(LowStockHub::default()));

        let sink = Rc::clone(&hub);
        stock.subscribe(Box::new(LowStockDetector::new(
            Rc::clone(&active),
            move |items| sink.borrow_mut().publish(items),
        )));

        tracing::info!(
            source = fetcher.source_id(),
            rounds = options.rounds,
            "inventory session started"
        );

        Ok(Self {
            fetcher,
            stock,
            inflation: InflationCache::new(),
            options,
            categories: Vec::new(),
            categories_state: CatalogState::Idle,
            selected: None,
            products_state: CatalogState::Idle,
            active,
            hub,
            last_update: None,
        })
    }

    pub fn load_categories(&mut self) {
        match self.fetcher.request_categories() {
            Served::Fresh(categories) | Served::Stale(categories) => {
                self.categories = categories;
                self.categories_state = CatalogState::Ready;
            }
            Served::Pending => {
                if self.categories.is_empty() {
                    self.categories_state = CatalogState::Loading;
                }
            }
        }
    }

    /// Refetch the category list and the selected category's products
    pub fn reload(&mut self) {
        self.fetcher.invalidate_categories();
        self.load_categories();

        if let Some(category) = self.selected.clone() {
            self.fetcher.invalidate_products(&category);
            self.select_category(&category);
        }
    }

    /// Make `category` the active one.
    ///
    /// Cached products (fresh or stale) activate immediately; otherwise the
    /// grid empties and the products surface goes to `Loading`. The
    /// low-stock set is republished either way.
    pub fn select_category(&mut self, category: &str) {
        self.selected = Some(category.to_string());
        tracing::debug!(category, "category selected");

        match self.fetcher.request_products(category) {
            Served::Fresh(products) | Served::Stale(products) => {
                self.activate(category, &products);
            }
            Served::Pending => {
                self.products_state = CatalogState::Loading;
                self.clear_active(category);
            }
        }
    }

    /// Empty grid and low-stock set for `category`
    fn clear_active(&mut self, category: &str) {
        *self.active.borrow_mut() = ActiveProducts {
            category: Some(category.to_string()),
            ..ActiveProducts::default()
        };
        self.hub.borrow_mut().publish(Vec::new());
    }

    fn activate(&mut self, category: &str, source: &[Product]) {
        let products = match self
            .inflation
            .get_or_inflate(category, source, self.options.rounds)
        {
            Ok(products) => products,
            Err(err) => {
                tracing::error!(category, error = %err, "could not inflate catalog");
                self.products_state = CatalogState::Error(PRODUCTS_ERROR.to_string());
                self.clear_active(category);
                return;
            }
        };

        *self.active.borrow_mut() = ActiveProducts {
            category: Some(category.to_string()),
            products: Arc::clone(&products),
        };
        self.stock.ensure_initialized(category, &products);
        self.products_state = CatalogState::Ready;
        self.last_update = Some(Local::now());
    }

    /// Apply every completed fetch; returns how many were applied
    pub fn poll(&mut self) -> Result<usize> {
        let mut applied = 0;
        while let Some(outcome) = self.fetcher.try_recv()? {
            self.apply(outcome);
            applied += 1;
        }
        Ok(applied)
    }

    /// Block until no fetch is outstanding, or `timeout` passes.
    ///
    /// Returns `false` on timeout.
    pub fn wait_until_settled(&mut self, timeout: Duration) -> Result<bool> {
        let deadline = Instant::now() + timeout;
        loop {
            self.poll()?;
            if !self.is_busy() {
                return Ok(true);
            }

            let now = Instant::now();
            if now >= deadline {
                return Ok(false);
            }
            if let Some(outcome) = self.fetcher.recv_timeout(deadline - now)? {
                self.apply(outcome);
            }
        }
    }

    fn is_busy(&self) -> bool {
        self.fetcher.in_flight() > 0
            || self.categories_state.is_loading()
            || self.products_state.is_loading()
    }

    fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Categories(Ok(categories)) => {
                self.categories = categories;
                self.categories_state = CatalogState::Ready;
                self.last_update = Some(Local::now());
            }
            FetchOutcome::Categories(Err(_)) => {
                // A failed revalidation keeps the list already on screen.
                if self.categories.is_empty() {
                    self.categories_state = CatalogState::Error(CATEGORIES_ERROR.to_string());
                }
            }
            FetchOutcome::Products {
                category,
                result: Ok(products),
            } => {
                if self.selected.as_deref() == Some(category.as_str()) {
                    self.activate(&category, &products);
                } else {
                    tracing::debug!(category = %category, "ignoring products for unselected category");
                }
            }
            FetchOutcome::Products {
                category,
                result: Err(_),
            } => {
                if self.selected.as_deref() == Some(category.as_str())
                    && self.products_state.is_loading()
                {
                    self.products_state = CatalogState::Error(PRODUCTS_ERROR.to_string());
                }
            }
        }
    }

    /// Decrease one product of the selected category.
    ///
    /// Returns the new stock, or `None` when no category is ready or the id
    /// is not part of its stock map.
    pub fn decrease(&mut self, product_id: ProductId) -> Option<u32> {
        if !self.products_state.is_ready() {
            return None;
        }
        let category = self.selected.clone()?;
        if !self
            .stock
            .get(&category)
            .is_some_and(|entries| entries.contains_key(&product_id))
        {
            return None;
        }

        let stock = self
            .stock
            .decrease(&category, product_id)
            .get(&product_id)
            .copied();
        self.last_update = Some(Local::now());
        stock
    }

    /// Inflated products of the active category (empty while loading)
    pub fn products(&self) -> Arc<[InflatedProduct]> {
        Arc::clone(&self.active.borrow().products)
    }

    /// Stock map of the selected category
    pub fn stock(&self) -> Option<&StockEntries> {
        self.selected
            .as_deref()
            .and_then(|category| self.stock.get(category))
    }

    pub fn stock_of(&self, product_id: ProductId) -> u32 {
        self.selected
            .as_deref()
            .map_or(0, |category| self.stock.stock_of(category, product_id))
    }

    pub fn stock_cache(&self) -> &StockCache {
        &self.stock
    }

    /// Low-stock set as last published
    pub fn low_stock(&self) -> Ref<'_, [LowStockItem]> {
        Ref::map(self.hub.borrow(), |hub| hub.current.as_slice())
    }

    /// Register a listener for every low-stock publication.
    ///
    /// Listeners run synchronously inside session calls and must not call
    /// back into the session.
    pub fn subscribe_low_stock(&mut self, listener: impl FnMut(&[LowStockItem]) + 'static) {
        self.hub.borrow_mut().listeners.push(Box::new(listener));
    }

    pub fn geometry(&self, viewport: Viewport) -> Result<GridFrame> {
        let grid = self.options.grid;
        let (geometry, window) = frame_layout(
            viewport.width,
            viewport.height,
            viewport.scroll_top,
            self.active.borrow().products.len(),
            grid.card_width,
            grid.card_height,
            grid.overscan_rows,
        )?;
        Ok(GridFrame { geometry, window })
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn categories_state(&self) -> &CatalogState {
        &self.categories_state
    }

    pub fn products_state(&self) -> &CatalogState {
        &self.products_state
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn last_update(&self) -> Option<DateTime<Local>> {
        self.last_update
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn source_id(&self) -> &'static str {
        self.fetcher.source_id()
    }
}
