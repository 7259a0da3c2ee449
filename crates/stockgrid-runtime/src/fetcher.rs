//! Background catalog fetching.
//!
//! Catalog calls may block for a long time, so they run on the blocking pool
//! of a small tokio runtime and report back through a channel. The UI thread
//! drains completions with [`CatalogFetcher::try_recv`] between frames.

use crate::query_cache::{Lookup, QueryCache};
use crate::{Error, Result};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::{Duration, Instant};
use stockgrid_providers::CatalogSource;
use stockgrid_types::Product;
use tokio::runtime::{Builder, Handle, Runtime};

/// A finished catalog call; errors are flattened to their message
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Categories(std::result::Result<Vec<String>, String>),
    Products {
        category: String,
        result: std::result::Result<Arc<[Product]>, String>,
    },
}

/// What a request could serve immediately
#[derive(Debug, Clone, PartialEq)]
pub enum Served<V> {
    Fresh(V),
    /// Cached value handed out while a revalidation runs
    Stale(V),
    /// Nothing cached yet; a fetch is running
    Pending,
}

pub struct CatalogFetcher {
    source: Arc<dyn CatalogSource>,
    runtime: Option<Runtime>,
    handle: Handle,
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
    categories: QueryCache<(), Vec<String>>,
    products: QueryCache<String, Arc<[Product]>>,
    in_flight: usize,
}

impl CatalogFetcher {
    pub fn new(source: Arc<dyn CatalogSource>, ttl: Duration) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .max_blocking_threads(4)
            .thread_name("stockgrid-fetch")
            .enable_time()
            .build()?;
        let handle = runtime.handle().clone();
        let (tx, rx) = mpsc::channel();

        Ok(Self {
            source,
            runtime: Some(runtime),
            handle,
            tx,
            rx,
            categories: QueryCache::new(ttl),
            products: QueryCache::new(ttl),
            in_flight: 0,
        })
    }

    pub fn source_id(&self) -> &'static str {
        self.source.id()
    }

    /// Number of fetches started but not yet drained
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn request_categories(&mut self) -> Served<Vec<String>> {
        match self.categories.lookup(&(), Instant::now()) {
            Lookup::Fresh(categories) => Served::Fresh(categories),
            Lookup::Stale(categories) => {
                self.spawn_categories();
                Served::Stale(categories)
            }
            Lookup::Missing => {
                self.spawn_categories();
                Served::Pending
            }
        }
    }

    pub fn request_products(&mut self, category: &str) -> Served<Arc<[Product]>> {
        let key = category.to_string();
        match self.products.lookup(&key, Instant::now()) {
            Lookup::Fresh(products) => Served::Fresh(products),
            Lookup::Stale(products) => {
                self.spawn_products(key);
                Served::Stale(products)
            }
            Lookup::Missing => {
                self.spawn_products(key);
                Served::Pending
            }
        }
    }

    /// Mark the category list stale so the next request refetches it
    pub fn invalidate_categories(&mut self) {
        self.categories.invalidate(&());
    }

    pub fn invalidate_products(&mut self, category: &str) {
        self.products.invalidate(&category.to_string());
    }

    pub fn try_recv(&mut self) -> Result<Option<FetchOutcome>> {
        match self.rx.try_recv() {
            Ok(outcome) => Ok(Some(self.record(outcome))),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(Error::Disconnected),
        }
    }

    pub fn recv_timeout(&mut self, timeout: Duration) -> Result<Option<FetchOutcome>> {
        match self.rx.recv_timeout(timeout) {
            Ok(outcome) => Ok(Some(self.record(outcome))),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(Error::Disconnected),
        }
    }

    fn record(&mut self, outcome: FetchOutcome) -> FetchOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);
        let now = Instant::now();

        match &outcome {
            FetchOutcome::Categories(Ok(categories)) => {
                tracing::debug!(count = categories.len(), "categories fetched");
                self.categories.complete_ok((), categories.clone(), now);
            }
            FetchOutcome::Categories(Err(message)) => {
                tracing::warn!(error = %message, "category fetch failed");
                self.categories.complete_err((), message.clone());
            }
            FetchOutcome::Products {
                category,
                result: Ok(products),
            } => {
                tracing::debug!(category = %category, count = products.len(), "products fetched");
                self.products
                    .complete_ok(category.clone(), Arc::clone(products), now);
            }
            FetchOutcome::Products {
                category,
                result: Err(message),
            } => {
                tracing::warn!(category = %category, error = %message, "product fetch failed");
                self.products.complete_err(category.clone(), message.clone());
            }
        }

        outcome
    }

    fn spawn_categories(&mut self) {
        if !self.categories.begin_fetch(()) {
            return;
        }
        self.in_flight += 1;
        tracing::debug!(source = self.source.id(), "fetching categories");

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.handle.spawn_blocking(move || {
            let result = source.list_categories().map_err(|err| err.to_string());
            // The receiver only disappears when the fetcher is dropped.
            let _ = tx.send(FetchOutcome::Categories(result));
        });
    }

    fn spawn_products(&mut self, category: String) {
        if !self.products.begin_fetch(category.clone()) {
            tracing::trace!(category = %category, "fetch already in flight");
            return;
        }
        self.in_flight += 1;
        tracing::debug!(source = self.source.id(), category = %category, "fetching products");

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.handle.spawn_blocking(move || {
            let result: std::result::Result<Arc<[Product]>, String> = source
                .list_products(&category)
                .map(Arc::from)
                .map_err(|err| err.to_string());
            let _ = tx.send(FetchOutcome::Products { category, result });
        });
    }
}

impl Drop for CatalogFetcher {
    fn drop(&mut self) {
        // Slow requests must not hold up shutdown.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
