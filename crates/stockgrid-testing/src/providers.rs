//! Catalog sources with scripted behavior.
//!
//! `ScriptedCatalog` serves fixed records but lets a test delay a category,
//! make it fail, or hold it behind a [`CatalogGate`] until the test decides
//! the fetch may finish. Call counts are recorded per category.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use stockgrid_providers::{CatalogSource, Error, Result};
use stockgrid_types::Product;

/// A latch that blocks fetches until opened
#[derive(Clone, Default)]
pub struct CatalogGate {
    state: Arc<(Mutex<bool>, Condvar)>,
}

impl CatalogGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) {
        let (lock, cvar) = &*self.state;
        *lock.lock().unwrap_or_else(PoisonError::into_inner) = true;
        cvar.notify_all();
    }

    fn wait(&self) {
        let (lock, cvar) = &*self.state;
        let mut open = lock.lock().unwrap_or_else(PoisonError::into_inner);
        while !*open {
            open = cvar.wait(open).unwrap_or_else(PoisonError::into_inner);
        }
    }
}

#[derive(Default)]
pub struct ScriptedCatalog {
    products: Vec<Product>,
    delays: HashMap<String, Duration>,
    failing: HashSet<String>,
    categories_fail: bool,
    gates: HashMap<String, CatalogGate>,
    calls: Mutex<HashMap<String, usize>>,
}

impl ScriptedCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    /// Sleep before answering for `category`
    pub fn with_delay(mut self, category: &str, delay: Duration) -> Self {
        self.delays.insert(category.to_string(), delay);
        self
    }

    /// Fail every product fetch for `category`
    pub fn with_failure(mut self, category: &str) -> Self {
        self.failing.insert(category.to_string());
        self
    }

    /// Fail the category listing
    pub fn with_failing_categories(mut self) -> Self {
        self.categories_fail = true;
        self
    }

    /// Hold product fetches for `category` until `gate` opens
    pub fn with_gate(mut self, category: &str, gate: CatalogGate) -> Self {
        self.gates.insert(category.to_string(), gate);
        self
    }

    /// Number of `list_products` calls seen for `category`
    pub fn product_calls(&self, category: &str) -> usize {
        self.calls().get(category).copied().unwrap_or(0)
    }

    fn calls(&self) -> MutexGuard<'_, HashMap<String, usize>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn scripted_failure(what: &str) -> Error {
        Error::Status {
            status: 503,
            url: format!("scripted://{}", what),
        }
    }
}

impl CatalogSource for ScriptedCatalog {
    fn id(&self) -> &'static str {
        "scripted"
    }

    fn list_categories(&self) -> Result<Vec<String>> {
        if self.categories_fail {
            return Err(Self::scripted_failure("categories"));
        }

        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        Ok(categories)
    }

    fn list_products(&self, category: &str) -> Result<Vec<Product>> {
        *self.calls().entry(category.to_string()).or_default() += 1;

        if let Some(gate) = self.gates.get(category) {
            gate.wait();
        }
        if let Some(delay) = self.delays.get(category) {
            std::thread::sleep(*delay);
        }
        if self.failing.contains(category) {
            return Err(Self::scripted_failure(category));
        }

        Ok(self
            .products
            .iter()
            .filter(|product| product.category == category)
            .cloned()
            .collect())
    }
}
