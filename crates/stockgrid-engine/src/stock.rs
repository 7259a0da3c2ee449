//! Per-category stock cache
//!
//! The only mutable, cross-category state of the engine. A category's map is
//! created on first sight with random stock, updated by `decrease`, and kept
//! for the whole session so that returning to a category restores its
//! previous values instead of re-randomizing them.
//!
//! Mutations are synchronous and run to completion; hosts that share the
//! cache between threads must wrap it in a mutex, since `decrease` is a
//! read-modify-write.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use stockgrid_types::{
    INITIAL_STOCK_MAX, INITIAL_STOCK_MIN, InflatedProduct, ProductId, StockEntries,
};

/// What happened to a category's map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockChange {
    /// Map created for the first time
    Initialized { count: usize },
    /// Existing map returned as-is
    Restored,
    /// Existing map extended with ids it had not seen before
    Reconciled { added: usize },
    /// One product's stock went down (or stayed at zero)
    Decreased { product_id: ProductId, stock: u32 },
}

/// Notification delivered to observers after every cache operation
#[derive(Debug, Clone, Copy)]
pub struct StockNotice<'a> {
    pub category: &'a str,
    pub entries: &'a StockEntries,
    pub cause: StockChange,
}

/// Receives [`StockNotice`]s synchronously, in registration order
pub trait StockObserver {
    fn on_stock_changed(&mut self, notice: &StockNotice<'_>);
}

impl<F> StockObserver for F
where
    F: FnMut(&StockNotice<'_>),
{
    fn on_stock_changed(&mut self, notice: &StockNotice<'_>) {
        self(notice)
    }
}

/// Handle returned by [`StockCache::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct StockCache {
    maps: HashMap<String, StockEntries>,
    rng: SmallRng,
    observers: Vec<(SubscriptionId, Box<dyn StockObserver>)>,
    next_subscription: u64,
}

impl Default for StockCache {
    fn default() -> Self {
        Self::new()
    }
}

impl StockCache {
    /// Cache seeded from the operating system's entropy source
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_os_rng())
    }

    /// Deterministic cache, for tests and reproducible demos
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        Self {
            maps: HashMap::new(),
            rng,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Preload a category's map.
    ///
    /// Values above [`INITIAL_STOCK_MAX`] are clamped so the cache never
    /// holds stock that a fresh draw could not have produced.
    pub fn with_entries(mut self, category: impl Into<String>, entries: StockEntries) -> Self {
        let clamped = entries
            .into_iter()
            .map(|(id, stock)| (id, stock.min(INITIAL_STOCK_MAX)))
            .collect();
        self.maps.insert(category.into(), clamped);
        self
    }

    /// Return the category's map, creating it on first sight.
    ///
    /// An existing map is authoritative: its values are never re-drawn. Ids
    /// present in `products` but missing from the map receive fresh random
    /// stock; ids the map has but `products` lacks are kept.
    pub fn ensure_initialized(
        &mut self,
        category: &str,
        products: &[InflatedProduct],
    ) -> &StockEntries {
        let (entries, cause) = match self.maps.entry(category.to_string()) {
            Entry::Occupied(slot) => {
                let entries = slot.into_mut();
                let mut added = 0;
                for product in products {
                    if let Entry::Vacant(missing) = entries.entry(product.id()) {
                        missing.insert(draw_stock(&mut self.rng));
                        added += 1;
                    }
                }

                if added > 0 {
                    tracing::debug!(category, added, "reconciled stock map");
                    (&*entries, StockChange::Reconciled { added })
                } else {
                    tracing::debug!(category, entries = entries.len(), "restored stock map");
                    (&*entries, StockChange::Restored)
                }
            }
            Entry::Vacant(slot) => {
                let fresh: StockEntries = products
                    .iter()
                    .map(|product| (product.id(), draw_stock(&mut self.rng)))
                    .collect();
                let count = fresh.len();
                tracing::debug!(category, count, "initialized stock map");
                (&*slot.insert(fresh), StockChange::Initialized { count })
            }
        };

        notify(
            &mut self.observers,
            &StockNotice {
                category,
                entries,
                cause,
            },
        );

        entries
    }

    /// Decrease one product's stock by one, clamping at zero.
    ///
    /// A product without an entry counts as zero stock and gets an explicit
    /// zero entry.
    pub fn decrease(&mut self, category: &str, product_id: ProductId) -> &StockEntries {
        let entries = self.maps.entry(category.to_string()).or_default();
        let slot = entries.entry(product_id).or_insert(0);
        *slot = slot.saturating_sub(1);
        let stock = *slot;

        tracing::debug!(category, product_id, stock, "decreased stock");

        let entries = &*entries;
        notify(
            &mut self.observers,
            &StockNotice {
                category,
                entries,
                cause: StockChange::Decreased { product_id, stock },
            },
        );

        entries
    }

    pub fn get(&self, category: &str) -> Option<&StockEntries> {
        self.maps.get(category)
    }

    /// Stock of one product; unknown categories and ids read as zero
    pub fn stock_of(&self, category: &str, product_id: ProductId) -> u32 {
        self.maps
            .get(category)
            .and_then(|entries| entries.get(&product_id))
            .copied()
            .unwrap_or(0)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.maps.keys().map(String::as_str)
    }

    /// Drop every category's map (full application reset). Observers stay
    /// registered.
    pub fn reset(&mut self) {
        self.maps.clear();
    }

    pub fn subscribe(&mut self, observer: Box<dyn StockObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }
}

fn draw_stock(rng: &mut SmallRng) -> u32 {
    rng.random_range(INITIAL_STOCK_MIN..=INITIAL_STOCK_MAX)
}

fn notify(observers: &mut [(SubscriptionId, Box<dyn StockObserver>)], notice: &StockNotice<'_>) {
    for (_, observer) in observers.iter_mut() {
        observer.on_stock_changed(notice);
    }
}
