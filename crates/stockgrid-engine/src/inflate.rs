//! Synthetic catalog inflation
//!
//! Replicates a small upstream product list into a large one so the grid can
//! be exercised at scale. Kept behind a plain function so a genuine
//! large-catalog source can replace it without touching the stock cache or
//! the layout engine.

use crate::{Error, Result};
use stockgrid_types::{InflatedProduct, MAX_INFLATION_ROUNDS, Product};
use std::collections::HashMap;
use std::sync::Arc;

/// Number of decimal digits reserved for the replica index.
///
/// This is the width of the largest round index (`rounds - 1`), never less
/// than one digit.
pub fn replica_digits(rounds: u32) -> u32 {
    let mut largest = rounds.saturating_sub(1);
    let mut digits = 1;
    while largest >= 10 {
        largest /= 10;
        digits += 1;
    }
    digits
}

/// Expand `products` into `products.len() * rounds` replicas.
///
/// Order is round-major: every product of round 0 in input order, then round
/// 1, and so on. The grid's row-major item index relies on this order.
///
/// Replica ids are `base_id * 10^digits + round`, which keeps them pairwise
/// distinct as long as the input ids are.
pub fn inflate(products: &[Product], rounds: u32) -> Result<Vec<InflatedProduct>> {
    if products.is_empty() {
        return Ok(Vec::new());
    }

    if rounds == 0 || rounds > MAX_INFLATION_ROUNDS {
        return Err(Error::InvalidRounds {
            rounds,
            max: MAX_INFLATION_ROUNDS,
        });
    }

    let scale = 10u64.pow(replica_digits(rounds));
    let mut inflated = Vec::with_capacity(products.len() * rounds as usize);

    for replica in 0..rounds {
        for product in products {
            let id = product
                .id
                .checked_mul(scale)
                .and_then(|id| id.checked_add(u64::from(replica)))
                .ok_or(Error::IdOverflow {
                    base_id: product.id,
                    replica,
                })?;

            let mut copy = product.clone();
            copy.id = id;
            copy.title = format!("{} (Copy {})", product.title, replica + 1);

            inflated.push(InflatedProduct {
                product: copy,
                base_id: product.id,
                replica,
            });
        }
    }

    Ok(inflated)
}

struct CachedInflation {
    rounds: u32,
    source: Vec<Product>,
    products: Arc<[InflatedProduct]>,
}

/// Memoizes [`inflate`] per category.
///
/// An entry is reused while both the round count and the upstream product
/// list are unchanged; a new fetch result with different records replaces it.
#[derive(Default)]
pub struct InflationCache {
    entries: HashMap<String, CachedInflation>,
}

impl InflationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_inflate(
        &mut self,
        category: &str,
        source: &[Product],
        rounds: u32,
    ) -> Result<Arc<[InflatedProduct]>> {
        if let Some(cached) = self.entries.get(category)
            && cached.rounds == rounds
            && cached.source == source
        {
            return Ok(Arc::clone(&cached.products));
        }

        let products: Arc<[InflatedProduct]> = inflate(source, rounds)?.into();
        tracing::debug!(
            category,
            rounds,
            source_len = source.len(),
            inflated_len = products.len(),
            "inflated catalog"
        );

        self.entries.insert(
            category.to_string(),
            CachedInflation {
                rounds,
                source: source.to_vec(),
                products: Arc::clone(&products),
            },
        );

        Ok(products)
    }

    pub fn get(&self, category: &str) -> Option<Arc<[InflatedProduct]>> {
        self.entries
            .get(category)
            .map(|cached| Arc::clone(&cached.products))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
