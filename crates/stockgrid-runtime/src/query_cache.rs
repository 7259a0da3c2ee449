//! Per-key fetch cache with TTL staleness and in-flight de-duplication.
//!
//! The cache never fetches by itself. Callers ask [`QueryCache::lookup`]
//! what they have, claim the right to fetch with [`QueryCache::begin_fetch`]
//! (at most one claim per key at a time) and report the result back.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Outcome of a cache lookup
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<V> {
    /// Within the TTL; no refetch needed
    Fresh(V),
    /// Usable, but older than the TTL (or invalidated); should be revalidated
    Stale(V),
    Missing,
}

#[derive(Debug)]
struct QueryEntry<V> {
    value: Option<V>,
    fetched_at: Option<Instant>,
    in_flight: bool,
    last_error: Option<String>,
}

impl<V> Default for QueryEntry<V> {
    fn default() -> Self {
        Self {
            value: None,
            fetched_at: None,
            in_flight: false,
            last_error: None,
        }
    }
}

#[derive(Debug)]
pub struct QueryCache<K, V> {
    ttl: Duration,
    entries: HashMap<K, QueryEntry<V>>,
}

impl<K, V> Default for QueryCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn lookup(&self, key: &K, now: Instant) -> Lookup<V>
    where
        V: Clone,
    {
        let Some(entry) = self.entries.get(key) else {
            return Lookup::Missing;
        };
        let Some(value) = &entry.value else {
            return Lookup::Missing;
        };

        match entry.fetched_at {
            Some(at) if now.saturating_duration_since(at) < self.ttl => Lookup::Fresh(value.clone()),
            _ => Lookup::Stale(value.clone()),
        }
    }

    /// Claim the fetch for `key`; `false` while another fetch is in flight
    pub fn begin_fetch(&mut self, key: K) -> bool {
        let entry = self.entries.entry(key).or_default();
        if entry.in_flight {
            return false;
        }
        entry.in_flight = true;
        true
    }

    pub fn complete_ok(&mut self, key: K, value: V, now: Instant) {
        let entry = self.entries.entry(key).or_default();
        entry.value = Some(value);
        entry.fetched_at = Some(now);
        entry.in_flight = false;
        entry.last_error = None;
    }

    /// Record a failure; a previously cached value is kept
    pub fn complete_err(&mut self, key: K, message: impl Into<String>) {
        let entry = self.entries.entry(key).or_default();
        entry.in_flight = false;
        entry.last_error = Some(message.into());
    }

    /// Mark the cached value stale so the next lookup revalidates it
    pub fn invalidate(&mut self, key: &K) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.fetched_at = None;
        }
    }

    pub fn is_in_flight(&self, key: &K) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.in_flight)
    }

    pub fn last_error(&self, key: &K) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|entry| entry.last_error.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_fresh_then_stale() {
        let mut cache: QueryCache<&str, u32> = QueryCache::new(Duration::from_secs(300));
        let t0 = Instant::now();
        assert_eq!(cache.lookup(&"tools", t0), Lookup::Missing);

        assert!(cache.begin_fetch("tools"));
        cache.complete_ok("tools", 7, t0);

        assert_eq!(cache.lookup(&"tools", t0 + Duration::from_secs(299)), Lookup::Fresh(7));
        assert_eq!(cache.lookup(&"tools", t0 + Duration::from_secs(300)), Lookup::Stale(7));
    }

    #[test]
    fn test_single_fetch_in_flight_per_key() {
        let mut cache: QueryCache<String, u32> = QueryCache::default();
        assert!(cache.begin_fetch("tools".to_string()));
        assert!(!cache.begin_fetch("tools".to_string()));
        assert!(cache.begin_fetch("garden".to_string()));
        assert!(cache.is_in_flight(&"tools".to_string()));

        cache.complete_err("tools".to_string(), "boom");
        assert!(!cache.is_in_flight(&"tools".to_string()));
        assert!(cache.begin_fetch("tools".to_string()));
    }

    #[test]
    fn test_error_keeps_previous_value() {
        let mut cache: QueryCache<&str, u32> = QueryCache::default();
        let t0 = Instant::now();
        cache.begin_fetch("tools");
        cache.complete_ok("tools", 3, t0);

        cache.begin_fetch("tools");
        cache.complete_err("tools", "HTTP 503");
        assert_eq!(cache.lookup(&"tools", t0), Lookup::Fresh(3));
        assert_eq!(cache.last_error(&"tools"), Some("HTTP 503"));

        cache.begin_fetch("tools");
        cache.complete_ok("tools", 4, t0);
        assert_eq!(cache.last_error(&"tools"), None);
    }

    #[test]
    fn test_invalidate_forces_stale() {
        let mut cache: QueryCache<&str, u32> = QueryCache::default();
        let t0 = Instant::now();
        cache.complete_ok("tools", 1, t0);
        cache.invalidate(&"tools");
        assert_eq!(cache.lookup(&"tools", t0), Lookup::Stale(1));
        assert_eq!(cache.lookup(&"garden", t0), Lookup::Missing);
    }
}
