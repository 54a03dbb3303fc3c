//! Cache Store Module
//!
//! Id-keyed recipe cache with lazy TTL expiration and hit/miss counters.
//! Expired entries are never swept; they stay until overwritten, removed or
//! cleared, and read as misses in the meantime.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats, StatsCounters};
use crate::models::Recipe;

// == Cache Lookup ==
/// Result of probing the cache for one id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup {
    /// Entry present and not yet expired
    Live(Recipe),
    /// Entry present but past its expiration instant
    Expired(Recipe),
    /// No entry for this id
    Absent,
}

impl CacheLookup {
    pub fn is_live(&self) -> bool {
        matches!(self, CacheLookup::Live(_))
    }
}

// == Recipe Cache ==
/// Recipe cache keyed by recipe id.
#[derive(Debug)]
pub struct RecipeCache {
    /// Id to entry storage
    entries: RwLock<HashMap<u64, CacheEntry>>,
    /// Hit/miss counters, updated without the entries lock
    counters: StatsCounters,
    /// Lifetime given to every written entry
    ttl: Duration,
}

impl RecipeCache {
    // == Constructor ==
    /// Creates an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            counters: StatsCounters::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Get ==
    /// Probes the cache for `id` without evicting anything.
    ///
    /// Counters are untouched; the caller decides what counts as a hit.
    pub async fn get(&self, id: u64) -> CacheLookup {
        let entries = self.entries.read().await;
        match entries.get(&id) {
            Some(entry) if entry.is_expired_at(Instant::now()) => {
                CacheLookup::Expired(entry.recipe.clone())
            }
            Some(entry) => CacheLookup::Live(entry.recipe.clone()),
            None => CacheLookup::Absent,
        }
    }

    // == Put ==
    /// Stores `recipe` under its id with a fresh TTL window, overwriting any
    /// previous entry.
    pub async fn put(&self, recipe: Recipe) {
        let id = recipe.id;
        let entry = CacheEntry::new(recipe, self.ttl);
        self.entries.write().await.insert(id, entry);
    }

    /// Stores several recipes, each with its own fresh TTL window.
    pub async fn put_many(&self, recipes: impl IntoIterator<Item = Recipe>) {
        let mut entries = self.entries.write().await;
        for recipe in recipes {
            entries.insert(recipe.id, CacheEntry::new(recipe, self.ttl));
        }
    }

    // == Remove ==
    /// Removes the entry for `id`. Returns whether one existed.
    pub async fn remove(&self, id: u64) -> bool {
        self.entries.write().await.remove(&id).is_some()
    }

    // == Clear ==
    /// Empties the cache and resets the hit/miss counters.
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
        self.counters.reset();
    }

    pub fn record_hit(&self) {
        self.counters.record_hit();
    }

    pub fn record_miss(&self) {
        self.counters.record_miss();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let entries = self.entries.read().await;
        self.counters.snapshot(entries.len())
    }

    // == Snapshot ==
    /// Returns a copy of every entry, ordered by id.
    pub async fn snapshot(&self) -> Vec<(u64, CacheEntry)> {
        let entries = self.entries.read().await;
        let mut snapshot: Vec<_> = entries
            .iter()
            .map(|(id, entry)| (*id, entry.clone()))
            .collect();
        snapshot.sort_by_key(|(id, _)| *id);
        snapshot
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
