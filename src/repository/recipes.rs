//! Recipe Repository
//!
//! Single entry point for recipe access. Reads by id go through the cache;
//! collection queries always hit the backing store. Every backing store access
//! happens under one mutex, and writes refresh or evict the cache inside the
//! same critical section. Lock order is always store guard, then cache lock.

use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::backing::{DeleteOutcome, InMemoryStore, RecipeStore, UpdateOutcome};
use crate::cache::{CacheEntry, CacheLookup, CacheStats, RecipeCache, DEFAULT_CACHE_TTL};
use crate::config::Config;
use crate::error::Result;
use crate::models::Recipe;
use crate::repository::search::{
    filter_recipes, normalize_query, tag_online, DEFAULT_SEARCH_LIMIT,
};
use crate::repository::{Simulation, SimulationSettings};

// == Repository Snapshot ==
/// Copy of the store contents and cache entries at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySnapshot {
    pub recipes: Vec<Recipe>,
    pub cache: Vec<(u64, CacheEntry)>,
}

// == Recipe Repository ==
/// Cache-augmented recipe repository.
#[derive(Debug)]
pub struct RecipeRepository<S = InMemoryStore> {
    /// Backing store behind the single guard
    store: Mutex<S>,
    /// Id-keyed cache, read without the guard on hits
    cache: RecipeCache,
    /// Fault, latency and network toggles
    simulation: Simulation,
}

impl RecipeRepository<InMemoryStore> {
    /// Creates a repository over an empty in-memory store using the
    /// configured TTL and initial latency.
    pub fn from_config(config: &Config) -> Self {
        let settings = SimulationSettings {
            latency_ms: config.simulated_latency_ms,
            ..SimulationSettings::default()
        };
        Self::with_settings(InMemoryStore::new(), config.cache_ttl(), settings)
    }
}

impl<S: RecipeStore> RecipeRepository<S> {
    // == Constructors ==
    /// Creates a repository with the default TTL and no simulated faults.
    pub fn new(store: S) -> Self {
        Self::with_ttl(store, DEFAULT_CACHE_TTL)
    }

    pub fn with_ttl(store: S, ttl: Duration) -> Self {
        Self::with_settings(store, ttl, SimulationSettings::default())
    }

    pub fn with_settings(store: S, ttl: Duration, settings: SimulationSettings) -> Self {
        Self {
            store: Mutex::new(store),
            cache: RecipeCache::new(ttl),
            simulation: Simulation::new(settings),
        }
    }

    // == Add ==
    /// Inserts a recipe and caches it. Returns the stored id.
    pub async fn add(&self, recipe: Recipe) -> Result<u64> {
        self.simulation.enter("add").await?;

        let mut store = self.store.lock().await;
        let id = store.insert(recipe.clone())?;
        self.cache.put(recipe.with_id(id)).await;

        debug!("Added recipe {}", id);
        Ok(id)
    }

    // == Add Many ==
    /// Inserts a batch in one critical section; each recipe gets its own
    /// cache slot. Returns the number inserted.
    pub async fn add_many(&self, recipes: Vec<Recipe>) -> Result<usize> {
        self.simulation.enter("add_many").await?;

        let mut store = self.store.lock().await;
        let stored = store.insert_many(recipes)?;
        let count = stored.len();
        self.cache.put_many(stored).await;

        info!("Added {} recipes", count);
        Ok(count)
    }

    // == Get By Id ==
    /// Returns the recipe for `id`.
    ///
    /// A live cache entry is returned as-is without touching the store, so the
    /// result may lag the store by up to one TTL window. Otherwise the store
    /// is read and the cache re-armed.
    pub async fn get_by_id(&self, id: u64) -> Result<Option<Recipe>> {
        if let CacheLookup::Live(recipe) = self.cache.get(id).await {
            self.cache.record_hit();
            debug!("Cache hit for recipe {}", id);
            return Ok(Some(recipe));
        }

        self.cache.record_miss();
        debug!("Cache miss for recipe {}", id);

        self.simulation.enter("get_by_id").await?;

        let store = self.store.lock().await;
        let found = store.find_by_id(id);
        if let Some(recipe) = &found {
            self.cache.put(recipe.clone()).await;
        }
        Ok(found)
    }

    // == Get All ==
    /// Returns every recipe in store order.
    pub async fn get_all(&self) -> Result<Vec<Recipe>> {
        self.simulation.enter("get_all").await?;
        Ok(self.store.lock().await.find_all())
    }

    // == Search ==
    /// Case-insensitive substring search over name, ingredients, category
    /// and instructions, truncated to `limit`. A blank query returns nothing
    /// without reaching the store.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<Recipe>> {
        self.search_store(query, limit, "search").await
    }

    // == Search Online ==
    /// Searches the "remote" endpoint when the network is available, tagging
    /// every returned name with `ONLINE_PREFIX`; falls back to an untagged
    /// local search otherwise.
    pub async fn search_online(&self, query: &str) -> Result<Vec<Recipe>> {
        if !self.simulation.network_available() {
            debug!("Network unavailable, falling back to local search");
            return self.search(query, DEFAULT_SEARCH_LIMIT).await;
        }

        let results = self
            .search_store(query, DEFAULT_SEARCH_LIMIT, "search_online")
            .await?;
        Ok(results.into_iter().map(tag_online).collect())
    }

    async fn search_store(
        &self,
        query: &str,
        limit: usize,
        operation: &str,
    ) -> Result<Vec<Recipe>> {
        let Some(needle) = normalize_query(query) else {
            debug!("Blank query, skipping {}", operation);
            return Ok(Vec::new());
        };

        self.simulation.enter(operation).await?;

        let store = self.store.lock().await;
        Ok(filter_recipes(store.find_all(), &needle, limit))
    }

    // == Favorites ==
    /// Returns every recipe flagged as favorite, in store order.
    pub async fn get_favorites(&self) -> Result<Vec<Recipe>> {
        self.simulation.enter("get_favorites").await?;

        let store = self.store.lock().await;
        Ok(store.find_all().into_iter().filter(|r| r.is_favorite).collect())
    }

    /// Sets the favorite flag of one recipe and refreshes its cache slot.
    pub async fn set_favorite(&self, id: u64, favorite: bool) -> Result<UpdateOutcome> {
        self.simulation.enter("set_favorite").await?;

        let mut store = self.store.lock().await;
        let Some(mut recipe) = store.find_by_id(id) else {
            return Ok(UpdateOutcome::NotFound);
        };
        recipe.is_favorite = favorite;

        let outcome = store.update(recipe.clone());
        if outcome == UpdateOutcome::Applied {
            self.cache.put(recipe).await;
        }
        Ok(outcome)
    }

    // == Update ==
    /// Replaces the recipe with the same id and refreshes its cache slot.
    /// An unknown id changes nothing.
    pub async fn update(&self, recipe: Recipe) -> Result<UpdateOutcome> {
        self.simulation.enter("update").await?;

        let mut store = self.store.lock().await;
        let outcome = store.update(recipe.clone());
        if outcome == UpdateOutcome::Applied {
            debug!("Updated recipe {}", recipe.id);
            self.cache.put(recipe).await;
        }
        Ok(outcome)
    }

    // == Delete ==
    /// Removes a recipe from the store and evicts its cache slot.
    pub async fn delete(&self, id: u64) -> Result<DeleteOutcome> {
        self.simulation.enter("delete").await?;

        let mut store = self.store.lock().await;
        let outcome = store.delete(id);
        self.cache.remove(id).await;

        debug!("Delete of recipe {}: {:?}", id, outcome);
        Ok(outcome)
    }

    // == Count ==
    /// Number of recipes in the backing store.
    pub async fn count(&self) -> Result<usize> {
        self.simulation.enter("count").await?;
        Ok(self.store.lock().await.len())
    }

    // == Cache Management ==
    pub async fn stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    /// Empties the cache and resets hit/miss counters.
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
        info!("Cache cleared");
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache.ttl()
    }

    // == Simulation Controls ==
    pub fn inject_errors(&self, enabled: bool) {
        self.simulation.set_inject_errors(enabled);
    }

    pub fn set_latency(&self, latency: Duration) {
        self.simulation.set_latency(latency);
    }

    pub fn set_network_available(&self, available: bool) {
        self.simulation.set_network_available(available);
    }

    pub fn simulation(&self) -> SimulationSettings {
        self.simulation.settings()
    }

    // == Snapshot ==
    /// Copies store and cache state under the guard, bypassing the
    /// simulation. Meant for diagnostics and tests.
    pub async fn snapshot(&self) -> RepositorySnapshot {
        let store = self.store.lock().await;
        RepositorySnapshot {
            recipes: store.find_all(),
            cache: self.cache.snapshot().await,
        }
    }
}
