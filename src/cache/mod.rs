//! Cache Module
//!
//! Provides the id-keyed recipe cache with lazy TTL expiration.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

use std::time::Duration;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::{CacheStats, StatsCounters};
pub use store::{CacheLookup, RecipeCache};

// == Public Constants ==
/// Lifetime of a cache entry after it is written
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(10 * 60);
