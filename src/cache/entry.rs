//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

use tokio::time::Instant;

use crate::models::Recipe;

// == Cache Entry ==
/// A cached recipe tagged with its expiration instant.
///
/// Instants come from `tokio::time`, so paused test runtimes control expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The cached recipe
    pub recipe: Recipe,
    /// When the entry was written
    pub created_at: Instant,
    /// When the entry stops being live
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` from now.
    pub fn new(recipe: Recipe, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            recipe,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to the expiration time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Checks expiry against an explicit instant.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, zero once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Recipe {
        Recipe::new("Test", "Main", "salt", "stir").with_id(1)
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_creation() {
        let entry = CacheEntry::new(recipe(), Duration::from_secs(60));

        assert_eq!(entry.recipe.name, "Test");
        assert_eq!(entry.expires_at - entry.created_at, Duration::from_secs(60));
        assert!(!entry.is_expired());
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expiration() {
        let entry = CacheEntry::new(recipe(), Duration::from_secs(1));
        assert!(!entry.is_expired());

        tokio::time::advance(Duration::from_millis(1100)).await;

        assert!(entry.is_expired());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ttl_remaining() {
        let entry = CacheEntry::new(recipe(), Duration::from_secs(10));

        tokio::time::advance(Duration::from_secs(4)).await;
        assert_eq!(entry.ttl_remaining(), Duration::from_secs(6));

        tokio::time::advance(Duration::from_secs(20)).await;
        assert_eq!(entry.ttl_remaining(), Duration::ZERO);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let entry = CacheEntry {
            recipe: recipe(),
            created_at: now,
            expires_at: now, // Expires exactly at creation time
        };

        assert!(entry.is_expired_at(now), "Entry should be expired at boundary");
        assert!(!entry.is_expired_at(now - Duration::from_millis(1)));
    }
}
