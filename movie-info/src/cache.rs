use crate::{MovieSummary, Order};
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "graphql")]
use async_graphql::SimpleObject;

/// Configuration for the listing cache
#[derive(Clone, Debug)]
pub struct CacheConfig {
    /// Maximum number of cached entries
    pub max_entries: usize,
    /// Whether caching is enabled
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 100,
            enabled: true,
        }
    }
}

impl CacheConfig {
    pub fn new(max_entries: usize, enabled: bool) -> Self {
        Self {
            max_entries,
            enabled,
        }
    }
}

/// Cached listing with metadata
#[derive(Clone, Debug)]
pub struct CachedResult {
    pub data: Vec<MovieSummary>,
    pub created_at: DateTime<Utc>,
    pub ttl: Duration,
}

impl CachedResult {
    pub fn new(data: Vec<MovieSummary>, ttl: Duration) -> Self {
        Self {
            data,
            created_at: Utc::now(),
            ttl,
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + self.ttl
    }

    /// Check if the cached result is still valid
    pub fn is_valid(&self) -> bool {
        Utc::now() < self.expires_at()
    }
}

/// Cache key for listing operations
#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub enum CacheKey {
    Popular(Order),
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Popular(order) => write!(f, "popular_movies_{}", order),
        }
    }
}

/// Key/value store with per-entry expiry, as used by the listing operation.
pub trait ListingCache: Send + Sync {
    /// Valid entry for `key`, if any.
    fn get(&self, key: &CacheKey) -> Option<Vec<MovieSummary>>;

    /// Store `data` under `key` for `ttl`.
    fn put(&self, key: CacheKey, data: Vec<MovieSummary>, ttl: Duration);
}

/// In-memory cache implementation using DashMap for thread safety
pub struct MovieCache {
    cache: DashMap<CacheKey, CachedResult>,
    pub config: CacheConfig,
}

impl Default for MovieCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl MovieCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            cache: DashMap::new(),
            config,
        }
    }

    /// Remove expired entries from cache
    pub fn evict_expired(&self) {
        let before = self.cache.len();
        self.cache.retain(|_, cached| cached.is_valid());
        log::debug!(
            "Evicted {} expired cache entries",
            before.saturating_sub(self.cache.len())
        );
    }

    /// Remove oldest entries when at capacity
    fn evict_oldest(&self) {
        let mut entries: Vec<_> = self
            .cache
            .iter()
            .map(|entry| (*entry.key(), entry.value().created_at))
            .collect();

        // Sort by creation time (oldest first)
        entries.sort_by_key(|(_, created_at)| *created_at);

        // Remove oldest 25% of entries
        let to_remove = (self.config.max_entries / 4).max(1);
        for (key, _) in entries.into_iter().take(to_remove) {
            self.cache.remove(&key);
        }

        log::debug!("Evicted {} oldest cache entries", to_remove);
    }

    /// Clear all cache entries
    pub fn clear(&self) {
        self.cache.clear();
        log::info!("Cache cleared");
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        // Single pass, so both counts describe the same entries
        let (total_entries, expired_entries) =
            self.cache.iter().fold((0, 0), |(total, expired), entry| {
                (total + 1, expired + usize::from(!entry.value().is_valid()))
            });

        CacheStats {
            total_entries,
            valid_entries: total_entries - expired_entries,
            expired_entries,
            max_entries: self.config.max_entries,
        }
    }
}

impl ListingCache for MovieCache {
    fn get(&self, key: &CacheKey) -> Option<Vec<MovieSummary>> {
        if !self.config.enabled {
            return None;
        }

        if let Some(cached) = self.cache.get(key) {
            if cached.is_valid() {
                log::debug!("Cache hit for key: {}", key);
                return Some(cached.data.clone());
            }
        }

        // Drop the expired entry outside of the read guard
        if self.cache.remove_if(key, |_, cached| !cached.is_valid()).is_some() {
            log::debug!("Cache expired for key: {}", key);
        }

        log::debug!("Cache miss for key: {}", key);
        None
    }

    fn put(&self, key: CacheKey, data: Vec<MovieSummary>, ttl: Duration) {
        if !self.config.enabled {
            return;
        }

        // Check if we need to evict old entries
        if !self.cache.contains_key(&key) && self.cache.len() >= self.config.max_entries {
            self.evict_expired();

            // If still at capacity, remove oldest entries
            if self.cache.len() >= self.config.max_entries {
                self.evict_oldest();
            }
        }

        self.cache.insert(key, CachedResult::new(data, ttl));
        log::debug!("Stored in cache with key: {}", key);
    }
}

/// Cache statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(SimpleObject))]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    pub expired_entries: usize,
    pub max_entries: usize,
}

/// Thread-safe wrapper for the cache
pub type SharedMovieCache = Arc<MovieCache>;

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Vec<MovieSummary> {
        vec![
            MovieSummary::new("Arcadian", "2024", "N/A", 5.2),
            MovieSummary::new("Babygirl", "2024", "N/A", 6.0),
        ]
    }

    #[test]
    fn test_cache_key_names() {
        assert_eq!(
            CacheKey::Popular(Order::Descending).to_string(),
            "popular_movies_desc"
        );
        assert_eq!(
            CacheKey::Popular(Order::Ascending).to_string(),
            "popular_movies_asc"
        );
    }

    #[test]
    fn test_cached_result_validity() {
        let cached = CachedResult::new(vec![], Duration::seconds(1));
        assert!(cached.is_valid());

        // Simulate expired result
        let expired_cached = CachedResult {
            data: vec![],
            created_at: Utc::now() - Duration::seconds(2),
            ttl: Duration::seconds(1),
        };
        assert!(!expired_cached.is_valid());
    }

    #[test]
    fn test_put_then_get() {
        let cache = MovieCache::default();
        let key = CacheKey::Popular(Order::Descending);

        assert!(cache.get(&key).is_none());
        cache.put(key, listing(), Duration::hours(1));

        assert_eq!(cache.get(&key), Some(listing()));
        assert!(cache.get(&CacheKey::Popular(Order::Ascending)).is_none());
    }

    #[test]
    fn test_expired_entry_is_dropped_on_read() {
        let cache = MovieCache::default();
        let key = CacheKey::Popular(Order::Ascending);
        cache.put(key, listing(), Duration::zero());

        assert_eq!(cache.stats().expired_entries, 1);
        assert!(cache.get(&key).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_disabled_cache_stores_nothing() {
        let cache = MovieCache::new(CacheConfig::new(10, false));
        let key = CacheKey::Popular(Order::Descending);
        cache.put(key, listing(), Duration::hours(1));

        assert!(cache.get(&key).is_none());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_eviction_at_capacity() {
        let cache = MovieCache::new(CacheConfig::new(1, true));
        cache.put(
            CacheKey::Popular(Order::Descending),
            listing(),
            Duration::hours(1),
        );
        cache.put(
            CacheKey::Popular(Order::Ascending),
            listing(),
            Duration::hours(1),
        );

        assert_eq!(cache.len(), 1);
        assert!(cache.get(&CacheKey::Popular(Order::Ascending)).is_some());
    }

    #[test]
    fn test_stats_and_clear() {
        let cache = MovieCache::default();
        cache.put(
            CacheKey::Popular(Order::Descending),
            listing(),
            Duration::hours(1),
        );
        cache.put(
            CacheKey::Popular(Order::Ascending),
            listing(),
            Duration::zero(),
        );

        assert_eq!(
            cache.stats(),
            CacheStats {
                total_entries: 2,
                valid_entries: 1,
                expired_entries: 1,
                max_entries: 100,
            }
        );

        cache.evict_expired();
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_stats_with_only_expired_entries() {
        let cache = MovieCache::new(CacheConfig::new(10, true));
        for order in [Order::Ascending, Order::Descending] {
            cache.put(CacheKey::Popular(order), listing(), Duration::zero());
        }

        let stats = cache.stats();
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.expired_entries, 2);
        assert_eq!(stats.valid_entries, 0);
    }

    #[test]
    fn test_entry_lifetime_comes_from_put() {
        let cache = MovieCache::default();
        let key = CacheKey::Popular(Order::Descending);

        cache.put(key, listing(), Duration::zero());
        assert!(cache.get(&key).is_none());

        cache.put(key, listing(), Duration::minutes(5));
        assert!(cache.get(&key).is_some());
    }
}
