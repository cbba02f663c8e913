//! Matcher cache for efficient repeated matching.
//!
//! Fragments are plain strings, so every terminal operation would otherwise
//! recompile its source. This module caches compiled matchers keyed by
//! source and flags.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock, RwLock};

use super::Matcher;
use crate::config::EngineConfig;
use crate::error::Result;

/// A cache for compiled matchers.
///
/// The cache uses LRU (Least Recently Used) eviction when full. Recency is
/// tracked with a logical clock, so lookups only need the read lock.
pub struct MatcherCache {
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
    config: EngineConfig,
    clock: AtomicU64,
    /// Total cache hits (for statistics).
    total_hits: AtomicUsize,
    /// Total cache misses (for statistics).
    total_misses: AtomicUsize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    source: String,
    flags: String,
}

impl CacheKey {
    fn new(source: &str, flags: &str) -> Self {
        Self {
            source: source.to_string(),
            flags: flags.to_string(),
        }
    }
}

struct CacheEntry {
    matcher: Arc<Matcher>,
    last_used: AtomicU64,
}

impl MatcherCache {
    /// Create a new cache compiling with `config`, bounded by its
    /// `cache_capacity`.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(config.cache_capacity)),
            config,
            clock: AtomicU64::new(0),
            total_hits: AtomicUsize::new(0),
            total_misses: AtomicUsize::new(0),
        }
    }

    /// Create a new cache with default configuration and the given capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(EngineConfig::default().cache_capacity(capacity))
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }

    /// Get or compile the matcher for `source` with `flags`.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the source. Failures are not
    /// cached.
    pub fn get_or_compile(&self, source: &str, flags: &str) -> Result<Arc<Matcher>> {
        let key = CacheKey::new(source, flags);

        // Note: We recover from lock poisoning since the cache is just an optimization
        {
            let entries = self
                .entries
                .read()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(entry) = entries.get(&key) {
                entry.last_used.store(self.tick(), Ordering::Relaxed);
                self.total_hits.fetch_add(1, Ordering::Relaxed);
                return Ok(Arc::clone(&entry.matcher));
            }
        }

        self.total_misses.fetch_add(1, Ordering::Relaxed);
        let matcher = Arc::new(Matcher::compile_with(source, flags, &self.config)?);

        if self.config.cache_capacity == 0 {
            return Ok(matcher);
        }

        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        // Another thread may have inserted while we were compiling.
        if let Some(entry) = entries.get(&key) {
            entry.last_used.store(self.tick(), Ordering::Relaxed);
            return Ok(Arc::clone(&entry.matcher));
        }

        if entries.len() >= self.config.cache_capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_used.load(Ordering::Relaxed))
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                tracing::debug!(source = %oldest.source, "evicting cached matcher");
                entries.remove(&oldest);
            }
        }

        entries.insert(
            key,
            CacheEntry {
                matcher: Arc::clone(&matcher),
                last_used: AtomicU64::new(self.tick()),
            },
        );

        Ok(matcher)
    }

    /// Check if the matcher for `source` with `flags` is cached.
    #[must_use]
    pub fn contains(&self, source: &str, flags: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .contains_key(&CacheKey::new(source, flags))
    }

    /// Get the current number of cached matchers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear the cache. Statistics are kept.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clear();
    }

    /// The configuration matchers are compiled with.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.len(),
            capacity: self.config.cache_capacity,
            total_hits: self.total_hits.load(Ordering::Relaxed),
            total_misses: self.total_misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for MatcherCache {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Statistics about a matcher cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Current number of cached matchers.
    pub size: usize,
    /// Maximum cache size.
    pub capacity: usize,
    /// Total cache hits.
    pub total_hits: usize,
    /// Total cache misses.
    pub total_misses: usize,
}

impl CacheStats {
    /// Get the cache hit rate as a ratio (0.0 to 1.0).
    ///
    /// Returns 1.0 if no accesses have been made.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_hits + self.total_misses;
        if total == 0 {
            1.0
        } else {
            self.total_hits as f64 / total as f64
        }
    }
}

/// Global matcher cache, configured from the environment on first use.
pub static GLOBAL_CACHE: LazyLock<MatcherCache> =
    LazyLock::new(|| MatcherCache::new(EngineConfig::from_env()));

/// Get or compile a matcher using the global cache.
///
/// # Errors
///
/// Returns an error if the engine rejects the source.
pub fn get_matcher(source: &str, flags: &str) -> Result<Arc<Matcher>> {
    GLOBAL_CACHE.get_or_compile(source, flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_basic() {
        let cache = MatcherCache::with_capacity(10);

        let m1 = cache.get_or_compile(r"\d+", "").unwrap();
        let m2 = cache.get_or_compile(r"\d+", "").unwrap();

        assert!(Arc::ptr_eq(&m1, &m2));
    }

    #[test]
    fn flags_are_part_of_the_key() {
        let cache = MatcherCache::with_capacity(10);

        let plain = cache.get_or_compile("abc", "").unwrap();
        let folded = cache.get_or_compile("abc", "i").unwrap();

        assert!(!Arc::ptr_eq(&plain, &folded));
        assert!(cache.contains("abc", "i"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn cache_evicts_least_recently_used() {
        let cache = MatcherCache::with_capacity(2);

        cache.get_or_compile("a+", "").unwrap();
        cache.get_or_compile("b+", "").unwrap();
        // Touch "a+" so "b+" becomes the eviction candidate.
        cache.get_or_compile("a+", "").unwrap();
        cache.get_or_compile("c+", "").unwrap();

        assert_eq!(cache.len(), 2);
        assert!(cache.contains("a+", ""));
        assert!(!cache.contains("b+", ""));
        assert!(cache.contains("c+", ""));
    }

    #[test]
    fn zero_capacity_disables_caching() {
        let cache = MatcherCache::with_capacity(0);
        let m1 = cache.get_or_compile("x", "").unwrap();
        let m2 = cache.get_or_compile("x", "").unwrap();
        assert!(!Arc::ptr_eq(&m1, &m2));
        assert!(cache.is_empty());
    }

    #[test]
    fn cache_invalid_pattern() {
        let cache = MatcherCache::with_capacity(10);
        assert!(cache.get_or_compile("[invalid", "").is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn global_cache() {
        let m1 = get_matcher(r"\w+@", "").unwrap();
        let m2 = get_matcher(r"\w+@", "").unwrap();
        assert!(Arc::ptr_eq(&m1, &m2));
    }

    #[test]
    fn cache_stats_tracking() {
        let cache = MatcherCache::with_capacity(10);
        assert_eq!(cache.stats().total_hits, 0);
        assert!((cache.stats().hit_rate() - 1.0).abs() < 0.001);

        cache.get_or_compile(r"\d+", "").unwrap();
        cache.get_or_compile(r"\d+", "").unwrap();
        cache.get_or_compile(r"\d+", "").unwrap();
        cache.get_or_compile(r"\w+", "").unwrap();

        let stats = cache.stats();
        assert_eq!(stats.size, 2);
        assert_eq!(stats.capacity, 10);
        assert_eq!(stats.total_hits, 2);
        assert_eq!(stats.total_misses, 2);
        assert!((stats.hit_rate() - 0.5).abs() < 0.001);
    }
}
