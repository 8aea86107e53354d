//! Match list cache keyed by competition and season

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::LazyLock;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::constants::cache_ttl;
use crate::fixtures::models::Match;

use super::types::CachedMatchData;

// LRU cache for fetched match lists, keyed by "{competition}-{season}"
pub static MATCH_CACHE: LazyLock<RwLock<LruCache<String, CachedMatchData>>> =
    LazyLock::new(|| RwLock::new(LruCache::new(NonZeroUsize::new(50).unwrap())));

/// Determines whether any match in the list is currently in play
pub fn has_live_matches(matches: &[Match]) -> bool {
    matches.iter().any(|fixture| fixture.status.is_in_play())
}

/// Caches a competition's match list with automatic live match detection
#[instrument(skip(key, matches), fields(cache_key = %key))]
pub async fn cache_match_data(key: String, matches: Vec<Match>) {
    let match_count = matches.len();
    let has_live = has_live_matches(&matches);

    debug!(
        "Caching match data: key={}, matches={}, has_live={}",
        key, match_count, has_live
    );

    let cached_data = CachedMatchData::new(matches, has_live);

    let mut cache = MATCH_CACHE.write().await;
    cache.put(key.clone(), cached_data);

    if has_live {
        info!(
            "Live match cache entry created: key={}, matches={}, ttl={}s",
            key,
            match_count,
            cache_ttl::LIVE_MATCHES_SECONDS
        );
    } else {
        info!(
            "Match cache entry created: key={}, matches={}, ttl={}s",
            key,
            match_count,
            cache_ttl::COMPLETED_MATCHES_SECONDS
        );
    }
}

/// Retrieves a cached match list if it has not expired
#[instrument(skip(key), fields(cache_key = %key))]
pub async fn get_cached_match_data(key: &str) -> Option<Vec<Match>> {
    debug!("Attempting to retrieve match data from cache: key={}", key);

    let mut cache = MATCH_CACHE.write().await;

    if let Some(cached_entry) = cache.get(key) {
        if !cached_entry.is_expired() {
            debug!(
                "Cache hit for match data: key={}, matches={}, age={:?}",
                key,
                cached_entry.data.len(),
                cached_entry.cached_at.elapsed()
            );
            return Some(cached_entry.data.clone());
        }

        warn!(
            "Removing expired match cache entry: key={}, age={:?}, ttl={:?}",
            key,
            cached_entry.cached_at.elapsed(),
            cached_entry.get_ttl()
        );
        cache.pop(key);
    } else {
        debug!("Cache miss for match data: key={}", key);
    }

    None
}

/// Gets the current match cache size for monitoring purposes
#[allow(dead_code)]
pub async fn get_match_cache_size() -> usize {
    MATCH_CACHE.read().await.len()
}

/// Gets the match cache capacity for monitoring purposes
#[allow(dead_code)]
pub async fn get_match_cache_capacity() -> usize {
    MATCH_CACHE.read().await.cap().get()
}

/// Clears all match cache entries
pub async fn clear_match_cache() {
    MATCH_CACHE.write().await.clear();
}
