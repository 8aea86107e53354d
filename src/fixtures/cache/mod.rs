pub mod http_response_cache;
pub mod match_cache;
pub mod types;

// Re-export cache types
pub use types::*;
// Re-export match cache functions
pub use match_cache::*;
// Re-export HTTP response cache functions
pub use http_response_cache::*;

/// Clears every cache. Used by tests and when a forced refresh is needed.
pub async fn clear_all_caches() {
    clear_match_cache().await;
    clear_http_response_cache().await;
}
