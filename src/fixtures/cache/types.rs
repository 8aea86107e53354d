//! Cache entry types with TTL support

use std::time::{Duration, Instant};
use tracing::debug;

use crate::constants::cache_ttl;
use crate::fixtures::models::Match;

/// Cached match list for one competition season, with a TTL that tightens
/// while any match is in play.
#[derive(Debug, Clone)]
pub struct CachedMatchData {
    pub data: Vec<Match>,
    pub cached_at: Instant,
    pub has_live_matches: bool,
}

impl CachedMatchData {
    pub fn new(data: Vec<Match>, has_live_matches: bool) -> Self {
        Self {
            data,
            cached_at: Instant::now(),
            has_live_matches,
        }
    }

    /// Checks expiry against the live or completed TTL, depending on the
    /// match state captured when the entry was created.
    pub fn is_expired(&self) -> bool {
        let ttl = self.get_ttl();
        let age = self.cached_at.elapsed();
        let is_expired = age > ttl;

        debug!(
            "Cache expiration check: has_live_matches={}, age={:?}, ttl={:?}, is_expired={}",
            self.has_live_matches, age, ttl, is_expired
        );

        is_expired
    }

    /// Gets the TTL duration for this cache entry
    pub fn get_ttl(&self) -> Duration {
        if self.has_live_matches {
            Duration::from_secs(cache_ttl::LIVE_MATCHES_SECONDS)
        } else {
            Duration::from_secs(cache_ttl::COMPLETED_MATCHES_SECONDS)
        }
    }

    /// Gets the remaining time until expiration
    #[allow(dead_code)]
    pub fn time_until_expiry(&self) -> Duration {
        self.get_ttl().saturating_sub(self.cached_at.elapsed())
    }
}

/// Cached raw HTTP response body with a fixed TTL
#[derive(Debug, Clone)]
pub struct CachedHttpResponse {
    pub data: String,
    pub cached_at: Instant,
    pub ttl_seconds: u64,
}

impl CachedHttpResponse {
    pub fn new(data: String, ttl_seconds: u64) -> Self {
        Self {
            data,
            cached_at: Instant::now(),
            ttl_seconds,
        }
    }

    /// Checks if the cached data is expired
    pub fn is_expired(&self) -> bool {
        let ttl = Duration::from_secs(self.ttl_seconds);
        self.cached_at.elapsed() > ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::models::{MatchStatus, MatchTeam};

    fn create_test_match(status: MatchStatus) -> Match {
        let team = |id: &str| MatchTeam {
            id: id.to_string(),
            name: id.to_string(),
            logo: None,
            score: Some(0),
        };
        Match {
            id: "m1".to_string(),
            date: "2024-04-09".to_string(),
            round: "Final".to_string(),
            home_team: team("x"),
            away_team: team("y"),
            status,
        }
    }

    #[test]
    fn test_match_data_ttl_depends_on_live_state() {
        let live = CachedMatchData::new(vec![create_test_match(MatchStatus::Live)], true);
        let done = CachedMatchData::new(vec![create_test_match(MatchStatus::Finished)], false);

        assert_eq!(
            live.get_ttl(),
            Duration::from_secs(cache_ttl::LIVE_MATCHES_SECONDS)
        );
        assert_eq!(
            done.get_ttl(),
            Duration::from_secs(cache_ttl::COMPLETED_MATCHES_SECONDS)
        );
        assert!(live.get_ttl() < done.get_ttl());
    }

    #[test]
    fn test_fresh_entries_are_not_expired() {
        let entry = CachedMatchData::new(vec![], false);
        assert!(!entry.is_expired());
        assert!(entry.time_until_expiry() > Duration::ZERO);

        let response = CachedHttpResponse::new("{}".to_string(), 300);
        assert!(!response.is_expired());
    }

    #[test]
    fn test_zero_ttl_http_response_expires_immediately() {
        let response = CachedHttpResponse::new("{}".to_string(), 0);
        std::thread::sleep(Duration::from_millis(5));
        assert!(response.is_expired());
    }
}
