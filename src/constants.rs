//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Cache TTL (Time To Live) values in seconds
pub mod cache_ttl {
    /// TTL for match lists that contain at least one in-play match.
    /// Short enough that aggregate scores track the feed during a matchday.
    pub const LIVE_MATCHES_SECONDS: u64 = 30;

    /// TTL for match lists where every match is finished or scheduled (1 hour)
    pub const COMPLETED_MATCHES_SECONDS: u64 = 3600;

    /// Default TTL for raw HTTP responses (5 minutes). The fetch function
    /// shortens this when the response body contains in-play matches.
    pub const HTTP_RESPONSE_SECONDS: u64 = 300;
}

/// Season boundary constants for deriving the default season
pub mod season {
    /// Month in which a new European season starts (July).
    /// Before this month the previous calendar year labels the season.
    pub const CUTOVER_MONTH: u32 = 7;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "CUPWATCH_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "CUPWATCH_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "CUPWATCH_HTTP_TIMEOUT";
}

/// Retry configuration
pub mod retry {
    /// Maximum number of retry attempts for API calls
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Initial delay for exponential backoff (milliseconds), doubled per retry
    pub const INITIAL_BACKOFF_MS: u64 = 250;

    /// Retry delay for rate limit errors (seconds)
    pub const RATE_LIMIT_DELAY_SECONDS: u64 = 60;

    /// Retry delay for server errors (seconds)
    pub const SERVER_ERROR_DELAY_SECONDS: u64 = 5;

    /// Retry delay for service unavailable errors (seconds)
    pub const SERVICE_UNAVAILABLE_DELAY_SECONDS: u64 = 30;

    /// Retry delay for network timeout errors (seconds)
    pub const NETWORK_TIMEOUT_DELAY_SECONDS: u64 = 2;

    /// Retry delay for network connection errors (seconds)
    pub const NETWORK_CONNECTION_DELAY_SECONDS: u64 = 10;
}

/// Validation limits
pub mod validation {
    /// Minimum accepted HTTP timeout in seconds
    pub const MIN_HTTP_TIMEOUT_SECONDS: u64 = 5;

    /// Maximum accepted HTTP timeout in seconds
    pub const MAX_HTTP_TIMEOUT_SECONDS: u64 = 300;

    /// Maximum reasonable goals for a single side in one match
    pub const MAX_TEAM_SCORE: i32 = 50;

    /// Maximum length for team names
    pub const MAX_TEAM_NAME_LENGTH: usize = 50;
}
