//! Football Cup Competition Viewer Library
//!
//! This library fetches fixture data for knockout cup competitions and
//! collapses it into two-legged ties with aggregate scores, away goals and
//! advancing teams, grouped into bracket-ordered rounds.
//!
//! # Examples
//!
//! ```rust,no_run
//! use cupwatch::error::AppError;
//! use cupwatch::fixtures::api::fetch_competition_bracket;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let bracket = fetch_competition_bracket("champions-cup", 2024).await?;
//!
//!     for round in &bracket.knockout_rounds {
//!         println!("{}", round.label);
//!         for tie in &round.ties {
//!             println!(
//!                 "  {} {} - {} {}",
//!                 tie.home_team.name,
//!                 tie.home_team.total_score,
//!                 tie.away_team.total_score,
//!                 tie.away_team.name
//!             );
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod fixtures;
pub mod logging;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use fixtures::api::{
    CompetitionBracket, KnockoutRound, build_competition_bracket, fetch_competition_bracket,
    find_round,
};
pub use fixtures::models::{Match, MatchStatus, MatchTeam, MatchesResponse, Tie, TieTeam};
pub use fixtures::processors::{
    RoundCategory, aggregate_ties, classify_round, derive_round_id, describe_tie_status,
    order_knockout_rounds,
};

/// Crate version, for startup logging and diagnostics
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
