//! Fixture data fetching, caching and knockout-tie processing

pub mod api;
pub mod cache;
pub mod models;
pub mod processors;

pub use api::{
    CompetitionBracket, KnockoutRound, build_competition_bracket, fetch_competition_bracket,
    find_round,
};
pub use models::{Match, MatchStatus, MatchTeam, MatchesResponse, Tie, TieTeam};
pub use processors::{
    RoundCategory, aggregate_ties, classify_round, derive_round_id, describe_tie_status,
    order_knockout_rounds,
};
