pub mod competition_api;
mod fetch_utils;
pub mod http_client;
pub mod urls;

pub use competition_api::{
    CompetitionBracket, KnockoutRound, build_competition_bracket, fetch_competition_bracket,
    fetch_competition_matches, find_round,
};
pub use http_client::create_http_client_with_timeout;
pub use urls::{build_competition_matches_url, build_round_matches_url, create_match_cache_key};
