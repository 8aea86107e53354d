use serde::{Deserialize, Serialize};

use super::matches::Match;

/// Wire envelope returned by the matches endpoint.
///
/// The feed may echo competition metadata alongside the match list; only the
/// matches themselves are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchesResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<i32>,
    pub matches: Vec<Match>,
}
