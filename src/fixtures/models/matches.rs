use serde::{Deserialize, Serialize};

/// Match status as reported by the fixture feed.
///
/// Only `Finished` matches contribute goals to tie aggregates; every status
/// participates in tie status derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Halftime,
    Finished,
}

impl MatchStatus {
    /// Returns the wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "SCHEDULED",
            MatchStatus::Live => "LIVE",
            MatchStatus::Halftime => "HALFTIME",
            MatchStatus::Finished => "FINISHED",
        }
    }

    /// True while the match is underway (live play or the half-time break).
    /// Used to pick short cache TTLs for match lists.
    pub fn is_in_play(&self) -> bool {
        matches!(self, MatchStatus::Live | MatchStatus::Halftime)
    }
}

/// One side of a match as supplied by the fixture feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchTeam {
    pub id: String,
    pub name: String,
    /// Optional crest/logo URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Goals scored in this match. `None` until a score is known.
    #[serde(default)]
    pub score: Option<i32>,
}

/// A single fixture from the feed. Immutable input to the aggregation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    /// ISO 8601 calendar date. ISO dates order chronologically under plain
    /// string comparison, which is how legs are sorted.
    pub date: String,
    /// Free-text round label, semantics fixed per competition feed
    /// (e.g. "Quarter-final", "Group A - Matchday 3").
    pub round: String,
    #[serde(rename = "homeTeam")]
    pub home_team: MatchTeam,
    #[serde(rename = "awayTeam")]
    pub away_team: MatchTeam,
    pub status: MatchStatus,
}
