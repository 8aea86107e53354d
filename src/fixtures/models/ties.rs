use serde::Serialize;

use super::matches::{Match, MatchStatus};

/// One participant of a knockout tie with its aggregate bookkeeping.
///
/// Orientation follows the chronologically-first leg: the side that hosted
/// that leg is the tie's home team for every later leg, even when the
/// physical venues swap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TieTeam {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Goals summed across all finished legs, oriented to this side.
    #[serde(rename = "totalScore")]
    pub total_score: i32,
    /// Goals this team scored while playing as the physical away side.
    /// Breaks equal aggregates in exactly-two-leg ties.
    #[serde(rename = "awayGoals")]
    pub away_goals: i32,
}

/// A knockout contest between two teams across one or more legs.
///
/// Derived output of `aggregate_ties`; recomputed from scratch on every call
/// and never persisted or mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tie {
    /// `"tie-" + sortedId1 + "-" + sortedId2` over the unordered team pair.
    pub id: String,
    #[serde(rename = "homeTeam")]
    pub home_team: TieTeam,
    #[serde(rename = "awayTeam")]
    pub away_team: TieTeam,
    pub status: MatchStatus,
    /// Winning team id, absent while the tie is undetermined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    /// Constituent legs, sorted ascending by date.
    pub matches: Vec<Match>,
}

impl Tie {
    /// Looks up the display name for the winning side, if decided.
    pub fn winner_name(&self) -> Option<&str> {
        let winner_id = self.winner.as_deref()?;
        if self.home_team.id == winner_id {
            Some(&self.home_team.name)
        } else if self.away_team.id == winner_id {
            Some(&self.away_team.name)
        } else {
            None
        }
    }
}
