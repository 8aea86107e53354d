//! Human-readable status badges for aggregated ties

use crate::fixtures::models::{MatchStatus, Tie};

/// Describes a tie's progress for display next to its aggregate score.
///
/// Finished ties get no badge. A live tie is flagged as such, a two-legged
/// tie with only one leg played is "in progress", any other started status
/// passes through raw, and an untouched tie is "not yet played".
pub fn describe_tie_status(tie: &Tie) -> String {
    match tie.status {
        MatchStatus::Finished => String::new(),
        MatchStatus::Live => "Live".to_string(),
        _ if tie.matches.len() == 2 => "Tie in progress".to_string(),
        MatchStatus::Scheduled => "Not yet played".to_string(),
        other => other.as_str().to_string(),
    }
}
