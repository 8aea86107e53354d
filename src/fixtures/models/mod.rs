pub mod matches;
pub mod response;
pub mod ties;

pub use matches::{Match, MatchStatus, MatchTeam};
pub use response::MatchesResponse;
pub use ties::{Tie, TieTeam};
