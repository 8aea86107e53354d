//! Round label classification, knockout ordering and id derivation

/// Sort priority assigned to round labels no keyword matches. Unrecognized
/// rounds sort after every known stage, keeping their relative input order.
pub const UNKNOWN_ROUND_PRIORITY: u32 = 999;

/// Labels containing any of these belong to a league-style phase.
const LEAGUE_KEYWORDS: [&str; 5] = ["group", "league", "regular", "matchday", "jornada"];

/// Labels containing any of these are excluded outright, even when a
/// knockout keyword is also present.
const EXCLUSION_KEYWORDS: [&str; 5] = [
    "play-off",
    "playoff",
    "qualifying",
    "qualification",
    "qual.",
];

/// Labels containing any of these belong to the knockout bracket.
const KNOCKOUT_KEYWORDS: [&str; 8] = [
    "round of 16",
    "round of 32",
    "quarter",
    "semi",
    "final",
    "1/8",
    "1/4",
    "1/2",
];

/// Category a round label falls into after keyword matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundCategory {
    LeaguePhase,
    KnockoutPhase,
    Excluded,
}

impl RoundCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundCategory::LeaguePhase => "league-phase",
            RoundCategory::KnockoutPhase => "knockout-phase",
            RoundCategory::Excluded => "excluded",
        }
    }
}

/// Classifies a human-readable round label into a phase category.
///
/// The label is lower-cased and probed against three keyword sets in order:
/// league keywords first, then exclusion keywords (qualifying rounds and
/// play-offs, which trump any knockout keyword in the same label), then
/// knockout keywords. A label matching none of the sets is excluded.
///
/// # Example
/// ```
/// use cupwatch::fixtures::processors::{classify_round, RoundCategory};
///
/// assert_eq!(classify_round("Quarter-final"), RoundCategory::KnockoutPhase);
/// assert_eq!(classify_round("Group A"), RoundCategory::LeaguePhase);
/// assert_eq!(classify_round("Play-off Round of 16"), RoundCategory::Excluded);
/// ```
pub fn classify_round(label: &str) -> RoundCategory {
    let normalized = label.to_lowercase();
    if LEAGUE_KEYWORDS.iter().any(|kw| normalized.contains(kw)) {
        return RoundCategory::LeaguePhase;
    }
    if EXCLUSION_KEYWORDS.iter().any(|kw| normalized.contains(kw)) {
        return RoundCategory::Excluded;
    }
    if KNOCKOUT_KEYWORDS.iter().any(|kw| normalized.contains(kw)) {
        return RoundCategory::KnockoutPhase;
    }
    RoundCategory::Excluded
}

/// Returns the bracket position priority for a knockout round label.
///
/// Earlier stages get lower numbers. The specific stage names are probed
/// before the bare "final" keyword so that "Quarter-final" and "Semi-final"
/// land on their own stage rather than on the final.
pub fn knockout_round_priority(label: &str) -> u32 {
    let normalized = label.to_lowercase();
    if normalized.contains("play-off") || normalized.contains("playoff") {
        1
    } else if normalized.contains("round of 32") {
        2
    } else if normalized.contains("round of 16") || normalized.contains("1/8") {
        3
    } else if normalized.contains("quarter") || normalized.contains("1/4") {
        4
    } else if normalized.contains("semi") || normalized.contains("1/2") {
        5
    } else if normalized.contains("final") {
        6
    } else {
        UNKNOWN_ROUND_PRIORITY
    }
}

/// Sorts knockout round labels into bracket order, earliest stage first.
///
/// The sort is stable: labels sharing a priority, including unrecognized
/// ones at the back, keep their relative input order.
pub fn order_knockout_rounds(mut labels: Vec<String>) -> Vec<String> {
    labels.sort_by_key(|label| knockout_round_priority(label));
    labels
}

/// Derives a URL-safe identifier from a round label.
///
/// Lower-cases the label, turns whitespace runs into single hyphens, strips
/// everything outside `[a-z0-9-]` and collapses repeated hyphens.
///
/// # Example
/// ```
/// use cupwatch::fixtures::processors::derive_round_id;
///
/// assert_eq!(derive_round_id("Round of 16!!"), "round-of-16");
/// assert_eq!(derive_round_id("Group A - Matchday 3"), "group-a-matchday-3");
/// ```
pub fn derive_round_id(label: &str) -> String {
    let mut id = String::with_capacity(label.len());
    let mut last_was_hyphen = false;
    for ch in label.to_lowercase().chars() {
        if ch.is_whitespace() || ch == '-' {
            if !last_was_hyphen {
                id.push('-');
                last_was_hyphen = true;
            }
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            id.push(ch);
            last_was_hyphen = false;
        }
        // Any other character is stripped without breaking a hyphen run.
    }
    id
}
