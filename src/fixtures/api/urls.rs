//! URL building utilities for API endpoints

/// Builds the URL for fetching a competition season's full match list.
///
/// # Arguments
/// * `api_domain` - The base API domain
/// * `competition` - The competition identifier
/// * `season` - The season start year
///
/// # Returns
/// * `String` - The complete matches URL
///
/// # Example
/// ```
/// use cupwatch::fixtures::api::build_competition_matches_url;
///
/// let url = build_competition_matches_url("https://api.example.com", "champions-cup", 2024);
/// assert_eq!(
///     url,
///     "https://api.example.com/competitions/champions-cup/matches?season=2024"
/// );
/// ```
pub fn build_competition_matches_url(api_domain: &str, competition: &str, season: i32) -> String {
    format!("{api_domain}/competitions/{competition}/matches?season={season}")
}

/// Builds the URL for fetching a single round's matches.
///
/// # Arguments
/// * `api_domain` - The base API domain
/// * `competition` - The competition identifier
/// * `season` - The season start year
/// * `round_id` - The derived round identifier
///
/// # Returns
/// * `String` - The complete round matches URL
///
/// # Example
/// ```
/// use cupwatch::fixtures::api::build_round_matches_url;
///
/// let url = build_round_matches_url("https://api.example.com", "champions-cup", 2024, "semi-final");
/// assert_eq!(
///     url,
///     "https://api.example.com/competitions/champions-cup/matches?season=2024&round=semi-final"
/// );
/// ```
pub fn build_round_matches_url(
    api_domain: &str,
    competition: &str,
    season: i32,
    round_id: &str,
) -> String {
    format!("{api_domain}/competitions/{competition}/matches?season={season}&round={round_id}")
}

/// Creates the match cache key for a competition season.
///
/// # Arguments
/// * `competition` - The competition identifier
/// * `season` - The season start year
///
/// # Returns
/// * `String` - The cache key (e.g., "champions-cup-2024")
///
/// # Example
/// ```
/// use cupwatch::fixtures::api::create_match_cache_key;
///
/// let key = create_match_cache_key("champions-cup", 2024);
/// assert_eq!(key, "champions-cup-2024");
/// ```
pub fn create_match_cache_key(competition: &str, season: i32) -> String {
    format!("{competition}-{season}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_competition_matches_url() {
        assert_eq!(
            build_competition_matches_url("https://api.example.com", "copa", 2023),
            "https://api.example.com/competitions/copa/matches?season=2023"
        );
    }

    #[test]
    fn test_build_round_matches_url() {
        assert_eq!(
            build_round_matches_url("https://api.example.com", "copa", 2023, "round-of-16"),
            "https://api.example.com/competitions/copa/matches?season=2023&round=round-of-16"
        );
    }

    #[test]
    fn test_create_match_cache_key() {
        assert_eq!(create_match_cache_key("copa", 2023), "copa-2023");
    }
}
