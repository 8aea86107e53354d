//! Competition-level API operations: match list fetching and bracket assembly

use std::collections::HashMap;

use reqwest::Client;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::fixtures::cache::{cache_match_data, get_cached_match_data};
use crate::fixtures::models::{Match, MatchesResponse, Tie};
use crate::fixtures::processors::{
    RoundCategory, aggregate_ties, classify_round, derive_round_id, order_knockout_rounds,
};

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::urls::{build_competition_matches_url, create_match_cache_key};

/// One knockout round with its aggregated ties, in bracket order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnockoutRound {
    pub label: String,
    pub id: String,
    pub ties: Vec<Tie>,
}

/// A competition season's rounds after classification.
///
/// Knockout rounds carry their aggregated ties and come ordered from the
/// earliest stage to the final. League and excluded rounds are kept as bare
/// labels in first-appearance order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitionBracket {
    pub knockout_rounds: Vec<KnockoutRound>,
    pub league_rounds: Vec<String>,
    pub excluded_rounds: Vec<String>,
}

/// Fetches a competition season's match list, going through the match cache.
///
/// A 404 or empty-body answer from the API is reported as
/// `CompetitionNotFound` so callers can tell a bad competition id apart from
/// infrastructure failures.
#[instrument(skip(client, config))]
pub async fn fetch_competition_matches(
    client: &Client,
    config: &Config,
    competition: &str,
    season: i32,
) -> Result<Vec<Match>, AppError> {
    let cache_key = create_match_cache_key(competition, season);
    if let Some(cached) = get_cached_match_data(&cache_key).await {
        info!(
            "Using cached match data: competition={}, season={}, matches={}",
            competition,
            season,
            cached.len()
        );
        return Ok(cached);
    }

    let url = build_competition_matches_url(&config.api_domain, competition, season);
    let response: MatchesResponse = match fetch(client, &url).await {
        Ok(response) => response,
        Err(e) if e.is_not_found() => {
            warn!(
                "Competition lookup failed: competition={}, season={}",
                competition, season
            );
            return Err(AppError::competition_not_found(competition, season));
        }
        Err(e) => return Err(e),
    };

    cache_match_data(cache_key, response.matches.clone()).await;
    Ok(response.matches)
}

/// Builds a classified bracket from a raw match list.
///
/// Matches are grouped by round label in first-appearance order, each label
/// is classified, and the knockout labels are sorted into bracket order with
/// their matches collapsed into ties.
pub fn build_competition_bracket(matches: &[Match]) -> CompetitionBracket {
    let mut label_index: HashMap<String, usize> = HashMap::new();
    let mut round_groups: Vec<(String, Vec<Match>)> = Vec::new();

    for fixture in matches {
        match label_index.get(&fixture.round) {
            Some(&slot) => round_groups[slot].1.push(fixture.clone()),
            None => {
                label_index.insert(fixture.round.clone(), round_groups.len());
                round_groups.push((fixture.round.clone(), vec![fixture.clone()]));
            }
        }
    }

    let mut knockout_groups: HashMap<String, Vec<Match>> = HashMap::new();
    let mut knockout_labels: Vec<String> = Vec::new();
    let mut league_rounds: Vec<String> = Vec::new();
    let mut excluded_rounds: Vec<String> = Vec::new();

    for (label, group) in round_groups {
        match classify_round(&label) {
            RoundCategory::LeaguePhase => league_rounds.push(label),
            RoundCategory::Excluded => excluded_rounds.push(label),
            RoundCategory::KnockoutPhase => {
                knockout_labels.push(label.clone());
                knockout_groups.insert(label, group);
            }
        }
    }

    let mut knockout_rounds = Vec::with_capacity(knockout_labels.len());
    for label in order_knockout_rounds(knockout_labels) {
        if let Some(group) = knockout_groups.remove(&label) {
            knockout_rounds.push(KnockoutRound {
                id: derive_round_id(&label),
                ties: aggregate_ties(&group),
                label,
            });
        }
    }

    CompetitionBracket {
        knockout_rounds,
        league_rounds,
        excluded_rounds,
    }
}

/// Fetches a competition season and assembles its bracket.
///
/// This is the top-level entry point used by the CLI: it loads config,
/// builds the HTTP client, fetches the match list and classifies it.
#[instrument]
pub async fn fetch_competition_bracket(
    competition: &str,
    season: i32,
) -> Result<CompetitionBracket, AppError> {
    info!(
        "Fetching competition bracket: competition={}, season={}",
        competition, season
    );

    // Early check: prevent network calls if the API domain is not properly
    // configured. This prevents CI hangs when CUPWATCH_API_DOMAIN is unset
    // or invalid.
    if let Ok(api_domain) = std::env::var(crate::constants::env_vars::API_DOMAIN)
        && (api_domain.is_empty()
            || api_domain == "placeholder"
            || api_domain == "test"
            || api_domain == "unset")
    {
        warn!(
            "{} is set to '{}' - skipping network calls",
            crate::constants::env_vars::API_DOMAIN,
            api_domain
        );
        return Err(AppError::config_error(
            "API domain is not properly configured - network calls skipped",
        ));
    }

    let config = Config::load().await?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    let matches = fetch_competition_matches(&client, &config, competition, season).await?;
    if matches.is_empty() {
        warn!(
            "No matches returned: competition={}, season={}",
            competition, season
        );
    }

    Ok(build_competition_bracket(&matches))
}

/// Finds a knockout round by label or derived id, case-insensitively
pub fn find_round<'a>(bracket: &'a CompetitionBracket, query: &str) -> Option<&'a KnockoutRound> {
    bracket.knockout_rounds.iter().find(|round| {
        round.label.eq_ignore_ascii_case(query) || round.id == derive_round_id(query)
    })
}
