use chrono::{Datelike, NaiveDate, Utc};
use tracing::info;

use crate::cli::Args;
use crate::constants::season;
use crate::error::AppError;
use crate::fixtures::api::{CompetitionBracket, KnockoutRound, fetch_competition_bracket, find_round};
use crate::fixtures::models::{Match, Tie};
use crate::fixtures::processors::describe_tie_status;

/// Run the one-shot application flow: fetch the competition bracket and
/// print the requested view of it.
pub async fn run(args: &Args) -> Result<(), AppError> {
    let competition = args.competition.as_deref().ok_or_else(|| {
        AppError::config_error("A competition is required: pass one with --competition (-c)")
    })?;
    let season = args.season.unwrap_or_else(current_season);

    info!(
        "Running with competition={}, season={}",
        competition, season
    );

    let bracket = fetch_competition_bracket(competition, season).await?;

    if args.list_rounds {
        print_round_listing(&bracket);
        return Ok(());
    }

    if let Some(query) = &args.round {
        let round = find_round(&bracket, query)
            .ok_or_else(|| AppError::round_not_found(query, competition))?;
        print_round(round, true)?;
        return Ok(());
    }

    if bracket.knockout_rounds.is_empty() {
        println!("No knockout rounds found for {competition} season {season}.");
        return Ok(());
    }

    for round in &bracket.knockout_rounds {
        print_round(round, false)?;
    }
    Ok(())
}

/// Returns the season start year for the current date. Seasons roll over in
/// July: before that, matches still belong to the previous year's season.
pub fn current_season() -> i32 {
    let now = Utc::now();
    season_for_date(now.year(), now.month())
}

fn season_for_date(year: i32, month: u32) -> i32 {
    if month >= season::CUTOVER_MONTH {
        year
    } else {
        year - 1
    }
}

fn print_round(round: &KnockoutRound, show_legs: bool) -> Result<(), AppError> {
    println!();
    println!("{}", round.label.to_uppercase());
    for tie in &round.ties {
        println!("{}", format_tie_line(tie));
        if show_legs {
            for leg in &tie.matches {
                println!("  {}", format_leg_line(leg)?);
            }
        }
    }
    Ok(())
}

fn print_round_listing(bracket: &CompetitionBracket) {
    println!("\nKnockout rounds:");
    if bracket.knockout_rounds.is_empty() {
        println!("  (none)");
    }
    for round in &bracket.knockout_rounds {
        println!("  {:<24} id: {}", round.label, round.id);
    }

    println!("\nLeague-phase rounds:");
    if bracket.league_rounds.is_empty() {
        println!("  (none)");
    }
    for label in &bracket.league_rounds {
        println!("  {label}");
    }

    println!("\nExcluded rounds:");
    if bracket.excluded_rounds.is_empty() {
        println!("  (none)");
    }
    for label in &bracket.excluded_rounds {
        println!("  {label}");
    }
}

/// Formats one tie as a single line: aggregate score, status badge and the
/// advancing side when decided.
fn format_tie_line(tie: &Tie) -> String {
    let mut line = format!(
        "{:<20} {:>2} - {:<2} {:<20}",
        tie.home_team.name, tie.home_team.total_score, tie.away_team.total_score, tie.away_team.name
    );

    let badge = describe_tie_status(tie);
    if !badge.is_empty() {
        line.push_str(&format!(" [{badge}]"));
    }
    if let Some(winner) = tie.winner_name() {
        line.push_str(&format!(" ({winner} advance)"));
    }
    line
}

fn format_leg_line(leg: &Match) -> Result<String, AppError> {
    let date = format_match_date(&leg.date)?;
    Ok(format!(
        "{date}  {} {} - {} {}",
        leg.home_team.name,
        format_score(leg.home_team.score),
        format_score(leg.away_team.score),
        leg.away_team.name
    ))
}

fn format_score(score: Option<i32>) -> String {
    match score {
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}

/// Formats an ISO match date as "DD.MM.". Timestamps are accepted; only the
/// date part is read.
fn format_match_date(date: &str) -> Result<String, AppError> {
    let day = date.get(0..10).ok_or_else(|| {
        AppError::datetime_parse_error(format!("Match date '{date}' is too short"))
    })?;
    let parsed = NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|e| {
        AppError::datetime_parse_error(format!("Invalid match date '{date}': {e}"))
    })?;
    Ok(parsed.format("%d.%m.").to_string())
}
