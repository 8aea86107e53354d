//! Knockout tie aggregation over raw fixture lists

use std::collections::HashMap;

use crate::fixtures::models::{Match, MatchStatus, Tie, TieTeam};

/// Derives the deterministic tie id for an unordered team pair.
///
/// The two ids are sorted lexicographically before joining, so both legs of
/// a two-legged tie map to the same id regardless of which side hosted first.
///
/// # Example
/// ```
/// use cupwatch::fixtures::processors::derive_tie_id;
///
/// assert_eq!(derive_tie_id("bayern", "arsenal"), "tie-arsenal-bayern");
/// assert_eq!(derive_tie_id("arsenal", "bayern"), "tie-arsenal-bayern");
/// ```
pub fn derive_tie_id(team_a: &str, team_b: &str) -> String {
    let (first, second) = if team_a <= team_b {
        (team_a, team_b)
    } else {
        (team_b, team_a)
    };
    format!("tie-{first}-{second}")
}

/// Collapses one knockout round's matches into ties.
///
/// Matches are grouped by unordered team pair, each group is sorted
/// ascending by date, and the chronologically-first leg fixes the tie's
/// home/away orientation. Finished legs feed the aggregate score and the
/// away-goals bookkeeping; other legs only influence the tie status. Output
/// order is the order in which each pairing first appears in the input.
///
/// The function is pure and deterministic: the grouping key and per-group
/// date sort make the result independent of input order.
///
/// # Arguments
/// * `matches` - Fixtures belonging to one knockout round. Round consistency
///   is the caller's responsibility; it is not verified here.
///
/// # Returns
/// * `Vec<Tie>` - One tie per team pairing, with constituent matches sorted
///   by date
///
/// # Example
/// ```
/// use cupwatch::fixtures::models::{Match, MatchStatus, MatchTeam};
/// use cupwatch::fixtures::processors::aggregate_ties;
///
/// let team = |id: &str, score: Option<i32>| MatchTeam {
///     id: id.to_string(),
///     name: id.to_string(),
///     logo: None,
///     score,
/// };
/// let legs = vec![
///     Match {
///         id: "m1".to_string(),
///         date: "2024-04-09".to_string(),
///         round: "Quarter-final".to_string(),
///         home_team: team("arsenal", Some(2)),
///         away_team: team("bayern", Some(2)),
///         status: MatchStatus::Finished,
///     },
///     Match {
///         id: "m2".to_string(),
///         date: "2024-04-17".to_string(),
///         round: "Quarter-final".to_string(),
///         home_team: team("bayern", Some(1)),
///         away_team: team("arsenal", Some(0)),
///         status: MatchStatus::Finished,
///     },
/// ];
///
/// let ties = aggregate_ties(&legs);
/// assert_eq!(ties.len(), 1);
/// assert_eq!(ties[0].id, "tie-arsenal-bayern");
/// assert_eq!(ties[0].home_team.total_score, 2);
/// assert_eq!(ties[0].away_team.total_score, 3);
/// assert_eq!(ties[0].winner.as_deref(), Some("bayern"));
/// ```
pub fn aggregate_ties(matches: &[Match]) -> Vec<Tie> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<Match>)> = Vec::new();

    for fixture in matches {
        let key = derive_tie_id(&fixture.home_team.id, &fixture.away_team.id);
        match index.get(&key) {
            Some(&slot) => groups[slot].1.push(fixture.clone()),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![fixture.clone()]));
            }
        }
    }

    groups
        .into_iter()
        .map(|(id, mut legs)| {
            legs.sort_by(|a, b| a.date.cmp(&b.date));
            build_tie(id, legs)
        })
        .collect()
}

/// Builds one tie from its date-sorted legs. Groups always contain at least
/// one match, so the earliest leg exists.
fn build_tie(id: String, legs: Vec<Match>) -> Tie {
    let home_seed = legs[0].home_team.clone();
    let away_seed = legs[0].away_team.clone();

    let mut home_total = 0;
    let mut away_total = 0;
    let mut home_away_goals = 0;
    let mut away_away_goals = 0;

    for leg in &legs {
        if leg.status != MatchStatus::Finished {
            continue;
        }
        // Missing score on a finished leg counts as 0.
        let home_score = leg.home_team.score.unwrap_or(0);
        let away_score = leg.away_team.score.unwrap_or(0);

        if leg.home_team.id == home_seed.id {
            home_total += home_score;
            away_total += away_score;
            away_away_goals += away_score;
        } else {
            // Physical sides reversed: the canonical home team is visiting,
            // so its goals are this leg's away score.
            home_total += away_score;
            away_total += home_score;
            home_away_goals += away_score;
        }
    }

    let status = aggregate_status(&legs);

    let winner = if status == MatchStatus::Finished {
        if home_total > away_total {
            Some(home_seed.id.clone())
        } else if away_total > home_total {
            Some(away_seed.id.clone())
        } else if legs.len() == 2 {
            // Away-goals rule applies to exactly-two-leg ties only.
            if home_away_goals > away_away_goals {
                Some(home_seed.id.clone())
            } else if away_away_goals > home_away_goals {
                Some(away_seed.id.clone())
            } else {
                None
            }
        } else {
            None
        }
    } else {
        None
    };

    Tie {
        id,
        home_team: TieTeam {
            id: home_seed.id,
            name: home_seed.name,
            logo: home_seed.logo,
            total_score: home_total,
            away_goals: home_away_goals,
        },
        away_team: TieTeam {
            id: away_seed.id,
            name: away_seed.name,
            logo: away_seed.logo,
            total_score: away_total,
            away_goals: away_away_goals,
        },
        status,
        winner,
        matches: legs,
    }
}

/// Derives the tie status from its legs. Any LIVE leg wins; a fully finished
/// tie is FINISHED; otherwise the earliest leg's status stands, even when
/// later legs are still unplayed.
fn aggregate_status(legs: &[Match]) -> MatchStatus {
    if legs.iter().any(|leg| leg.status == MatchStatus::Live) {
        return MatchStatus::Live;
    }
    if legs.iter().all(|leg| leg.status == MatchStatus::Finished) {
        return MatchStatus::Finished;
    }
    legs[0].status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::models::MatchTeam;

    fn create_test_team(id: &str, score: Option<i32>) -> MatchTeam {
        MatchTeam {
            id: id.to_string(),
            name: id.to_string(),
            logo: None,
            score,
        }
    }

    fn create_test_match(
        id: &str,
        date: &str,
        home: (&str, Option<i32>),
        away: (&str, Option<i32>),
        status: MatchStatus,
    ) -> Match {
        Match {
            id: id.to_string(),
            date: date.to_string(),
            round: "Quarter-final".to_string(),
            home_team: create_test_team(home.0, home.1),
            away_team: create_test_team(away.0, away.1),
            status,
        }
    }

    #[test]
    fn test_derive_tie_id_sorts_team_ids() {
        assert_eq!(derive_tie_id("porto", "arsenal"), "tie-arsenal-porto");
        assert_eq!(derive_tie_id("arsenal", "porto"), "tie-arsenal-porto");
        assert_eq!(derive_tie_id("a", "a"), "tie-a-a");
    }

    #[test]
    fn test_two_legs_collapse_into_single_tie() {
        let leg_a = create_test_match(
            "m1",
            "2024-04-09",
            ("x", Some(1)),
            ("y", Some(0)),
            MatchStatus::Finished,
        );
        let leg_b = create_test_match(
            "m2",
            "2024-04-17",
            ("y", Some(0)),
            ("x", Some(0)),
            MatchStatus::Finished,
        );

        let forward = aggregate_ties(&[leg_a.clone(), leg_b.clone()]);
        let reversed = aggregate_ties(&[leg_b, leg_a]);

        assert_eq!(forward.len(), 1);
        assert_eq!(reversed.len(), 1);
        // Same tie either way: grouping and the per-group date sort make the
        // result independent of input order.
        assert_eq!(forward, reversed);
        assert_eq!(forward[0].id, "tie-x-y");
        assert_eq!(forward[0].home_team.id, "x");
    }

    #[test]
    fn test_away_goals_tiebreak() {
        // Leg A: X 1-1 Y, leg B: Y 2-2 X. Aggregate 3-3; X scored 2 away,
        // Y scored 1 away, so X advances.
        let matches = vec![
            create_test_match(
                "m1",
                "2024-04-09",
                ("x", Some(1)),
                ("y", Some(1)),
                MatchStatus::Finished,
            ),
            create_test_match(
                "m2",
                "2024-04-17",
                ("y", Some(2)),
                ("x", Some(2)),
                MatchStatus::Finished,
            ),
        ];

        let ties = aggregate_ties(&matches);
        assert_eq!(ties.len(), 1);
        let tie = &ties[0];
        assert_eq!(tie.home_team.total_score, 3);
        assert_eq!(tie.away_team.total_score, 3);
        assert_eq!(tie.home_team.away_goals, 2);
        assert_eq!(tie.away_team.away_goals, 1);
        assert_eq!(tie.winner.as_deref(), Some("x"));
    }

    #[test]
    fn test_pure_aggregate_win() {
        let matches = vec![
            create_test_match(
                "m1",
                "2024-04-09",
                ("x", Some(3)),
                ("y", Some(0)),
                MatchStatus::Finished,
            ),
            create_test_match(
                "m2",
                "2024-04-17",
                ("y", Some(1)),
                ("x", Some(0)),
                MatchStatus::Finished,
            ),
        ];

        let ties = aggregate_ties(&matches);
        let tie = &ties[0];
        assert_eq!(tie.home_team.total_score, 3);
        assert_eq!(tie.away_team.total_score, 1);
        assert_eq!(tie.winner.as_deref(), Some("x"));
    }

    #[test]
    fn test_single_leg_draw_is_undetermined() {
        let matches = vec![create_test_match(
            "final",
            "2024-06-01",
            ("x", Some(1)),
            ("y", Some(1)),
            MatchStatus::Finished,
        )];

        let ties = aggregate_ties(&matches);
        let tie = &ties[0];
        assert_eq!(tie.status, MatchStatus::Finished);
        assert_eq!(tie.winner, None);
    }

    #[test]
    fn test_single_leg_decided_final() {
        let matches = vec![create_test_match(
            "final",
            "2024-06-01",
            ("x", Some(0)),
            ("y", Some(2)),
            MatchStatus::Finished,
        )];

        let ties = aggregate_ties(&matches);
        assert_eq!(ties[0].winner.as_deref(), Some("y"));
    }

    #[test]
    fn test_equal_away_goals_leave_tie_undetermined() {
        let matches = vec![
            create_test_match(
                "m1",
                "2024-04-09",
                ("x", Some(1)),
                ("y", Some(1)),
                MatchStatus::Finished,
            ),
            create_test_match(
                "m2",
                "2024-04-17",
                ("y", Some(1)),
                ("x", Some(1)),
                MatchStatus::Finished,
            ),
        ];

        let ties = aggregate_ties(&matches);
        let tie = &ties[0];
        assert_eq!(tie.home_team.away_goals, 1);
        assert_eq!(tie.away_team.away_goals, 1);
        assert_eq!(tie.winner, None);
    }

    #[test]
    fn test_idempotence() {
        let matches = vec![
            create_test_match(
                "m1",
                "2024-04-09",
                ("x", Some(2)),
                ("y", Some(0)),
                MatchStatus::Finished,
            ),
            create_test_match(
                "m2",
                "2024-04-17",
                ("y", Some(1)),
                ("x", Some(1)),
                MatchStatus::Finished,
            ),
        ];

        let first = aggregate_ties(&matches);
        let second = aggregate_ties(&matches.clone());
        assert_eq!(first, second);
    }

    #[test]
    fn test_earliest_status_stands_when_later_legs_unplayed() {
        // Leg 1 finished, leg 2 scheduled: the earliest leg's status wins,
        // so the tie reports FINISHED and a winner from the played leg.
        let matches = vec![
            create_test_match(
                "m1",
                "2024-04-09",
                ("x", Some(2)),
                ("y", Some(1)),
                MatchStatus::Finished,
            ),
            create_test_match(
                "m2",
                "2024-04-17",
                ("y", None),
                ("x", None),
                MatchStatus::Scheduled,
            ),
        ];

        let ties = aggregate_ties(&matches);
        let tie = &ties[0];
        assert_eq!(tie.status, MatchStatus::Finished);
        assert_eq!(tie.home_team.total_score, 2);
        assert_eq!(tie.away_team.total_score, 1);
        assert_eq!(tie.winner.as_deref(), Some("x"));
    }

    #[test]
    fn test_live_leg_forces_live_status() {
        let matches = vec![
            create_test_match(
                "m1",
                "2024-04-09",
                ("x", Some(1)),
                ("y", Some(0)),
                MatchStatus::Finished,
            ),
            create_test_match(
                "m2",
                "2024-04-17",
                ("y", Some(1)),
                ("x", Some(1)),
                MatchStatus::Live,
            ),
        ];

        let ties = aggregate_ties(&matches);
        let tie = &ties[0];
        assert_eq!(tie.status, MatchStatus::Live);
        assert_eq!(tie.winner, None);
        // Only the finished leg contributes goals.
        assert_eq!(tie.home_team.total_score, 1);
        assert_eq!(tie.away_team.total_score, 0);
    }

    #[test]
    fn test_halftime_earliest_leg_sets_tie_status() {
        let matches = vec![
            create_test_match(
                "m1",
                "2024-04-09",
                ("x", Some(0)),
                ("y", Some(0)),
                MatchStatus::Halftime,
            ),
            create_test_match(
                "m2",
                "2024-04-17",
                ("y", None),
                ("x", None),
                MatchStatus::Scheduled,
            ),
        ];

        let ties = aggregate_ties(&matches);
        assert_eq!(ties[0].status, MatchStatus::Halftime);
        assert_eq!(ties[0].winner, None);
    }

    #[test]
    fn test_missing_score_on_finished_leg_counts_as_zero() {
        let matches = vec![
            create_test_match(
                "m1",
                "2024-04-09",
                ("x", None),
                ("y", Some(1)),
                MatchStatus::Finished,
            ),
            create_test_match(
                "m2",
                "2024-04-17",
                ("y", Some(0)),
                ("x", Some(0)),
                MatchStatus::Finished,
            ),
        ];

        let ties = aggregate_ties(&matches);
        let tie = &ties[0];
        assert_eq!(tie.home_team.total_score, 0);
        assert_eq!(tie.away_team.total_score, 1);
        assert_eq!(tie.winner.as_deref(), Some("y"));
    }

    #[test]
    fn test_canonical_orientation_from_earliest_date_not_input_order() {
        // The second input is chronologically first, so its home side (y)
        // becomes the tie's home team.
        let matches = vec![
            create_test_match(
                "m2",
                "2024-04-17",
                ("x", Some(2)),
                ("y", Some(0)),
                MatchStatus::Finished,
            ),
            create_test_match(
                "m1",
                "2024-04-09",
                ("y", Some(1)),
                ("x", Some(1)),
                MatchStatus::Finished,
            ),
        ];

        let ties = aggregate_ties(&matches);
        let tie = &ties[0];
        assert_eq!(tie.home_team.id, "y");
        assert_eq!(tie.away_team.id, "x");
        // y: 1 at home + 0 away = 1; x: 1 away + 2 at home = 3.
        assert_eq!(tie.home_team.total_score, 1);
        assert_eq!(tie.away_team.total_score, 3);
        assert_eq!(tie.home_team.away_goals, 0);
        assert_eq!(tie.away_team.away_goals, 1);
        assert_eq!(tie.winner.as_deref(), Some("x"));
        // Constituent matches come back date-sorted.
        assert_eq!(tie.matches[0].id, "m1");
        assert_eq!(tie.matches[1].id, "m2");
    }

    #[test]
    fn test_team_details_come_from_earliest_leg() {
        let mut leg_one = create_test_match(
            "m1",
            "2024-04-09",
            ("x", Some(1)),
            ("y", Some(0)),
            MatchStatus::Finished,
        );
        leg_one.home_team.name = "Xanthi FC".to_string();
        leg_one.home_team.logo = Some("https://img.example.com/x.png".to_string());
        let leg_two = create_test_match(
            "m2",
            "2024-04-17",
            ("y", Some(0)),
            ("x", Some(0)),
            MatchStatus::Finished,
        );

        let ties = aggregate_ties(&[leg_one, leg_two]);
        let tie = &ties[0];
        assert_eq!(tie.home_team.name, "Xanthi FC");
        assert_eq!(
            tie.home_team.logo.as_deref(),
            Some("https://img.example.com/x.png")
        );
    }

    #[test]
    fn test_three_leg_tie_has_no_tiebreak() {
        // Replayed tie: equal aggregate over three legs stays undetermined
        // because the away-goals rule only covers exactly two legs.
        let matches = vec![
            create_test_match(
                "m1",
                "2024-04-01",
                ("x", Some(1)),
                ("y", Some(1)),
                MatchStatus::Finished,
            ),
            create_test_match(
                "m2",
                "2024-04-08",
                ("y", Some(0)),
                ("x", Some(0)),
                MatchStatus::Finished,
            ),
            create_test_match(
                "m3",
                "2024-04-15",
                ("x", Some(2)),
                ("y", Some(2)),
                MatchStatus::Finished,
            ),
        ];

        let ties = aggregate_ties(&matches);
        let tie = &ties[0];
        assert_eq!(tie.home_team.total_score, 3);
        assert_eq!(tie.away_team.total_score, 3);
        assert_eq!(tie.winner, None);
    }

    #[test]
    fn test_three_leg_tie_with_clear_aggregate_winner() {
        let matches = vec![
            create_test_match(
                "m1",
                "2024-04-01",
                ("x", Some(1)),
                ("y", Some(1)),
                MatchStatus::Finished,
            ),
            create_test_match(
                "m2",
                "2024-04-08",
                ("y", Some(0)),
                ("x", Some(2)),
                MatchStatus::Finished,
            ),
            create_test_match(
                "m3",
                "2024-04-15",
                ("x", Some(0)),
                ("y", Some(0)),
                MatchStatus::Finished,
            ),
        ];

        let ties = aggregate_ties(&matches);
        assert_eq!(ties[0].home_team.total_score, 3);
        assert_eq!(ties[0].away_team.total_score, 1);
        assert_eq!(ties[0].winner.as_deref(), Some("x"));
    }

    #[test]
    fn test_output_preserves_first_occurrence_order() {
        let matches = vec![
            create_test_match(
                "m1",
                "2024-04-09",
                ("c", Some(1)),
                ("d", Some(0)),
                MatchStatus::Finished,
            ),
            create_test_match(
                "m2",
                "2024-04-09",
                ("a", Some(2)),
                ("b", Some(2)),
                MatchStatus::Finished,
            ),
            create_test_match(
                "m3",
                "2024-04-17",
                ("d", Some(0)),
                ("c", Some(0)),
                MatchStatus::Finished,
            ),
        ];

        let ties = aggregate_ties(&matches);
        assert_eq!(ties.len(), 2);
        assert_eq!(ties[0].id, "tie-c-d");
        assert_eq!(ties[1].id, "tie-a-b");
    }

    #[test]
    fn test_empty_input_yields_no_ties() {
        assert!(aggregate_ties(&[]).is_empty());
    }

    #[test]
    fn test_all_scheduled_two_leg_tie() {
        let matches = vec![
            create_test_match(
                "m1",
                "2024-04-09",
                ("x", None),
                ("y", None),
                MatchStatus::Scheduled,
            ),
            create_test_match(
                "m2",
                "2024-04-17",
                ("y", None),
                ("x", None),
                MatchStatus::Scheduled,
            ),
        ];

        let ties = aggregate_ties(&matches);
        let tie = &ties[0];
        assert_eq!(tie.status, MatchStatus::Scheduled);
        assert_eq!(tie.home_team.total_score, 0);
        assert_eq!(tie.away_team.total_score, 0);
        assert_eq!(tie.winner, None);
    }
}
