//! End-to-end scoring scenarios.
//!
//! These tests verify:
//! - Worked examples for each position family
//! - Points-allowed tier boundaries
//! - Team aggregation with missing and unknown players
//! - Matchup outcomes

use gridiron_score::*;
use std::collections::HashMap;

fn stats_by_id(entries: Vec<(&str, PlayerStats)>) -> HashMap<String, PlayerStats> {
    entries
        .into_iter()
        .map(|(id, stats)| (id.to_string(), stats))
        .collect()
}

fn scenario_a_qb() -> PlayerStats {
    PlayerStats {
        passing_yards: 300,
        passing_tds: 3,
        interceptions: 1,
        rushing_yards: 20,
        ..PlayerStats::default()
    }
}

fn scenario_b_rb() -> PlayerStats {
    PlayerStats {
        rushing_yards: 100,
        rushing_tds: 1,
        receptions: 5,
        receiving_yards: 40,
        ..PlayerStats::default()
    }
}

// ============================================================================
// Single players
// ============================================================================

/// QB: 300*0.04 + 3*4 - 2 + 20*0.1 = 24.0
#[test]
fn test_scenario_a_quarterback() {
    let rules = ScoringRuleSet::new(ScoringSystem::Ppr);
    assert_eq!(compute_points(&scenario_a_qb(), Position::Qb, &rules), 24.0);
}

/// RB: 10 + 6 + 5 + 4 under PPR, 10 + 6 + 0 + 4 under standard.
#[test]
fn test_scenario_b_running_back() {
    let stats = scenario_b_rb();
    assert_eq!(
        compute_points(&stats, Position::Rb, &ScoringRuleSet::new(ScoringSystem::Ppr)),
        25.0
    );
    assert_eq!(
        compute_points(&stats, Position::Rb, &ScoringRuleSet::new(ScoringSystem::Standard)),
        20.0
    );
}

/// DEF: tier(7) = +4, plus 3 sacks and an interception.
#[test]
fn test_scenario_c_defense() {
    let stats = PlayerStats {
        defense_points_allowed: Some(7),
        defense_sacks: 3,
        defense_interceptions: 1,
        ..PlayerStats::default()
    };
    assert_eq!(
        compute_points(&stats, Position::Def, &ScoringRuleSet::default()),
        9.0
    );
}

/// Every position scores zero on an empty stat line, under every preset.
#[test]
fn test_all_zero_stats() {
    for system in ScoringSystem::ALL {
        for model in [KickerModel::Flat, KickerModel::Tiered] {
            let rules = ScoringRuleSet::with_kicker_model(system, model);
            for position in Position::ALL {
                assert_eq!(compute_points(&PlayerStats::default(), position, &rules), 0.0);
            }
        }
    }
}

/// Boundary values belong to the tier the table states.
#[test]
fn test_points_allowed_boundaries() {
    let rules = ScoringRuleSet::default();
    let cases = [
        (0, 10.0),
        (6, 7.0),
        (7, 4.0),
        (13, 4.0),
        (14, 1.0),
        (20, 1.0),
        (21, 0.0),
        (27, 0.0),
        (28, -1.0),
        (34, -1.0),
        (35, -4.0),
    ];
    for (allowed, expected) in cases {
        let stats = PlayerStats {
            defense_points_allowed: Some(allowed),
            ..PlayerStats::default()
        };
        assert_eq!(
            compute_points(&stats, Position::Def, &rules),
            expected,
            "points allowed = {}",
            allowed
        );
    }
}

/// A four-interception, no-touchdown QB scores negative.
#[test]
fn test_negative_total() {
    let stats = PlayerStats {
        passing_yards: 150,
        interceptions: 4,
        ..PlayerStats::default()
    };
    assert_eq!(
        compute_points(&stats, Position::Qb, &ScoringRuleSet::default()),
        -2.0
    );
}

/// Stats parsed from the camelCase wire form score like hand-built ones.
#[test]
fn test_json_stats_round_into_scores() {
    let stats: PlayerStats = serde_json::from_str(
        r#"{"passingYards": 300, "passingTDs": 3, "interceptions": 1, "rushingYards": 20}"#,
    )
    .unwrap();
    assert_eq!(stats, scenario_a_qb());
}

/// The breakdown explains, but never changes, the total.
#[test]
fn test_breakdown_matches_total() {
    let rules = ScoringRuleSet::default();
    let stats = scenario_a_qb();
    let scored = explain_player("qb", &stats, Position::Qb, &rules);
    let lines = scored.breakdown.as_ref().unwrap();

    assert_eq!(scored.points, compute_points(&stats, Position::Qb, &rules));
    let summed: f64 = lines.iter().map(|l| l.contributed_points).sum();
    assert_eq!(numeric::round_to_tenth(summed), scored.points);
    assert_eq!(
        lines.iter().map(|l| l.stat_name).collect::<Vec<_>>(),
        ["passingYards", "passingTDs", "interceptions", "rushingYards"]
    );
}

// ============================================================================
// Teams and matchups
// ============================================================================

/// Two one-player rosters: 24.0 beats 20.0, equal totals tie.
#[test]
fn test_scenario_d_matchup() {
    let stats = stats_by_id(vec![("qb", scenario_a_qb()), ("rb", scenario_b_rb())]);
    let standard = ScoringRuleSet::new(ScoringSystem::Standard);

    let team_a = aggregate(&[RosterEntry::new("qb", "QB")], &stats, &standard);
    let team_b = aggregate(&[RosterEntry::new("rb", "RB")], &stats, &standard);
    assert_eq!(team_a.total_points, 24.0);
    assert_eq!(team_b.total_points, 20.0);
    assert_eq!(team_a.versus(&team_b), Outcome::Home);

    let team_b_again = aggregate(&[RosterEntry::new("rb", "RB")], &stats, &standard);
    assert_eq!(team_b.versus(&team_b_again), Outcome::Tie);
}

/// A full nine-slot lineup with a bye week and a mistyped position.
#[test]
fn test_full_lineup() {
    let roster = vec![
        RosterEntry::new("qb", "QB"),
        RosterEntry::new("rb1", "RB"),
        RosterEntry::new("rb2", "RB"),
        RosterEntry::new("wr1", "WR"),
        RosterEntry::new("wr2", "WR"),
        RosterEntry::new("te", "TE"),
        RosterEntry::new("flex", "WR/RB"),
        RosterEntry::new("def", "DEF"),
        RosterEntry::new("k", "K"),
    ];
    let stats = stats_by_id(vec![
        ("qb", scenario_a_qb()),
        ("rb1", scenario_b_rb()),
        (
            "wr1",
            PlayerStats {
                receptions: 8,
                receiving_yards: 112,
                receiving_tds: 1,
                ..PlayerStats::default()
            },
        ),
        (
            "wr2",
            PlayerStats {
                receptions: 3,
                receiving_yards: 27,
                ..PlayerStats::default()
            },
        ),
        (
            "te",
            PlayerStats {
                receptions: 4,
                receiving_yards: 41,
                fumbles: 1,
                ..PlayerStats::default()
            },
        ),
        (
            "flex",
            PlayerStats {
                receptions: 10,
                ..PlayerStats::default()
            },
        ),
        (
            "def",
            PlayerStats {
                defense_points_allowed: Some(17),
                defense_sacks: 2,
                defense_tds: 1,
                ..PlayerStats::default()
            },
        ),
        (
            "k",
            PlayerStats {
                field_goals: 2,
                extra_points: 3,
                ..PlayerStats::default()
            },
        ),
    ]);

    let result = aggregate(&roster, &stats, &ScoringRuleSet::new(ScoringSystem::HalfPpr));

    assert_eq!(result.per_player_points.len(), 9);
    assert_eq!(result.per_player_points["qb"], 24.0);
    // 10 + 6 + 2.5 + 4
    assert_eq!(result.per_player_points["rb1"], 22.5);
    assert_eq!(result.per_player_points["rb2"], 0.0);
    // 11.2 + 6 + 4
    assert_eq!(result.per_player_points["wr1"], 21.2);
    // 2.7 + 1.5
    assert_eq!(result.per_player_points["wr2"], 4.2);
    // 4.1 - 2 + 2
    assert_eq!(result.per_player_points["te"], 4.1);
    assert_eq!(result.per_player_points["flex"], 0.0);
    // 1 + 2 + 6
    assert_eq!(result.per_player_points["def"], 9.0);
    assert_eq!(result.per_player_points["k"], 9.0);

    assert_eq!(result.total_points, 94.0);
    assert_eq!(result.missing_stats, ["rb2"]);
    assert_eq!(result.unknown_positions, ["flex"]);
}

/// Changing the preset changes only reception-driven scores.
#[test]
fn test_preset_switch_only_moves_receptions() {
    let stats = stats_by_id(vec![("qb", scenario_a_qb()), ("rb", scenario_b_rb())]);
    let roster = [RosterEntry::new("qb", "QB"), RosterEntry::new("rb", "RB")];

    let ppr = aggregate(&roster, &stats, &ScoringRuleSet::new(ScoringSystem::Ppr));
    let half = aggregate(&roster, &stats, &ScoringRuleSet::new(ScoringSystem::HalfPpr));
    let standard = aggregate(&roster, &stats, &ScoringRuleSet::new(ScoringSystem::Standard));

    assert_eq!(ppr.per_player_points["qb"], standard.per_player_points["qb"]);
    assert_eq!(ppr.total_points, 49.0);
    assert_eq!(half.total_points, 46.5);
    assert_eq!(standard.total_points, 44.0);
}

/// Settings documents select the preset, and bad ones are rejected.
#[test]
fn test_settings_select_preset() {
    let rules = ScoringSettings::from_json(r#"{"system": "STANDARD", "kicker": "tiered"}"#)
        .unwrap()
        .into_rule_set();
    let kicker = PlayerStats {
        field_goals: 2,
        field_goals_50_59: 1,
        extra_points: 1,
        ..PlayerStats::default()
    };
    // 5 + 3 (undistanced) + 1
    assert_eq!(compute_points(&kicker, Position::K, &rules), 9.0);

    let err = ScoringSettings::from_json(r#"{"system": "SIX_PT_PASS"}"#).unwrap_err();
    assert!(matches!(err, ScoringError::InvalidConfiguration(_)));
}

/// A week pulled from Sleeper flows straight into aggregation.
#[test]
fn test_sleeper_week_to_team_total() {
    let week = serde_json::json!({
        "4046": {"pass_yd": 300.0, "pass_td": 3.0, "pass_int": 1.0, "rush_yd": 20.0},
        "4035": {"rush_yd": 100.0, "rush_td": 1.0, "rec": 5.0, "rec_yd": 40.0},
        "KC": {"pts_allow": 7.0, "sack": 3.0, "int": 1.0}
    });
    let roster = [
        RosterEntry::new("4046", "QB"),
        RosterEntry::new("4035", "RB"),
        RosterEntry::new("KC", "DEF"),
        RosterEntry::new("9999", "WR"),
    ];
    let stats = sleeper::map_weekly_stats(&week, roster.iter().map(|e| e.player_id.as_str()));
    let result = aggregate(&roster, &stats, &ScoringRuleSet::new(ScoringSystem::Ppr));

    assert_eq!(result.total_points, 24.0 + 25.0 + 9.0);
    assert_eq!(result.missing_stats, ["9999"]);
}
