//! Matchup example: score two lineups and pick a winner
//!
//! This example demonstrates:
//! - Choosing a preset from a settings document
//! - Aggregating rosters with a bye week and a bad position tag
//! - Printing per-player breakdowns
//!
//! Run with `RUST_LOG=debug` to see per-player scoring logs.

use gridiron_score::*;
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ScoringError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let rules = ScoringSettings::from_json(r#"{"system": "HALF_PPR"}"#)?.into_rule_set();
    println!("Scoring system: {}", rules.system());

    let mut stats = HashMap::new();
    stats.insert(
        "Josh Allen".to_string(),
        PlayerStats {
            passing_yards: 262,
            passing_tds: 2,
            interceptions: 1,
            rushing_yards: 41,
            rushing_tds: 1,
            ..PlayerStats::default()
        },
    );
    stats.insert(
        "Christian McCaffrey".to_string(),
        PlayerStats {
            rushing_yards: 107,
            rushing_tds: 1,
            receptions: 6,
            receiving_yards: 52,
            ..PlayerStats::default()
        },
    );
    stats.insert(
        "Justin Jefferson".to_string(),
        PlayerStats {
            receptions: 9,
            receiving_yards: 131,
            receiving_tds: 1,
            ..PlayerStats::default()
        },
    );
    stats.insert(
        "SF Defense".to_string(),
        PlayerStats {
            defense_points_allowed: Some(10),
            defense_sacks: 4,
            defense_interceptions: 1,
            ..PlayerStats::default()
        },
    );
    stats.insert(
        "Harrison Butker".to_string(),
        PlayerStats {
            field_goals: 3,
            extra_points: 2,
            ..PlayerStats::default()
        },
    );

    let home = vec![
        RosterEntry::new("Josh Allen", "QB"),
        RosterEntry::new("Justin Jefferson", "WR"),
        RosterEntry::new("Harrison Butker", "K"),
        // Bye week: no stats supplied.
        RosterEntry::new("Travis Kelce", "TE"),
    ];
    let away = vec![
        RosterEntry::new("Christian McCaffrey", "RB"),
        RosterEntry::new("SF Defense", "D/ST"),
        // Not a scoring position; counts as zero.
        RosterEntry::new("Fred Warner", "LB"),
    ];

    let home_result = aggregate(&home, &stats, &rules);
    let away_result = aggregate(&away, &stats, &rules);

    for (label, roster, result) in [("Home", &home, &home_result), ("Away", &away, &away_result)] {
        println!("\n=== {} ({:.1}) ===", label, result.total_points);
        for entry in roster {
            match (entry.position.parse::<Position>(), stats.get(&entry.player_id)) {
                (Ok(position), Some(player_stats)) => {
                    println!("{}", explain_player(&entry.player_id, player_stats, position, &rules));
                }
                _ => println!("{} ({}): 0.0 (not scored)", entry.player_id, entry.position),
            }
        }
    }

    match home_result.versus(&away_result) {
        Outcome::Home => println!("\nHome wins"),
        Outcome::Away => println!("\nAway wins"),
        Outcome::Tie => println!("\nTie"),
    }

    Ok(())
}
