//! Sleeper example: map a raw weekly payload and score it
//!
//! This example demonstrates:
//! - Translating Sleeper stat lines into `PlayerStats`
//! - Scoring the same lineup under every scoring system
//! - The tiered kicker preset

use gridiron_score::sleeper::map_weekly_stats;
use gridiron_score::*;
use serde_json::json;

fn main() -> Result<(), ScoringError> {
    tracing_subscriber::fmt::init();

    // A trimmed `/stats/nfl/{season}/{week}` response.
    let week = json!({
        "4046": {"pass_yd": 288.0, "pass_td": 2.0, "pass_int": 0.0, "rush_yd": 12.0, "gp": 1.0},
        "4035": {"rush_yd": 74.0, "rush_td": 0.0, "rec": 7.0, "rec_yd": 61.0, "rec_td": 1.0},
        "5859": {"fgm": 3.0, "fgm_30_39": 1.0, "fgm_40_49": 1.0, "fgm_50p": 1.0, "xpm": 2.0, "fgmiss": 1.0},
        "KC": {"pts_allow": 13.0, "sack": 2.0, "int": 2.0, "fum_rec": 1.0}
    });

    let roster = [
        RosterEntry::new("4046", "QB"),
        RosterEntry::new("4035", "RB"),
        RosterEntry::new("5859", "K"),
        RosterEntry::new("KC", "DEF"),
    ];
    let stats = map_weekly_stats(&week, roster.iter().map(|e| e.player_id.as_str()));

    for system in ScoringSystem::ALL {
        for model in [KickerModel::Flat, KickerModel::Tiered] {
            let rules = ScoringRuleSet::with_kicker_model(system, model);
            let result = aggregate(&roster, &stats, &rules);
            println!("{:<9} {:?} kicker: {:.1}", system.as_str(), model, result.total_points);
        }
    }

    let rules = ScoringRuleSet::with_kicker_model(ScoringSystem::Ppr, KickerModel::Tiered);
    if let Some(kicker) = stats.get("5859") {
        println!("\n{}", explain_player("5859", kicker, Position::K, &rules));
    }

    Ok(())
}
