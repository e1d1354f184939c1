//! Mapping from Sleeper weekly stat lines to [`PlayerStats`].
//!
//! Sleeper's `/stats/nfl/{season}/{week}` payload is an object keyed by
//! player id whose values are flat `{stat_key: number}` objects. Only the
//! translation lives here; fetching belongs to the caller.

use crate::stats::PlayerStats;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Read the first of `keys` that holds a number, as a non-negative count.
///
/// Fractions truncate toward zero; negatives clamp to 0.
fn count(line: &Map<String, Value>, keys: &[&str]) -> Option<u32> {
    keys.iter().find_map(|key| {
        line.get(*key)
            .and_then(Value::as_f64)
            .map(|v| v.trunc().clamp(0.0, f64::from(u32::MAX)) as u32)
    })
}

fn count_or_zero(line: &Map<String, Value>, keys: &[&str]) -> u32 {
    count(line, keys).unwrap_or(0)
}

/// Translate one raw Sleeper stat line.
///
/// # Examples
///
/// ```rust
/// use gridiron_score::sleeper::map_stat_line;
/// use serde_json::json;
///
/// let raw = json!({"pass_yd": 312.0, "pass_td": 2.0, "rush_yd": -3.0, "gp": 1.0});
/// let stats = map_stat_line(raw.as_object().unwrap());
/// assert_eq!(stats.passing_yards, 312);
/// assert_eq!(stats.passing_tds, 2);
/// assert_eq!(stats.rushing_yards, 0);
/// ```
pub fn map_stat_line(line: &Map<String, Value>) -> PlayerStats {
    PlayerStats {
        passing_yards: count_or_zero(line, &["pass_yd", "pass_yds"]),
        passing_tds: count_or_zero(line, &["pass_td"]),
        interceptions: count_or_zero(line, &["pass_int"]),
        passing_2pt: count_or_zero(line, &["pass_2pt"]),

        rushing_yards: count_or_zero(line, &["rush_yd", "rush_yds"]),
        rushing_tds: count_or_zero(line, &["rush_td"]),
        rushing_2pt: count_or_zero(line, &["rush_2pt"]),

        receptions: count_or_zero(line, &["rec"]),
        receiving_yards: count_or_zero(line, &["rec_yd", "rec_yds"]),
        receiving_tds: count_or_zero(line, &["rec_td"]),
        receiving_2pt: count_or_zero(line, &["rec_2pt"]),

        fumbles: count_or_zero(line, &["fum_lost"]),

        field_goals: count_or_zero(line, &["fgm", "fg"]),
        extra_points: count_or_zero(line, &["xpm"]),
        field_goals_0_39: count_or_zero(line, &["fgm_0_19"])
            .saturating_add(count_or_zero(line, &["fgm_20_29"]))
            .saturating_add(count_or_zero(line, &["fgm_30_39"])),
        field_goals_40_49: count_or_zero(line, &["fgm_40_49"]),
        // `fgm_50p` already counts the 60+ makes.
        field_goals_50_59: count(line, &["fgm_50_59"]).unwrap_or_else(|| {
            count_or_zero(line, &["fgm_50p"]).saturating_sub(count_or_zero(line, &["fgm_60p"]))
        }),
        field_goals_60_plus: count_or_zero(line, &["fgm_60p"]),
        missed_extra_points: count_or_zero(line, &["xpmiss"]),
        missed_field_goals: count_or_zero(line, &["fgmiss"]),

        defense_points_allowed: count(line, &["pts_allow"]),
        defense_sacks: count_or_zero(line, &["def_sack", "sack"]),
        defense_interceptions: count_or_zero(line, &["def_int", "int"]),
        defense_fumble_recoveries: count_or_zero(line, &["def_fum_rec", "fum_rec"]),
        defense_safeties: count_or_zero(line, &["def_safe", "safe"]),
        defense_tds: count_or_zero(line, &["def_td"]),
    }
}

/// Build the stats-by-player map for `player_ids` from a week's payload.
///
/// Players with no line that week are left out, which the aggregator
/// scores as zero. A payload that is not an object yields an empty map.
///
/// # Examples
///
/// ```rust
/// use gridiron_score::sleeper::map_weekly_stats;
/// use serde_json::json;
///
/// let week = json!({
///     "4984": {"pass_yd": 250.0, "pass_td": 1.0},
///     "BUF": {"pts_allow": 0.0, "sack": 4.0}
/// });
/// let stats = map_weekly_stats(&week, ["4984", "BUF", "6794"]);
/// assert_eq!(stats.len(), 2);
/// assert_eq!(stats["BUF"].defense_points_allowed, Some(0));
/// assert!(!stats.contains_key("6794"));
/// ```
pub fn map_weekly_stats<'a, I>(week: &Value, player_ids: I) -> HashMap<String, PlayerStats>
where
    I: IntoIterator<Item = &'a str>,
{
    let Some(lines) = week.as_object() else {
        warn!("weekly stats payload is not an object; treating every player as absent");
        return HashMap::new();
    };

    let mut mapped = HashMap::new();
    for id in player_ids {
        match lines.get(id).and_then(Value::as_object) {
            Some(line) => {
                mapped.insert(id.to_string(), map_stat_line(line));
            }
            None => debug!(player_id = id, "no stat line this week"),
        }
    }
    mapped
}
