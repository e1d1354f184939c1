//! Team score aggregation.
//!
//! A roster is an ordered list of `(player id, position tag)` pairs. Every
//! entry appears in the result: players with no stats or an unknown
//! position contribute 0.0. Each player's score is rounded to a tenth
//! first, then the rounded scores are summed and the total rounded again,
//! so the total always equals the sum of the displayed per-player points.

use crate::calculator::compute_points;
use crate::numeric::sum_rounded;
use crate::position::Position;
use crate::rules::ScoringRuleSet;
use crate::stats::PlayerStats;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::{debug, warn};

/// Anything that can hand out a player's stats for the week.
///
/// Absence means "no stats": bye week, no game played, unknown player.
/// The engine does not tell these apart.
pub trait StatsLookup {
    fn stats_for(&self, player_id: &str) -> Option<&PlayerStats>;
}

impl StatsLookup for HashMap<String, PlayerStats> {
    fn stats_for(&self, player_id: &str) -> Option<&PlayerStats> {
        self.get(player_id)
    }
}

impl StatsLookup for BTreeMap<String, PlayerStats> {
    fn stats_for(&self, player_id: &str) -> Option<&PlayerStats> {
        self.get(player_id)
    }
}

/// One roster slot as supplied by the roster source.
///
/// The position is kept as the raw tag; it is parsed during aggregation
/// so a bad tag zeroes one player instead of failing the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub player_id: String,
    pub position: String,
}

impl RosterEntry {
    pub fn new(player_id: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            position: position.into(),
        }
    }

    pub fn with_position(player_id: impl Into<String>, position: Position) -> Self {
        Self::new(player_id, position.as_str())
    }
}

/// Team total plus each player's rounded contribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamScoreResult {
    pub total_points: f64,
    pub per_player_points: BTreeMap<String, f64>,
    /// Players scored as zero because their position tag was not recognized.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unknown_positions: Vec<String>,
    /// Players scored as zero because no stats were supplied.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_stats: Vec<String>,
}

impl TeamScoreResult {
    /// Compare this team's total against an opponent's.
    pub fn versus(&self, opponent: &TeamScoreResult) -> Outcome {
        decide(self.total_points, opponent.total_points)
    }
}

/// Fold a roster into a team score.
///
/// # Examples
///
/// ```rust
/// use gridiron_score::{aggregate, PlayerStats, RosterEntry, ScoringRuleSet};
/// use std::collections::HashMap;
///
/// let roster = vec![
///     RosterEntry::new("josh-allen", "QB"),
///     RosterEntry::new("on-bye", "WR"),
/// ];
/// let mut stats = HashMap::new();
/// stats.insert(
///     "josh-allen".to_string(),
///     PlayerStats { passing_yards: 300, passing_tds: 3, interceptions: 1, rushing_yards: 20, ..PlayerStats::default() },
/// );
///
/// let result = aggregate(&roster, &stats, &ScoringRuleSet::default());
/// assert_eq!(result.total_points, 24.0);
/// assert_eq!(result.per_player_points["on-bye"], 0.0);
/// assert_eq!(result.missing_stats, ["on-bye"]);
/// ```
pub fn aggregate<S>(roster: &[RosterEntry], stats: &S, rules: &ScoringRuleSet) -> TeamScoreResult
where
    S: StatsLookup + ?Sized,
{
    let mut result = TeamScoreResult::default();

    for entry in roster {
        if result.per_player_points.contains_key(&entry.player_id) {
            warn!(player_id = %entry.player_id, "player listed twice on roster; scoring once");
            continue;
        }

        let points = match entry.position.parse::<Position>() {
            Err(e) => {
                warn!(player_id = %entry.player_id, "{}; scoring as zero", e);
                result.unknown_positions.push(entry.player_id.clone());
                0.0
            }
            Ok(position) => match stats.stats_for(&entry.player_id) {
                Some(player_stats) => {
                    let points = compute_points(player_stats, position, rules);
                    debug!(player_id = %entry.player_id, %position, points, "scored player");
                    points
                }
                None => {
                    debug!(player_id = %entry.player_id, %position, "no stats available; scoring as zero");
                    result.missing_stats.push(entry.player_id.clone());
                    0.0
                }
            },
        };

        result.per_player_points.insert(entry.player_id.clone(), points);
    }

    result.total_points = sum_rounded(result.per_player_points.values().copied());
    debug!(
        players = result.per_player_points.len(),
        total = result.total_points,
        system = %rules.system(),
        "team total"
    );
    result
}

/// Result of comparing two team totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Home,
    Away,
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Home => "home",
            Outcome::Away => "away",
            Outcome::Tie => "tie",
        })
    }
}

/// Pick the winner of two rounded team totals.
///
/// # Examples
///
/// ```rust
/// use gridiron_score::{decide, Outcome};
///
/// assert_eq!(decide(24.0, 20.0), Outcome::Home);
/// assert_eq!(decide(20.0, 24.0), Outcome::Away);
/// assert_eq!(decide(20.0, 20.0), Outcome::Tie);
/// ```
pub fn decide(home_total: f64, away_total: f64) -> Outcome {
    match home_total.partial_cmp(&away_total) {
        Some(Ordering::Greater) => Outcome::Home,
        Some(Ordering::Less) => Outcome::Away,
        _ => Outcome::Tie,
    }
}
