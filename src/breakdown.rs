//! Itemized score breakdowns.
//!
//! A breakdown explains a player's total one stat at a time. It is never
//! used to compute the total; [`compute_points`](crate::compute_points)
//! sums the same formula terms independently.

use crate::calculator::{compute_points, visit_terms};
use crate::position::Position;
use crate::rules::ScoringRuleSet;
use crate::stats::PlayerStats;
use serde::Serialize;
use std::fmt;

/// One stat's contribution to a player's total.
///
/// For `defensePointsAllowed` the coefficient is the selected tier's
/// value and equals `contributed_points`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatLine {
    pub stat_name: &'static str,
    pub raw_value: u32,
    pub coefficient: f64,
    pub contributed_points: f64,
}

impl StatLine {
    /// Human-readable stat name.
    pub fn label(&self) -> &'static str {
        match self.stat_name {
            "passingYards" => "Passing Yards",
            "passingTDs" => "Passing TDs",
            "interceptions" => "Interceptions",
            "passing2PT" => "Passing 2PT",
            "rushingYards" => "Rushing Yards",
            "rushingTDs" => "Rushing TDs",
            "rushing2PT" => "Rushing 2PT",
            "receptions" => "Receptions",
            "receivingYards" => "Receiving Yards",
            "receivingTDs" => "Receiving TDs",
            "receiving2PT" => "Receiving 2PT",
            "fumbles" => "Fumbles Lost",
            "fieldGoals" => "Field Goals",
            "fieldGoals0_39" => "Field Goals 0-39",
            "fieldGoals40_49" => "Field Goals 40-49",
            "fieldGoals50_59" => "Field Goals 50-59",
            "fieldGoals60Plus" => "Field Goals 60+",
            "extraPoints" => "Extra Points",
            "missedFieldGoals" => "Missed Field Goals",
            "missedExtraPoints" => "Missed Extra Points",
            "defensePointsAllowed" => "Points Allowed",
            "defenseSacks" => "Sacks",
            "defenseInterceptions" => "Interceptions",
            "defenseFumbleRecoveries" => "Fumble Recoveries",
            "defenseSafeties" => "Safeties",
            "defenseTDs" => "Defensive TDs",
            other => other,
        }
    }
}

impl fmt::Display for StatLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stat_name == "defensePointsAllowed" {
            write!(
                f,
                "{}: {} allowed -> {:+.1}",
                self.label(),
                self.raw_value,
                self.contributed_points
            )
        } else {
            write!(
                f,
                "{}: {} × {} = {:+.2}",
                self.label(),
                self.raw_value,
                self.coefficient,
                self.contributed_points
            )
        }
    }
}

/// Itemize a player's score, in formula order.
///
/// Includes every term whose stat is non-zero or which contributes
/// points (a reported shutout contributes despite a raw value of 0).
///
/// # Examples
///
/// ```rust
/// use gridiron_score::{breakdown, PlayerStats, Position, ScoringRuleSet, ScoringSystem};
///
/// let stats = PlayerStats {
///     rushing_yards: 100,
///     rushing_tds: 1,
///     receptions: 5,
///     ..PlayerStats::default()
/// };
/// let lines = breakdown(&stats, Position::Rb, &ScoringRuleSet::new(ScoringSystem::Standard));
///
/// let names: Vec<_> = lines.iter().map(|l| l.stat_name).collect();
/// assert_eq!(names, ["rushingYards", "rushingTDs", "receptions"]);
/// assert_eq!(lines[2].contributed_points, 0.0);
/// ```
pub fn breakdown(stats: &PlayerStats, position: Position, rules: &ScoringRuleSet) -> Vec<StatLine> {
    let mut lines = Vec::new();
    visit_terms(stats, position, rules, |term| {
        if term.raw != 0 || term.points != 0.0 {
            lines.push(StatLine {
                stat_name: term.stat,
                raw_value: term.raw,
                coefficient: term.coefficient,
                contributed_points: term.points,
            });
        }
    });
    lines
}

/// A scored player, created per simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPlayer {
    pub player_id: String,
    pub position: Position,
    pub points: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<StatLine>>,
}

impl fmt::Display for ScoredPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {:.1}", self.player_id, self.position, self.points)?;
        if let Some(lines) = &self.breakdown {
            for line in lines {
                write!(f, "\n  {}", line)?;
            }
        }
        Ok(())
    }
}

/// Score one player without a breakdown.
pub fn score_player(
    player_id: impl Into<String>,
    stats: &PlayerStats,
    position: Position,
    rules: &ScoringRuleSet,
) -> ScoredPlayer {
    ScoredPlayer {
        player_id: player_id.into(),
        position,
        points: compute_points(stats, position, rules),
        breakdown: None,
    }
}

/// Score one player and attach the itemized breakdown.
///
/// # Examples
///
/// ```rust
/// use gridiron_score::{explain_player, PlayerStats, Position, ScoringRuleSet};
///
/// let stats = PlayerStats {
///     defense_points_allowed: Some(7),
///     defense_sacks: 3,
///     defense_interceptions: 1,
///     ..PlayerStats::default()
/// };
/// let scored = explain_player("BUF Defense", &stats, Position::Def, &ScoringRuleSet::default());
/// assert_eq!(scored.points, 9.0);
/// assert_eq!(scored.breakdown.unwrap().len(), 3);
/// ```
pub fn explain_player(
    player_id: impl Into<String>,
    stats: &PlayerStats,
    position: Position,
    rules: &ScoringRuleSet,
) -> ScoredPlayer {
    let mut scored = score_player(player_id, stats, position, rules);
    scored.breakdown = Some(breakdown(stats, position, rules));
    scored
}
