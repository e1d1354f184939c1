//! # gridiron_score - Deterministic Fantasy Football Scoring
//!
//! Scores fantasy football players and rosters from weekly statistics:
//! - **Pure** scoring (same stats, position and rule set → same points)
//! - **Preset** rule sets (PPR, half-PPR, standard; flat or tiered kickers)
//! - **Total** aggregation (every roster entry is scored, missing data is zero)
//! - **Explainable** results via itemized per-stat breakdowns
//!
//! ## Pipeline
//!
//! ```text
//! [PlayerStats] + [Position] + [ScoringRuleSet] → compute_points → per-player points
//! [RosterEntry…] + stats by id                  → aggregate      → TeamScoreResult
//! ```
//!
//! 1. A stats provider supplies a [`PlayerStats`] per player (see [`sleeper`])
//! 2. [`compute_points`] applies the position's formula and rounds to a tenth
//! 3. [`aggregate`] sums the rounded player scores into a team total
//! 4. [`breakdown`] itemizes any single score for display or debugging
//!
//! ## Example
//!
//! ```rust
//! use gridiron_score::*;
//! use std::collections::HashMap;
//!
//! let rules = ScoringRuleSet::from_name("PPR").unwrap();
//!
//! let mut stats = HashMap::new();
//! stats.insert("qb".to_string(), PlayerStats {
//!     passing_yards: 300, passing_tds: 3, interceptions: 1, rushing_yards: 20,
//!     ..PlayerStats::default()
//! });
//! stats.insert("rb".to_string(), PlayerStats {
//!     rushing_yards: 100, rushing_tds: 1, receptions: 5, receiving_yards: 40,
//!     ..PlayerStats::default()
//! });
//!
//! let home = aggregate(&[RosterEntry::new("qb", "QB")], &stats, &rules);
//! let away = aggregate(&[RosterEntry::new("rb", "RB")], &stats, &rules);
//!
//! assert_eq!(home.total_points, 24.0);
//! assert_eq!(away.total_points, 25.0);
//! assert_eq!(home.versus(&away), Outcome::Away);
//! ```
//!
//! ## Modules
//!
//! - [`position`] - Position and scoring-system tags
//! - [`stats`] - Weekly stat record
//! - [`rules`] - Coefficient tables and presets
//! - [`calculator`] - Single-player scoring
//! - [`breakdown`](mod@breakdown) - Itemized explanations
//! - [`aggregate`](mod@aggregate) - Team totals and matchups
//! - [`lineup`] - Roster slots
//! - [`sleeper`] - Sleeper stat-line mapping
//! - [`numeric`] - Rounding
//! - [`error`] - Error types

pub mod aggregate;
pub mod breakdown;
pub mod calculator;
pub mod error;
pub mod lineup;
pub mod numeric;
pub mod position;
pub mod rules;
pub mod sleeper;
pub mod stats;

pub use aggregate::{aggregate, decide, Outcome, RosterEntry, StatsLookup, TeamScoreResult};
pub use breakdown::{breakdown, explain_player, score_player, ScoredPlayer, StatLine};
pub use calculator::{compute_points, compute_points_for_tag};
pub use error::ScoringError;
pub use lineup::{RosterSlot, STANDARD_LINEUP};
pub use position::{Position, ScoringSystem};
pub use rules::{KickerModel, ScoringRuleSet, ScoringSettings};
pub use stats::PlayerStats;
