//! Per-player weekly statistics.
//!
//! `PlayerStats` is one wide record covering every position. Any field a
//! stats source leaves out is zero, so scoring never branches on
//! missing data. The one exception is `defense_points_allowed`, which is
//! optional: a team defense with no reported score takes no tier bonus
//! or penalty, while an explicit `0` is a shutout.

use serde::{Deserialize, Serialize};

/// Counters relevant to fantasy scoring for a single player-week.
///
/// Wire names are camelCase (`passingYards`, `passingTDs`, `passing2PT`, ...).
///
/// # Examples
///
/// ```rust
/// use gridiron_score::PlayerStats;
///
/// let stats: PlayerStats =
///     serde_json::from_str(r#"{"passingYards": 300, "passingTDs": 3}"#).unwrap();
/// assert_eq!(stats.passing_yards, 300);
/// assert_eq!(stats.passing_tds, 3);
/// assert_eq!(stats.interceptions, 0);
/// assert_eq!(stats.defense_points_allowed, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    // Passing
    #[serde(rename = "passingYards")]
    pub passing_yards: u32,
    #[serde(rename = "passingTDs")]
    pub passing_tds: u32,
    pub interceptions: u32,
    #[serde(rename = "passing2PT")]
    pub passing_2pt: u32,

    // Rushing
    #[serde(rename = "rushingYards")]
    pub rushing_yards: u32,
    #[serde(rename = "rushingTDs")]
    pub rushing_tds: u32,
    #[serde(rename = "rushing2PT")]
    pub rushing_2pt: u32,

    // Receiving
    pub receptions: u32,
    #[serde(rename = "receivingYards")]
    pub receiving_yards: u32,
    #[serde(rename = "receivingTDs")]
    pub receiving_tds: u32,
    #[serde(rename = "receiving2PT")]
    pub receiving_2pt: u32,

    /// Fumbles lost.
    pub fumbles: u32,

    // Kicking
    /// Field goals made, all distances.
    #[serde(rename = "fieldGoals")]
    pub field_goals: u32,
    #[serde(rename = "extraPoints")]
    pub extra_points: u32,
    #[serde(rename = "fieldGoals0_39")]
    pub field_goals_0_39: u32,
    #[serde(rename = "fieldGoals40_49")]
    pub field_goals_40_49: u32,
    #[serde(rename = "fieldGoals50_59")]
    pub field_goals_50_59: u32,
    #[serde(rename = "fieldGoals60Plus")]
    pub field_goals_60_plus: u32,
    #[serde(rename = "missedExtraPoints")]
    pub missed_extra_points: u32,
    #[serde(rename = "missedFieldGoals")]
    pub missed_field_goals: u32,

    // Defense / special teams
    #[serde(rename = "defensePointsAllowed", skip_serializing_if = "Option::is_none")]
    pub defense_points_allowed: Option<u32>,
    #[serde(rename = "defenseSacks")]
    pub defense_sacks: u32,
    #[serde(rename = "defenseInterceptions")]
    pub defense_interceptions: u32,
    #[serde(rename = "defenseFumbleRecoveries")]
    pub defense_fumble_recoveries: u32,
    #[serde(rename = "defenseSafeties")]
    pub defense_safeties: u32,
    #[serde(rename = "defenseTDs")]
    pub defense_tds: u32,
}

impl PlayerStats {
    /// Create an all-zero stat line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Field goals made with a known distance.
    pub fn bucketed_field_goals(&self) -> u32 {
        self.field_goals_0_39
            .saturating_add(self.field_goals_40_49)
            .saturating_add(self.field_goals_50_59)
            .saturating_add(self.field_goals_60_plus)
    }

    /// Made field goals, whichever of the aggregate or the distance
    /// buckets reports more.
    pub fn made_field_goals(&self) -> u32 {
        self.field_goals.max(self.bucketed_field_goals())
    }

    /// Made field goals the source only reported in aggregate.
    pub fn unbucketed_field_goals(&self) -> u32 {
        self.field_goals.saturating_sub(self.bucketed_field_goals())
    }
}
