//! Scoring rule sets.
//!
//! A `ScoringRuleSet` is the coefficient table for every position. Rule
//! sets are immutable and only come from named presets: pick a
//! [`ScoringSystem`] (which fixes the reception value) and optionally a
//! [`KickerModel`]. There is no way to edit a coefficient in place.

use crate::error::ScoringError;
use crate::position::ScoringSystem;
use serde::{Deserialize, Serialize};

/// Quarterback coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuarterbackRules {
    pub passing_yards: f64,
    pub passing_tds: f64,
    pub interceptions: f64,
    pub rushing_yards: f64,
    pub rushing_tds: f64,
    pub fumbles: f64,
    pub passing_2pt: f64,
}

/// Coefficients shared by running backs, wide receivers and tight ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkillRules {
    pub rushing_yards: f64,
    pub rushing_tds: f64,
    pub receiving_yards: f64,
    pub receiving_tds: f64,
    pub fumbles: f64,
    pub rushing_2pt: f64,
    pub receiving_2pt: f64,
    /// Selected by the active [`ScoringSystem`].
    pub receptions: f64,
}

/// How made field goals are valued.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KickerModel {
    /// Every made field goal is worth the same, regardless of distance.
    #[default]
    Flat,
    /// Field goals are valued by distance and misses are penalized.
    Tiered,
}

/// Kicker coefficients.
///
/// Under [`KickerModel::Flat`] only `field_goal` and `extra_point` are used.
/// Under [`KickerModel::Tiered`] the distance buckets score instead, and
/// made field goals reported without a distance fall back to
/// `field_goal_0_39`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KickerRules {
    pub model: KickerModel,
    pub extra_point: f64,
    pub field_goal: f64,
    pub field_goal_0_39: f64,
    pub field_goal_40_49: f64,
    pub field_goal_50_59: f64,
    pub field_goal_60_plus: f64,
    pub missed_extra_point: f64,
    pub missed_field_goal: f64,
}

/// One bracket of the points-allowed table. Bounds are inclusive; an
/// open `max` means "and above".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointsAllowedTier {
    pub min: u32,
    pub max: Option<u32>,
    pub points: f64,
}

impl PointsAllowedTier {
    const fn new(min: u32, max: Option<u32>, points: f64) -> Self {
        Self { min, max, points }
    }

    pub fn contains(&self, points_allowed: u32) -> bool {
        points_allowed >= self.min && self.max.map_or(true, |max| points_allowed <= max)
    }
}

/// Points-allowed brackets, evaluated top-down.
pub const POINTS_ALLOWED_TIERS: [PointsAllowedTier; 7] = [
    PointsAllowedTier::new(0, Some(0), 10.0),
    PointsAllowedTier::new(1, Some(6), 7.0),
    PointsAllowedTier::new(7, Some(13), 4.0),
    PointsAllowedTier::new(14, Some(20), 1.0),
    PointsAllowedTier::new(21, Some(27), 0.0),
    PointsAllowedTier::new(28, Some(34), -1.0),
    PointsAllowedTier::new(35, None, -4.0),
];

/// Team defense / special teams coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DefenseRules {
    pub points_allowed_tiers: [PointsAllowedTier; 7],
    pub sacks: f64,
    pub interceptions: f64,
    pub fumble_recoveries: f64,
    pub safeties: f64,
    pub defensive_tds: f64,
}

impl DefenseRules {
    /// The first tier containing `points_allowed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gridiron_score::ScoringRuleSet;
    ///
    /// let rules = ScoringRuleSet::default();
    /// assert_eq!(rules.defense().tier_for(0).points, 10.0);
    /// assert_eq!(rules.defense().tier_for(6).points, 7.0);
    /// assert_eq!(rules.defense().tier_for(7).points, 4.0);
    /// assert_eq!(rules.defense().tier_for(60).points, -4.0);
    /// ```
    pub fn tier_for(&self, points_allowed: u32) -> &PointsAllowedTier {
        self.points_allowed_tiers
            .iter()
            .find(|tier| tier.contains(points_allowed))
            // The last tier is open-ended, so every value lands somewhere.
            .unwrap_or(&self.points_allowed_tiers[self.points_allowed_tiers.len() - 1])
    }
}

/// The full coefficient table for one preset.
///
/// # Examples
///
/// ```rust
/// use gridiron_score::{ScoringRuleSet, ScoringSystem};
///
/// let ppr = ScoringRuleSet::new(ScoringSystem::Ppr);
/// assert_eq!(ppr.skill().receptions, 1.0);
///
/// let standard = ScoringRuleSet::from_name("STANDARD").unwrap();
/// assert_eq!(standard.skill().receptions, 0.0);
///
/// assert!(ScoringRuleSet::from_name("TEP").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringRuleSet {
    system: ScoringSystem,
    quarterback: QuarterbackRules,
    skill: SkillRules,
    kicker: KickerRules,
    defense: DefenseRules,
}

impl ScoringRuleSet {
    /// The preset for `system` with the flat kicker model.
    pub fn new(system: ScoringSystem) -> Self {
        Self::with_kicker_model(system, KickerModel::Flat)
    }

    /// The preset for `system` with the given kicker model.
    pub fn with_kicker_model(system: ScoringSystem, model: KickerModel) -> Self {
        Self {
            system,
            quarterback: QuarterbackRules {
                passing_yards: 0.04,
                passing_tds: 4.0,
                interceptions: -2.0,
                rushing_yards: 0.1,
                rushing_tds: 6.0,
                fumbles: -2.0,
                passing_2pt: 2.0,
            },
            skill: SkillRules {
                rushing_yards: 0.1,
                rushing_tds: 6.0,
                receiving_yards: 0.1,
                receiving_tds: 6.0,
                fumbles: -2.0,
                rushing_2pt: 2.0,
                receiving_2pt: 2.0,
                receptions: system.reception_value(),
            },
            kicker: KickerRules {
                model,
                extra_point: 1.0,
                field_goal: 3.0,
                field_goal_0_39: 3.0,
                field_goal_40_49: 4.0,
                field_goal_50_59: 5.0,
                field_goal_60_plus: 6.0,
                missed_extra_point: -1.0,
                missed_field_goal: -1.0,
            },
            defense: DefenseRules {
                points_allowed_tiers: POINTS_ALLOWED_TIERS,
                sacks: 1.0,
                interceptions: 2.0,
                fumble_recoveries: 2.0,
                safeties: 2.0,
                defensive_tds: 6.0,
            },
        }
    }

    /// Look up a preset by scoring-system name (`"PPR"`, `"HALF_PPR"`, `"STANDARD"`).
    pub fn from_name(name: &str) -> Result<Self, ScoringError> {
        let system: ScoringSystem = name.parse()?;
        Ok(Self::new(system))
    }

    pub fn from_settings(settings: &ScoringSettings) -> Self {
        Self::with_kicker_model(settings.system, settings.kicker)
    }

    pub fn system(&self) -> ScoringSystem {
        self.system
    }

    pub fn quarterback(&self) -> &QuarterbackRules {
        &self.quarterback
    }

    pub fn skill(&self) -> &SkillRules {
        &self.skill
    }

    pub fn kicker(&self) -> &KickerRules {
        &self.kicker
    }

    pub fn defense(&self) -> &DefenseRules {
        &self.defense
    }
}

impl Default for ScoringRuleSet {
    fn default() -> Self {
        Self::new(ScoringSystem::default())
    }
}

/// Serializable preset selection.
///
/// Example JSON:
/// ```json
/// { "system": "HALF_PPR", "kicker": "tiered" }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringSettings {
    pub system: ScoringSystem,
    pub kicker: KickerModel,
}

impl ScoringSettings {
    /// Parse settings from JSON.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gridiron_score::{KickerModel, ScoringSettings, ScoringSystem};
    ///
    /// let settings = ScoringSettings::from_json(r#"{"system": "STANDARD"}"#).unwrap();
    /// assert_eq!(settings.system, ScoringSystem::Standard);
    /// assert_eq!(settings.kicker, KickerModel::Flat);
    ///
    /// assert!(ScoringSettings::from_json(r#"{"system": "DYNASTY"}"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ScoringError> {
        serde_json::from_str(json)
            .map_err(|e| ScoringError::InvalidConfiguration(format!("bad scoring settings: {}", e)))
    }

    pub fn into_rule_set(self) -> ScoringRuleSet {
        ScoringRuleSet::from_settings(&self)
    }
}
