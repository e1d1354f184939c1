//! Fantasy point calculation for a single player.
//!
//! Each position's formula is a fixed, ordered list of terms. A term is
//! either a per-unit stat (`raw * coefficient`) or the defense
//! points-allowed tier, whose value is the tier's bonus. Totals are the
//! exact sum of all terms, rounded once to a tenth at the end.

use crate::numeric::round_to_tenth;
use crate::position::Position;
use crate::rules::{KickerModel, ScoringRuleSet};
use crate::stats::PlayerStats;
use tracing::{trace, warn};

/// One term of a position formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Term {
    pub stat: &'static str,
    pub raw: u32,
    pub coefficient: f64,
    pub points: f64,
}

impl Term {
    fn per_unit(stat: &'static str, raw: u32, coefficient: f64) -> Self {
        Self {
            stat,
            raw,
            coefficient,
            points: f64::from(raw) * coefficient,
        }
    }
}

/// Visit every term of `position`'s formula in its fixed order,
/// including terms whose stat is zero.
pub(crate) fn visit_terms<F>(stats: &PlayerStats, position: Position, rules: &ScoringRuleSet, mut f: F)
where
    F: FnMut(Term),
{
    match position {
        Position::Qb => {
            let qb = rules.quarterback();
            f(Term::per_unit("passingYards", stats.passing_yards, qb.passing_yards));
            f(Term::per_unit("passingTDs", stats.passing_tds, qb.passing_tds));
            f(Term::per_unit("interceptions", stats.interceptions, qb.interceptions));
            f(Term::per_unit("rushingYards", stats.rushing_yards, qb.rushing_yards));
            f(Term::per_unit("rushingTDs", stats.rushing_tds, qb.rushing_tds));
            f(Term::per_unit("fumbles", stats.fumbles, qb.fumbles));
            f(Term::per_unit("passing2PT", stats.passing_2pt, qb.passing_2pt));
        }
        Position::Rb | Position::Wr | Position::Te => {
            let skill = rules.skill();
            f(Term::per_unit("rushingYards", stats.rushing_yards, skill.rushing_yards));
            f(Term::per_unit("rushingTDs", stats.rushing_tds, skill.rushing_tds));
            f(Term::per_unit("receivingYards", stats.receiving_yards, skill.receiving_yards));
            f(Term::per_unit("receivingTDs", stats.receiving_tds, skill.receiving_tds));
            f(Term::per_unit("fumbles", stats.fumbles, skill.fumbles));
            f(Term::per_unit("rushing2PT", stats.rushing_2pt, skill.rushing_2pt));
            f(Term::per_unit("receiving2PT", stats.receiving_2pt, skill.receiving_2pt));
            f(Term::per_unit("receptions", stats.receptions, skill.receptions));
        }
        Position::K => {
            let k = rules.kicker();
            match k.model {
                KickerModel::Flat => {
                    f(Term::per_unit("fieldGoals", stats.made_field_goals(), k.field_goal));
                    f(Term::per_unit("extraPoints", stats.extra_points, k.extra_point));
                }
                KickerModel::Tiered => {
                    f(Term::per_unit("fieldGoals0_39", stats.field_goals_0_39, k.field_goal_0_39));
                    f(Term::per_unit("fieldGoals40_49", stats.field_goals_40_49, k.field_goal_40_49));
                    f(Term::per_unit("fieldGoals50_59", stats.field_goals_50_59, k.field_goal_50_59));
                    f(Term::per_unit("fieldGoals60Plus", stats.field_goals_60_plus, k.field_goal_60_plus));
                    // Makes with no reported distance score as short kicks.
                    f(Term::per_unit("fieldGoals", stats.unbucketed_field_goals(), k.field_goal_0_39));
                    f(Term::per_unit("extraPoints", stats.extra_points, k.extra_point));
                    f(Term::per_unit("missedFieldGoals", stats.missed_field_goals, k.missed_field_goal));
                    f(Term::per_unit("missedExtraPoints", stats.missed_extra_points, k.missed_extra_point));
                }
            }
        }
        Position::Def => {
            let def = rules.defense();
            if let Some(allowed) = stats.defense_points_allowed {
                let tier = def.tier_for(allowed);
                trace!(allowed, tier_min = tier.min, tier_points = tier.points, "points-allowed tier");
                f(Term {
                    stat: "defensePointsAllowed",
                    raw: allowed,
                    coefficient: tier.points,
                    points: tier.points,
                });
            }
            f(Term::per_unit("defenseSacks", stats.defense_sacks, def.sacks));
            f(Term::per_unit("defenseInterceptions", stats.defense_interceptions, def.interceptions));
            f(Term::per_unit(
                "defenseFumbleRecoveries",
                stats.defense_fumble_recoveries,
                def.fumble_recoveries,
            ));
            f(Term::per_unit("defenseSafeties", stats.defense_safeties, def.safeties));
            f(Term::per_unit("defenseTDs", stats.defense_tds, def.defensive_tds));
        }
    }
}

/// Fantasy points for one player-week, rounded to a tenth (half away from zero).
///
/// Pure and deterministic. Negative totals are legitimate.
///
/// # Examples
///
/// ```rust
/// use gridiron_score::{compute_points, PlayerStats, Position, ScoringRuleSet, ScoringSystem};
///
/// let stats = PlayerStats {
///     passing_yards: 300,
///     passing_tds: 3,
///     interceptions: 1,
///     rushing_yards: 20,
///     ..PlayerStats::default()
/// };
/// let rules = ScoringRuleSet::new(ScoringSystem::Ppr);
/// assert_eq!(compute_points(&stats, Position::Qb, &rules), 24.0);
/// ```
pub fn compute_points(stats: &PlayerStats, position: Position, rules: &ScoringRuleSet) -> f64 {
    let mut total = 0.0;
    visit_terms(stats, position, rules, |term| total += term.points);
    round_to_tenth(total)
}

/// Like [`compute_points`], but for a raw position tag from a roster source.
///
/// An unrecognized tag is logged and scores 0.0.
///
/// # Examples
///
/// ```rust
/// use gridiron_score::{compute_points_for_tag, PlayerStats, ScoringRuleSet};
///
/// let stats = PlayerStats { rushing_yards: 55, ..PlayerStats::default() };
/// let rules = ScoringRuleSet::default();
/// assert_eq!(compute_points_for_tag(&stats, "rb", &rules), 5.5);
/// assert_eq!(compute_points_for_tag(&stats, "LB", &rules), 0.0);
/// ```
pub fn compute_points_for_tag(stats: &PlayerStats, tag: &str, rules: &ScoringRuleSet) -> f64 {
    match tag.parse::<Position>() {
        Ok(position) => compute_points(stats, position, rules),
        Err(e) => {
            warn!(tag, "{}; scoring as zero", e);
            0.0
        }
    }
}
