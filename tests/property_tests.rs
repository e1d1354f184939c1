//! Property-based checks of the scoring laws.

use gridiron_score::numeric::sum_rounded;
use gridiron_score::*;
use proptest::prelude::*;
use std::collections::HashMap;

fn position_strategy() -> impl Strategy<Value = Position> {
    prop::sample::select(Position::ALL.to_vec())
}

fn system_strategy() -> impl Strategy<Value = ScoringSystem> {
    prop::sample::select(ScoringSystem::ALL.to_vec())
}

fn rules_strategy() -> impl Strategy<Value = ScoringRuleSet> {
    (system_strategy(), any::<bool>()).prop_map(|(system, tiered)| {
        let model = if tiered {
            KickerModel::Tiered
        } else {
            KickerModel::Flat
        };
        ScoringRuleSet::with_kicker_model(system, model)
    })
}

fn stats_strategy() -> impl Strategy<Value = PlayerStats> {
    (
        (0u32..600, 0u32..7, 0u32..6, 0u32..3, 0u32..250, 0u32..5, 0u32..3),
        (0u32..20, 0u32..250, 0u32..5, 0u32..3, 0u32..4),
        (0u32..7, 0u32..8, 0u32..3, 0u32..3, 0u32..3, 0u32..3, 0u32..3, 0u32..3),
        (prop::option::of(0u32..70), 0u32..10, 0u32..5, 0u32..5, 0u32..3, 0u32..4),
    )
        .prop_map(|(pass, recv, kick, def)| PlayerStats {
            passing_yards: pass.0,
            passing_tds: pass.1,
            interceptions: pass.2,
            passing_2pt: pass.3,
            rushing_yards: pass.4,
            rushing_tds: pass.5,
            rushing_2pt: pass.6,
            receptions: recv.0,
            receiving_yards: recv.1,
            receiving_tds: recv.2,
            receiving_2pt: recv.3,
            fumbles: recv.4,
            field_goals: kick.0,
            extra_points: kick.1,
            field_goals_0_39: kick.2,
            field_goals_40_49: kick.3,
            field_goals_50_59: kick.4,
            field_goals_60_plus: kick.5,
            missed_extra_points: kick.6,
            missed_field_goals: kick.7,
            defense_points_allowed: def.0,
            defense_sacks: def.1,
            defense_interceptions: def.2,
            defense_fumble_recoveries: def.3,
            defense_safeties: def.4,
            defense_tds: def.5,
        })
}

fn roster_strategy() -> impl Strategy<Value = Vec<(Position, Option<PlayerStats>)>> {
    prop::collection::vec(
        (position_strategy(), prop::option::of(stats_strategy())),
        0..12,
    )
}

proptest! {
    /// Same inputs, same bits.
    #[test]
    fn prop_compute_points_is_deterministic(
        stats in stats_strategy(),
        position in position_strategy(),
        rules in rules_strategy(),
    ) {
        let a = compute_points(&stats, position, &rules);
        let b = compute_points(&stats.clone(), position, &rules.clone());
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    /// Totals are already rounded to a tenth.
    #[test]
    fn prop_points_are_tenths(
        stats in stats_strategy(),
        position in position_strategy(),
        rules in rules_strategy(),
    ) {
        let points = compute_points(&stats, position, &rules);
        prop_assert_eq!(numeric::round_to_tenth(points), points);
    }

    /// Receptions alone score n, n/2 or 0 for RB/WR/TE.
    #[test]
    fn prop_reception_coefficient(
        n in 0u32..200,
        position in prop::sample::select(vec![Position::Rb, Position::Wr, Position::Te]),
    ) {
        let stats = PlayerStats { receptions: n, ..PlayerStats::default() };
        let score = |system| compute_points(&stats, position, &ScoringRuleSet::new(system));
        prop_assert_eq!(score(ScoringSystem::Ppr), f64::from(n));
        prop_assert_eq!(score(ScoringSystem::HalfPpr), f64::from(n) * 0.5);
        prop_assert_eq!(score(ScoringSystem::Standard), 0.0);
    }

    /// The breakdown lists only consumed, non-trivial terms and adds up to the total.
    #[test]
    fn prop_breakdown_agrees_with_total(
        stats in stats_strategy(),
        position in position_strategy(),
        rules in rules_strategy(),
    ) {
        let lines = breakdown(&stats, position, &rules);
        let summed: f64 = lines.iter().map(|l| l.contributed_points).sum();
        prop_assert_eq!(numeric::round_to_tenth(summed), compute_points(&stats, position, &rules));
        for line in &lines {
            prop_assert!(line.raw_value != 0 || line.contributed_points != 0.0);
        }
    }

    /// The team total is the rounded sum of the displayed player scores,
    /// every roster entry is present, and missing players score zero.
    #[test]
    fn prop_aggregate_laws(roster in roster_strategy(), rules in rules_strategy()) {
        let entries: Vec<RosterEntry> = roster
            .iter()
            .enumerate()
            .map(|(i, (position, _))| RosterEntry::with_position(format!("p{}", i), *position))
            .collect();
        let stats: HashMap<String, PlayerStats> = roster
            .iter()
            .enumerate()
            .filter_map(|(i, (_, stats))| stats.clone().map(|s| (format!("p{}", i), s)))
            .collect();

        let result = aggregate(&entries, &stats, &rules);

        prop_assert_eq!(result.per_player_points.len(), entries.len());
        prop_assert_eq!(
            result.total_points,
            sum_rounded(result.per_player_points.values().copied())
        );
        for entry in &entries {
            if !stats.contains_key(&entry.player_id) {
                prop_assert_eq!(result.per_player_points[&entry.player_id], 0.0);
            }
        }
        prop_assert_eq!(result.missing_stats.len(), entries.len() - stats.len());
    }

    /// Reversing the roster does not change the total.
    #[test]
    fn prop_aggregate_is_order_independent(roster in roster_strategy(), rules in rules_strategy()) {
        let entries: Vec<RosterEntry> = roster
            .iter()
            .enumerate()
            .map(|(i, (position, _))| RosterEntry::with_position(format!("p{}", i), *position))
            .collect();
        let stats: HashMap<String, PlayerStats> = roster
            .iter()
            .enumerate()
            .filter_map(|(i, (_, stats))| stats.clone().map(|s| (format!("p{}", i), s)))
            .collect();

        let forward = aggregate(&entries, &stats, &rules);
        let mut reversed_entries = entries.clone();
        reversed_entries.reverse();
        let reversed = aggregate(&reversed_entries, &stats, &rules);

        prop_assert_eq!(forward.total_points.to_bits(), reversed.total_points.to_bits());
        prop_assert_eq!(forward.per_player_points, reversed.per_player_points);
    }
}
