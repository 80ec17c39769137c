//! Pluggable per-sport stat models.
//!
//! A [`StatModel`] is selected once at squad-generation time and fixed for
//! the team: it declares the position roster and draws position-flavoured
//! attributes. The rating formula lives with the attribute family itself
//! (see `models::player`), so two incompatible formulas coexist without
//! branching inside the generator.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::player::{
    ranges, PerformanceStats, PlayerAttributes, Position, TechnicalStats,
};

/// Sport variant of a team, chosen at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SportVariant {
    Cricket,
    Football,
}

impl SportVariant {
    pub fn label(&self) -> &'static str {
        match self {
            SportVariant::Cricket => "cricket",
            SportVariant::Football => "football",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "cricket" => Some(SportVariant::Cricket),
            "football" => Some(SportVariant::Football),
            _ => None,
        }
    }

    pub fn stat_model(&self) -> &'static dyn StatModel {
        match self {
            SportVariant::Cricket => &PerformanceModel,
            SportVariant::Football => &TechnicalModel,
        }
    }
}

impl fmt::Display for SportVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Strategy interface for one sport variant.
pub trait StatModel: Send + Sync {
    fn variant(&self) -> SportVariant;

    /// Position roster in declared generation order; headcounts sum to the
    /// squad size.
    fn position_roster(&self) -> &'static [(Position, u8)];

    /// Draw position-flavoured attributes: uniform baselines, additive
    /// position bonuses, then a clamp into the declared intervals.
    fn generate_attributes(&self, position: Position, rng: &mut dyn RngCore) -> PlayerAttributes;

    fn squad_size(&self) -> usize {
        self.position_roster()
            .iter()
            .map(|(_, count)| usize::from(*count))
            .sum()
    }
}

/// 15-player cricket roster. Satisfies the squad distribution rules:
/// at least one keeper, at least four specialist batsmen, at least four
/// bowling options.
pub const CRICKET_ROSTER: [(Position, u8); 8] = [
    (Position::WicketKeeper, 1),
    (Position::OpeningBatsman, 2),
    (Position::MiddleOrder, 3),
    (Position::Finisher, 1),
    (Position::AllRounder, 2),
    (Position::FastBowler, 3),
    (Position::SpinBowler, 2),
    (Position::MediumPacer, 1),
];

/// 11-player football roster.
pub const FOOTBALL_ROSTER: [(Position, u8); 10] = [
    (Position::GK, 1),
    (Position::LB, 1),
    (Position::CB, 2),
    (Position::RB, 1),
    (Position::CDM, 1),
    (Position::CM, 2),
    (Position::CAM, 1),
    (Position::LW, 1),
    (Position::RW, 1),
    (Position::ST, 1),
];

/// Cricket 5-stat performance model.
pub struct PerformanceModel;

impl StatModel for PerformanceModel {
    fn variant(&self) -> SportVariant {
        SportVariant::Cricket
    }

    fn position_roster(&self) -> &'static [(Position, u8)] {
        &CRICKET_ROSTER
    }

    fn generate_attributes(&self, position: Position, rng: &mut dyn RngCore) -> PlayerAttributes {
        let mut stats = if position.bowls() {
            PerformanceStats {
                batting_average: rng.gen_range(15.0..=35.0),
                bowling_average: rng.gen_range(25.0..=45.0),
                strike_rate: rng.gen_range(80.0..=160.0),
                economy_rate: rng.gen_range(6.0..=12.0),
                fielding_rating: rng.gen_range(40..=80),
            }
        } else {
            PerformanceStats::non_bowler(
                rng.gen_range(15.0..=35.0),
                rng.gen_range(80.0..=160.0),
                rng.gen_range(40..=80),
            )
        };

        // Positional bonuses. Bowling and economy improve downwards, so
        // their bonuses subtract.
        match position {
            Position::WicketKeeper => {
                stats.batting_average += rng.gen_range(5.0..=10.0);
                stats.fielding_rating = stats.fielding_rating.saturating_add(rng.gen_range(10..=20));
            }
            Position::OpeningBatsman => {
                stats.batting_average += rng.gen_range(10.0..=20.0);
                stats.strike_rate += rng.gen_range(5.0..=15.0);
            }
            Position::MiddleOrder => {
                stats.batting_average += rng.gen_range(5.0..=15.0);
                stats.strike_rate += rng.gen_range(5.0..=15.0);
            }
            Position::Finisher => {
                stats.strike_rate += rng.gen_range(20.0..=40.0);
                stats.batting_average += rng.gen_range(0.0..=10.0);
            }
            Position::Batsman => {
                stats.batting_average += rng.gen_range(5.0..=15.0);
            }
            Position::AllRounder => {
                stats.batting_average += rng.gen_range(5.0..=15.0);
                stats.bowling_average -= rng.gen_range(3.0..=8.0);
                stats.economy_rate -= rng.gen_range(0.0..=2.0);
            }
            Position::FastBowler => {
                stats.bowling_average -= rng.gen_range(5.0..=12.0);
                stats.economy_rate -= rng.gen_range(1.0..=3.0);
            }
            Position::SpinBowler => {
                stats.bowling_average -= rng.gen_range(5.0..=12.0);
                stats.economy_rate -= rng.gen_range(2.0..=4.0);
            }
            Position::MediumPacer => {
                stats.bowling_average -= rng.gen_range(3.0..=8.0);
                stats.economy_rate -= rng.gen_range(1.0..=2.0);
            }
            Position::Bowler => {
                stats.bowling_average -= rng.gen_range(5.0..=10.0);
                stats.economy_rate -= rng.gen_range(1.0..=3.0);
            }
            Position::SpecialistFielder => {
                stats.fielding_rating = stats.fielding_rating.saturating_add(rng.gen_range(15..=25));
            }
            _ => {}
        }

        stats.clamp_to_ranges();
        PlayerAttributes::Performance(stats)
    }
}

/// Football 3-stat technical/physical model.
pub struct TechnicalModel;

impl StatModel for TechnicalModel {
    fn variant(&self) -> SportVariant {
        SportVariant::Football
    }

    fn position_roster(&self) -> &'static [(Position, u8)] {
        &FOOTBALL_ROSTER
    }

    fn generate_attributes(&self, position: Position, rng: &mut dyn RngCore) -> PlayerAttributes {
        let mut stats = TechnicalStats {
            speed: rng.gen_range(30..=70),
            strength: rng.gen_range(30..=70),
            technique: rng.gen_range(30..=70),
        };

        match position {
            Position::GK => {
                stats.technique = stats.technique.saturating_add(rng.gen_range(10..=20));
                stats.strength = stats.strength.saturating_add(rng.gen_range(5..=15));
            }
            Position::LB | Position::RB => {
                stats.speed = stats.speed.saturating_add(rng.gen_range(10..=20));
                stats.technique = stats.technique.saturating_add(rng.gen_range(5..=15));
            }
            Position::CB => {
                stats.strength = stats.strength.saturating_add(rng.gen_range(10..=20));
                stats.technique = stats.technique.saturating_add(rng.gen_range(5..=10));
            }
            Position::CDM => {
                stats.strength = stats.strength.saturating_add(rng.gen_range(5..=15));
                stats.technique = stats.technique.saturating_add(rng.gen_range(5..=15));
            }
            Position::CM => {
                stats.technique = stats.technique.saturating_add(rng.gen_range(10..=20));
                stats.speed = stats.speed.saturating_add(rng.gen_range(5..=10));
            }
            Position::CAM => {
                stats.technique = stats.technique.saturating_add(rng.gen_range(15..=25));
                stats.speed = stats.speed.saturating_add(rng.gen_range(5..=10));
            }
            Position::LW | Position::RW => {
                stats.speed = stats.speed.saturating_add(rng.gen_range(15..=25));
                stats.technique = stats.technique.saturating_add(rng.gen_range(10..=15));
            }
            Position::ST => {
                stats.technique = stats.technique.saturating_add(rng.gen_range(10..=20));
                stats.strength = stats.strength.saturating_add(rng.gen_range(5..=15));
            }
            _ => {}
        }

        stats.clamp_to_ranges();
        PlayerAttributes::Technical(stats)
    }
}

/// Shared draws that do not depend on the stat model.
pub fn draw_age(rng: &mut dyn RngCore) -> u8 {
    rng.gen_range(ranges::AGE)
}

pub fn draw_morale(rng: &mut dyn RngCore) -> u8 {
    rng.gen_range(ranges::MORALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rosters_sum_to_declared_squad_sizes() {
        assert_eq!(PerformanceModel.squad_size(), 15, "cricket squad is 15 players");
        assert_eq!(TechnicalModel.squad_size(), 11, "football squad is 11 players");
    }

    #[test]
    fn cricket_roster_meets_distribution_rules() {
        let count = |position: Position| {
            CRICKET_ROSTER
                .iter()
                .find(|(p, _)| *p == position)
                .map(|(_, c)| usize::from(*c))
                .unwrap_or(0)
        };

        assert!(count(Position::WicketKeeper) >= 1, "at least one keeper");

        let batsmen = count(Position::OpeningBatsman)
            + count(Position::MiddleOrder)
            + count(Position::Finisher);
        assert!(batsmen >= 4, "at least four specialist batsmen, got {}", batsmen);

        let bowlers = count(Position::FastBowler)
            + count(Position::SpinBowler)
            + count(Position::AllRounder);
        assert!(bowlers >= 4, "at least four bowling options, got {}", bowlers);
    }

    #[test]
    fn cricket_stats_stay_inside_declared_intervals() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            for (position, _) in CRICKET_ROSTER {
                let attrs = PerformanceModel.generate_attributes(position, &mut rng);
                let PlayerAttributes::Performance(stats) = attrs else {
                    panic!("cricket model must produce performance stats");
                };
                assert!(
                    ranges::BATTING_AVERAGE.contains(&stats.batting_average),
                    "batting average {} out of range for {:?}",
                    stats.batting_average,
                    position
                );
                assert!(
                    ranges::STRIKE_RATE.contains(&stats.strike_rate),
                    "strike rate {} out of range for {:?}",
                    stats.strike_rate,
                    position
                );
                assert!(
                    ranges::FIELDING_RATING.contains(&stats.fielding_rating),
                    "fielding {} out of range for {:?}",
                    stats.fielding_rating,
                    position
                );
                if position.bowls() {
                    assert!(
                        ranges::BOWLING_AVERAGE.contains(&stats.bowling_average),
                        "bowling average {} out of range for {:?}",
                        stats.bowling_average,
                        position
                    );
                    assert!(
                        ranges::ECONOMY_RATE.contains(&stats.economy_rate),
                        "economy {} out of range for {:?}",
                        stats.economy_rate,
                        position
                    );
                } else {
                    assert_eq!(stats.bowling_average, PerformanceStats::BOWLING_SENTINEL);
                    assert_eq!(stats.economy_rate, 0.0);
                }
            }
        }
    }

    #[test]
    fn football_stats_stay_inside_declared_intervals() {
        let mut rng = StdRng::seed_from_u64(43);
        for _ in 0..200 {
            for (position, _) in FOOTBALL_ROSTER {
                let attrs = TechnicalModel.generate_attributes(position, &mut rng);
                let PlayerAttributes::Technical(stats) = attrs else {
                    panic!("football model must produce technical stats");
                };
                for value in [stats.speed, stats.strength, stats.technique] {
                    assert!(
                        ranges::TECHNICAL_STAT.contains(&value),
                        "stat {} out of range for {:?}",
                        value,
                        position
                    );
                }
            }
        }
    }

    #[test]
    fn ratings_land_inside_declared_intervals() {
        let mut rng = StdRng::seed_from_u64(44);
        for _ in 0..200 {
            for (position, _) in CRICKET_ROSTER {
                let rating = PerformanceModel
                    .generate_attributes(position, &mut rng)
                    .overall_rating();
                assert!(
                    ranges::PERFORMANCE_RATING.contains(&rating),
                    "rating {} out of range for {:?}",
                    rating,
                    position
                );
            }
            for (position, _) in FOOTBALL_ROSTER {
                let rating = TechnicalModel
                    .generate_attributes(position, &mut rng)
                    .overall_rating();
                assert!(
                    ranges::TECHNICAL_RATING.contains(&rating),
                    "rating {} out of range for {:?}",
                    rating,
                    position
                );
            }
        }
    }

    #[test]
    fn variant_resolves_to_matching_model() {
        assert_eq!(SportVariant::Cricket.stat_model().variant(), SportVariant::Cricket);
        assert_eq!(SportVariant::Football.stat_model().variant(), SportVariant::Football);
        assert_eq!(SportVariant::parse("cricket"), Some(SportVariant::Cricket));
        assert_eq!(SportVariant::parse("rugby"), None);
    }

    proptest! {
        #[test]
        fn performance_rating_bounded_for_any_in_range_stats(
            batting_average in 5.0f32..=70.0,
            bowling_average in 15.0f32..=50.0,
            strike_rate in 50.0f32..=250.0,
            economy_rate in 3.0f32..=15.0,
            fielding_rating in 30u8..=100,
        ) {
            let stats = PerformanceStats {
                batting_average,
                bowling_average,
                strike_rate,
                economy_rate,
                fielding_rating,
            };
            let rating = stats.overall_rating();
            prop_assert!(ranges::PERFORMANCE_RATING.contains(&rating));
            prop_assert_eq!(rating, stats.overall_rating(), "recomputation must be stable");
        }

        #[test]
        fn technical_rating_bounded_for_any_in_range_stats(
            speed in 1u8..=100,
            strength in 1u8..=100,
            technique in 1u8..=100,
        ) {
            let stats = TechnicalStats { speed, strength, technique };
            let rating = stats.overall_rating();
            prop_assert!(ranges::TECHNICAL_RATING.contains(&rating));
        }
    }
}
