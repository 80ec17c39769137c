//! Player model shared by both sport variants.
//!
//! A player carries identity (id, name, position, team), a small set of
//! sub-stats specific to its sport variant, and a cached `overall_rating`
//! derived from those sub-stats. The rating is never edited directly:
//! every mutation goes through [`Player::update_attributes`], which clamps
//! the stats back into their declared intervals and recomputes the rating.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use uuid::Uuid;

use crate::roster::stat_model::SportVariant;

/// Store-assigned team identifier.
pub type TeamId = i64;

/// Engine-assigned player identifier.
///
/// Drawn from the generation RNG so a seeded squad generation is fully
/// reproducible, ids included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        PlayerId(Uuid::from_u128(rng.gen()))
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        PlayerId(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Declared closed intervals for every sub-stat.
///
/// Generation and updates clamp into these; they are never exceeded in
/// persisted data.
pub mod ranges {
    use std::ops::RangeInclusive;

    pub const AGE: RangeInclusive<u8> = 18..=35;
    pub const MORALE: RangeInclusive<u8> = 40..=80;

    // Performance (cricket) stats. Bowling intervals apply to bowling
    // positions only; non-bowlers carry the sentinel pair instead.
    pub const BATTING_AVERAGE: RangeInclusive<f32> = 5.0..=70.0;
    pub const BOWLING_AVERAGE: RangeInclusive<f32> = 15.0..=50.0;
    pub const STRIKE_RATE: RangeInclusive<f32> = 50.0..=250.0;
    pub const ECONOMY_RATE: RangeInclusive<f32> = 3.0..=15.0;
    pub const FIELDING_RATING: RangeInclusive<u8> = 30..=100;
    pub const PERFORMANCE_RATING: RangeInclusive<u8> = 30..=100;

    // Technical (football) stats.
    pub const TECHNICAL_STAT: RangeInclusive<u8> = 1..=100;
    pub const TECHNICAL_RATING: RangeInclusive<u8> = 1..=100;
}

fn clamp_f32(value: f32, range: RangeInclusive<f32>) -> f32 {
    value.clamp(*range.start(), *range.end())
}

fn clamp_u8(value: u8, range: RangeInclusive<u8>) -> u8 {
    value.clamp(*range.start(), *range.end())
}

/// Position within a squad, spanning both sport variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    // Cricket
    #[serde(rename = "Wicket-keeper")]
    WicketKeeper,
    #[serde(rename = "Opening-batsman")]
    OpeningBatsman,
    #[serde(rename = "Middle-order")]
    MiddleOrder,
    #[serde(rename = "Finisher")]
    Finisher,
    #[serde(rename = "Batsman")]
    Batsman,
    #[serde(rename = "All-rounder")]
    AllRounder,
    #[serde(rename = "Fast-bowler")]
    FastBowler,
    #[serde(rename = "Medium-pacer")]
    MediumPacer,
    #[serde(rename = "Spin-bowler")]
    SpinBowler,
    #[serde(rename = "Bowler")]
    Bowler,
    #[serde(rename = "Specialist-fielder")]
    SpecialistFielder,

    // Football
    GK,
    LB,
    CB,
    RB,
    CDM,
    CM,
    CAM,
    LW,
    RW,
    ST,
}

impl Position {
    /// Canonical label as used in the API and the position column.
    pub fn label(&self) -> &'static str {
        match self {
            Position::WicketKeeper => "Wicket-keeper",
            Position::OpeningBatsman => "Opening-batsman",
            Position::MiddleOrder => "Middle-order",
            Position::Finisher => "Finisher",
            Position::Batsman => "Batsman",
            Position::AllRounder => "All-rounder",
            Position::FastBowler => "Fast-bowler",
            Position::MediumPacer => "Medium-pacer",
            Position::SpinBowler => "Spin-bowler",
            Position::Bowler => "Bowler",
            Position::SpecialistFielder => "Specialist-fielder",
            Position::GK => "GK",
            Position::LB => "LB",
            Position::CB => "CB",
            Position::RB => "RB",
            Position::CDM => "CDM",
            Position::CM => "CM",
            Position::CAM => "CAM",
            Position::LW => "LW",
            Position::RW => "RW",
            Position::ST => "ST",
        }
    }

    /// Parse a canonical label (case-sensitive, as stored).
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Wicket-keeper" => Some(Position::WicketKeeper),
            "Opening-batsman" => Some(Position::OpeningBatsman),
            "Middle-order" => Some(Position::MiddleOrder),
            "Finisher" => Some(Position::Finisher),
            "Batsman" => Some(Position::Batsman),
            "All-rounder" => Some(Position::AllRounder),
            "Fast-bowler" => Some(Position::FastBowler),
            "Medium-pacer" => Some(Position::MediumPacer),
            "Spin-bowler" => Some(Position::SpinBowler),
            "Bowler" => Some(Position::Bowler),
            "Specialist-fielder" => Some(Position::SpecialistFielder),
            "GK" => Some(Position::GK),
            "LB" => Some(Position::LB),
            "CB" => Some(Position::CB),
            "RB" => Some(Position::RB),
            "CDM" => Some(Position::CDM),
            "CM" => Some(Position::CM),
            "CAM" => Some(Position::CAM),
            "LW" => Some(Position::LW),
            "RW" => Some(Position::RW),
            "ST" => Some(Position::ST),
            _ => None,
        }
    }

    pub fn is_cricket(&self) -> bool {
        matches!(
            self,
            Position::WicketKeeper
                | Position::OpeningBatsman
                | Position::MiddleOrder
                | Position::Finisher
                | Position::Batsman
                | Position::AllRounder
                | Position::FastBowler
                | Position::MediumPacer
                | Position::SpinBowler
                | Position::Bowler
                | Position::SpecialistFielder
        )
    }

    pub fn is_football(&self) -> bool {
        !self.is_cricket()
    }

    /// Bowling-capable cricket positions. Everything else carries the
    /// sentinel bowling stats.
    pub fn bowls(&self) -> bool {
        matches!(
            self,
            Position::AllRounder
                | Position::FastBowler
                | Position::MediumPacer
                | Position::SpinBowler
                | Position::Bowler
        )
    }

    pub fn belongs_to(&self, variant: SportVariant) -> bool {
        match variant {
            SportVariant::Cricket => self.is_cricket(),
            SportVariant::Football => self.is_football(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cricket sub-stats (5-stat performance model).
///
/// Lower is better for the two bowling stats. Non-bowlers carry
/// `bowling_average = 999.0` and `economy_rate = 0.0` as the
/// "does not bowl" sentinel pair; the sentinel is exempt from clamping
/// and contributes zero bowling score to the rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceStats {
    pub batting_average: f32,
    pub bowling_average: f32,
    pub strike_rate: f32,
    pub economy_rate: f32,
    pub fielding_rating: u8,
}

impl PerformanceStats {
    pub const BOWLING_SENTINEL: f32 = 999.0;

    /// Sentinel-valued stats for a player who does not bowl.
    pub fn non_bowler(batting_average: f32, strike_rate: f32, fielding_rating: u8) -> Self {
        PerformanceStats {
            batting_average,
            bowling_average: Self::BOWLING_SENTINEL,
            strike_rate,
            economy_rate: 0.0,
            fielding_rating,
        }
    }

    pub fn bowls(&self) -> bool {
        self.bowling_average < Self::BOWLING_SENTINEL
    }

    /// Weighted composite rating: batting 40, bowling 30, fielding 20,
    /// plus a strike-rate bonus/penalty term centered on 100.
    pub fn overall_rating(&self) -> u8 {
        let batting_score = self.batting_average / 50.0 * 40.0;
        let bowling_score = if self.bowls() {
            (50.0 - self.bowling_average.min(50.0)) / 50.0 * 30.0
        } else {
            0.0
        };
        let fielding_score = f32::from(self.fielding_rating) / 100.0 * 20.0;
        let strike_rate_bonus = (self.strike_rate - 100.0) / 100.0 * 10.0;

        let total = batting_score + bowling_score + fielding_score + strike_rate_bonus;
        total
            .clamp(
                f32::from(*ranges::PERFORMANCE_RATING.start()),
                f32::from(*ranges::PERFORMANCE_RATING.end()),
            )
            .round() as u8
    }

    /// Clamp every stat into its declared interval. The sentinel pair is
    /// left untouched.
    pub fn clamp_to_ranges(&mut self) {
        self.batting_average = clamp_f32(self.batting_average, ranges::BATTING_AVERAGE);
        self.strike_rate = clamp_f32(self.strike_rate, ranges::STRIKE_RATE);
        self.fielding_rating = clamp_u8(self.fielding_rating, ranges::FIELDING_RATING);
        if self.bowls() {
            self.bowling_average = clamp_f32(self.bowling_average, ranges::BOWLING_AVERAGE);
            self.economy_rate = clamp_f32(self.economy_rate, ranges::ECONOMY_RATE);
        } else {
            self.bowling_average = Self::BOWLING_SENTINEL;
            self.economy_rate = 0.0;
        }
    }
}

/// Football sub-stats (3-stat technical/physical model).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalStats {
    pub speed: u8,
    pub strength: u8,
    pub technique: u8,
}

impl TechnicalStats {
    /// Weighted average: speed 30%, strength 30%, technique 40%.
    pub fn overall_rating(&self) -> u8 {
        let total = f32::from(self.speed) * 0.3
            + f32::from(self.strength) * 0.3
            + f32::from(self.technique) * 0.4;
        (total.round() as u8).clamp(
            *ranges::TECHNICAL_RATING.start(),
            *ranges::TECHNICAL_RATING.end(),
        )
    }

    pub fn clamp_to_ranges(&mut self) {
        self.speed = clamp_u8(self.speed, ranges::TECHNICAL_STAT);
        self.strength = clamp_u8(self.strength, ranges::TECHNICAL_STAT);
        self.technique = clamp_u8(self.technique, ranges::TECHNICAL_STAT);
    }
}

/// Sub-stat family of a player, one variant per sport.
///
/// Serialized untagged so players keep the flat stat columns of the API
/// (`batting_average`, ... for cricket; `speed`, ... for football).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayerAttributes {
    Performance(PerformanceStats),
    Technical(TechnicalStats),
}

impl PlayerAttributes {
    pub fn variant(&self) -> SportVariant {
        match self {
            PlayerAttributes::Performance(_) => SportVariant::Cricket,
            PlayerAttributes::Technical(_) => SportVariant::Football,
        }
    }

    pub fn overall_rating(&self) -> u8 {
        match self {
            PlayerAttributes::Performance(stats) => stats.overall_rating(),
            PlayerAttributes::Technical(stats) => stats.overall_rating(),
        }
    }

    pub fn clamp_to_ranges(&mut self) {
        match self {
            PlayerAttributes::Performance(stats) => stats.clamp_to_ranges(),
            PlayerAttributes::Technical(stats) => stats.clamp_to_ranges(),
        }
    }
}

/// A squad member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub age: u8,
    pub morale: u8,
    #[serde(flatten)]
    pub attributes: PlayerAttributes,
    pub overall_rating: u8,
    pub team_id: TeamId,
}

impl Player {
    /// Mutate the sub-stats and keep the cached rating consistent: the
    /// stats are clamped back into their intervals and the rating is
    /// recomputed in the same call.
    pub fn update_attributes<F>(&mut self, mutate: F)
    where
        F: FnOnce(&mut PlayerAttributes),
    {
        mutate(&mut self.attributes);
        self.attributes.clamp_to_ranges();
        self.overall_rating = self.attributes.overall_rating();
    }
}
