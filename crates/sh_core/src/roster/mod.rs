//! Roster generation: stat models and the squad generator.

pub mod generator;
pub mod stat_model;

pub use generator::SquadGenerator;
pub use stat_model::{
    PerformanceModel, SportVariant, StatModel, TechnicalModel, CRICKET_ROSTER, FOOTBALL_ROSTER,
};
