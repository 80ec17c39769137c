//! Domain models: players, squads, and lineup orders.

pub mod lineup;
pub mod player;
pub mod squad;

pub use lineup::{BattingOrder, BowlingRotation};
pub use player::{
    PerformanceStats, Player, PlayerAttributes, PlayerId, Position, TeamId, TechnicalStats,
};
pub use squad::{PositionGroup, Squad, SquadSummary};
