//! Storage port consumed by the engine.
//!
//! Persistence lives outside this crate (the production backend is a
//! relational store behind the API layer); the engine only talks to this
//! narrow interface. Implementations own their isolation: each
//! generation's inserts are scoped to one team, no cross-team locking is
//! expected from callers.

use crate::error::StorageError;
use crate::models::lineup::{BattingOrder, BowlingRotation};
use crate::models::player::{Player, TeamId};

pub mod memory;

pub use memory::MemoryStore;

pub trait SquadStore: Send + Sync {
    /// Bulk insert of one team's generated squad. All-or-nothing: on
    /// error nothing of the squad may remain visible.
    fn insert_players(&self, team_id: TeamId, players: &[Player]) -> Result<(), StorageError>;

    /// How many persisted players (across all teams) carry this exact
    /// name. Used for live uniqueness checks.
    fn count_players_named(&self, name: &str) -> Result<u64, StorageError>;

    fn load_squad(&self, team_id: TeamId) -> Result<Vec<Player>, StorageError>;

    /// Wholesale overwrite of the team's batting order.
    fn save_batting_order(&self, team_id: TeamId, order: &BattingOrder)
        -> Result<(), StorageError>;

    /// Wholesale overwrite of the team's bowling rotation.
    fn save_bowling_rotation(
        &self,
        team_id: TeamId,
        rotation: &BowlingRotation,
    ) -> Result<(), StorageError>;
}
