//! In-memory reference store.
//!
//! Backs the CLI and the test suite; not a production backend.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::StorageError;
use crate::models::lineup::{BattingOrder, BowlingRotation};
use crate::models::player::{Player, TeamId};

use super::SquadStore;

#[derive(Debug, Default)]
struct MemoryInner {
    squads: HashMap<TeamId, Vec<Player>>,
    batting_orders: HashMap<TeamId, BattingOrder>,
    bowling_rotations: HashMap<TeamId, BowlingRotation>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryInner>, StorageError> {
        self.inner
            .lock()
            .map_err(|_| StorageError::Unavailable("store mutex poisoned".to_string()))
    }

    /// Stored batting order, if one was ever saved.
    pub fn batting_order(&self, team_id: TeamId) -> Option<BattingOrder> {
        self.lock().ok()?.batting_orders.get(&team_id).cloned()
    }

    /// Stored bowling rotation, if one was ever saved.
    pub fn bowling_rotation(&self, team_id: TeamId) -> Option<BowlingRotation> {
        self.lock().ok()?.bowling_rotations.get(&team_id).cloned()
    }
}

impl SquadStore for MemoryStore {
    fn insert_players(&self, team_id: TeamId, players: &[Player]) -> Result<(), StorageError> {
        let mut inner = self.lock()?;
        inner
            .squads
            .entry(team_id)
            .or_default()
            .extend_from_slice(players);
        Ok(())
    }

    fn count_players_named(&self, name: &str) -> Result<u64, StorageError> {
        let inner = self.lock()?;
        let count = inner
            .squads
            .values()
            .flatten()
            .filter(|p| p.name == name)
            .count();
        Ok(count as u64)
    }

    fn load_squad(&self, team_id: TeamId) -> Result<Vec<Player>, StorageError> {
        let inner = self.lock()?;
        Ok(inner.squads.get(&team_id).cloned().unwrap_or_default())
    }

    fn save_batting_order(
        &self,
        team_id: TeamId,
        order: &BattingOrder,
    ) -> Result<(), StorageError> {
        let mut inner = self.lock()?;
        inner.batting_orders.insert(team_id, order.clone());
        Ok(())
    }

    fn save_bowling_rotation(
        &self,
        team_id: TeamId,
        rotation: &BowlingRotation,
    ) -> Result<(), StorageError> {
        let mut inner = self.lock()?;
        inner.bowling_rotations.insert(team_id, rotation.clone());
        Ok(())
    }
}
