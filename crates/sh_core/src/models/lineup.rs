//! Team-scoped tactical selections over the squad.
//!
//! Both orders are absent until first saved and overwritten wholesale on
//! every save; there are no incremental edits.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Ordered batting lineup, exactly eleven starters when valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BattingOrder {
    batters: Vec<PlayerId>,
}

impl BattingOrder {
    pub fn new(batters: Vec<PlayerId>) -> Self {
        BattingOrder { batters }
    }

    pub fn len(&self) -> usize {
        self.batters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerId> {
        self.batters.iter()
    }

    pub fn batters(&self) -> &[PlayerId] {
        &self.batters
    }
}

impl From<Vec<PlayerId>> for BattingOrder {
    fn from(batters: Vec<PlayerId>) -> Self {
        BattingOrder::new(batters)
    }
}

/// Over-by-over bowling assignment, exactly twenty slots when valid.
/// `None` marks an unassigned over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BowlingRotation {
    overs: Vec<Option<PlayerId>>,
}

impl BowlingRotation {
    pub fn new(overs: Vec<Option<PlayerId>>) -> Self {
        BowlingRotation { overs }
    }

    pub fn len(&self) -> usize {
        self.overs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overs.is_empty()
    }

    pub fn slots(&self) -> &[Option<PlayerId>] {
        &self.overs
    }
}

impl From<Vec<Option<PlayerId>>> for BowlingRotation {
    fn from(overs: Vec<Option<PlayerId>>) -> Self {
        BowlingRotation::new(overs)
    }
}
