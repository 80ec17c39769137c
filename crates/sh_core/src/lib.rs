//! # sh_core - SwitchedHit Squad Engine
//!
//! Squad generation and lineup validation for the SwitchedHit management
//! game. The HTTP layer, token handling, and the relational store live
//! outside this crate; the engine is pure logic over in-memory data plus
//! a narrow storage port.
//!
//! ## Features
//! - Procedural squad generation with per-sport stat models
//! - Deterministic when seeded (same seed = same squad)
//! - Batting-order and bowling-rotation validation with coded rejections
//! - Remote name provider with mandatory static fallback

pub mod api;
pub mod config;
pub mod error;
pub mod lineup;
pub mod models;
pub mod names;
pub mod roster;
pub mod service;
pub mod storage;

// Re-export the main engine surface
pub use error::{
    GenerationError, LineupError, NameSourceError, RosterError, StorageError, SubmitError,
};
pub use lineup::{
    validate_batting_order, validate_bowling_rotation, BATTING_ORDER_SIZE, MAX_OVERS_PER_BOWLER,
    ROTATION_OVERS,
};
pub use models::{
    BattingOrder, BowlingRotation, PerformanceStats, Player, PlayerAttributes, PlayerId, Position,
    Squad, SquadSummary, TeamId, TechnicalStats,
};
pub use names::{NameDirectory, NamePool, NameSource, RemoteNameProvider, StaticNameList};
pub use roster::{SportVariant, SquadGenerator, StatModel};
pub use service::{NewPlayer, TeamService};
pub use storage::{MemoryStore, SquadStore};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
