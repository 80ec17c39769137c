//! Error types for the squad engine, grouped by failure domain.
//!
//! Lineup rejections carry a stable machine-readable code next to the
//! human-readable message; API consumers branch on the code, users see
//! the message.

use thiserror::Error;

use crate::models::player::{PlayerId, Position};
use crate::roster::stat_model::SportVariant;

/// Failures reported by the storage collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage query failed: {0}")]
    Query(String),
}

/// Failures of the remote name provider.
///
/// These are always recovered inside the engine (fallback to the static
/// list) and never surface from squad generation.
#[derive(Error, Debug)]
pub enum NameSourceError {
    #[error("name service request failed: {0}")]
    Transport(String),

    #[error("name service returned a malformed payload: {0}")]
    Malformed(String),

    #[error("name service returned no usable names")]
    Empty,
}

/// Fatal failures of squad generation.
///
/// Any storage failure during the bulk insert aborts the whole
/// generation; the caller is expected to roll back team creation.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("failed to persist generated squad: {0}")]
    Storage(#[from] StorageError),
}

/// Rejection reasons for submitted lineups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineupError {
    #[error("batting order must contain exactly {expected} players, found {found}")]
    BattingOrderSize { expected: usize, found: usize },

    #[error("bowling rotation must contain exactly {expected} overs, found {found}")]
    RotationSize { expected: usize, found: usize },

    #[error("player {player} is not part of the squad")]
    UnknownPlayer { player: PlayerId },

    #[error("no bowler may bowl more than {max} overs")]
    OverQuotaExceeded { player: PlayerId, max: u8 },

    #[error("a bowler cannot bowl consecutive overs (over {over})")]
    ConsecutiveOvers { player: PlayerId, over: usize },
}

impl LineupError {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            LineupError::BattingOrderSize { .. } | LineupError::RotationSize { .. } => {
                "invalid_structure"
            }
            LineupError::UnknownPlayer { .. } => "unknown_player",
            LineupError::OverQuotaExceeded { .. } => "over_quota_exceeded",
            LineupError::ConsecutiveOvers { .. } => "consecutive_overs",
        }
    }
}

/// Outcome of a lineup submission that did not end in acceptance.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The candidate violated a structural or rotation rule. Not retried
    /// automatically; resubmission is the caller's responsibility.
    #[error("lineup rejected: {0}")]
    Rejected(#[from] LineupError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Failures of single-player roster operations.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("position '{position}' is not a {variant} position")]
    ForeignPosition { position: Position, variant: SportVariant },

    #[error("attribute set does not match the {variant} stat model")]
    ForeignAttributes { variant: SportVariant },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn lineup_codes_are_distinguishable() {
        let player = PlayerId::from_uuid(Uuid::nil());

        let structural = LineupError::BattingOrderSize { expected: 11, found: 9 };
        let quota = LineupError::OverQuotaExceeded { player, max: 4 };
        let consecutive = LineupError::ConsecutiveOvers { player, over: 3 };

        assert_eq!(structural.code(), "invalid_structure");
        assert_eq!(quota.code(), "over_quota_exceeded");
        assert_eq!(consecutive.code(), "consecutive_overs");
        assert_ne!(quota.code(), consecutive.code());
    }

    #[test]
    fn messages_carry_context() {
        let err = LineupError::RotationSize { expected: 20, found: 18 };
        assert_eq!(
            err.to_string(),
            "bowling rotation must contain exactly 20 overs, found 18"
        );
    }
}
