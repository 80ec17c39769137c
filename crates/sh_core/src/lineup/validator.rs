//! Lineup validation rules.
//!
//! Checks run in declared order and the first violation wins; there is no
//! partial acceptance. Both validators are pure functions over in-memory
//! data; persistence of accepted orders happens in the service layer.

use std::collections::HashMap;

use crate::error::LineupError;
use crate::models::lineup::{BattingOrder, BowlingRotation};
use crate::models::player::PlayerId;
use crate::models::squad::Squad;

/// Starters in a batting order.
pub const BATTING_ORDER_SIZE: usize = 11;

/// Overs in a full rotation.
pub const ROTATION_OVERS: usize = 20;

/// Cap on overs per bowler.
pub const MAX_OVERS_PER_BOWLER: u8 = 4;

/// Exactly eleven starters, all drawn from the squad.
pub fn validate_batting_order(order: &BattingOrder, squad: &Squad) -> Result<(), LineupError> {
    if order.len() != BATTING_ORDER_SIZE {
        return Err(LineupError::BattingOrderSize {
            expected: BATTING_ORDER_SIZE,
            found: order.len(),
        });
    }

    for &batter in order.iter() {
        if !squad.contains(batter) {
            return Err(LineupError::UnknownPlayer { player: batter });
        }
    }

    Ok(())
}

/// Exactly twenty slots; per slot in order: the assigned bowler must be a
/// squad member, may not exceed four overs in total, and may not bowl two
/// consecutive overs. Empty slots never participate in the consecutive
/// check, so adjacent empties are fine.
pub fn validate_bowling_rotation(
    rotation: &BowlingRotation,
    squad: &Squad,
) -> Result<(), LineupError> {
    if rotation.len() != ROTATION_OVERS {
        return Err(LineupError::RotationSize {
            expected: ROTATION_OVERS,
            found: rotation.len(),
        });
    }

    let slots = rotation.slots();
    let mut overs_bowled: HashMap<PlayerId, u8> = HashMap::new();

    for (over, slot) in slots.iter().enumerate() {
        let Some(bowler) = *slot else { continue };

        if !squad.contains(bowler) {
            return Err(LineupError::UnknownPlayer { player: bowler });
        }

        let bowled = overs_bowled.entry(bowler).or_insert(0);
        *bowled += 1;
        if *bowled > MAX_OVERS_PER_BOWLER {
            return Err(LineupError::OverQuotaExceeded {
                player: bowler,
                max: MAX_OVERS_PER_BOWLER,
            });
        }

        if over > 0 && slots[over - 1] == Some(bowler) {
            return Err(LineupError::ConsecutiveOvers { player: bowler, over });
        }
    }

    Ok(())
}
