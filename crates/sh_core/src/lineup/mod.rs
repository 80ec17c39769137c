//! Lineup validation: batting orders and bowling rotations.

pub mod validator;

pub use validator::{
    validate_batting_order, validate_bowling_rotation, BATTING_ORDER_SIZE, MAX_OVERS_PER_BOWLER,
    ROTATION_OVERS,
};
