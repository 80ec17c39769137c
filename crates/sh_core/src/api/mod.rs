//! JSON request/response surface consumed by the HTTP layer.

pub mod team_json;

pub use team_json::{
    create_player_json, generate_squad_json, squad_summary_json, submit_batting_order_json,
    submit_bowling_rotation_json, CreatePlayerRequest, GenerateSquadRequest, SquadResponse,
    SubmitBattingOrderRequest, SubmitBowlingRotationRequest, SubmitResponse,
};
