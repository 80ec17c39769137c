//! JSON entry points for squad and lineup operations.
//!
//! Each function takes a request JSON string and answers with a response
//! JSON string. Lineup rejections are part of the response body
//! (`accepted = false` plus reason code and message); only transport,
//! storage, and malformed-request problems become `Err`, as coded
//! `"<code>: <detail>"` strings for the HTTP layer to map.

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;
use crate::models::player::{Player, PlayerAttributes, PlayerId, Position, TeamId};
use crate::models::squad::SquadSummary;
use crate::service::{NewPlayer, TeamService};

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| err_code("serialization_failed", e))
}

#[derive(Debug, Deserialize)]
pub struct GenerateSquadRequest {
    pub team_id: TeamId,
    /// Optional fixed seed for reproducible generation.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct SquadResponse {
    pub team_id: TeamId,
    pub players: Vec<Player>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitBattingOrderRequest {
    pub team_id: TeamId,
    pub batting_order: Vec<PlayerId>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitBowlingRotationRequest {
    pub team_id: TeamId,
    pub bowling_order: Vec<Option<PlayerId>>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmitResponse {
    fn accepted() -> Self {
        SubmitResponse { accepted: true, reason_code: None, message: None }
    }

    fn rejected(code: &str, message: String) -> Self {
        SubmitResponse {
            accepted: false,
            reason_code: Some(code.to_string()),
            message: Some(message),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub team_id: TeamId,
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub morale: Option<u8>,
    #[serde(default)]
    pub attributes: Option<PlayerAttributes>,
}

pub fn generate_squad_json(service: &TeamService, request_json: &str) -> Result<String, String> {
    let request: GenerateSquadRequest =
        serde_json::from_str(request_json).map_err(|e| err_code("invalid_request", e))?;

    let players = match request.seed {
        Some(seed) => service.generate_squad_seeded(request.team_id, seed),
        None => service.generate_squad(request.team_id),
    }
    .map_err(|e| err_code("generation_failed", e))?;

    to_json(&SquadResponse { team_id: request.team_id, players })
}

fn submit_outcome(result: Result<(), SubmitError>) -> Result<String, String> {
    match result {
        Ok(()) => to_json(&SubmitResponse::accepted()),
        Err(SubmitError::Rejected(reason)) => {
            to_json(&SubmitResponse::rejected(reason.code(), reason.to_string()))
        }
        Err(SubmitError::Storage(e)) => Err(err_code("storage_failure", e)),
    }
}

pub fn submit_batting_order_json(
    service: &TeamService,
    request_json: &str,
) -> Result<String, String> {
    let request: SubmitBattingOrderRequest =
        serde_json::from_str(request_json).map_err(|e| err_code("invalid_request", e))?;

    submit_outcome(
        service
            .submit_batting_order(request.team_id, request.batting_order)
            .map(|_| ()),
    )
}

pub fn submit_bowling_rotation_json(
    service: &TeamService,
    request_json: &str,
) -> Result<String, String> {
    let request: SubmitBowlingRotationRequest =
        serde_json::from_str(request_json).map_err(|e| err_code("invalid_request", e))?;

    submit_outcome(
        service
            .submit_bowling_rotation(request.team_id, request.bowling_order)
            .map(|_| ()),
    )
}

pub fn create_player_json(service: &TeamService, request_json: &str) -> Result<String, String> {
    let request: CreatePlayerRequest =
        serde_json::from_str(request_json).map_err(|e| err_code("invalid_request", e))?;

    let position = Position::parse(&request.position)
        .ok_or_else(|| err_code("invalid_position", &request.position))?;

    let player = service
        .create_player(NewPlayer {
            team_id: request.team_id,
            name: request.name,
            position,
            age: request.age,
            morale: request.morale,
            attributes: request.attributes,
        })
        .map_err(|e| err_code("create_failed", e))?;

    to_json(&player)
}

pub fn squad_summary_json(service: &TeamService, team_id: TeamId) -> Result<String, String> {
    let summary: SquadSummary = service
        .squad_summary(team_id)
        .map_err(|e| err_code("storage_failure", e))?;
    to_json(&summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::stat_model::SportVariant;
    use crate::storage::MemoryStore;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn service() -> TeamService {
        TeamService::new(Arc::new(MemoryStore::new()), SportVariant::Cricket)
    }

    fn generate(service: &TeamService) -> Value {
        let response = generate_squad_json(
            service,
            &json!({"team_id": 1, "seed": 4242}).to_string(),
        )
        .expect("generation must succeed");
        serde_json::from_str(&response).unwrap()
    }

    #[test]
    fn generate_returns_the_full_squad() {
        let service = service();
        let response = generate(&service);
        assert_eq!(response["team_id"], 1);
        assert_eq!(response["players"].as_array().unwrap().len(), 15);
        let first = &response["players"][0];
        assert!(first["batting_average"].is_number(), "flat stat columns expected");
    }

    #[test]
    fn valid_batting_order_round_trips_as_accepted() {
        let service = service();
        let squad = generate(&service);
        let ids: Vec<Value> = squad["players"]
            .as_array()
            .unwrap()
            .iter()
            .take(11)
            .map(|p| p["id"].clone())
            .collect();

        let response = submit_batting_order_json(
            &service,
            &json!({"team_id": 1, "batting_order": ids}).to_string(),
        )
        .unwrap();
        let response: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(response["accepted"], true);
        assert!(response.get("reason_code").is_none());
    }

    #[test]
    fn short_batting_order_is_rejected_with_reason_code() {
        let service = service();
        let squad = generate(&service);
        let ids: Vec<Value> = squad["players"]
            .as_array()
            .unwrap()
            .iter()
            .take(9)
            .map(|p| p["id"].clone())
            .collect();

        let response = submit_batting_order_json(
            &service,
            &json!({"team_id": 1, "batting_order": ids}).to_string(),
        )
        .unwrap();
        let response: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(response["accepted"], false);
        assert_eq!(response["reason_code"], "invalid_structure");
        assert!(response["message"]
            .as_str()
            .unwrap()
            .contains("exactly 11 players"));
    }

    #[test]
    fn rotation_with_nulls_is_accepted_when_rules_hold() {
        let service = service();
        let squad = generate(&service);
        let first = squad["players"][0]["id"].clone();

        let mut overs = vec![Value::Null; 20];
        overs[0] = first.clone();
        overs[2] = first;

        let response = submit_bowling_rotation_json(
            &service,
            &json!({"team_id": 1, "bowling_order": overs}).to_string(),
        )
        .unwrap();
        let response: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(response["accepted"], true);
    }

    #[test]
    fn malformed_request_is_a_coded_error() {
        let service = service();
        let err = generate_squad_json(&service, "{not json").unwrap_err();
        assert!(err.starts_with("invalid_request:"), "got {err}");
    }

    #[test]
    fn create_player_validates_the_position_label() {
        let service = service();
        let err = create_player_json(
            &service,
            &json!({"team_id": 1, "name": "Kit Man", "position": "GKX"}).to_string(),
        )
        .unwrap_err();
        assert!(err.starts_with("invalid_position:"), "got {err}");

        let response = create_player_json(
            &service,
            &json!({"team_id": 1, "name": "New Spinner", "position": "Spin-bowler"}).to_string(),
        )
        .unwrap();
        let player: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(player["position"], "Spin-bowler");
        assert!(player["overall_rating"].is_number());
    }

    #[test]
    fn summary_endpoint_serializes_headline_stats() {
        let service = service();
        generate(&service);

        let response = squad_summary_json(&service, 1).unwrap();
        let summary: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(summary["total_players"], 15);
        assert_eq!(summary["top_players"].as_array().unwrap().len(), 3);
        assert!(summary["composition"].is_array());
    }
}
