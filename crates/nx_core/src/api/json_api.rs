//! JSON boundary for the embedding UI.
//!
//! Every entry point is stateless: the request carries the full squad
//! and an explicit seed, the response is a plain JSON document. The UI
//! keeps the ledger; the engine keeps the rules.

use serde::{Deserialize, Serialize};

use crate::economy::signing_cost;
use crate::engine::{MatchEngine, MatchPlan, OpponentProfile, Tactic};
use crate::error::{CoreError, Result};
use crate::models::{MatchResult, Player, Position};
use crate::scouting::{PlayerProfile, ProceduralScout};

fn check_schema_version(found: u8) -> Result<()> {
    if found != crate::SCHEMA_VERSION {
        return Err(CoreError::DeserializationError(format!(
            "unsupported schema_version: {} (expected {})",
            found,
            crate::SCHEMA_VERSION
        )));
    }
    Ok(())
}

fn check_squad(squad: &[Player]) -> Result<()> {
    for player in squad {
        player.stats.validate()?;
    }
    Ok(())
}

// ============================================================
// Scouting
// ============================================================

#[derive(Debug, Deserialize)]
pub struct ScoutRequest {
    pub schema_version: u8,
    pub seed: u64,
    #[serde(default)]
    pub position: Option<Position>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoutResponse {
    pub schema_version: u8,
    pub player: Player,
    /// One-time cost to sign the scouted candidate.
    pub signing_cost: u32,
}

/// Scout one candidate with the owned procedural generator.
pub fn scout_player_json(request_json: &str) -> Result<String> {
    let request: ScoutRequest = serde_json::from_str(request_json)?;
    check_schema_version(request.schema_version)?;

    let mut scout = ProceduralScout::from_seed(request.seed);
    let player = scout.scout_recruit(request.position)?;
    let response = ScoutResponse {
        schema_version: crate::SCHEMA_VERSION,
        signing_cost: signing_cost(&player.stats),
        player,
    };
    Ok(serde_json::to_string(&response)?)
}

/// Validate and assemble a profile supplied by an external generator.
///
/// Fails with `InvalidGeneratedProfile` instead of letting a bad profile
/// reach the roster.
#[derive(Debug, Deserialize)]
pub struct IngestProfileRequest {
    pub schema_version: u8,
    /// Unique id the caller has allocated for the recruit.
    pub id: String,
    pub profile: PlayerProfile,
}

pub fn ingest_profile_json(request_json: &str) -> Result<String> {
    let request: IngestProfileRequest = serde_json::from_str(request_json)?;
    check_schema_version(request.schema_version)?;

    request.profile.validate()?;
    let player = request.profile.into_player(request.id);
    let response = ScoutResponse {
        schema_version: crate::SCHEMA_VERSION,
        signing_cost: signing_cost(&player.stats),
        player,
    };
    Ok(serde_json::to_string(&response)?)
}

// ============================================================
// Match simulation
// ============================================================

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub tactic: Tactic,
    pub squad: Vec<Player>,
    /// Pre-resolved opponent from an external generator, if any.
    #[serde(default)]
    pub opponent: Option<OpponentProfile>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResponse {
    pub schema_version: u8,
    #[serde(flatten)]
    pub result: MatchResult,
}

/// Resolve one match deterministically from the seed.
pub fn simulate_match_json(request_json: &str) -> Result<String> {
    let request: MatchRequest = serde_json::from_str(request_json)?;
    check_schema_version(request.schema_version)?;
    check_squad(&request.squad)?;

    let plan = MatchPlan {
        squad: request.squad,
        tactic: request.tactic,
        seed: request.seed,
        opponent: request.opponent,
    };
    let result = MatchEngine::new(plan)?.simulate()?;
    let response = MatchResponse { schema_version: crate::SCHEMA_VERSION, result };
    Ok(serde_json::to_string(&response)?)
}

/// Consistency-check a match result supplied by an external narrative
/// collaborator.
#[derive(Debug, Deserialize)]
pub struct ValidateResultRequest {
    pub schema_version: u8,
    pub result: MatchResult,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateResultResponse {
    pub schema_version: u8,
    pub valid: bool,
}

pub fn validate_match_result_json(request_json: &str) -> Result<String> {
    let request: ValidateResultRequest = serde_json::from_str(request_json)?;
    check_schema_version(request.schema_version)?;

    request.result.validate()?;
    let response =
        ValidateResultResponse { schema_version: crate::SCHEMA_VERSION, valid: true };
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::seed_squad;
    use serde_json::json;

    fn match_request(seed: u64) -> String {
        json!({
            "schema_version": 1,
            "seed": seed,
            "tactic": "counter_attack",
            "squad": seed_squad(),
        })
        .to_string()
    }

    #[test]
    fn simulate_match_json_is_deterministic() {
        let request = match_request(999);
        let a = simulate_match_json(&request).unwrap();
        let b = simulate_match_json(&request).unwrap();
        assert_eq!(a, b, "same seed should produce the same result");
    }

    #[test]
    fn simulate_match_json_produces_consistent_fields() {
        let response = simulate_match_json(&match_request(42)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert!(parsed["home_score"].is_number());
        assert!(parsed["away_score"].is_number());
        assert!(parsed["events"].as_array().map(|e| !e.is_empty()).unwrap_or(false));
        assert!(!parsed["opponent_name"].as_str().unwrap_or("").is_empty());
    }

    #[test]
    fn empty_squad_surfaces_as_error() {
        let request = json!({
            "schema_version": 1,
            "seed": 7,
            "tactic": "all_out_attack",
            "squad": [],
        })
        .to_string();
        assert!(matches!(simulate_match_json(&request), Err(CoreError::EmptySquad)));
    }

    #[test]
    fn unsupported_schema_version_is_rejected() {
        let request = json!({
            "schema_version": 9,
            "seed": 7,
            "tactic": "all_out_attack",
            "squad": seed_squad(),
        })
        .to_string();
        assert!(matches!(
            simulate_match_json(&request),
            Err(CoreError::DeserializationError(_))
        ));
    }

    #[test]
    fn scout_player_json_reports_signing_cost() {
        let request = json!({"schema_version": 1, "seed": 2024}).to_string();
        let response = scout_player_json(&request).unwrap();
        let parsed: ScoutResponse = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed.signing_cost, signing_cost(&parsed.player.stats));
        assert!(parsed.signing_cost % 10 == 0);
    }

    #[test]
    fn scouted_position_filter_is_respected() {
        let request =
            json!({"schema_version": 1, "seed": 31, "position": "goalkeeper"}).to_string();
        let response = scout_player_json(&request).unwrap();
        let parsed: ScoutResponse = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed.player.position, Position::Goalkeeper);
    }

    #[test]
    fn ingest_rejects_out_of_range_external_profile() {
        let request = json!({
            "schema_version": 1,
            "id": "ext-1",
            "profile": {
                "name": "Overflow Unit",
                "origin": "Nowhere",
                "age": 24,
                "position": "forward",
                "stats": {
                    "pace": 120, "shooting": 80, "passing": 70,
                    "dribbling": 75, "defense": 40, "physical": 60
                },
                "backstory": "Too good to be true.",
                "rarity": "glitch"
            }
        })
        .to_string();
        assert!(matches!(
            ingest_profile_json(&request),
            Err(CoreError::InvalidGeneratedProfile(_))
        ));
    }

    #[test]
    fn validate_match_result_catches_contradictory_winner() {
        let request = json!({
            "schema_version": 1,
            "result": {
                "home_score": 2,
                "away_score": 0,
                "opponent_name": "Neo-Tokyo Drifters",
                "possession": 55,
                "winner": "away",
                "events": [
                    {"minute": 12, "description": "GOAL!", "type": "goal"},
                    {"minute": 70, "description": "GOAL!", "type": "goal"}
                ],
                "summary": "A strange night."
            }
        })
        .to_string();
        assert!(matches!(
            validate_match_result_json(&request),
            Err(CoreError::InconsistentMatchResult(_))
        ));
    }
}
