pub mod json_api;

pub use json_api::{
    ingest_profile_json, scout_player_json, simulate_match_json, validate_match_result_json,
    MatchRequest, MatchResponse, ScoutRequest, ScoutResponse,
};
