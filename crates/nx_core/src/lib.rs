//! # nx_core - Deterministic match and economy engine
//!
//! Owned simulation core for the Nexus underground league manager: squad
//! roster, scouting, tactic resolution, narrative event feed, and the
//! season economy ledger, with a JSON API for easy integration with UI
//! layers.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same result)
//! - Tactic advantage cycle with seeded, power-biased scorelines
//! - Pure, all-or-nothing ledger operations over an explicit state value
//! - Pluggable scouting/match collaborators behind validated contracts

pub mod api;
pub mod economy;
pub mod engine;
pub mod error;
pub mod models;
pub mod save;
pub mod scouting;
pub mod state;

// Re-export main API functions
pub use api::{
    ingest_profile_json, scout_player_json, simulate_match_json, validate_match_result_json,
    MatchRequest, MatchResponse, ScoutRequest, ScoutResponse,
};
pub use error::{CoreError, Result};

// Re-export the core domain types
pub use economy::{EconomyConfig, EconomyState, PaydayEvent};
pub use engine::{MatchEngine, MatchPlan, MatchPhase, OpponentProfile, SquadPower, Tactic};
pub use models::{
    EventType, MatchEvent, MatchRecord, MatchResult, MatchWinner, Player, PlayerStats, Position,
    Rarity,
};
pub use save::{GameSave, SaveError, SaveManager};
pub use scouting::{MatchSource, OwnedMatchSimulator, PlayerProfile, ProceduralScout, ProfileSource};
pub use state::{seed_squad, GameState, GAME_STATE};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
