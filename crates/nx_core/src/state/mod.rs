//! Global game state manager.
//!
//! Holds the single campaign's runtime state behind an `RwLock`, so
//! ledger mutations from the embedding UI are serialized. A separate
//! atomic gate rejects overlapping match simulations: the ledger is a
//! single logical actor and a second "simulate match" must not be
//! issued while one is in flight.

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::economy::{EconomyConfig, EconomyState};
use crate::models::{MatchRecord, Player, PlayerStats, Position, Rarity};
use crate::save::GameSave;
use chrono::Utc;

/// Global game state singleton.
pub static GAME_STATE: Lazy<Arc<RwLock<GameState>>> =
    Lazy::new(|| Arc::new(RwLock::new(GameState::new_campaign())));

static SIMULATION_IN_FLIGHT: AtomicBool = AtomicBool::new(false);

/// Runtime campaign state. Convertible to and from [`GameSave`] for
/// persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub economy: EconomyState,
    pub config: EconomyConfig,
    pub match_history: Vec<MatchRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_campaign()
    }
}

impl GameState {
    /// Fresh campaign: starting credits and the three seed players.
    pub fn new_campaign() -> Self {
        let config = EconomyConfig::default();
        Self {
            economy: EconomyState::new(config.starting_credits, seed_squad()),
            config,
            match_history: Vec::new(),
        }
    }

    pub fn to_save(&self) -> GameSave {
        GameSave {
            version: crate::save::SAVE_VERSION,
            timestamp: Utc::now().timestamp(),
            economy: self.economy.clone(),
            config: self.config.clone(),
            match_history: self.match_history.clone(),
        }
    }

    pub fn from_save(save: &GameSave) -> Self {
        Self {
            economy: save.economy.clone(),
            config: save.config.clone(),
            match_history: save.match_history.clone(),
        }
    }
}

/// Replace the global state (e.g. after loading a save).
pub fn set_state(state: GameState) {
    *GAME_STATE.write().unwrap_or_else(|e| e.into_inner()) = state;
}

/// Reset the global state to a fresh campaign.
pub fn reset_state() {
    set_state(GameState::new_campaign());
}

/// Claim the match-simulation gate. Returns false if a simulation is
/// already in flight; the caller must not start another one.
pub fn try_begin_simulation() -> bool {
    SIMULATION_IN_FLIGHT
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
}

/// Release the match-simulation gate.
pub fn end_simulation() {
    SIMULATION_IN_FLIGHT.store(false, Ordering::Release);
}

/// The three players every new campaign opens with.
pub fn seed_squad() -> Vec<Player> {
    let now = Utc::now();
    vec![
        Player {
            id: "seed-1".to_string(),
            name: "Kaelen \"Ghost\" Vane".to_string(),
            origin: "Undercity Sector 7".to_string(),
            age: 22,
            position: Position::Forward,
            stats: PlayerStats {
                pace: 88,
                shooting: 75,
                passing: 60,
                dribbling: 82,
                defense: 30,
                physical: 55,
            },
            backstory: "Learned to feint by dodging security drones in the shanty blocks."
                .to_string(),
            rarity: Rarity::Common,
            avatar_color: Position::Forward.avatar_color().to_string(),
            salary: 45,
            created_at: now,
        },
        Player {
            id: "seed-2".to_string(),
            name: "Jaxxon Steel".to_string(),
            origin: "Neo-Reykjavik".to_string(),
            age: 28,
            position: Position::Defender,
            stats: PlayerStats {
                pace: 60,
                shooting: 40,
                passing: 65,
                dribbling: 50,
                defense: 85,
                physical: 90,
            },
            backstory: "Ex riot-squad officer, now an impassable wall.".to_string(),
            rarity: Rarity::Rare,
            avatar_color: Position::Defender.avatar_color().to_string(),
            salary: 70,
            created_at: now,
        },
        Player {
            id: "seed-3".to_string(),
            name: "Cipher 09".to_string(),
            origin: "The Digital Void".to_string(),
            age: 19,
            position: Position::Midfielder,
            stats: PlayerStats {
                pace: 70,
                shooting: 65,
                passing: 88,
                dribbling: 75,
                defense: 50,
                physical: 45,
            },
            backstory: "Rumored to carry bionic vision implants.".to_string(),
            rarity: Rarity::Rare,
            avatar_color: Position::Midfielder.avatar_color().to_string(),
            salary: 65,
            created_at: now,
        },
    ]
}
