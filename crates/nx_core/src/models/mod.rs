pub mod events;
pub mod match_result;
pub mod player;

pub use events::{EventType, MatchEvent};
pub use match_result::{MatchRecord, MatchResult, MatchWinner};
pub use player::{Player, PlayerStats, Position, Rarity};
