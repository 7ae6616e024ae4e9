//! Scouting boundary.
//!
//! Profile and match generation are pluggable collaborators behind the
//! traits below: the shipped implementation is the owned, seeded
//! procedural generator in [`procedural`], but a replay fixture or a
//! remote generator can stand in behind the same contract. Whatever the
//! source, externally supplied data is validated before it touches the
//! ledger.

pub mod procedural;

pub use procedural::ProceduralScout;

use crate::engine::{MatchEngine, MatchPlan, Tactic};
use crate::error::{CoreError, Result};
use crate::models::{MatchResult, Player, PlayerStats, Position, Rarity};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A scouted profile as returned by a profile source.
///
/// Identity, salary, and cosmetics are not the collaborator's business;
/// they are assigned at assembly time by [`PlayerProfile::into_player`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerProfile {
    pub name: String,
    pub origin: String,
    pub age: u8,
    pub position: Position,
    pub stats: PlayerStats,
    pub backstory: String,
    pub rarity: Rarity,
}

impl PlayerProfile {
    /// Reject profiles an external generator could plausibly get wrong:
    /// out-of-range stats, an implausible age, or a blank identity.
    pub fn validate(&self) -> Result<()> {
        self.stats
            .validate()
            .map_err(|e| CoreError::InvalidGeneratedProfile(e.to_string()))?;
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidGeneratedProfile("blank player name".to_string()));
        }
        if !(16..=45).contains(&self.age) {
            return Err(CoreError::InvalidGeneratedProfile(format!(
                "implausible age: {}",
                self.age
            )));
        }
        Ok(())
    }

    /// Assemble a roster-ready player: salary from the payroll curve,
    /// avatar color from position, caller-supplied unique id.
    pub fn into_player(self, id: String) -> Player {
        let salary = crate::economy::weekly_salary(&self.stats, self.rarity);
        Player {
            id,
            name: self.name,
            origin: self.origin,
            age: self.age,
            avatar_color: self.position.avatar_color().to_string(),
            position: self.position,
            stats: self.stats,
            backstory: self.backstory,
            rarity: self.rarity,
            salary,
            created_at: Utc::now(),
        }
    }
}

/// Collaborator that produces scouted player profiles.
pub trait ProfileSource {
    fn request_player_profile(&mut self, position: Option<Position>) -> Result<PlayerProfile>;
}

/// Collaborator that produces full match results.
///
/// The owned implementation is [`OwnedMatchSimulator`]; an external
/// narrative service can implement this instead, in which case the
/// caller must run [`MatchResult::validate`] on what comes back.
pub trait MatchSource {
    fn request_match_result(&mut self, squad: &[Player], tactic: Tactic) -> Result<MatchResult>;
}

/// Owned, deterministic match source: each request resolves one match
/// through the tactic engine, advancing the seed per call.
#[derive(Debug, Clone)]
pub struct OwnedMatchSimulator {
    next_seed: u64,
}

impl OwnedMatchSimulator {
    pub fn from_seed(seed: u64) -> Self {
        Self { next_seed: seed }
    }
}

impl MatchSource for OwnedMatchSimulator {
    fn request_match_result(&mut self, squad: &[Player], tactic: Tactic) -> Result<MatchResult> {
        let plan =
            MatchPlan { squad: squad.to_vec(), tactic, seed: self.next_seed, opponent: None };
        self.next_seed = self.next_seed.wrapping_add(1);
        MatchEngine::new(plan)?.simulate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::seed_squad;

    #[test]
    fn profile_validation_rejects_out_of_range_stats() {
        let mut scout = ProceduralScout::from_seed(11);
        let mut profile = scout.request_player_profile(None).unwrap();
        profile.stats.pace = 140;
        assert!(matches!(profile.validate(), Err(CoreError::InvalidGeneratedProfile(_))));
    }

    #[test]
    fn profile_validation_rejects_implausible_age() {
        let mut scout = ProceduralScout::from_seed(11);
        let mut profile = scout.request_player_profile(None).unwrap();
        profile.age = 12;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn assembly_derives_salary_and_avatar() {
        let mut scout = ProceduralScout::from_seed(23);
        let profile = scout.request_player_profile(Some(Position::Forward)).unwrap();
        let expected_salary = crate::economy::weekly_salary(&profile.stats, profile.rarity);

        let player = profile.into_player("recruit-x".to_string());
        assert_eq!(player.id, "recruit-x");
        assert_eq!(player.salary, expected_salary);
        assert_eq!(player.avatar_color, Position::Forward.avatar_color());
    }

    #[test]
    fn owned_match_source_resolves_consistent_results() {
        let squad = seed_squad();
        let mut source = OwnedMatchSimulator::from_seed(5);
        for _ in 0..10 {
            let result = source.request_match_result(&squad, Tactic::ParkTheBus).unwrap();
            assert!(result.validate().is_ok());
        }
    }

    #[test]
    fn failed_source_refunds_the_scout_fee() {
        struct DeadNetwork;
        impl ProfileSource for DeadNetwork {
            fn request_player_profile(
                &mut self,
                _position: Option<Position>,
            ) -> Result<PlayerProfile> {
                Err(CoreError::InvalidGeneratedProfile("uplink severed".to_string()))
            }
        }

        let config = crate::economy::EconomyConfig::default();
        let mut economy =
            crate::economy::EconomyState::new(config.starting_credits, seed_squad());

        economy.charge_scout_fee(&config).unwrap();
        let outcome = DeadNetwork.request_player_profile(None);
        assert!(outcome.is_err());
        economy.refund_scout_fee(&config);

        assert_eq!(economy.credits, config.starting_credits, "failed scouting must not cost anything");
        assert_eq!(economy.squad.len(), 3);
    }

    #[test]
    fn owned_match_source_rejects_empty_squad() {
        let mut source = OwnedMatchSimulator::from_seed(5);
        assert!(matches!(
            source.request_match_result(&[], Tactic::ParkTheBus),
            Err(CoreError::EmptySquad)
        ));
    }
}
