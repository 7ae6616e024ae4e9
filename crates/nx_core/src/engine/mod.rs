//! Deterministic tactic resolution engine.
//!
//! A match runs through a small phase machine
//! (`Briefing -> Resolving -> Resolved`):
//!
//! 1. Aggregate squad power is computed (fails fast on an empty squad).
//! 2. An opponent is generated from the seed, or accepted pre-resolved
//!    from an external opponent generator.
//! 3. The tactic advantage cycle adjusts effective attack on both sides.
//! 4. Expected goals follow a logistic curve over the power differential
//!    (monotone, diminishing returns) and feed a Poisson draw, so higher
//!    relative power raises expected goals without ever guaranteeing a
//!    scoreline.
//! 5. Possession skews toward whichever side plays the possession game.
//!
//! Same seed, same inputs — byte-identical result.

pub mod event_feed;
pub mod opponent;
pub mod tactics;

pub use opponent::OpponentProfile;
pub use tactics::{Matchup, Tactic, ALL_TACTICS};

use crate::error::{CoreError, Result};
use crate::models::{MatchResult, MatchWinner, Player};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Poisson};

/// Expected-goals ceiling of the logistic curve.
const MAX_XG: f64 = 3.4;
/// Power-differential scale: how many points of differential move the
/// curve appreciably.
const XG_SCALE: f64 = 22.0;
/// Hard cap on goals per side; the tail of the Poisson is cut here.
const MAX_GOALS: u8 = 8;

/// Aggregate squad strength over the full roster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquadPower {
    /// Mean of (shooting + pace) per player.
    pub attack: f64,
    /// Mean of (defense + physical) per player.
    pub defense: f64,
}

impl SquadPower {
    pub fn from_squad(squad: &[Player]) -> Result<Self> {
        if squad.is_empty() {
            return Err(CoreError::EmptySquad);
        }
        let n = squad.len() as f64;
        let attack = squad
            .iter()
            .map(|p| p.stats.shooting as f64 + p.stats.pace as f64)
            .sum::<f64>()
            / n;
        let defense = squad
            .iter()
            .map(|p| p.stats.defense as f64 + p.stats.physical as f64)
            .sum::<f64>()
            / n;
        Ok(Self { attack, defense })
    }
}

/// Everything the engine needs to resolve one match.
#[derive(Debug, Clone)]
pub struct MatchPlan {
    pub squad: Vec<Player>,
    pub tactic: Tactic,
    pub seed: u64,
    /// Pre-resolved opponent from an external generator; generated from
    /// the seed when absent.
    pub opponent: Option<OpponentProfile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Briefing,
    Resolving,
    Resolved,
}

pub struct MatchEngine {
    plan: MatchPlan,
    power: SquadPower,
    rng: ChaCha8Rng,
    phase: MatchPhase,
}

impl MatchEngine {
    /// Validates the plan up front: an empty squad is rejected before
    /// any computation.
    pub fn new(plan: MatchPlan) -> Result<Self> {
        let power = SquadPower::from_squad(&plan.squad)?;
        let rng = ChaCha8Rng::seed_from_u64(plan.seed);
        Ok(Self { plan, power, rng, phase: MatchPhase::Briefing })
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Resolve the match. The returned result has already passed the
    /// same consistency checks applied to external narratives.
    pub fn simulate(&mut self) -> Result<MatchResult> {
        self.phase = MatchPhase::Resolving;

        let opponent = match self.plan.opponent.clone() {
            Some(profile) => profile,
            None => OpponentProfile::generate(&mut self.rng, &self.power),
        };

        let home_matchup = self.plan.tactic.matchup(opponent.tactic);
        let away_matchup = opponent.tactic.matchup(self.plan.tactic);

        let home_attack = self.power.attack * home_matchup.attack_modifier();
        let away_attack = opponent.attack * away_matchup.attack_modifier();

        let home_score = sample_goals(&mut self.rng, expected_goals(home_attack - opponent.defense));
        let away_score = sample_goals(&mut self.rng, expected_goals(away_attack - self.power.defense));

        let possession = self.resolve_possession(&opponent, home_attack, away_attack);
        let winner = MatchWinner::from_score(home_score, away_score);

        let events = event_feed::generate_event_feed(
            &mut self.rng,
            home_score,
            away_score,
            &self.plan.squad,
            &opponent,
        );
        let summary =
            event_feed::generate_summary(&mut self.rng, home_score, away_score, possession, &opponent);

        let result = MatchResult {
            home_score,
            away_score,
            opponent_name: opponent.name,
            possession,
            winner,
            events,
            summary,
        };
        result.validate()?;

        self.phase = MatchPhase::Resolved;
        Ok(result)
    }

    /// Possession skews toward whichever side selected the possession
    /// game, otherwise splits near 50 with small variance, nudged by the
    /// balance of adjusted attacking power.
    fn resolve_possession(
        &mut self,
        opponent: &OpponentProfile,
        home_attack: f64,
        away_attack: f64,
    ) -> u8 {
        let home_holds = self.plan.tactic == Tactic::PossessionGame;
        let away_holds = opponent.tactic == Tactic::PossessionGame;

        let base: i32 = match (home_holds, away_holds) {
            (true, false) => 50 + self.rng.gen_range(8..=16),
            (false, true) => 50 - self.rng.gen_range(8..=16),
            _ => 50 + self.rng.gen_range(-4..=4),
        };
        let drift = ((home_attack - away_attack) / 12.0).round() as i32;
        (base + drift.clamp(-6, 6)).clamp(20, 80) as u8
    }
}

/// Logistic expected-goals curve over the attack-vs-defense differential.
///
/// Strictly increasing in the differential with diminishing returns at
/// both tails, bounded in (0, MAX_XG).
fn expected_goals(differential: f64) -> f64 {
    MAX_XG / (1.0 + (-differential / XG_SCALE).exp())
}

fn sample_goals<R: Rng>(rng: &mut R, lambda: f64) -> u8 {
    let lambda = lambda.clamp(0.05, MAX_XG);
    match Poisson::new(lambda) {
        Ok(dist) => {
            let draw = dist.sample(rng);
            (draw as u32).min(MAX_GOALS as u32) as u8
        }
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::seed_squad;
    use rand::SeedableRng;

    fn plan_with_seed(seed: u64) -> MatchPlan {
        MatchPlan { squad: seed_squad(), tactic: Tactic::CounterAttack, seed, opponent: None }
    }

    #[test]
    fn empty_squad_is_rejected_before_any_computation() {
        let plan =
            MatchPlan { squad: Vec::new(), tactic: Tactic::AllOutAttack, seed: 1, opponent: None };
        assert!(matches!(MatchEngine::new(plan), Err(CoreError::EmptySquad)));
    }

    #[test]
    fn same_seed_same_result() {
        let a = MatchEngine::new(plan_with_seed(42)).unwrap().simulate().unwrap();
        let b = MatchEngine::new(plan_with_seed(42)).unwrap().simulate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_vary_the_outcome() {
        let outcomes: std::collections::HashSet<(u8, u8)> = (0..32)
            .map(|seed| {
                let r = MatchEngine::new(plan_with_seed(seed)).unwrap().simulate().unwrap();
                (r.home_score, r.away_score)
            })
            .collect();
        assert!(outcomes.len() > 1, "32 seeds produced a single scoreline");
    }

    #[test]
    fn winner_always_consistent_with_score() {
        for seed in 0..100 {
            let result = MatchEngine::new(plan_with_seed(seed)).unwrap().simulate().unwrap();
            assert_eq!(result.winner, MatchWinner::from_score(result.home_score, result.away_score));
            let goals = result.events.iter().filter(|e| e.is_goal()).count();
            assert_eq!(goals, (result.home_score + result.away_score) as usize);
            assert!((0..=100).contains(&result.possession));
        }
    }

    #[test]
    fn phase_machine_reaches_resolved() {
        let mut engine = MatchEngine::new(plan_with_seed(5)).unwrap();
        assert_eq!(engine.phase(), MatchPhase::Briefing);
        engine.simulate().unwrap();
        assert_eq!(engine.phase(), MatchPhase::Resolved);
    }

    #[test]
    fn expected_goals_is_monotone_with_diminishing_returns() {
        let points: Vec<f64> = (-10..=10).map(|i| expected_goals(i as f64 * 10.0)).collect();
        assert!(points.windows(2).all(|w| w[0] < w[1]), "curve must strictly increase");

        // Diminishing returns: the gain from +0 -> +50 exceeds the gain
        // from +50 -> +100.
        let low_gain = expected_goals(50.0) - expected_goals(0.0);
        let high_gain = expected_goals(100.0) - expected_goals(50.0);
        assert!(low_gain > high_gain);

        // Bounded.
        assert!(expected_goals(1e6) <= MAX_XG);
        assert!(expected_goals(-1e6) >= 0.0);
    }

    #[test]
    fn stronger_squads_average_more_goals() {
        let buff = |squad: &mut Vec<Player>, value: u8| {
            for p in squad.iter_mut() {
                p.stats.shooting = value;
                p.stats.pace = value;
            }
        };

        let mut weak_goals = 0u32;
        let mut strong_goals = 0u32;
        for seed in 0..150 {
            let mut weak_plan = plan_with_seed(seed);
            buff(&mut weak_plan.squad, 30);
            let mut strong_plan = plan_with_seed(seed);
            buff(&mut strong_plan.squad, 95);

            weak_goals +=
                MatchEngine::new(weak_plan).unwrap().simulate().unwrap().home_score as u32;
            strong_goals +=
                MatchEngine::new(strong_plan).unwrap().simulate().unwrap().home_score as u32;
        }
        assert!(
            strong_goals > weak_goals,
            "strong {} should outscore weak {}",
            strong_goals,
            weak_goals
        );
    }

    #[test]
    fn possession_game_skews_the_split() {
        let mut with_possession = 0i64;
        let mut neutral = 0i64;
        for seed in 0..100 {
            let mut plan = plan_with_seed(seed);
            plan.tactic = Tactic::PossessionGame;
            // Pin the opponent tactic so the skew is one-sided.
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let power = SquadPower::from_squad(&plan.squad).unwrap();
            let mut opp = OpponentProfile::generate(&mut rng, &power);
            opp.tactic = Tactic::CounterAttack;
            plan.opponent = Some(opp.clone());
            with_possession +=
                MatchEngine::new(plan).unwrap().simulate().unwrap().possession as i64;

            let mut flat = plan_with_seed(seed);
            flat.tactic = Tactic::CounterAttack;
            opp.tactic = Tactic::AllOutAttack;
            flat.opponent = Some(opp);
            neutral += MatchEngine::new(flat).unwrap().simulate().unwrap().possession as i64;
        }
        assert!(
            with_possession > neutral,
            "possession tactic should raise the average share: {} vs {}",
            with_possession,
            neutral
        );
    }
}
