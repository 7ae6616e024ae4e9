//! Season/economy ledger.
//!
//! `EconomyState` exclusively owns the squad collection and the credit
//! balance. Every mutation goes through the operations below; each one
//! is all-or-nothing, so a failed sign or sell leaves the state exactly
//! as it was.

use super::config::EconomyConfig;
use super::valuation::{sell_value, signing_cost, total_wage_bill};
use crate::error::{CoreError, Result};
use crate::models::{MatchWinner, Player};
use serde::{Deserialize, Serialize};

/// Emitted when a payday debits the wage bill.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaydayEvent {
    pub amount: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EconomyState {
    /// May legitimately go negative after payroll; no bankruptcy cutoff
    /// is enforced.
    pub credits: i64,
    pub matches_played: u32,
    /// Insertion order is display order: most recently signed first.
    pub squad: Vec<Player>,
}

impl EconomyState {
    pub fn new(starting_credits: i64, squad: Vec<Player>) -> Self {
        Self { credits: starting_credits, matches_played: 0, squad }
    }

    pub fn wage_bill(&self) -> u32 {
        total_wage_bill(&self.squad)
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.squad.iter().find(|p| p.id == player_id)
    }

    /// Debit the scouting fee up front. The caller refunds it with
    /// [`EconomyState::refund_scout_fee`] if the profile source fails.
    pub fn charge_scout_fee(&mut self, config: &EconomyConfig) -> Result<()> {
        if self.credits < config.scout_cost as i64 {
            return Err(CoreError::InsufficientFunds {
                required: config.scout_cost,
                available: self.credits,
            });
        }
        self.credits -= config.scout_cost as i64;
        Ok(())
    }

    pub fn refund_scout_fee(&mut self, config: &EconomyConfig) {
        self.credits += config.scout_cost as i64;
        log::debug!("scout fee refunded: +{}", config.scout_cost);
    }

    /// Sign a scouted candidate. Fails without mutation if the signing
    /// cost exceeds the balance; otherwise debits the cost and prepends
    /// the player to the squad. Returns the cost charged.
    pub fn sign_player(&mut self, candidate: Player) -> Result<u32> {
        let cost = signing_cost(&candidate.stats);
        if self.credits < cost as i64 {
            return Err(CoreError::InsufficientFunds { required: cost, available: self.credits });
        }
        self.credits -= cost as i64;
        log::info!("signed {} for {} credits", candidate.name, cost);
        self.squad.insert(0, candidate);
        Ok(cost)
    }

    /// Remove a player from the roster, crediting 70% of their current
    /// valuation. Irreversible. Returns the removed player and the
    /// credited value.
    pub fn sell_player(&mut self, player_id: &str) -> Result<(Player, u32)> {
        let idx = self
            .squad
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| CoreError::NotFound { player_id: player_id.to_string() })?;
        let player = self.squad.remove(idx);
        let value = sell_value(&player.stats);
        self.credits += value as i64;
        log::info!("sold {} for {} credits", player.name, value);
        Ok((player, value))
    }

    /// Apply the fixed payout for a match outcome and bump the match
    /// counter. Returns the payout credited.
    pub fn apply_match_outcome(&mut self, winner: MatchWinner, config: &EconomyConfig) -> u32 {
        let payout = match winner {
            MatchWinner::Home => config.win_payout,
            MatchWinner::Draw => config.draw_payout,
            MatchWinner::Away => config.loss_payout,
        };
        self.credits += payout as i64;
        self.matches_played += 1;
        payout
    }

    /// After every `payday_interval`-th match, debit the full wage bill.
    /// The balance may go negative.
    pub fn maybe_run_payday(&mut self, config: &EconomyConfig) -> Option<PaydayEvent> {
        if self.matches_played == 0 || self.matches_played % config.payday_interval != 0 {
            return None;
        }
        let amount = self.wage_bill();
        self.credits -= amount as i64;
        log::info!("payday: wage bill of {} debited, balance now {}", amount, self.credits);
        Some(PaydayEvent { amount })
    }
}
