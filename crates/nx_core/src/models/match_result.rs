//! Match outcome data structures.
//!
//! A [`MatchResult`] is the sink of the resolution pipeline: the tactic
//! engine produces the scoreline and possession split, the event feed
//! renders a narrative consistent with it, and the ledger applies the
//! payout. Results supplied by an external narrative collaborator pass
//! through [`MatchResult::validate`] before they are trusted.

use super::events::{EventType, MatchEvent};
use crate::engine::Tactic;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MatchWinner {
    Home,
    Away,
    Draw,
}

impl MatchWinner {
    /// Winner is determined strictly by score comparison; nothing else
    /// may contradict it.
    pub fn from_score(home: u8, away: u8) -> Self {
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => MatchWinner::Home,
            std::cmp::Ordering::Less => MatchWinner::Away,
            std::cmp::Ordering::Equal => MatchWinner::Draw,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub home_score: u8,
    pub away_score: u8,
    /// Generated fresh per match.
    pub opponent_name: String,
    /// Home team's share, 0..=100.
    pub possession: u8,
    pub winner: MatchWinner,
    pub events: Vec<MatchEvent>,
    pub summary: String,
}

impl MatchResult {
    /// Consistency checks applied to every result, whether produced by
    /// the owned engine (self-check) or by an external collaborator:
    ///
    /// - `winner` matches the score comparison
    /// - goal events count exactly `home_score + away_score`
    /// - the feed is non-empty and minutes are non-decreasing
    pub fn validate(&self) -> Result<()> {
        if self.winner != MatchWinner::from_score(self.home_score, self.away_score) {
            return Err(CoreError::InconsistentMatchResult(format!(
                "winner {:?} contradicts score {}-{}",
                self.winner, self.home_score, self.away_score
            )));
        }
        let goals = self.events.iter().filter(|e| e.is_goal()).count();
        let expected = self.home_score as usize + self.away_score as usize;
        if goals != expected {
            return Err(CoreError::InconsistentMatchResult(format!(
                "{} goal events for a {}-{} scoreline",
                goals, self.home_score, self.away_score
            )));
        }
        if self.events.is_empty() {
            return Err(CoreError::InconsistentMatchResult("empty event feed".to_string()));
        }
        if self.events.windows(2).any(|w| w[0].minute > w[1].minute) {
            return Err(CoreError::InconsistentMatchResult(
                "event minutes must be non-decreasing".to_string(),
            ));
        }
        if self.possession > 100 {
            return Err(CoreError::InconsistentMatchResult(format!(
                "possession {} out of range",
                self.possession
            )));
        }
        Ok(())
    }

    pub fn goal_events(&self) -> impl Iterator<Item = &MatchEvent> {
        self.events.iter().filter(|e| e.event_type == EventType::Goal)
    }
}

/// Compact history entry kept per simulated match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchRecord {
    pub opponent_name: String,
    pub home_score: u8,
    pub away_score: u8,
    pub winner: MatchWinner,
    pub tactic: Tactic,
    pub payout: u32,
    /// Wage bill debited if this match triggered a payday.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payday_amount: Option<u32>,
}
