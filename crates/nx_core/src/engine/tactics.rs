//! Tactic definitions and the fixed advantage cycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The four selectable team strategies. No sub-parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum Tactic {
    AllOutAttack,
    PossessionGame,
    ParkTheBus,
    CounterAttack,
}

pub const ALL_TACTICS: [Tactic; 4] =
    [Tactic::AllOutAttack, Tactic::PossessionGame, Tactic::ParkTheBus, Tactic::CounterAttack];

/// Outcome of a tactic matchup from the home side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matchup {
    Favorable,
    Neutral,
    Unfavorable,
}

impl Matchup {
    /// Multiplier applied to effective attack power.
    pub fn attack_modifier(&self) -> f64 {
        match self {
            Matchup::Favorable => 1.15,
            Matchup::Neutral => 1.0,
            Matchup::Unfavorable => 0.85,
        }
    }
}

impl Tactic {
    /// The non-transitive dominance cycle:
    /// CounterAttack beats AllOutAttack, AllOutAttack beats
    /// PossessionGame, PossessionGame beats ParkTheBus, ParkTheBus beats
    /// CounterAttack.
    pub fn beats(&self) -> Tactic {
        match self {
            Tactic::CounterAttack => Tactic::AllOutAttack,
            Tactic::AllOutAttack => Tactic::PossessionGame,
            Tactic::PossessionGame => Tactic::ParkTheBus,
            Tactic::ParkTheBus => Tactic::CounterAttack,
        }
    }

    pub fn matchup(&self, opponent: Tactic) -> Matchup {
        if self.beats() == opponent {
            Matchup::Favorable
        } else if opponent.beats() == *self {
            Matchup::Unfavorable
        } else {
            Matchup::Neutral
        }
    }
}

impl fmt::Display for Tactic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tactic::AllOutAttack => "All-Out Attack",
            Tactic::PossessionGame => "Possession Game",
            Tactic::ParkTheBus => "Park the Bus",
            Tactic::CounterAttack => "Counter-Attack",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Tactic {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "all_out_attack" => Ok(Tactic::AllOutAttack),
            "possession_game" => Ok(Tactic::PossessionGame),
            "park_the_bus" => Ok(Tactic::ParkTheBus),
            "counter_attack" => Ok(Tactic::CounterAttack),
            other => Err(CoreError::DeserializationError(format!("unknown tactic: {}", other))),
        }
    }
}
