//! Player roster types: bounded attributes, positions, rarity tiers.

use crate::error::{CoreError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six bounded attributes of a player, each in 0..=100.
///
/// Construction goes through [`PlayerStats::new`], which rejects
/// out-of-range values. Deserialized stats (e.g. from an external
/// scouting collaborator) must be re-checked with [`PlayerStats::validate`]
/// before they enter the roster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerStats {
    pub pace: u8,
    pub shooting: u8,
    pub passing: u8,
    pub dribbling: u8,
    pub defense: u8,
    pub physical: u8,
}

impl PlayerStats {
    pub fn new(
        pace: u8,
        shooting: u8,
        passing: u8,
        dribbling: u8,
        defense: u8,
        physical: u8,
    ) -> Result<Self> {
        let stats = Self { pace, shooting, passing, dribbling, defense, physical };
        stats.validate()?;
        Ok(stats)
    }

    /// Check every attribute is within 0..=100.
    pub fn validate(&self) -> Result<()> {
        for (attribute, value) in self.fields() {
            if value > 100 {
                return Err(CoreError::InvalidStats { attribute, value });
            }
        }
        Ok(())
    }

    /// Overall rating: arithmetic mean of the six attributes, rounded
    /// half-up.
    pub fn overall(&self) -> u8 {
        let sum: u16 = self.fields().iter().map(|&(_, v)| v as u16).sum();
        ((sum + 3) / 6) as u8
    }

    fn fields(&self) -> [(&'static str, u8); 6] {
        [
            ("pace", self.pace),
            ("shooting", self.shooting),
            ("passing", self.passing),
            ("dribbling", self.dribbling),
            ("defense", self.defense),
            ("physical", self.physical),
        ]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Forward,
    Midfielder,
    Defender,
    Goalkeeper,
}

impl Position {
    /// Cosmetic accent color for the roster card, keyed by position.
    pub fn avatar_color(&self) -> &'static str {
        match self {
            Position::Forward => "#f43f5e",
            Position::Defender => "#06b6d4",
            Position::Midfielder | Position::Goalkeeper => "#8b5cf6",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Position::Forward => "Forward",
            Position::Midfielder => "Midfielder",
            Position::Defender => "Defender",
            Position::Goalkeeper => "Goalkeeper",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Position {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "forward" => Ok(Position::Forward),
            "midfielder" => Ok(Position::Midfielder),
            "defender" => Ok(Position::Defender),
            "goalkeeper" => Ok(Position::Goalkeeper),
            other => Err(CoreError::DeserializationError(format!("unknown position: {}", other))),
        }
    }
}

/// Rarity tiers, ordered by ascending power band.
///
/// Only salary computation consumes the tier (via [`Rarity::multiplier`]);
/// signing cost and sell value depend on overall alone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
    Glitch,
}

impl Rarity {
    /// Salary multiplier per tier.
    pub fn multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Rare => 1.3,
            Rarity::Legendary => 1.8,
            Rarity::Glitch => 2.5,
        }
    }

    /// Classify a rating into its tier band.
    ///
    /// Bands: Common < 60, Rare < 80, Legendary < 95, Glitch otherwise.
    pub fn from_overall(overall: u8) -> Self {
        match overall {
            0..=59 => Rarity::Common,
            60..=79 => Rarity::Rare,
            80..=94 => Rarity::Legendary,
            _ => Rarity::Glitch,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
            Rarity::Glitch => "Glitch",
        };
        write!(f, "{}", name)
    }
}

/// A rostered (or scouted, not-yet-signed) player.
///
/// `id` is unique and immutable once created. The descriptive fields
/// (`name`, `origin`, `backstory`) are opaque to the engine; no rule
/// depends on them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub age: u8,
    pub position: Position,
    pub stats: PlayerStats,
    pub backstory: String,
    pub rarity: Rarity,
    /// Cosmetic, derived from position at creation.
    pub avatar_color: String,
    /// Periodic wage cost, debited on payday.
    pub salary: u32,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Player {
    pub fn overall(&self) -> u8 {
        self.stats.overall()
    }
}
