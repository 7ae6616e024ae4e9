//! Opponent generation.
//!
//! Each match faces a freshly generated opposing team: a league-flavored
//! name, aggregate strength sampled around the player squad's own power
//! band (the league is competitive by construction), and an implicit
//! tactic. All draws come from the match RNG, so the opponent is fully
//! reproducible from the seed.

use super::tactics::{Tactic, ALL_TACTICS};
use super::SquadPower;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

const NAME_PREFIXES: &[&str] = &[
    "Neo-Tokyo",
    "Svalbard",
    "Vostok",
    "Night City",
    "Kowloon",
    "Luna-9",
    "Murmansk",
    "Deadline",
    "Chrome Harbor",
    "Sector Zero",
    "Arcology 12",
    "Blacksite",
];

const NAME_SUFFIXES: &[&str] = &[
    "Drifters",
    "Icebreakers",
    "Phantoms",
    "Voltage",
    "Wraiths",
    "Syndicate",
    "Overclockers",
    "Nomads",
    "Firewalls",
    "Reapers",
    "Static",
    "Outlaws",
];

/// Spread of opponent strength around the player squad's power band.
const STRENGTH_SPREAD: f64 = 12.0;

/// An opposing team for a single match.
///
/// May also be supplied by an external opponent generator; the engine
/// only requires the aggregates below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpponentProfile {
    pub name: String,
    /// Aggregate attacking power, same scale as [`SquadPower::attack`].
    pub attack: f64,
    /// Aggregate defensive power, same scale as [`SquadPower::defense`].
    pub defense: f64,
    /// The tactic the opponent implicitly lines up with.
    pub tactic: Tactic,
}

impl OpponentProfile {
    /// Generate an opponent scaled to the given squad power.
    pub fn generate<R: Rng>(rng: &mut R, power: &SquadPower) -> Self {
        let base = (power.attack + power.defense) / 2.0;
        Self {
            name: generate_name(rng),
            attack: sample_strength(rng, base),
            defense: sample_strength(rng, base),
            tactic: *ALL_TACTICS.choose(rng).unwrap_or(&Tactic::PossessionGame),
        }
    }
}

fn sample_strength<R: Rng>(rng: &mut R, base: f64) -> f64 {
    let noise = match Normal::new(0.0, STRENGTH_SPREAD) {
        Ok(dist) => dist.sample(rng),
        Err(_) => 0.0,
    };
    (base + noise).clamp(40.0, 195.0)
}

fn generate_name<R: Rng>(rng: &mut R) -> String {
    let prefix = NAME_PREFIXES.choose(rng).unwrap_or(&"Nexus");
    let suffix = NAME_SUFFIXES.choose(rng).unwrap_or(&"Eleven");
    format!("{} {}", prefix, suffix)
}
