//! Owned procedural profile generator.
//!
//! Replaces the hosted generative collaborator with a seeded pipeline:
//! roll a power band, shape the six attributes around it with
//! position-specific biases, then derive rarity from the resulting
//! overall so profile and tier can never disagree.

use super::{PlayerProfile, ProfileSource};
use crate::error::Result;
use crate::models::{Player, PlayerStats, Position, Rarity};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::{Builder, Uuid};

const FIRST_NAMES: &[&str] = &[
    "Kaelen", "Jaxxon", "Vex", "Mirela", "Dragan", "Sable", "Yuki", "Orsolya", "Castor", "Nadira",
    "Ilya", "Zephyr", "Ramiel", "Tova", "Ember", "Kost", "Anouk", "Severin", "Lior", "Petra",
];

const SURNAMES: &[&str] = &[
    "Vane", "Steel", "Okonkwo", "Reyes-9", "Halvorsen", "Ashgrid", "Mirov", "Quell", "Farkas",
    "Delacroix", "Onyx", "Stattik", "Virelli", "Moreau", "Kzin", "Voss", "Hollow", "Brandt",
];

const ORIGINS: &[&str] = &[
    "Undercity Sector 7",
    "Neo-Reykjavik",
    "The Digital Void",
    "Port Kassandra",
    "The Flooded Quarter",
    "Tashkent Sprawl",
    "New Palau Atoll",
    "Helsinki Verge",
    "The Saltworks",
    "Orbital Habitat Ceres-3",
    "Free State of Vanta",
    "The Rust Belt Arcologies",
];

const BACKSTORIES: &[&str] = &[
    "Learned to feint by dodging security drones in the shanty blocks of {origin}.",
    "Won a street tournament in {origin} playing barefoot on cracked ferrocrete.",
    "Scouted off a pirate broadcast — nobody in {origin} would say where the footage came from.",
    "Spent two seasons banned from the {origin} circuit for a trick nobody could prove was illegal.",
    "Trained alone on a rooftop pitch in {origin}, visible only to the surveillance grid.",
    "Former courier in {origin}. Outran things far worse than full-backs.",
    "Keeps a scrapbook of every defender left sitting on the floor back in {origin}.",
    "Nobody in {origin} remembers signing them up. The league records insist otherwise.",
];

/// Per-attribute offsets applied on top of the rolled power band, in
/// stat order (pace, shooting, passing, dribbling, defense, physical).
fn position_bias(position: Position) -> [i32; 6] {
    match position {
        Position::Forward => [8, 12, -2, 6, -18, -4],
        Position::Midfielder => [0, 2, 12, 6, -6, -8],
        Position::Defender => [-2, -16, -2, -6, 12, 10],
        Position::Goalkeeper => [-6, -20, -4, -10, 14, 8],
    }
}

/// Seeded procedural scout. Same seed, same sequence of recruits.
#[derive(Debug, Clone)]
pub struct ProceduralScout {
    rng: ChaCha8Rng,
}

impl ProceduralScout {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Request a profile and assemble it into a roster-ready player with
    /// a deterministic id drawn from the scout's RNG.
    pub fn scout_recruit(&mut self, position: Option<Position>) -> Result<Player> {
        let profile = self.request_player_profile(position)?;
        let id = self.next_id().to_string();
        Ok(profile.into_player(id))
    }

    fn next_id(&mut self) -> Uuid {
        Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }

    fn roll_target_overall(&mut self) -> u8 {
        // Band odds: 50% common, 30% rare, 15% legendary, 5% glitch.
        let roll = self.rng.gen::<f32>();
        if roll < 0.05 {
            self.rng.gen_range(93..=99)
        } else if roll < 0.20 {
            self.rng.gen_range(82..=93)
        } else if roll < 0.50 {
            self.rng.gen_range(62..=78)
        } else {
            self.rng.gen_range(40..=58)
        }
    }

    fn roll_attribute(&mut self, target: u8, bias: i32) -> u8 {
        let jitter = self.rng.gen_range(-7..=7);
        (target as i32 + bias + jitter).clamp(1, 100) as u8
    }
}

impl ProfileSource for ProceduralScout {
    fn request_player_profile(&mut self, position: Option<Position>) -> Result<PlayerProfile> {
        let position = position.unwrap_or_else(|| {
            *[Position::Forward, Position::Midfielder, Position::Defender, Position::Goalkeeper]
                .choose(&mut self.rng)
                .unwrap_or(&Position::Midfielder)
        });

        let target = self.roll_target_overall();
        let bias = position_bias(position);
        let stats = PlayerStats {
            pace: self.roll_attribute(target, bias[0]),
            shooting: self.roll_attribute(target, bias[1]),
            passing: self.roll_attribute(target, bias[2]),
            dribbling: self.roll_attribute(target, bias[3]),
            defense: self.roll_attribute(target, bias[4]),
            physical: self.roll_attribute(target, bias[5]),
        };

        let first = FIRST_NAMES.choose(&mut self.rng).unwrap_or(&"Nova");
        let last = SURNAMES.choose(&mut self.rng).unwrap_or(&"Null");
        let origin = ORIGINS.choose(&mut self.rng).unwrap_or(&"the outer grid");
        let backstory = BACKSTORIES
            .choose(&mut self.rng)
            .unwrap_or(&"Appeared on the league radar overnight.")
            .replace("{origin}", origin);

        let profile = PlayerProfile {
            name: format!("{} {}", first, last),
            origin: origin.to_string(),
            age: self.rng.gen_range(17..=34),
            position,
            stats,
            backstory,
            rarity: Rarity::from_overall(stats.overall()),
        };
        profile.validate()?;
        Ok(profile)
    }
}
