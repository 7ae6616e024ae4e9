//! Narrative event feed generation.
//!
//! Given a resolved scoreline, renders a time-ordered feed that is
//! internally consistent with it: exactly one goal event per goal
//! scored, plus a handful of filler moments (chances, cards, tactical
//! shifts, the occasional injury) interleaved by minute.

use super::opponent::OpponentProfile;
use crate::models::{EventType, MatchEvent, Player};
use rand::seq::SliceRandom;
use rand::Rng;

const HOME_GOAL_TEMPLATES: &[&str] = &[
    "GOAL! {scorer} rifles one into the top corner",
    "GOAL! {scorer} finishes a razor-sharp break",
    "GOAL! {scorer} threads it through the keeper's legs",
    "GOAL! {scorer} hammers home from the edge of the box",
    "GOAL! {scorer} glitches past two markers and slots it in",
];

const AWAY_GOAL_TEMPLATES: &[&str] = &[
    "Goal for {opponent} — a cold finish on the counter",
    "{opponent} punch through the back line and score",
    "A deflected strike puts {opponent} on the board",
    "{opponent} convert from close range after a scramble",
];

const CHANCE_TEMPLATES: &[&str] = &[
    "{player} smashes a volley off the crossbar",
    "Huge chance — {player} drags the shot wide",
    "The {opponent} keeper claws {player}'s header off the line",
];

const CARD_TEMPLATES: &[&str] = &[
    "{player} is booked for a late challenge",
    "Yellow card — {player} scythes down the winger",
    "The referee books a {opponent} midfielder for dissent",
];

const TACTICAL_TEMPLATES: &[&str] = &[
    "{opponent} drop deeper and pack the midfield",
    "The gaffer waves the full-backs forward",
    "{opponent} switch to a high press after the restart",
];

const INJURY_TEMPLATES: &[&str] = &[
    "{player} limps off after a heavy collision",
    "Treatment on the pitch — {player} shakes it off and plays on",
];

/// Render the narrative feed for a resolved score.
///
/// Returns events sorted by minute; filtered to goals, the feed has
/// exactly `home_score + away_score` entries.
pub fn generate_event_feed<R: Rng>(
    rng: &mut R,
    home_score: u8,
    away_score: u8,
    squad: &[Player],
    opponent: &OpponentProfile,
) -> Vec<MatchEvent> {
    let mut events = Vec::new();

    for _ in 0..home_score {
        let scorer = pick_scorer(rng, squad);
        events.push(MatchEvent {
            minute: rng.gen_range(1..=90),
            description: fill(pick(rng, HOME_GOAL_TEMPLATES), &scorer, &opponent.name),
            event_type: EventType::Goal,
        });
    }
    for _ in 0..away_score {
        events.push(MatchEvent {
            minute: rng.gen_range(1..=90),
            description: fill(pick(rng, AWAY_GOAL_TEMPLATES), "", &opponent.name),
            event_type: EventType::Goal,
        });
    }

    for _ in 0..rng.gen_range(1..=4u8) {
        let (event_type, templates) = match rng.gen_range(0..10u8) {
            0..=3 => (EventType::Chance, CHANCE_TEMPLATES),
            4..=6 => (EventType::Card, CARD_TEMPLATES),
            7..=8 => (EventType::Tactical, TACTICAL_TEMPLATES),
            _ => (EventType::Injury, INJURY_TEMPLATES),
        };
        let player = random_player_name(rng, squad);
        events.push(MatchEvent {
            minute: rng.gen_range(1..=90),
            description: fill(pick(rng, templates), &player, &opponent.name),
            event_type,
        });
    }

    events.sort_by_key(|e| e.minute);
    events
}

/// Short dramatic wrap-up for the result screen.
pub fn generate_summary<R: Rng>(
    rng: &mut R,
    home_score: u8,
    away_score: u8,
    possession: u8,
    opponent: &OpponentProfile,
) -> String {
    let scoreline = format!("{}-{}", home_score, away_score);
    let template = if home_score > away_score {
        if home_score - away_score >= 3 {
            pick(
                rng,
                &[
                    "A statement win. {opponent} were dismantled {score} under the arena lights.",
                    "Total control from the first whistle — {opponent} fall {score}.",
                ],
            )
        } else {
            pick(
                rng,
                &[
                    "A gritty {score} win, sealed in the dying minutes against {opponent}.",
                    "The plan held. {opponent} pushed hard but the {score} stood.",
                ],
            )
        }
    } else if home_score < away_score {
        pick(
            rng,
            &[
                "A rough night. {opponent} took it {score} and the dressing room knows it.",
                "{opponent} read every move and walked away with the {score}.",
            ],
        )
    } else {
        pick(
            rng,
            &[
                "Honors even at {score}. Neither side blinked against {opponent}.",
                "A tense {score} stalemate with {opponent} that settled nothing.",
            ],
        )
    };

    let mut summary = template.replace("{opponent}", &opponent.name).replace("{score}", &scoreline);
    if possession >= 60 {
        summary.push_str(" The ball barely left our half of the grid.");
    } else if possession <= 40 {
        summary.push_str(" We survived long stretches without the ball.");
    }
    summary
}

/// Goal credit is weighted by shooting, so the sharpshooters headline
/// the feed more often.
fn pick_scorer<R: Rng>(rng: &mut R, squad: &[Player]) -> String {
    squad
        .choose_weighted(rng, |p| p.stats.shooting as u32 + 1)
        .map(|p| p.name.clone())
        .unwrap_or_else(|_| "The captain".to_string())
}

fn random_player_name<R: Rng>(rng: &mut R, squad: &[Player]) -> String {
    squad.choose(rng).map(|p| p.name.clone()).unwrap_or_else(|| "The captain".to_string())
}

fn pick<'a, R: Rng>(rng: &mut R, templates: &[&'a str]) -> &'a str {
    templates.choose(rng).copied().unwrap_or("")
}

fn fill(template: &str, player: &str, opponent: &str) -> String {
    template.replace("{scorer}", player).replace("{player}", player).replace("{opponent}", opponent)
}
