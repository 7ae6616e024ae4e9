//! Command-line driver for the Nexus league engine.
//!
//! Smoke-level tooling: scout candidates, resolve single matches, or run
//! a short campaign with the full ledger, straight from a seed.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use nx_core::{
    seed_squad, GameState, MatchEngine, MatchPlan, MatchRecord, MatchSource, OwnedMatchSimulator,
    Position, ProceduralScout, SaveManager, Tactic,
};

#[derive(Parser)]
#[command(name = "nx", about = "Nexus league engine driver", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scout candidates with the procedural generator
    Scout {
        /// RNG seed for the scouting network
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Restrict to one position (forward, midfielder, defender, goalkeeper)
        #[arg(long)]
        position: Option<String>,
        /// Number of candidates to generate
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
    /// Resolve a single match with the seed squad
    Match {
        /// RNG seed for the match
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Team tactic (all_out_attack, possession_game, park_the_bus, counter_attack)
        #[arg(long, default_value = "counter_attack")]
        tactic: String,
        /// Emit the full result as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Run a short campaign with payouts and paydays
    Season {
        /// Base RNG seed; each match advances it
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Number of matches to play
        #[arg(long, default_value_t = 6)]
        matches: u32,
        /// Team tactic for every match
        #[arg(long, default_value = "possession_game")]
        tactic: String,
        /// Persist the final state to this save slot
        #[arg(long)]
        save_slot: Option<u8>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Scout { seed, position, count } => run_scout(seed, position, count),
        Command::Match { seed, tactic, json } => run_match(seed, &tactic, json),
        Command::Season { seed, matches, tactic, save_slot } => {
            run_season(seed, matches, &tactic, save_slot)
        }
    }
}

fn run_scout(seed: u64, position: Option<String>, count: u32) -> anyhow::Result<()> {
    let position = position
        .map(|p| p.parse::<Position>())
        .transpose()
        .context("invalid position")?;

    let mut scout = ProceduralScout::from_seed(seed);
    for _ in 0..count {
        let player = scout.scout_recruit(position).context("scouting failed")?;
        let cost = nx_core::economy::signing_cost(&player.stats);
        println!(
            "{} ({}, {}) — {} | overall {} | cost {} | salary {}",
            player.name,
            player.position,
            player.origin,
            player.rarity,
            player.overall(),
            cost,
            player.salary
        );
    }
    Ok(())
}

fn run_match(seed: u64, tactic: &str, json: bool) -> anyhow::Result<()> {
    let tactic: Tactic = tactic.parse().context("invalid tactic")?;
    let plan = MatchPlan { squad: seed_squad(), tactic, seed, opponent: None };
    let result = MatchEngine::new(plan)?.simulate()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("vs {} — {} : {}", result.opponent_name, result.home_score, result.away_score);
    println!("possession {}% | {:?}", result.possession, result.winner);
    for event in &result.events {
        println!("  {:>2}' {}", event.minute, event.description);
    }
    println!("{}", result.summary);
    Ok(())
}

fn run_season(seed: u64, matches: u32, tactic: &str, save_slot: Option<u8>) -> anyhow::Result<()> {
    if matches == 0 {
        bail!("a season needs at least one match");
    }
    let tactic: Tactic = tactic.parse().context("invalid tactic")?;

    let mut game = GameState::new_campaign();
    let mut source = OwnedMatchSimulator::from_seed(seed);

    for round in 1..=matches {
        let result = source.request_match_result(&game.economy.squad, tactic)?;
        let payout = game.economy.apply_match_outcome(result.winner, &game.config);
        let payday = game.economy.maybe_run_payday(&game.config);

        print!(
            "R{:<2} vs {:<24} {} : {}  (+{})",
            round, result.opponent_name, result.home_score, result.away_score, payout
        );
        if let Some(event) = payday {
            print!("  payday -{}", event.amount);
        }
        println!();

        game.match_history.push(MatchRecord {
            opponent_name: result.opponent_name,
            home_score: result.home_score,
            away_score: result.away_score,
            winner: result.winner,
            tactic,
            payout,
            payday_amount: payday.map(|p| p.amount),
        });
    }

    println!(
        "final credits: {} | wage bill: {} | matches: {}",
        game.economy.credits,
        game.economy.wage_bill(),
        game.economy.matches_played
    );

    if let Some(slot) = save_slot {
        SaveManager::new().save_to_slot(slot, &game.to_save())?;
        println!("saved to slot {}", slot);
    }
    Ok(())
}
