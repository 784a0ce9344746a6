//! itemmod_sim - Headless simulator for item mod loadouts
//!
//! Loads unit loadouts (bundled or from a TOML file), prints item mod
//! descriptions, runs seeded duels and round-trips units through save data.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use itemmod_core::config::load_loadouts;
use itemmod_core::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "itemmod_sim", about = "Simulate combat with item mods")]
struct Cli {
    /// Loadout TOML file (defaults to the bundled loadouts)
    #[arg(long, global = true)]
    loadout: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every unit with its items and mod descriptions
    Describe,
    /// Run a duel between two units
    Duel {
        /// Unit that acts first
        attacker: String,
        /// Unit that acts second
        defender: String,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 100)]
        rounds: u32,
    },
    /// Save every unit to JSON and load it back
    Roundtrip {
        /// Where to write the save file
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let units = match &cli.loadout {
        Some(path) => load_loadouts(path)
            .with_context(|| format!("loading loadouts from {}", path.display()))?,
        None => itemmod_core::default_loadouts(),
    };
    info!(count = units.len(), "loaded units");

    match cli.command {
        Command::Describe => describe(&units),
        Command::Duel {
            attacker,
            defender,
            seed,
            rounds,
        } => duel(&units, &attacker, &defender, seed, rounds),
        Command::Roundtrip { out } => roundtrip(&units, out),
    }
}

fn find<'a>(units: &'a [CombatUnit], id: &str) -> Result<&'a CombatUnit> {
    match units.iter().find(|u| u.id == id) {
        Some(unit) => Ok(unit),
        None => bail!("no unit named {id:?}"),
    }
}

fn describe(units: &[CombatUnit]) -> Result<()> {
    for unit in units {
        println!(
            "{} ({:.0} life, {:.0} damage)",
            unit.id, unit.max_life, unit.base_damage
        );
        for (slot, item) in unit.items() {
            println!("  {:?}: {}", slot, item.name);
            for line in item.descriptions() {
                println!("    - {}", line);
            }
        }
    }
    Ok(())
}

fn duel(units: &[CombatUnit], attacker: &str, defender: &str, seed: u64, rounds: u32) -> Result<()> {
    let first = find(units, attacker)?;
    let second = find(units, defender)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let report = simulate_duel(first, second, rounds, &mut rng);

    println!("Rounds: {}", report.rounds);
    for (side, unit) in [
        (&report.first, &report.first_final),
        (&report.second, &report.second_final),
    ] {
        println!(
            "  {}: {} hits, {:.0} damage dealt, {} modified turns, {:.0}/{:.0} life left",
            side.unit_id,
            side.hits,
            side.damage_dealt,
            side.modified_turns,
            unit.current_life,
            unit.max_life
        );
    }
    match &report.winner {
        Some(winner) => println!("Winner: {}", winner),
        None => println!("Draw"),
    }
    Ok(())
}

fn roundtrip(units: &[CombatUnit], out: Option<PathBuf>) -> Result<()> {
    let save = serde_json::to_string_pretty(units).context("encoding units")?;
    if let Some(path) = &out {
        fs::write(path, &save).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "wrote save file");
    }

    let loaded: Vec<CombatUnit> = serde_json::from_str(&save).context("decoding units")?;
    for (before, after) in units.iter().zip(&loaded) {
        let same = before.mods().eq(after.mods());
        println!(
            "{}: {} mods, {}",
            after.id,
            after.mods().count(),
            if same { "identical" } else { "CHANGED" }
        );
        if !same {
            bail!("round trip changed the mods of {}", after.id);
        }
    }
    Ok(())
}
