//! SwitchedHit operator CLI.
//!
//! Generates squads against the in-memory reference store and checks
//! lineup files, printing engine JSON for inspection.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sh_core::{
    validate_batting_order, validate_bowling_rotation, BattingOrder, BowlingRotation, MemoryStore,
    Player, RemoteNameProvider, SportVariant, Squad, TeamService,
};

#[derive(Parser)]
#[command(name = "sh_cli")]
#[command(about = "Generate and inspect SwitchedHit squads", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a squad and print it as JSON
    Generate {
        #[arg(long, default_value_t = 1)]
        team_id: i64,

        /// Sport variant: cricket or football
        #[arg(long, default_value = "cricket")]
        variant: String,

        /// Fixed seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Fetch names from the remote provider (honors SH_NAME_API_URL)
        #[arg(long, default_value_t = false)]
        remote_names: bool,

        /// Print the team-overview summary instead of the raw squad
        #[arg(long, default_value_t = false)]
        summary: bool,
    },

    /// Validate a batting order file against a squad file
    CheckBatting {
        /// Squad JSON (array of players, as printed by `generate`)
        #[arg(long)]
        squad: PathBuf,

        /// Batting order JSON (array of player ids)
        #[arg(long)]
        order: PathBuf,
    },

    /// Validate a bowling rotation file against a squad file
    CheckBowling {
        /// Squad JSON (array of players, as printed by `generate`)
        #[arg(long)]
        squad: PathBuf,

        /// Rotation JSON (array of 20 player ids or nulls)
        #[arg(long)]
        rotation: PathBuf,
    },
}

fn load_squad(path: &PathBuf) -> Result<Squad> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading squad file {}", path.display()))?;
    let players: Vec<Player> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    let team_id = players.first().map(|p| p.team_id).unwrap_or_default();
    Ok(Squad::new(team_id, players))
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { team_id, variant, seed, remote_names, summary } => {
            let Some(variant) = SportVariant::parse(&variant) else {
                bail!("unknown variant '{variant}' (expected cricket or football)");
            };

            let store = Arc::new(MemoryStore::new());
            let mut service = TeamService::new(store, variant);
            if remote_names {
                let provider = RemoteNameProvider::from_env()
                    .map_err(|e| anyhow::anyhow!("building name provider: {e}"))?;
                service = service.with_remote_names(Arc::new(provider));
            }

            let players = match seed {
                Some(seed) => service.generate_squad_seeded(team_id, seed),
                None => service.generate_squad(team_id),
            }
            .context("squad generation failed")?;

            if summary {
                let summary = Squad::new(team_id, players).summary();
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&players)?);
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::CheckBatting { squad, order } => {
            let squad = load_squad(&squad)?;
            let raw = fs::read_to_string(&order)
                .with_context(|| format!("reading order file {}", order.display()))?;
            let order: BattingOrder = serde_json::from_str(&raw).context("parsing order file")?;

            match validate_batting_order(&order, &squad) {
                Ok(()) => {
                    println!("accepted");
                    Ok(ExitCode::SUCCESS)
                }
                Err(reason) => {
                    println!("rejected ({}): {reason}", reason.code());
                    Ok(ExitCode::FAILURE)
                }
            }
        }

        Commands::CheckBowling { squad, rotation } => {
            let squad = load_squad(&squad)?;
            let raw = fs::read_to_string(&rotation)
                .with_context(|| format!("reading rotation file {}", rotation.display()))?;
            let rotation: BowlingRotation =
                serde_json::from_str(&raw).context("parsing rotation file")?;

            match validate_bowling_rotation(&rotation, &squad) {
                Ok(()) => {
                    println!("accepted");
                    Ok(ExitCode::SUCCESS)
                }
                Err(reason) => {
                    println!("rejected ({}): {reason}", reason.code());
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    run()
}
