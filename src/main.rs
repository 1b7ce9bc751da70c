use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workout_weights::{config::GymConfig, equipment::Equipment, gym::Gym, query::Query};

/// Resolve training weights to what your equipment can actually load.
#[derive(Parser)]
struct Args {
    /// Gym configuration (JSON). A sample home gym is used when omitted.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Log table rebuilds.
    #[arg(long, short)]
    verbose: bool,

    /// Equipment to query. Lists every piece of equipment when omitted.
    equipment: Option<String>,

    /// Weights to resolve: `55`, `55-` (at or below), `55+` (at or above),
    /// `55<` / `55>` (one step).
    #[arg(value_parser = clap::value_parser!(Query))]
    queries: Vec<Query>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            GymConfig::from_json(&json).with_context(|| format!("parsing {}", path.display()))?
        }
        None => GymConfig::default(),
    };
    let gym = config.build()?;

    match args.equipment {
        None => list(&gym),
        Some(name) if args.queries.is_empty() => show(&name, gym.get(&name)?),
        Some(name) => {
            for query in &args.queries {
                match gym.resolve(&name, query)? {
                    Some(loaded) => println!("{query}: {loaded}"),
                    None => println!("{query}: -"),
                }
            }
        }
    }

    Ok(())
}

fn list(gym: &Gym) {
    println!("Available weights:");
    for (name, equipment) in gym.iter() {
        match equipment.achievable() {
            Some(table) => println!("{name}: {:?}", table.totals()),
            None => println!("{name}: any"),
        }
    }
}

fn show(name: &str, equipment: &Equipment) {
    println!("{name}: {equipment}");
    if let Some(table) = equipment.achievable() {
        for loaded in &table {
            println!("  - {loaded}");
        }
    }
}
