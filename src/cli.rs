use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use placepicker_boundary as json;
use placepicker_core::gateways::location_cache::LocationCache;
use placepicker_gateways::{
    location_cache::StoredLocation,
    storage::{JsonFileStore, MemoryStore},
};

use crate::{
    config::Config,
    session::{self, Bounded, Script},
};

#[derive(Parser)]
#[command(version, about = "Headless driver for the place picker map")]
struct Args {
    /// Configuration file
    #[arg(long, short, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay recorded widget events and print the resulting state
    Replay {
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,
    },
    /// Print the cached location
    Cache,
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::try_load_from_file_or_default(args.config.as_deref())?;
    match args.command {
        Command::Replay { script } => {
            let script = Script::try_load(&script)?;
            let state = match &cfg.cache.dir {
                Some(dir) => replay(file_cache(&cfg, dir)?, &cfg, script).await,
                None => replay(memory_cache(&cfg), &cfg, script).await,
            };
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        Command::Cache => {
            let pos = match &cfg.cache.dir {
                Some(dir) => file_cache(&cfg, dir)?.load(),
                None => {
                    log::warn!("No cache directory configured");
                    memory_cache(&cfg).load()
                }
            };
            println!("{}", serde_json::to_string(&json::Coordinate::from(pos))?);
        }
    }
    Ok(())
}

async fn replay<C>(cache: C, cfg: &Config, script: Script) -> session::SessionState
where
    C: LocationCache,
{
    let probe = Bounded::new(cfg.geolocation.probe, cfg.geolocation.timeout);
    session::replay(cache, cfg.map.zoom, &probe, script).await
}

fn file_cache(cfg: &Config, dir: &Path) -> Result<StoredLocation<JsonFileStore>> {
    let store = JsonFileStore::try_new(dir)
        .with_context(|| format!("Unable to open JSON file store {}", dir.display()))?;
    log::info!("Use JSON file store ({})", store.path().display());
    Ok(StoredLocation::new(
        store,
        cfg.cache.storage_key.as_str(),
        cfg.map.default_position,
    ))
}

fn memory_cache(cfg: &Config) -> StoredLocation<MemoryStore> {
    StoredLocation::new(
        MemoryStore::default(),
        cfg.cache.storage_key.as_str(),
        cfg.map.default_position,
    )
}
