//! Somnia seed command for installing the question catalog

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use somnia_core::{SqliteStore, seed};
use tracing::info;

/// Arguments for the seed command
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Database file (defaults to the per-user data directory)
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Run the seed command. Replaces any existing catalog.
pub fn run(args: SeedArgs) -> Result<()> {
    let db_path = super::resolve_db_path(args.db)?;
    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("failed to open database {}", db_path.display()))?;

    let count = seed::seed_catalog(&store).context("failed to seed question catalog")?;
    info!("Seeded {} questions into {}", count, db_path.display());
    println!("Questions seeded");
    Ok(())
}
