//! CLI subcommands

pub mod seed;
pub mod serve;

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default database location: <data dir>/somnia/somnia.db
pub fn default_db_path() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .context("could not determine data directory")?
        .join("somnia");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create data directory {}", dir.display()))?;
    Ok(dir.join("somnia.db"))
}

/// Resolve the database path, creating the default directory if needed
pub fn resolve_db_path(db: Option<PathBuf>) -> Result<PathBuf> {
    match db {
        Some(path) => Ok(path),
        None => default_db_path(),
    }
}
