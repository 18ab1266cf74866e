//! Somnia serve command for running the HTTP server

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use somnia_core::SqliteStore;
use somnia_server::{AppState, ServerConfig, SomniaServer};
use tracing::info;

/// Default port for the somnia server
pub const DEFAULT_PORT: u16 = 4000;
/// Default host for the somnia server
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Environment variable holding the token-signing secret
const TOKEN_SECRET_ENV: &str = "SOMNIA_TOKEN_SECRET";

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Database file (defaults to the per-user data directory)
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    let secret = std::env::var(TOKEN_SECRET_ENV)
        .with_context(|| format!("{TOKEN_SECRET_ENV} must be set to sign identity tokens"))?;

    let db_path = super::resolve_db_path(args.db)?;
    let store = Arc::new(
        SqliteStore::open(&db_path)
            .with_context(|| format!("failed to open database {}", db_path.display()))?,
    );

    let state = AppState::new(store, secret.as_bytes());
    let config = ServerConfig::new(args.host, args.port);

    info!("Starting somnia server on {}", config.addr());
    SomniaServer::new(config, state)
        .run()
        .await
        .context("server exited with an error")
}
