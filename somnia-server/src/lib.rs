//! somnia-server - HTTP server for the somnia sleep-efficiency service
//!
//! This crate owns the axum router, the bearer-token middleware and the
//! shared [`AppState`] wiring the somnia-core services over one SQLite
//! store.

mod error;
pub mod http;
pub mod middleware;
mod state;

use tokio::net::TcpListener;

pub use error::ApiError;
pub use http::create_router;
pub use middleware::CurrentUser;
pub use state::AppState;

use thiserror::Error;

/// Errors from running the server itself
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to the specified address
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop failed
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with the specified host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// The bind address as host:port
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// The main somnia server
pub struct SomniaServer {
    config: ServerConfig,
    state: AppState,
}

impl SomniaServer {
    /// Create a new server over prepared application state
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Get the server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the shared application state
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Run the server, binding to the configured address
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: addr.clone(),
                source: e,
            })?;

        tracing::info!("somnia server listening on {}", addr);

        let router = create_router(self.state);
        axum::serve(listener, router)
            .await
            .map_err(ServerError::Serve)?;

        Ok(())
    }
}
