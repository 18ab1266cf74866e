//! Shared application state for the somnia server

use std::sync::Arc;

use chrono::{DateTime, Utc};
use somnia_core::{AssessmentService, Authenticator, SqliteStore, TokenService};

/// Shared application state accessible by all handlers
#[derive(Clone)]
pub struct AppState {
    /// The SQLite store serving every persistence trait
    pub store: Arc<SqliteStore>,
    /// Issues and verifies bearer tokens
    pub tokens: Arc<TokenService>,
    /// Signup and login
    pub authenticator: Arc<Authenticator>,
    /// Assessment lifecycle orchestration
    pub assessments: Arc<AssessmentService>,
    /// When the server started
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Wire up all services over one store and one token secret.
    pub fn new(store: Arc<SqliteStore>, token_secret: &[u8]) -> Self {
        let tokens = Arc::new(TokenService::new(token_secret));
        let authenticator = Arc::new(Authenticator::new(store.clone(), tokens.clone()));
        let assessments = Arc::new(AssessmentService::new(
            store.clone(),
            store.clone(),
            store.clone(),
        ));

        Self {
            store,
            tokens,
            authenticator,
            assessments,
            started_at: Utc::now(),
        }
    }

    /// In-memory state (for testing)
    pub fn in_memory(token_secret: &[u8]) -> Result<Self, somnia_core::StoreError> {
        let store = Arc::new(SqliteStore::open_in_memory()?);
        Ok(Self::new(store, token_secret))
    }

    /// Returns how long the server has been running
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_state_wires_services() {
        let state = AppState::in_memory(b"test-secret").unwrap();
        assert!(state.uptime_seconds() >= 0);

        let assessment = state.assessments.start("user-1").unwrap();
        assert!(assessment.score.is_none());
    }
}
