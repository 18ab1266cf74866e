//! somnia-core: Core library for the somnia sleep-efficiency service
//!
//! This crate provides the foundational components for somnia:
//!
//! - **Scoring** - [`scoring::score`], the pure sleep-efficiency function
//!   over bedtime, wake time and hours slept
//! - **Assessment lifecycle** - [`AssessmentService`] for the
//!   start / answer / complete flow
//! - **Authentication** - [`Authenticator`] and [`TokenService`] for
//!   password credentials and two-hour bearer tokens
//! - **Persistence** - narrow store traits served by [`SqliteStore`]
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use somnia_core::{AssessmentService, SqliteStore, seed};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(SqliteStore::open("somnia.db")?);
//!     seed::seed_catalog(store.as_ref())?;
//!
//!     let assessments = AssessmentService::new(store.clone(), store.clone(), store.clone());
//!     let run = assessments.start("some-user-id")?;
//!     println!("Assessment started: {}", run.id);
//!     Ok(())
//! }
//! ```

pub mod assessment;
pub mod auth;
pub mod scoring;
pub mod seed;
pub mod store;
pub mod types;

// Re-export key types for convenience
pub use assessment::{AssessmentError, AssessmentService};
pub use auth::{AuthError, Authenticator, TokenClaims, TokenService};
pub use scoring::ScoreError;
pub use store::{
    AnswerLedger, AssessmentStore, CredentialStore, QuestionCatalog, SqliteStore, StoreError,
};
pub use types::{Answer, Assessment, Question, QuestionKind, User};
