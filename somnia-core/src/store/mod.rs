//! Persistence interfaces and the SQLite-backed store
//!
//! The rest of the crate only sees the four narrow traits below. The
//! lifecycle and auth services hold `Arc`s of trait objects, so tests can
//! swap in whatever they need; in practice everything is served by one
//! [`SqliteStore`].

mod error;
mod schema;
mod sqlite;

pub use error::StoreError;
pub use sqlite::SqliteStore;

use chrono::{DateTime, Utc};

use crate::types::{Answer, Assessment, Question, User};

/// User records keyed by unique nickname.
pub trait CredentialStore: Send + Sync {
    fn create_user(&self, user: &User) -> Result<(), StoreError>;
    fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>, StoreError>;
}

/// The fixed, ordered question sequence.
pub trait QuestionCatalog: Send + Sync {
    fn insert_question(&self, question: &Question) -> Result<(), StoreError>;
    /// All questions in ordinal order.
    fn list_questions(&self) -> Result<Vec<Question>, StoreError>;
    fn find_question(&self, id: &str) -> Result<Option<Question>, StoreError>;
    /// Drop the current catalog and install a new one (seeding).
    fn replace_all(&self, questions: &[Question]) -> Result<(), StoreError>;
}

/// Append-only store of submitted answers.
///
/// Answers are never updated or deleted, and `answers_for_assessment` must
/// return them in insertion order: completion resolves duplicate
/// submissions for the same question by letting the later record win.
pub trait AnswerLedger: Send + Sync {
    fn append_answer(&self, answer: &Answer) -> Result<(), StoreError>;
    fn answers_for_assessment(&self, assessment_id: &str) -> Result<Vec<Answer>, StoreError>;
    /// The most common answer texts across all assessments, most frequent
    /// first, for the analytics surface.
    fn top_answers(&self, limit: u32) -> Result<Vec<(String, u64)>, StoreError>;
}

/// Assessment runs and their single completion update.
pub trait AssessmentStore: Send + Sync {
    fn create_assessment(&self, assessment: &Assessment) -> Result<(), StoreError>;
    /// Set the completion timestamp and score, returning the updated row.
    /// Returns `None` when no assessment with this id exists.
    fn finish_assessment(
        &self,
        id: &str,
        completed_at: DateTime<Utc>,
        score: i64,
    ) -> Result<Option<Assessment>, StoreError>;
    /// All of a user's assessments, most recently started first.
    fn assessments_for_user(&self, user_id: &str) -> Result<Vec<Assessment>, StoreError>;
}
