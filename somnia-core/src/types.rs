//! Domain types shared across the somnia crates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user. The nickname is unique; the password is only ever
/// stored as an argon2 hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub nickname: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(nickname: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            nickname: nickname.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}

/// How a question is rendered on the client. Has no effect on scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Input,
    Number,
    MultipleChoice,
}

/// One question in the fixed assessment sequence.
///
/// `ordinal` is the 1-based position of the question. Ordinals 1, 2 and 3
/// are reserved: bedtime (HH:MM), wake time (HH:MM) and hours slept
/// (decimal, as text). The scoring algorithm depends on this contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "order")]
    pub ordinal: u32,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
}

impl Question {
    pub fn new(text: impl Into<String>, ordinal: u32, kind: QuestionKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            ordinal,
            kind,
        }
    }
}

/// One assessment run for a user.
///
/// `completed_at` and `score` are set together, exactly once, when the run
/// is completed. While both are `None` the run is in progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: String,
    pub user_id: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub score: Option<i64>,
}

impl Assessment {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            started_at: Utc::now(),
            completed_at: None,
            score: None,
        }
    }

    /// Whether the run has been completed and scored.
    pub fn is_completed(&self) -> bool {
        self.score.is_some()
    }
}

/// One submitted answer. Answers are append-only; resubmitting a question
/// adds a new record rather than updating the old one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: String,
    pub assessment_id: String,
    pub question_id: String,
    pub answer: String,
    pub submitted_at: DateTime<Utc>,
}

impl Answer {
    pub fn new(
        assessment_id: impl Into<String>,
        question_id: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            assessment_id: assessment_id.into(),
            question_id: question_id.into(),
            answer: answer.into(),
            submitted_at: Utc::now(),
        }
    }
}
