//! Assessment lifecycle: start, answer, complete
//!
//! Completion is the dense path: it replays the assessment's answers in
//! insertion order, resolves each to its question's ordinal, extracts the
//! three reserved values (1 = bedtime, 2 = wake time, 3 = hours slept) and
//! runs the sleep-efficiency scoring over them.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::scoring::{self, ScoreError};
use crate::store::{AnswerLedger, AssessmentStore, QuestionCatalog, StoreError};
use crate::types::{Answer, Assessment};

/// Errors from the assessment lifecycle
#[derive(Debug, Error)]
pub enum AssessmentError {
    /// Client-caused: missing or unusable input. The message is stable and
    /// safe to return verbatim.
    #[error("{0}")]
    Validation(String),

    /// Storage failure
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The scoring arithmetic failed on malformed answer text
    #[error("scoring failed: {0}")]
    Score(#[from] ScoreError),
}

impl AssessmentError {
    fn validation(message: impl Into<String>) -> Self {
        AssessmentError::Validation(message.into())
    }
}

/// Orchestrates assessment runs over the persistence traits
pub struct AssessmentService {
    assessments: Arc<dyn AssessmentStore>,
    answers: Arc<dyn AnswerLedger>,
    catalog: Arc<dyn QuestionCatalog>,
}

impl AssessmentService {
    pub fn new(
        assessments: Arc<dyn AssessmentStore>,
        answers: Arc<dyn AnswerLedger>,
        catalog: Arc<dyn QuestionCatalog>,
    ) -> Self {
        Self {
            assessments,
            answers,
            catalog,
        }
    }

    /// Open a new assessment run for a user.
    pub fn start(&self, user_id: &str) -> Result<Assessment, AssessmentError> {
        let assessment = Assessment::new(user_id);
        self.assessments.create_assessment(&assessment)?;
        tracing::debug!(assessment_id = %assessment.id, %user_id, "assessment started");
        Ok(assessment)
    }

    /// Append an answer to the ledger.
    ///
    /// Neither the assessment id nor the question id is checked for
    /// existence; stray references surface later, at completion. Only an
    /// empty answer is rejected.
    pub fn record_answer(
        &self,
        assessment_id: &str,
        question_id: &str,
        answer_text: &str,
    ) -> Result<Answer, AssessmentError> {
        if answer_text.is_empty() {
            return Err(AssessmentError::validation("answer is required"));
        }

        let answer = Answer::new(assessment_id, question_id, answer_text);
        self.answers.append_answer(&answer)?;
        Ok(answer)
    }

    /// Complete an assessment: score its answers and stamp the result.
    ///
    /// Re-invoking completion recomputes and overwrites the score and
    /// completion timestamp; concurrent completions race with last-writer-
    /// wins semantics.
    pub fn complete(&self, assessment_id: &str) -> Result<Assessment, AssessmentError> {
        if assessment_id.trim().is_empty() {
            return Err(AssessmentError::validation("assessmentId is required"));
        }

        let answers = self.answers.answers_for_assessment(assessment_id)?;
        if answers.is_empty() {
            return Err(AssessmentError::validation(
                "no answers found for this assessment",
            ));
        }

        // Ordinal -> answer text, in insertion order so a resubmitted
        // question's later answer wins.
        let mut by_ordinal: HashMap<u32, String> = HashMap::new();
        for answer in &answers {
            if let Some(question) = self.catalog.find_question(&answer.question_id)? {
                by_ordinal.insert(question.ordinal, answer.answer.clone());
            }
        }

        let (bedtime, wake_time, hours_slept) = match (
            by_ordinal.get(&1),
            by_ordinal.get(&2),
            by_ordinal.get(&3),
        ) {
            (Some(bed), Some(wake), Some(hours)) => (bed, wake, hours),
            _ => {
                return Err(AssessmentError::validation(
                    "required answers (bedtime, wakeup, hoursSlept) are missing",
                ));
            }
        };

        let score = match scoring::score(bedtime, wake_time, hours_slept) {
            Ok(score) => score,
            // A zero-minute in-bed window is a client-data problem, not an
            // internal fault.
            Err(ScoreError::EmptyWindow) => {
                return Err(AssessmentError::validation(
                    "bedtime and wake time must differ",
                ));
            }
            Err(e) => return Err(e.into()),
        };

        let updated = self
            .assessments
            .finish_assessment(assessment_id, Utc::now(), score)?
            .ok_or_else(|| AssessmentError::validation("assessment not found"))?;

        tracing::info!(assessment_id, score, "assessment completed");
        Ok(updated)
    }

    /// A user's assessments, most recently started first. Unknown users get
    /// an empty history, never an error.
    pub fn history(&self, user_id: &str) -> Result<Vec<Assessment>, AssessmentError> {
        Ok(self.assessments.assessments_for_user(user_id)?)
    }
}
