//! SQLite implementation of the store traits

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::{AnswerLedger, AssessmentStore, CredentialStore, QuestionCatalog, StoreError, schema};
use crate::types::{Answer, Assessment, Question, QuestionKind, User};

/// SQLite-backed store serving all four persistence traits
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create database at path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// Open in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        schema::apply_pending(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        // A poisoned mutex means a panic mid-statement; nothing sensible
        // to recover, so propagate the panic.
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn parse_ts(idx: usize, raw: String) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn kind_to_str(kind: QuestionKind) -> &'static str {
    match kind {
        QuestionKind::Input => "input",
        QuestionKind::Number => "number",
        QuestionKind::MultipleChoice => "multiple-choice",
    }
}

fn kind_from_str(idx: usize, raw: &str) -> rusqlite::Result<QuestionKind> {
    match raw {
        "input" => Ok(QuestionKind::Input),
        "number" => Ok(QuestionKind::Number),
        "multiple-choice" => Ok(QuestionKind::MultipleChoice),
        other => Err(rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            format!("unknown question kind {other:?}").into(),
        )),
    }
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        nickname: row.get(1)?,
        password_hash: row.get(2)?,
        created_at: parse_ts(3, row.get(3)?)?,
    })
}

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
    let kind: String = row.get(3)?;
    Ok(Question {
        id: row.get(0)?,
        text: row.get(1)?,
        ordinal: row.get(2)?,
        kind: kind_from_str(3, &kind)?,
    })
}

fn assessment_from_row(row: &Row<'_>) -> rusqlite::Result<Assessment> {
    let completed_at: Option<String> = row.get(3)?;
    Ok(Assessment {
        id: row.get(0)?,
        user_id: row.get(1)?,
        started_at: parse_ts(2, row.get(2)?)?,
        completed_at: completed_at.map(|raw| parse_ts(3, raw)).transpose()?,
        score: row.get(4)?,
    })
}

fn answer_from_row(row: &Row<'_>) -> rusqlite::Result<Answer> {
    Ok(Answer {
        id: row.get(0)?,
        assessment_id: row.get(1)?,
        question_id: row.get(2)?,
        answer: row.get(3)?,
        submitted_at: parse_ts(4, row.get(4)?)?,
    })
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

impl CredentialStore for SqliteStore {
    fn create_user(&self, user: &User) -> Result<(), StoreError> {
        let result = self.conn().execute(
            "INSERT INTO users (id, nickname, password_hash, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                user.id,
                user.nickname,
                user.password_hash,
                user.created_at.to_rfc3339(),
            ],
        );
        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(StoreError::Conflict(format!(
                "nickname {:?} already exists",
                user.nickname
            ))),
            Err(e) => Err(e.into()),
        }
    }

    fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>, StoreError> {
        let conn = self.conn();
        let user = conn
            .query_row(
                "SELECT id, nickname, password_hash, created_at
                 FROM users WHERE nickname = ?1",
                params![nickname],
                user_from_row,
            )
            .optional()?;
        Ok(user)
    }
}

impl QuestionCatalog for SqliteStore {
    fn insert_question(&self, question: &Question) -> Result<(), StoreError> {
        self.conn().execute(
            "INSERT INTO questions (id, text, ord, kind) VALUES (?1, ?2, ?3, ?4)",
            params![
                question.id,
                question.text,
                question.ordinal,
                kind_to_str(question.kind),
            ],
        )?;
        Ok(())
    }

    fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        let conn = self.conn();
        let mut stmt =
            conn.prepare("SELECT id, text, ord, kind FROM questions ORDER BY ord ASC")?;
        let questions = stmt
            .query_map([], question_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(questions)
    }

    fn find_question(&self, id: &str) -> Result<Option<Question>, StoreError> {
        let conn = self.conn();
        let question = conn
            .query_row(
                "SELECT id, text, ord, kind FROM questions WHERE id = ?1",
                params![id],
                question_from_row,
            )
            .optional()?;
        Ok(question)
    }

    fn replace_all(&self, questions: &[Question]) -> Result<(), StoreError> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM questions", [])?;
        for question in questions {
            tx.execute(
                "INSERT INTO questions (id, text, ord, kind) VALUES (?1, ?2, ?3, ?4)",
                params![
                    question.id,
                    question.text,
                    question.ordinal,
                    kind_to_str(question.kind),
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }
}

impl AnswerLedger for SqliteStore {
    fn append_answer(&self, answer: &Answer) -> Result<(), StoreError> {
        self.conn().execute(
            "INSERT INTO answers (id, assessment_id, question_id, answer, submitted_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                answer.id,
                answer.assessment_id,
                answer.question_id,
                answer.answer,
                answer.submitted_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    fn answers_for_assessment(&self, assessment_id: &str) -> Result<Vec<Answer>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, assessment_id, question_id, answer, submitted_at
             FROM answers WHERE assessment_id = ?1 ORDER BY rowid ASC",
        )?;
        let answers = stmt
            .query_map(params![assessment_id], answer_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(answers)
    }

    fn top_answers(&self, limit: u32) -> Result<Vec<(String, u64)>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT answer, COUNT(*) AS n FROM answers
             GROUP BY answer ORDER BY n DESC LIMIT ?1",
        )?;
        let rows = stmt
            .query_map(params![limit], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }
}

impl AssessmentStore for SqliteStore {
    fn create_assessment(&self, assessment: &Assessment) -> Result<(), StoreError> {
        self.conn().execute(
            "INSERT INTO assessments (id, user_id, started_at, completed_at, score)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                assessment.id,
                assessment.user_id,
                assessment.started_at.to_rfc3339(),
                assessment.completed_at.map(|ts| ts.to_rfc3339()),
                assessment.score,
            ],
        )?;
        Ok(())
    }

    fn finish_assessment(
        &self,
        id: &str,
        completed_at: DateTime<Utc>,
        score: i64,
    ) -> Result<Option<Assessment>, StoreError> {
        let conn = self.conn();
        conn.execute(
            "UPDATE assessments SET completed_at = ?2, score = ?3 WHERE id = ?1",
            params![id, completed_at.to_rfc3339(), score],
        )?;
        let updated = conn
            .query_row(
                "SELECT id, user_id, started_at, completed_at, score
                 FROM assessments WHERE id = ?1",
                params![id],
                assessment_from_row,
            )
            .optional()?;
        Ok(updated)
    }

    fn assessments_for_user(&self, user_id: &str) -> Result<Vec<Assessment>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, user_id, started_at, completed_at, score
             FROM assessments WHERE user_id = ?1 ORDER BY started_at DESC",
        )?;
        let assessments = stmt
            .query_map(params![user_id], assessment_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(assessments)
    }
}
