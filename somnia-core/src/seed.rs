//! Question catalog seeding

use crate::store::{QuestionCatalog, StoreError};
use crate::types::{Question, QuestionKind};

/// The fixed assessment sequence. Ordinals 1-3 are the scoring contract:
/// bedtime, wake time, hours slept.
pub fn default_catalog() -> Vec<Question> {
    vec![
        Question::new("What is your bedtime?", 1, QuestionKind::Input),
        Question::new("What time do you wake up?", 2, QuestionKind::Input),
        Question::new(
            "How many hours do you sleep?",
            3,
            QuestionKind::MultipleChoice,
        ),
    ]
}

/// Replace the stored catalog with the default question sequence.
/// Safe to re-run; the previous catalog is dropped.
pub fn seed_catalog(catalog: &dyn QuestionCatalog) -> Result<usize, StoreError> {
    let questions = default_catalog();
    catalog.replace_all(&questions)?;
    tracing::info!(count = questions.len(), "question catalog seeded");
    Ok(questions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteStore;

    #[test]
    fn seeding_installs_the_reserved_ordinals() {
        let store = SqliteStore::open_in_memory().unwrap();
        let count = seed_catalog(&store).unwrap();
        assert_eq!(count, 3);

        let questions = store.list_questions().unwrap();
        let ordinals: Vec<u32> = questions.iter().map(|q| q.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2, 3]);
        assert_eq!(questions[0].text, "What is your bedtime?");
    }

    #[test]
    fn reseeding_does_not_duplicate() {
        let store = SqliteStore::open_in_memory().unwrap();
        seed_catalog(&store).unwrap();
        seed_catalog(&store).unwrap();
        assert_eq!(store.list_questions().unwrap().len(), 3);
    }
}
