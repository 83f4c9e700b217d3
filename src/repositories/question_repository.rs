use crate::config::Config;
use crate::errors::AppResult;
use crate::models::domain::{Category, Difficulty, Question};
use crate::storage::SnapshotStore;

/// Persistence and query contract over the flat question collection. Every
/// operation runs to completion on the calling thread; callers needing
/// concurrent access serialize externally.
#[cfg_attr(test, mockall::automock)]
pub trait QuestionRepository {
    fn save(&mut self, question: Question) -> AppResult<Question>;
    fn find_by_id(&self, id: &str) -> AppResult<Option<Question>>;
    fn find_all(&self) -> AppResult<Vec<Question>>;
    fn find_by_category(&self, category: &Category) -> AppResult<Vec<Question>>;
    fn find_by_category_and_difficulty(
        &self,
        category: &Category,
        difficulty: Difficulty,
    ) -> AppResult<Vec<Question>>;
    fn delete_by_id(&mut self, id: &str) -> AppResult<()>;
    fn exists_by_id(&self, id: &str) -> AppResult<bool>;
    fn search_by_title(&self, keyword: &str) -> AppResult<Vec<Question>>;
    fn search_by_content(&self, keyword: &str) -> AppResult<Vec<Question>>;
    fn search_by_tags(&self, tags: &[String]) -> AppResult<Vec<Question>>;
    fn find_by_category_name(&self, name: &str) -> AppResult<Vec<Question>>;
    fn find_active_questions(&self) -> AppResult<Vec<Question>>;
    fn find_inactive_questions(&self) -> AppResult<Vec<Question>>;
    fn count_by_category(&self, category: &Category) -> AppResult<usize>;
    fn count_by_difficulty(&self, difficulty: Difficulty) -> AppResult<usize>;
}

/// File-backed repository: the collection lives in memory and the whole
/// snapshot is rewritten on every mutating call.
pub struct JsonQuestionRepository {
    store: SnapshotStore,
    questions: Vec<Question>,
}

impl JsonQuestionRepository {
    /// Opens the bank at the configured snapshot location, creating the data
    /// directory on first use. A missing or unreadable snapshot starts the
    /// bank empty rather than failing construction.
    pub fn open(config: &Config) -> Self {
        let store = SnapshotStore::new(config);

        if let Err(err) = store.ensure_dir() {
            log::warn!("could not create storage directory: {}", err);
        }

        let questions = match store.load() {
            Ok(questions) => questions,
            Err(err) => {
                log::warn!("could not load question snapshot, starting empty: {}", err);
                Vec::new()
            }
        };

        Self { store, questions }
    }

    /// Best-effort durability: a failed rewrite keeps the in-memory mutation
    /// and is retried by the next save that succeeds.
    fn persist(&self) {
        if let Err(err) = self.store.persist(&self.questions) {
            log::warn!("could not persist question snapshot: {}", err);
        }
    }

    fn matches_category(question: &Question, category: &Category) -> bool {
        question
            .category
            .as_ref()
            .map(|c| c.id == category.id)
            .unwrap_or(false)
    }

    fn filtered(&self, predicate: impl Fn(&Question) -> bool) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|q| predicate(q))
            .cloned()
            .collect()
    }
}

impl QuestionRepository for JsonQuestionRepository {
    fn save(&mut self, question: Question) -> AppResult<Question> {
        match self.questions.iter().position(|q| q.id == question.id) {
            Some(index) => self.questions[index] = question.clone(),
            None => self.questions.push(question.clone()),
        }
        self.persist();
        Ok(question)
    }

    fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        Ok(self.questions.iter().find(|q| q.id == id).cloned())
    }

    fn find_all(&self) -> AppResult<Vec<Question>> {
        Ok(self.questions.clone())
    }

    fn find_by_category(&self, category: &Category) -> AppResult<Vec<Question>> {
        Ok(self.filtered(|q| Self::matches_category(q, category)))
    }

    fn find_by_category_and_difficulty(
        &self,
        category: &Category,
        difficulty: Difficulty,
    ) -> AppResult<Vec<Question>> {
        Ok(self.filtered(|q| Self::matches_category(q, category) && q.difficulty == difficulty))
    }

    fn delete_by_id(&mut self, id: &str) -> AppResult<()> {
        self.questions.retain(|q| q.id != id);
        self.persist();
        Ok(())
    }

    fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        Ok(self.questions.iter().any(|q| q.id == id))
    }

    fn search_by_title(&self, keyword: &str) -> AppResult<Vec<Question>> {
        let keyword = keyword.to_lowercase();
        Ok(self.filtered(|q| {
            q.title
                .as_ref()
                .map(|title| title.to_lowercase().contains(&keyword))
                .unwrap_or(false)
        }))
    }

    fn search_by_content(&self, keyword: &str) -> AppResult<Vec<Question>> {
        let keyword = keyword.to_lowercase();
        Ok(self.filtered(|q| {
            q.content
                .as_ref()
                .map(|content| content.to_lowercase().contains(&keyword))
                .unwrap_or(false)
        }))
    }

    /// Loose many-to-many match: a question matches when any of its tags
    /// contains (case-insensitive substring) any of the queried tags.
    fn search_by_tags(&self, tags: &[String]) -> AppResult<Vec<Question>> {
        let queried: Vec<String> = tags.iter().map(|tag| tag.to_lowercase()).collect();
        Ok(self.filtered(|q| {
            q.tags
                .as_ref()
                .map(|own| {
                    own.iter().any(|tag| {
                        let tag = tag.to_lowercase();
                        queried.iter().any(|searched| tag.contains(searched))
                    })
                })
                .unwrap_or(false)
        }))
    }

    fn find_by_category_name(&self, name: &str) -> AppResult<Vec<Question>> {
        let name = name.to_lowercase();
        Ok(self.filtered(|q| {
            q.category
                .as_ref()
                .map(|c| c.name.to_lowercase() == name)
                .unwrap_or(false)
        }))
    }

    fn find_active_questions(&self) -> AppResult<Vec<Question>> {
        Ok(self.filtered(|q| q.is_active))
    }

    fn find_inactive_questions(&self) -> AppResult<Vec<Question>> {
        Ok(self.filtered(|q| !q.is_active))
    }

    fn count_by_category(&self, category: &Category) -> AppResult<usize> {
        Ok(self
            .questions
            .iter()
            .filter(|q| Self::matches_category(q, category))
            .count())
    }

    fn count_by_difficulty(&self, difficulty: Difficulty) -> AppResult<usize> {
        Ok(self
            .questions
            .iter()
            .filter(|q| q.difficulty == difficulty)
            .count())
    }
}
