use crate::errors::{AppError, AppResult};
use crate::models::domain::{Category, Question, Statistics, UserProgress};
use crate::repositories::QuestionRepository;

/// Label recorded for answers on uncategorized questions.
const UNCATEGORIZED: &str = "UNCATEGORIZED";

/// Orchestrates the repository plus the two invariants the model leaves to
/// callers: category question counts and the advisory `updated_at`.
pub struct QuestionService {
    repository: Box<dyn QuestionRepository>,
}

impl QuestionService {
    pub fn new(repository: Box<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub fn get_question(&self, id: &str) -> AppResult<Question> {
        self.repository
            .find_by_id(id)?
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))
    }

    pub fn save_question(&mut self, question: Question) -> AppResult<Question> {
        self.repository.save(question)
    }

    /// Edit path: refreshes the advisory `updated_at` before saving.
    pub fn update_question(&mut self, mut question: Question) -> AppResult<Question> {
        question.touch();
        self.repository.save(question)
    }

    pub fn delete_question(&mut self, id: &str) -> AppResult<()> {
        self.repository.delete_by_id(id)
    }

    /// Assigns `category` to the question and bumps its counter. If the
    /// question previously referenced a different category, that category's
    /// counter is the holder's to decrement (or reconcile).
    pub fn assign_category(&mut self, question_id: &str, category: &mut Category) -> AppResult<Question> {
        let mut question = self.get_question(question_id)?;

        let already_assigned = question
            .category
            .as_ref()
            .map(|c| c.id == category.id)
            .unwrap_or(false);
        if already_assigned {
            return Ok(question);
        }

        question.category = Some(category.clone());
        question.touch();
        let saved = self.repository.save(question)?;
        category.increment_question_count();
        Ok(saved)
    }

    /// Clears the question's category when it matches `category`, and drops
    /// the counter accordingly.
    pub fn clear_category(&mut self, question_id: &str, category: &mut Category) -> AppResult<Question> {
        let mut question = self.get_question(question_id)?;

        let assigned = question
            .category
            .as_ref()
            .map(|c| c.id == category.id)
            .unwrap_or(false);
        if !assigned {
            return Ok(question);
        }

        question.category = None;
        question.touch();
        let saved = self.repository.save(question)?;
        category.decrement_question_count();
        Ok(saved)
    }

    /// Re-derives the denormalized counter from a full scan. The counter is
    /// an externally-maintained cache; this is its reconciliation path.
    pub fn reconcile_question_count(&self, category: &mut Category) -> AppResult<u32> {
        let count = self.repository.count_by_category(category)? as u32;
        category.question_count = count;
        Ok(count)
    }

    /// Feeds the statistics aggregate its `(correct, time, category label,
    /// difficulty label)` tuple and mints the progress record for the
    /// attempt.
    pub fn record_answer(
        &self,
        statistics: &mut Statistics,
        user_id: &str,
        question_id: &str,
        is_correct: bool,
        time_spent: u32,
    ) -> AppResult<UserProgress> {
        let question = self.get_question(question_id)?;

        let category_label = question
            .category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or(UNCATEGORIZED);
        statistics.record_answer(is_correct, time_spent, category_label, question.difficulty.label());

        let mut progress = UserProgress::new(user_id, question_id, is_correct);
        progress.time_spent = time_spent;
        Ok(progress)
    }
}
