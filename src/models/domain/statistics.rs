use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Running answer aggregate for one scope (global or per-user). Mutated only
/// through `record_answer`; every derived field is refreshed there.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Statistics {
    pub total_questions: u32,
    pub correct_answers: u32,
    pub incorrect_answers: u32,
    /// Rolling average, seconds.
    pub average_time_spent: f64,
    pub category_stats: HashMap<String, u32>,
    pub difficulty_stats: HashMap<String, u32>,
    pub streak_count: u32,
    pub best_streak: u32,
    /// Percentage.
    pub accuracy_rate: f64,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_answer(&mut self, is_correct: bool, time_spent: u32, category: &str, difficulty: &str) {
        self.total_questions += 1;
        if is_correct {
            self.correct_answers += 1;
            self.streak_count += 1;
            if self.streak_count > self.best_streak {
                self.best_streak = self.streak_count;
            }
        } else {
            self.incorrect_answers += 1;
            self.streak_count = 0;
        }

        self.average_time_spent = (self.average_time_spent * f64::from(self.total_questions - 1)
            + f64::from(time_spent))
            / f64::from(self.total_questions);

        *self.category_stats.entry(category.to_string()).or_insert(0) += 1;
        *self.difficulty_stats.entry(difficulty.to_string()).or_insert(0) += 1;

        self.accuracy_rate = f64::from(self.correct_answers) / f64::from(self.total_questions) * 100.0;
    }
}
