use serde::{Deserialize, Serialize};

use crate::models::domain::question::Difficulty;
use crate::models::domain::sub_question::SubQuestion;

/// Reading payload of a passage question: the passage body plus the ordered
/// sub-question list it owns. Numbering and the total score are derived from
/// the list on every mutation, never trusted from storage.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "ReadingComprehensionData")]
pub struct ReadingComprehension {
    pub passage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passage_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    sub_questions: Vec<SubQuestion>,
    total_points: u32,
    pub reading_type: ReadingType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadingType {
    ShortPassage,
    LongPassage,
    Dialogue,
    Document,
    Essay,
    NewsArticle,
}

impl ReadingComprehension {
    pub fn new(passage: &str) -> Self {
        ReadingComprehension {
            passage: passage.to_string(),
            passage_title: None,
            source: None,
            sub_questions: Vec::new(),
            total_points: 0,
            reading_type: ReadingType::ShortPassage,
        }
    }

    /// Appends the sub-question, numbering it by position, and refreshes the
    /// total score. Duplicate ids are not rejected here.
    pub fn add_sub_question(&mut self, mut sub_question: SubQuestion) {
        sub_question.question_number = self.sub_questions.len() as u32 + 1;
        self.sub_questions.push(sub_question);
        self.update_total_points();
    }

    /// Removes the first sub-question with a matching id; an unknown id is a
    /// silent no-op. Remaining sub-questions are renumbered densely from 1.
    pub fn remove_sub_question(&mut self, sub_question_id: &str) {
        let Some(index) = self
            .sub_questions
            .iter()
            .position(|sq| sq.id == sub_question_id)
        else {
            return;
        };

        self.sub_questions.remove(index);
        self.renumber_sub_questions();
        self.update_total_points();
    }

    /// Lookup by the current 1-based number. Numbers are recomputed after
    /// every mutation, so this never sees a stale index.
    pub fn sub_question(&self, question_number: u32) -> Option<&SubQuestion> {
        self.sub_questions
            .iter()
            .find(|sq| sq.question_number == question_number)
    }

    pub fn required_sub_questions(&self) -> Vec<&SubQuestion> {
        self.sub_questions.iter().filter(|sq| sq.is_required).collect()
    }

    pub fn sub_questions_by_difficulty(&self, difficulty: Difficulty) -> Vec<&SubQuestion> {
        self.sub_questions
            .iter()
            .filter(|sq| sq.difficulty == Some(difficulty))
            .collect()
    }

    pub fn sub_questions(&self) -> &[SubQuestion] {
        &self.sub_questions
    }

    /// Replaces the whole list. This is also the bulk-load path used by
    /// deserialization; incoming numbering and totals are rebuilt, not
    /// trusted.
    pub fn set_sub_questions(&mut self, sub_questions: Vec<SubQuestion>) {
        self.sub_questions = sub_questions;
        self.renumber_sub_questions();
        self.update_total_points();
    }

    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    pub fn sub_question_count(&self) -> usize {
        self.sub_questions.len()
    }

    fn renumber_sub_questions(&mut self) {
        for (index, sub_question) in self.sub_questions.iter_mut().enumerate() {
            sub_question.question_number = index as u32 + 1;
        }
    }

    fn update_total_points(&mut self) {
        self.total_points = self.sub_questions.iter().map(|sq| sq.points).sum();
    }
}

/// Raw snapshot shape. Converted through `set_sub_questions` so a loaded
/// payload satisfies the same invariants as one built incrementally.
#[derive(Deserialize)]
struct ReadingComprehensionData {
    passage: String,
    passage_title: Option<String>,
    source: Option<String>,
    #[serde(default)]
    sub_questions: Vec<SubQuestion>,
    reading_type: ReadingType,
}

impl From<ReadingComprehensionData> for ReadingComprehension {
    fn from(data: ReadingComprehensionData) -> Self {
        let mut reading = ReadingComprehension {
            passage: data.passage,
            passage_title: data.passage_title,
            source: data.source,
            sub_questions: Vec::new(),
            total_points: 0,
            reading_type: data.reading_type,
        };
        reading.set_sub_questions(data.sub_questions);
        reading
    }
}
