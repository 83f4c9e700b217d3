use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::category::Category;
use crate::models::domain::reading_comprehension::ReadingComprehension;

/// One record of the question bank. A plain single-answer item carries its
/// own content and answer; a passage question additionally carries a
/// `reading` payload and leaves `content`/`answer` empty. The repository
/// stores both shapes behind this one type.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    /// Assigned once at construction, immutable afterwards.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    /// Advisory; callers refresh it on edit, the model does not enforce this.
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<ReadingComprehension>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Label consumed by the statistics collaborator; matches the snapshot
    /// encoding.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Question {
    pub fn new(
        title: &str,
        content: &str,
        answer: &str,
        category: Option<Category>,
        difficulty: Difficulty,
    ) -> Self {
        Question {
            id: Uuid::new_v4().to_string(),
            title: Some(title.to_string()),
            content: Some(content.to_string()),
            answer: Some(answer.to_string()),
            explanation: None,
            category,
            difficulty,
            tags: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            created_by: None,
            is_active: true,
            reading: None,
        }
    }

    /// A passage question: the text and sub-questions live in the reading
    /// payload, not in `content`/`answer`. Difficulty starts at `Medium`;
    /// callers adjust it per passage.
    pub fn new_reading(title: &str, passage: &str, category: Option<Category>) -> Self {
        Question {
            id: Uuid::new_v4().to_string(),
            title: Some(title.to_string()),
            content: None,
            answer: None,
            explanation: None,
            category,
            difficulty: Difficulty::Medium,
            tags: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            created_by: None,
            is_active: true,
            reading: Some(ReadingComprehension::new(passage)),
        }
    }

    pub fn is_reading(&self) -> bool {
        self.reading.is_some()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
