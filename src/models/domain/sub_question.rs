use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::question::Difficulty;

/// One numbered sub-item of a passage question. Owned exclusively by its
/// parent aggregate; it has no lifecycle of its own.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubQuestion {
    pub id: String,
    /// Derived from list position (1-based) by the owning aggregate; the
    /// value is meaningless until the sub-question is attached.
    #[serde(default)]
    pub question_number: u32,
    pub content: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    pub points: u32,
    pub is_required: bool,
}

impl SubQuestion {
    pub fn new(content: &str, answer: &str) -> Self {
        SubQuestion {
            id: Uuid::new_v4().to_string(),
            question_number: 0,
            content: content.to_string(),
            answer: answer.to_string(),
            explanation: None,
            difficulty: None,
            points: 1,
            is_required: true,
        }
    }

    /// Label the way answer sheets print it: `(1)`, `(2)`, ...
    pub fn formatted_number(&self) -> String {
        format!("({})", self.question_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sub_question_defaults() {
        let sub_question = SubQuestion::new("What is asked?", "This.");

        assert_eq!(sub_question.points, 1);
        assert!(sub_question.is_required);
        assert!(sub_question.difficulty.is_none());
        assert_eq!(sub_question.question_number, 0);
    }

    #[test]
    fn formatted_number_is_parenthesized() {
        let mut sub_question = SubQuestion::new("q", "a");
        sub_question.question_number = 3;

        assert_eq!(sub_question.formatted_number(), "(3)");
    }
}
