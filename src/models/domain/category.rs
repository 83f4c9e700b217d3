use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, colored tag. Questions embed their category by value; identity is
/// the `id`, not the instance or the name.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub is_active: bool,
    /// Maintained by callers on attach/detach, not derived here; see
    /// `QuestionService::reconcile_question_count` for the recount path.
    pub question_count: u32,
}

impl Category {
    pub fn new(name: &str, description: &str, color: &str) -> Self {
        Category {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            color: color.to_string(),
            icon: None,
            is_active: true,
            question_count: 0,
        }
    }

    pub fn increment_question_count(&mut self) {
        self.question_count += 1;
    }

    /// Saturates at zero rather than underflowing.
    pub fn decrement_question_count(&mut self) {
        self.question_count = self.question_count.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrement_saturates_at_zero() {
        let mut category = Category::new("Reading", "Passages", "#3b82f6");

        category.decrement_question_count();
        assert_eq!(category.question_count, 0);

        category.increment_question_count();
        category.increment_question_count();
        category.decrement_question_count();
        assert_eq!(category.question_count, 1);
    }
}
