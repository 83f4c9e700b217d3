use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One answer-attempt record. Append-only; the only sanctioned mutation after
/// creation is `increment_attempt_number` on a caller-driven retry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserProgress {
    pub id: String,
    pub user_id: String,
    pub question_id: String,
    pub is_correct: bool,
    /// Seconds.
    pub time_spent: u32,
    pub answered_at: DateTime<Utc>,
    pub attempt_number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint_used: Option<String>,
}

impl UserProgress {
    pub fn new(user_id: &str, question_id: &str, is_correct: bool) -> Self {
        UserProgress {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            question_id: question_id.to_string(),
            is_correct,
            time_spent: 0,
            answered_at: Utc::now(),
            attempt_number: 1,
            hint_used: None,
        }
    }

    pub fn increment_attempt_number(&mut self) {
        self.attempt_number += 1;
    }
}
