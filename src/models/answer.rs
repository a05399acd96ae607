use serde::{Deserialize, Serialize};

/// A user's answer to a single question, tied to it by id.
///
/// No referential integrity is enforced; `question_id` may reference a
/// question that is no longer in the bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: u32,
    pub text: String,
    pub submitted: bool,
    pub correct: bool,
}

impl Answer {
    /// Create an empty, unsubmitted answer for the given question.
    pub fn blank(question_id: u32) -> Self {
        Self {
            question_id,
            text: String::new(),
            submitted: false,
            correct: false,
        }
    }
}
