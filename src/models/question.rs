use std::fmt;

use serde::{Deserialize, Serialize};

/// Points assigned to a freshly created blank question.
pub const DEFAULT_POINTS: u32 = 1;

/// The kind of a quiz question.
///
/// Serialized with the bank format's tag strings, e.g.
/// `"multiple_choice_question"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    #[serde(rename = "multiple_choice_question")]
    MultipleChoice,
    #[serde(rename = "short_answer_question")]
    ShortAnswer,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            QuestionKind::MultipleChoice => "multiple_choice_question",
            QuestionKind::ShortAnswer => "short_answer_question",
        };
        f.write_str(tag)
    }
}

/// A single quiz question.
///
/// Only [`crate::ops::change_kind_by_id`] enforces that
/// non-multiple-choice questions carry no options; the record itself
/// accepts any combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within a bank by convention.
    pub id: u32,
    /// Display name.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    /// Question text (may be empty).
    #[serde(default)]
    pub body: String,
    /// Expected answer (may be empty).
    #[serde(default)]
    pub expected: String,
    /// Choices for multiple-choice questions, in display order.
    #[serde(default)]
    pub options: Vec<String>,
    pub points: u32,
    #[serde(default)]
    pub published: bool,
}

impl Question {
    /// Create a blank question: empty body, expected answer, and options,
    /// [`DEFAULT_POINTS`] points, unpublished.
    pub fn blank(id: u32, name: &str, kind: QuestionKind) -> Self {
        Self {
            id,
            name: name.to_string(),
            kind,
            body: String::new(),
            expected: String::new(),
            options: Vec::new(),
            points: DEFAULT_POINTS,
            published: false,
        }
    }

    /// Create a copy of this question under a new id.
    ///
    /// The copy's name is prefixed with "Copy of " and it starts
    /// unpublished; all content fields carry over.
    pub fn duplicate(&self, new_id: u32) -> Self {
        Self {
            id: new_id,
            name: format!("Copy of {}", self.name),
            published: false,
            ..self.clone()
        }
    }

    /// True when the question has no body, no expected answer, and no
    /// options.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty() && self.expected.is_empty() && self.options.is_empty()
    }
}
