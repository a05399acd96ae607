//! Plain data records for questions and answers.

mod answer;
mod question;

pub use answer::Answer;
pub use question::{DEFAULT_POINTS, Question, QuestionKind};
