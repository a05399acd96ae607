//! # quiz-bank
//!
//! Pure transforms over in-memory collections of quiz questions:
//! filtering, mapping, CSV rendering, and id-based editing.
//!
//! Collections are plain `Vec<Question>` values owned by the caller. Every
//! operation returns fresh values and never mutates its input, so banks can
//! be shared freely.
//!
//! ## Usage
//!
//! ```rust
//! use quiz_bank::{ops, QuestionKind};
//!
//! let bank = ops::add_question(&[], 1, "Addition", QuestionKind::ShortAnswer);
//! let bank = ops::publish_all(&bank);
//!
//! assert_eq!(ops::sum_published_points(&bank), 1);
//! assert_eq!(
//!     ops::to_csv(&bank),
//!     "id,name,options,points,published\n1,Addition,0,1,true"
//! );
//! ```

mod data;
mod models;
pub mod ops;

use std::io;

pub use data::{LoadError, load_questions_from_json, questions_from_json, questions_to_json};
pub use models::{Answer, DEFAULT_POINTS, Question, QuestionKind};

/// Error type for question bank operations.
#[derive(Debug)]
pub enum BankError {
    /// Error loading or serializing a question bank.
    Load(LoadError),
    /// IO error while writing an export.
    Io(io::Error),
}

impl std::fmt::Display for BankError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BankError::Load(e) => write!(f, "Failed to load questions: {}", e),
            BankError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for BankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BankError::Load(e) => Some(e),
            BankError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for BankError {
    fn from(err: LoadError) -> Self {
        BankError::Load(err)
    }
}

impl From<io::Error> for BankError {
    fn from(err: io::Error) -> Self {
        BankError::Io(err)
    }
}
