use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::warn;

use crate::models::Question;

/// Error loading a question bank.
#[derive(Debug)]
pub enum LoadError {
    /// The bank file could not be read.
    Io(io::Error),
    /// The bank file is not valid question JSON.
    Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read question bank: {}", e),
            LoadError::Parse(e) => write!(f, "failed to parse question bank: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// Load a question bank from a JSON file.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let questions = questions_from_json(&contents)?;

    if questions.is_empty() {
        warn!("question bank {} is empty", path.display());
    }

    Ok(questions)
}

/// Parse a question bank from a JSON string (a top-level array).
pub fn questions_from_json(json: &str) -> Result<Vec<Question>, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a question bank to pretty-printed JSON.
pub fn questions_to_json(questions: &[Question]) -> Result<String, LoadError> {
    Ok(serde_json::to_string_pretty(questions)?)
}
