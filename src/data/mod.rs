//! Question bank serialization.

mod loader;

pub use loader::{LoadError, load_questions_from_json, questions_from_json, questions_to_json};
