//! Copy-and-modify transforms over a question collection.
//!
//! Every function returns a fresh `Vec`; the input and its questions are
//! never mutated. Lookups that match nothing return an unchanged copy.

use crate::models::{Question, QuestionKind};

/// Remove every question with the given id.
pub fn remove_by_id(questions: &[Question], id: u32) -> Vec<Question> {
    questions.iter().filter(|q| q.id != id).cloned().collect()
}

/// Mark every question as published.
pub fn publish_all(questions: &[Question]) -> Vec<Question> {
    questions
        .iter()
        .map(|q| Question {
            published: true,
            ..q.clone()
        })
        .collect()
}

/// Append a blank question with the given id, name, and kind.
pub fn add_question(
    questions: &[Question],
    id: u32,
    name: &str,
    kind: QuestionKind,
) -> Vec<Question> {
    let mut result = questions.to_vec();
    result.push(Question::blank(id, name, kind));
    result
}

/// Rename the question with the given id, leaving all others untouched.
pub fn rename_by_id(questions: &[Question], target_id: u32, new_name: &str) -> Vec<Question> {
    questions
        .iter()
        .map(|q| {
            if q.id == target_id {
                Question {
                    name: new_name.to_string(),
                    ..q.clone()
                }
            } else {
                q.clone()
            }
        })
        .collect()
}

/// Change the kind of the question with the given id.
///
/// Moving a question away from multiple choice also clears its options;
/// they only make sense on that kind.
pub fn change_kind_by_id(
    questions: &[Question],
    target_id: u32,
    new_kind: QuestionKind,
) -> Vec<Question> {
    questions
        .iter()
        .map(|q| {
            if q.id == target_id {
                let options = if new_kind == QuestionKind::MultipleChoice {
                    q.options.clone()
                } else {
                    Vec::new()
                };
                Question {
                    kind: new_kind,
                    options,
                    ..q.clone()
                }
            } else {
                q.clone()
            }
        })
        .collect()
}

/// Edit one option of the question with the given id.
///
/// With `slot == None` the new option is appended; with `Some(i)` it
/// replaces option `i`. An out-of-range `Some(i)` leaves the question
/// unchanged rather than failing.
pub fn edit_option(
    questions: &[Question],
    target_id: u32,
    slot: Option<usize>,
    new_option: &str,
) -> Vec<Question> {
    questions
        .iter()
        .map(|q| {
            if q.id != target_id {
                return q.clone();
            }
            let mut options = q.options.clone();
            match slot {
                None => options.push(new_option.to_string()),
                Some(i) if i < options.len() => options[i] = new_option.to_string(),
                Some(_) => {}
            }
            Question {
                options,
                ..q.clone()
            }
        })
        .collect()
}

/// Insert a duplicate (under `new_id`) immediately after every question
/// matching `target_id`. No match returns an unchanged copy.
pub fn duplicate_after(questions: &[Question], target_id: u32, new_id: u32) -> Vec<Question> {
    questions
        .iter()
        .flat_map(|q| {
            if q.id == target_id {
                vec![q.clone(), q.duplicate(new_id)]
            } else {
                vec![q.clone()]
            }
        })
        .collect()
}
