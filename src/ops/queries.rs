//! Read-only transforms over a question collection.
//!
//! Every function leaves the input untouched and preserves its order.

use crate::models::Question;

/// Questions with the `published` flag set, in their original order.
pub fn published(questions: &[Question]) -> Vec<Question> {
    questions.iter().filter(|q| q.published).cloned().collect()
}

/// Questions that have any content: a body, an expected answer, or at
/// least one option.
pub fn non_empty(questions: &[Question]) -> Vec<Question> {
    questions
        .iter()
        .filter(|q| !q.is_empty())
        .cloned()
        .collect()
}

/// The first question with the given id, or `None` if absent.
pub fn find_by_id(questions: &[Question], id: u32) -> Option<&Question> {
    questions.iter().find(|q| q.id == id)
}

/// The names of all questions, in order.
pub fn names(questions: &[Question]) -> Vec<String> {
    questions.iter().map(|q| q.name.clone()).collect()
}

/// Total points across all questions. Empty input sums to 0.
pub fn sum_points(questions: &[Question]) -> u32 {
    questions.iter().map(|q| q.points).sum()
}

/// Total points across published questions only.
pub fn sum_published_points(questions: &[Question]) -> u32 {
    questions
        .iter()
        .filter(|q| q.published)
        .map(|q| q.points)
        .sum()
}

/// True when every question has the same kind as the first.
///
/// Vacuously true for an empty collection.
pub fn same_kind(questions: &[Question]) -> bool {
    match questions.first() {
        Some(first) => questions.iter().all(|q| q.kind == first.kind),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionKind;

    fn sample_bank() -> Vec<Question> {
        let mut addition = Question::blank(1, "Addition", QuestionKind::ShortAnswer);
        addition.body = "What is 2 + 2?".to_string();
        addition.expected = "4".to_string();
        addition.points = 2;
        addition.published = true;

        let mut colors = Question::blank(2, "Colors", QuestionKind::MultipleChoice);
        colors.body = "Which is a primary color?".to_string();
        colors.options = vec!["red".to_string(), "green".to_string()];
        colors.points = 3;

        let draft = Question::blank(3, "Draft", QuestionKind::ShortAnswer);

        vec![addition, colors, draft]
    }

    #[test]
    fn test_published_filters_and_preserves_order() {
        let qs = sample_bank();
        let pubs = published(&qs);
        assert_eq!(names(&pubs), vec!["Addition"]);
        assert_eq!(published(&[]).len(), 0);
    }

    #[test]
    fn test_non_empty_drops_blank_questions() {
        let qs = sample_bank();
        let filled = non_empty(&qs);
        assert_eq!(names(&filled), vec!["Addition", "Colors"]);
    }

    #[test]
    fn test_non_empty_keeps_question_with_only_options() {
        let mut q = Question::blank(9, "Options only", QuestionKind::MultipleChoice);
        q.options = vec!["a".to_string()];
        assert_eq!(non_empty(&[q]).len(), 1);
    }

    #[test]
    fn test_find_by_id() {
        let qs = sample_bank();
        assert_eq!(find_by_id(&qs, 2).map(|q| q.name.as_str()), Some("Colors"));
        assert!(find_by_id(&qs, 99).is_none());
    }

    #[test]
    fn test_find_by_id_returns_first_match() {
        let a = Question::blank(5, "First", QuestionKind::ShortAnswer);
        let b = Question::blank(5, "Second", QuestionKind::ShortAnswer);
        let qs = vec![a, b];
        assert_eq!(find_by_id(&qs, 5).map(|q| q.name.as_str()), Some("First"));
    }

    #[test]
    fn test_sum_points() {
        let qs = sample_bank();
        assert_eq!(sum_points(&qs), 6);
        assert_eq!(sum_points(&[]), 0);
    }

    #[test]
    fn test_published_and_unpublished_points_partition_total() {
        let qs = sample_bank();
        let unpublished_points: u32 = qs
            .iter()
            .filter(|q| !q.published)
            .map(|q| q.points)
            .sum();
        assert_eq!(sum_points(&qs), sum_published_points(&qs) + unpublished_points);
    }

    #[test]
    fn test_same_kind() {
        let qs = sample_bank();
        assert!(!same_kind(&qs));
        assert!(same_kind(&[]));
        assert!(same_kind(&qs[..1]));
        assert!(same_kind(&[
            Question::blank(1, "A", QuestionKind::ShortAnswer),
            Question::blank(2, "B", QuestionKind::ShortAnswer),
        ]));
    }
}
