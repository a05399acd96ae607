//! Projections of a question collection into other shapes.

use crate::models::{Answer, Question};

/// Column order of the CSV export.
const CSV_HEADER: &str = "id,name,options,points,published";

/// Render the collection as CSV.
///
/// One line per question after the header, with `options` rendered as its
/// length and `published` as `true`/`false`. Lines are joined by a single
/// newline with no trailing newline; an empty collection yields the header
/// alone.
pub fn to_csv(questions: &[Question]) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];
    lines.extend(questions.iter().map(|q| {
        format!(
            "{},{},{},{},{}",
            q.id,
            q.name,
            q.options.len(),
            q.points,
            q.published
        )
    }));
    lines.join("\n")
}

/// One blank [`Answer`] per question, in the same order.
pub fn make_answers(questions: &[Question]) -> Vec<Answer> {
    questions.iter().map(|q| Answer::blank(q.id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionKind;

    #[test]
    fn test_to_csv_empty_is_header_only() {
        assert_eq!(to_csv(&[]), "id,name,options,points,published");
    }

    #[test]
    fn test_to_csv_single_question() {
        let mut q = Question::blank(1, "Addition", QuestionKind::ShortAnswer);
        q.published = true;
        assert_eq!(
            to_csv(&[q]),
            "id,name,options,points,published\n1,Addition,0,1,true"
        );
    }

    #[test]
    fn test_to_csv_renders_option_count_not_contents() {
        let mut q = Question::blank(2, "Colors", QuestionKind::MultipleChoice);
        q.options = vec!["red".to_string(), "green".to_string(), "blue".to_string()];
        q.points = 5;
        assert_eq!(
            to_csv(&[q]),
            "id,name,options,points,published\n2,Colors,3,5,false"
        );
    }

    #[test]
    fn test_to_csv_no_trailing_newline() {
        let qs = vec![
            Question::blank(1, "A", QuestionKind::ShortAnswer),
            Question::blank(2, "B", QuestionKind::ShortAnswer),
        ];
        let csv = to_csv(&qs);
        assert!(!csv.ends_with('\n'));
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_make_answers_one_blank_per_question() {
        let qs = vec![
            Question::blank(3, "A", QuestionKind::ShortAnswer),
            Question::blank(1, "B", QuestionKind::MultipleChoice),
        ];
        let answers = make_answers(&qs);
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0], Answer::blank(3));
        assert_eq!(answers[1], Answer::blank(1));
    }
}
