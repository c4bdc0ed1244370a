//! Submission validation for the fill view
//!
//! Validation failure is an expected, user-correctable condition, so it is
//! reported as a set of offending question ids rather than an error.

use super::form::{Form, Response};
use std::collections::BTreeSet;

/// Ids of every required question the candidate response leaves unanswered.
/// An empty set means the response may be submitted.
///
/// "Answered" is judged by the value's own shape (non-empty string or
/// non-empty list), so a stale-shaped value recorded before a type switch
/// still counts. A required choice question whose options were all deleted
/// can never be satisfied and is reported like any other miss.
pub fn invalid_questions(form: &Form, response: &Response) -> BTreeSet<String> {
    form.questions
        .iter()
        .filter(|q| q.required && !response.get(&q.id).is_some_and(|v| v.is_present()))
        .map(|q| q.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::form::{AnswerValue, Question, QuestionOption, QuestionType};
    use pretty_assertions::assert_eq;

    fn form_with(questions: Vec<Question>) -> Form {
        Form {
            title: "Test".to_string(),
            description: String::new(),
            questions,
        }
    }

    fn required_text(id: &str) -> Question {
        Question {
            id: id.to_string(),
            kind: QuestionType::ShortText,
            title: "Prompt".to_string(),
            description: None,
            required: true,
            options: None,
        }
    }

    fn answered(entries: &[(&str, AnswerValue)]) -> Response {
        Response {
            answers: entries
                .iter()
                .map(|(id, v)| (id.to_string(), v.clone()))
                .collect(),
        }
    }

    #[test]
    fn test_empty_response_fails_required_question() {
        let form = form_with(vec![required_text("q1")]);
        let invalid = invalid_questions(&form, &Response::default());
        assert_eq!(invalid.into_iter().collect::<Vec<_>>(), ["q1"]);
    }

    #[test]
    fn test_answered_required_question_passes() {
        let form = form_with(vec![required_text("q1")]);
        let response = answered(&[("q1", AnswerValue::Text("hello".to_string()))]);
        assert!(invalid_questions(&form, &response).is_empty());
    }

    #[test]
    fn test_empty_string_counts_as_unanswered() {
        let form = form_with(vec![required_text("q1")]);
        let response = answered(&[("q1", AnswerValue::Text(String::new()))]);
        assert_eq!(invalid_questions(&form, &response).len(), 1);
    }

    #[test]
    fn test_empty_list_counts_as_unanswered() {
        let mut question = required_text("q1");
        question.kind = QuestionType::Checkbox;
        question.options = Some(vec![QuestionOption {
            id: "o1".to_string(),
            label: "Option 1".to_string(),
        }]);
        let form = form_with(vec![question]);
        let response = answered(&[("q1", AnswerValue::Multi(vec![]))]);
        assert_eq!(invalid_questions(&form, &response).len(), 1);
    }

    #[test]
    fn test_optional_questions_are_ignored() {
        let mut optional = required_text("q2");
        optional.required = false;
        let form = form_with(vec![required_text("q1"), optional]);
        let response = answered(&[("q1", AnswerValue::Text("ok".to_string()))]);
        assert!(invalid_questions(&form, &response).is_empty());
    }

    #[test]
    fn test_required_choice_with_zero_options_is_reported_not_fatal() {
        let mut question = required_text("q1");
        question.kind = QuestionType::MultipleChoice;
        question.options = Some(vec![]);
        let form = form_with(vec![question]);
        let invalid = invalid_questions(&form, &Response::default());
        assert_eq!(invalid.into_iter().collect::<Vec<_>>(), ["q1"]);
    }

    #[test]
    fn test_stale_shaped_value_still_counts_as_answered() {
        // q1 is now short_text, but an old response holds a list
        let form = form_with(vec![required_text("q1")]);
        let response = answered(&[("q1", AnswerValue::Multi(vec!["o1".to_string()]))]);
        assert!(invalid_questions(&form, &response).is_empty());
    }

    #[test]
    fn test_reports_all_offenders_in_sorted_order() {
        let form = form_with(vec![
            required_text("q9"),
            required_text("q2"),
            required_text("q5"),
        ]);
        let invalid = invalid_questions(&form, &Response::default());
        assert_eq!(invalid.into_iter().collect::<Vec<_>>(), ["q2", "q5", "q9"]);
    }
}
