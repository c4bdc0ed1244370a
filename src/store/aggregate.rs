//! Response aggregation for the admin analytics tab

use super::form::{AnswerValue, Question, QuestionOption, Response};

/// Frequency table for a choice question, in the question's option order.
///
/// A value counts toward an option by its own shape: string values by
/// equality with the option id, list values by membership (so a checkbox
/// response may count toward several options). Stale option ids left in old
/// responses simply aggregate to zero.
pub fn option_counts<'a>(
    question: &'a Question,
    responses: &[Response],
) -> Vec<(&'a QuestionOption, u64)> {
    question
        .options()
        .iter()
        .map(|opt| {
            let count = responses
                .iter()
                .filter(|r| matches_option(r.get(&question.id), &opt.id))
                .count() as u64;
            (opt, count)
        })
        .collect()
}

fn matches_option(value: Option<&AnswerValue>, option_id: &str) -> bool {
    match value {
        Some(AnswerValue::Text(s)) | Some(AnswerValue::Choice(s)) => s == option_id,
        Some(AnswerValue::Multi(ids)) => ids.iter().any(|id| id == option_id),
        None => false,
    }
}

/// Raw non-empty text answers for a question, lazily, in submission order.
/// Each call yields a fresh iterator; list-shaped stale values are skipped.
pub fn text_answers<'a>(
    question_id: &'a str,
    responses: &'a [Response],
) -> impl Iterator<Item = &'a str> {
    responses.iter().filter_map(move |r| match r.get(question_id) {
        Some(AnswerValue::Text(s)) | Some(AnswerValue::Choice(s)) if !s.is_empty() => {
            Some(s.as_str())
        }
        _ => None,
    })
}
