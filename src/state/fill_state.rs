//! Respondent-side state: the draft response and fill-view navigation

use crate::store::{AnswerValue, Question, Response};
use std::collections::BTreeSet;

/// Draft answers plus cursor state for the fill view.
///
/// Rows are the form's questions in order, with one extra row at the end for
/// the submit button.
#[derive(Debug, Clone, Default)]
pub struct FillState {
    pub draft: Response,
    /// Selected row; `question_count` means the submit row
    pub selected: usize,
    /// Cursor within the selected question's options
    pub option_cursor: usize,
    /// Question ids rejected by the last submit attempt
    pub invalid: BTreeSet<String>,
}

impl FillState {
    /// Total rows for a form with `question_count` questions
    pub fn row_count(question_count: usize) -> usize {
        question_count + 1
    }

    pub fn on_submit_row(&self, question_count: usize) -> bool {
        self.selected >= question_count
    }

    pub fn select_next(&mut self, question_count: usize) {
        if self.selected + 1 < Self::row_count(question_count) {
            self.selected += 1;
            self.option_cursor = 0;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.option_cursor = 0;
        }
    }

    pub fn option_cursor_up(&mut self) {
        self.option_cursor = self.option_cursor.saturating_sub(1);
    }

    pub fn option_cursor_down(&mut self, option_count: usize) {
        if self.option_cursor + 1 < option_count {
            self.option_cursor += 1;
        }
    }

    /// Current text value for a question, empty when unanswered
    pub fn text_value(&self, question_id: &str) -> &str {
        match self.draft.get(question_id) {
            Some(AnswerValue::Text(s)) | Some(AnswerValue::Choice(s)) => s,
            _ => "",
        }
    }

    pub fn type_char(&mut self, question_id: &str, c: char) {
        let entry = self
            .draft
            .answers
            .entry(question_id.to_string())
            .or_insert_with(|| AnswerValue::Text(String::new()));
        // Typing over a stale-shaped value restarts the answer as text
        if !matches!(entry, AnswerValue::Text(_)) {
            *entry = AnswerValue::Text(String::new());
        }
        if let AnswerValue::Text(s) = entry {
            s.push(c);
        }
        self.invalid.remove(question_id);
    }

    pub fn backspace(&mut self, question_id: &str) {
        if let Some(AnswerValue::Text(s)) = self.draft.answers.get_mut(question_id) {
            s.pop();
        }
    }

    /// Record the single selection of a multiple-choice question
    pub fn select_option(&mut self, question_id: &str, option_id: &str) {
        self.draft.answers.insert(
            question_id.to_string(),
            AnswerValue::Choice(option_id.to_string()),
        );
        self.invalid.remove(question_id);
    }

    /// Toggle one option of a checkbox question
    pub fn toggle_option(&mut self, question_id: &str, option_id: &str) {
        let entry = self
            .draft
            .answers
            .entry(question_id.to_string())
            .or_insert_with(|| AnswerValue::Multi(Vec::new()));
        if !matches!(entry, AnswerValue::Multi(_)) {
            *entry = AnswerValue::Multi(Vec::new());
        }
        if let AnswerValue::Multi(ids) = entry {
            if let Some(pos) = ids.iter().position(|id| id == option_id) {
                ids.remove(pos);
            } else {
                ids.push(option_id.to_string());
            }
        }
        self.invalid.remove(question_id);
    }

    pub fn is_option_selected(&self, question: &Question, option_id: &str) -> bool {
        match self.draft.get(&question.id) {
            Some(AnswerValue::Choice(id)) | Some(AnswerValue::Text(id)) => id == option_id,
            Some(AnswerValue::Multi(ids)) => ids.iter().any(|id| id == option_id),
            None => false,
        }
    }

    /// Drop the draft and start over
    pub fn clear(&mut self) {
        self.draft = Response::default();
        self.invalid.clear();
        self.selected = 0;
        self.option_cursor = 0;
    }

    /// Hand the draft over for submission, leaving a fresh one behind
    pub fn take_draft(&mut self) -> Response {
        let draft = std::mem::take(&mut self.draft);
        self.clear();
        draft
    }
}
