//! In-memory store for the form definition and the response log
//!
//! Single source of truth: all mutation of form or response state goes
//! through the operations here. Operations are synchronous and infallible;
//! id-keyed operations on an unknown id are silent no-ops (the UI cannot
//! reference an id it does not already hold).

use super::form::{default_form, Form, Question, QuestionOption, QuestionType, QuestionUpdate, Response};

/// Direction for [`FormStore::move_question`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Owner of the single form, the append-only response log, and the id
/// counter used for questions and options
pub struct FormStore {
    form: Form,
    responses: Vec<Response>,
    /// Shared counter for question and option ids. Starts above every id in
    /// the seeded form, so fresh ids can never collide with existing ones.
    next_id: u64,
}

impl FormStore {
    pub fn new() -> Self {
        Self {
            form: default_form(),
            responses: Vec::new(),
            next_id: 100,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    /// Replace the entire form definition. No validation is performed.
    pub fn set_form(&mut self, form: Form) {
        self.form = form;
    }

    /// Mint a fresh question id
    pub fn next_question_id(&mut self) -> String {
        format!("q{}", self.bump())
    }

    /// Mint a fresh option id
    pub fn next_option_id(&mut self) -> String {
        format!("o{}", self.bump())
    }

    fn bump(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Merge the provided fields into the question with the given id,
    /// leaving other questions and their order untouched
    pub fn update_question(&mut self, id: &str, updates: QuestionUpdate) {
        let Some(question) = self.form.questions.iter_mut().find(|q| q.id == id) else {
            tracing::debug!(%id, "update_question: unknown question id, ignoring");
            return;
        };
        if let Some(kind) = updates.kind {
            question.kind = kind;
        }
        if let Some(title) = updates.title {
            question.title = title;
        }
        if let Some(description) = updates.description {
            question.description = Some(description);
        }
        if let Some(required) = updates.required {
            question.required = required;
        }
        if let Some(options) = updates.options {
            question.options = Some(options);
        }
    }

    /// Append a new question of the given kind and return its id.
    /// Choice kinds are seeded with a single "Option 1".
    pub fn add_question(&mut self, kind: QuestionType) -> String {
        let id = self.next_question_id();
        let options = if kind.is_choice() {
            Some(vec![QuestionOption {
                id: self.next_option_id(),
                label: "Option 1".to_string(),
            }])
        } else {
            None
        };
        self.form.questions.push(Question {
            id: id.clone(),
            kind,
            title: "Untitled Question".to_string(),
            description: None,
            required: false,
            options,
        });
        tracing::debug!(%id, kind = kind.label(), "added question");
        id
    }

    /// Delete the question with the given id; remaining questions keep
    /// their relative order
    pub fn remove_question(&mut self, id: &str) {
        let before = self.form.questions.len();
        self.form.questions.retain(|q| q.id != id);
        if self.form.questions.len() == before {
            tracing::debug!(%id, "remove_question: unknown question id, ignoring");
        }
    }

    /// Swap the question with its immediate neighbor in the given direction.
    /// No-op at the boundary or on an unknown id.
    pub fn move_question(&mut self, id: &str, direction: MoveDirection) {
        let Some(index) = self.form.questions.iter().position(|q| q.id == id) else {
            tracing::debug!(%id, "move_question: unknown question id, ignoring");
            return;
        };
        let neighbor = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => {
                (index + 1 < self.form.questions.len()).then_some(index + 1)
            }
        };
        if let Some(neighbor) = neighbor {
            self.form.questions.swap(index, neighbor);
        }
    }

    /// Append a response unconditionally. The caller is expected to have
    /// validated required fields already; responses are never mutated or
    /// deleted afterwards.
    pub fn add_response(&mut self, response: Response) {
        self.responses.push(response);
        tracing::debug!(total = self.responses.len(), "recorded response");
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}
