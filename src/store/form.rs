//! Form and response model definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The kind of answer a question collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    ShortText,
    LongText,
    MultipleChoice,
    Checkbox,
}

impl QuestionType {
    /// Whether this kind carries an options list
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::MultipleChoice | Self::Checkbox)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ShortText => "Short Text",
            Self::LongText => "Long Text",
            Self::MultipleChoice => "Multiple Choice",
            Self::Checkbox => "Checkboxes",
        }
    }

    /// Next kind in selector order (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Self::ShortText => Self::LongText,
            Self::LongText => Self::MultipleChoice,
            Self::MultipleChoice => Self::Checkbox,
            Self::Checkbox => Self::ShortText,
        }
    }

    /// All kinds in selector order
    pub const ALL: [QuestionType; 4] = [
        Self::ShortText,
        Self::LongText,
        Self::MultipleChoice,
        Self::Checkbox,
    ];
}

/// One selectable choice belonging to a choice-type question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: String,
    pub label: String,
}

/// A single prompt within a form
///
/// `options` is `Some` exactly when `kind` is a choice type; the admin view
/// seeds one default option on creation and on type switch. A stale options
/// list left behind by switching away from a choice kind is tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<QuestionOption>>,
}

impl Question {
    /// Options slice, empty when the question has none
    pub fn options(&self) -> &[QuestionOption] {
        self.options.as_deref().unwrap_or(&[])
    }
}

/// A form definition; question order is the display and fill order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

impl Form {
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// One recorded answer value, discriminated by the question's kind at the
/// point of interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    /// Free text (short or long)
    Text(String),
    /// A single selected option id
    Choice(String),
    /// Selected option ids of a checkbox question, in selection order
    Multi(Vec<String>),
}

impl AnswerValue {
    /// Whether the value counts as answered: non-empty by its own shape
    pub fn is_present(&self) -> bool {
        match self {
            Self::Text(s) | Self::Choice(s) => !s.is_empty(),
            Self::Multi(ids) => !ids.is_empty(),
        }
    }
}

/// One anonymous submission, keyed by question id; unanswered optional
/// questions are simply absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub answers: HashMap<String, AnswerValue>,
}

impl Response {
    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// Partial update for a question; a provided field fully replaces the prior
/// value (options are supplied whole, never deep-merged)
#[derive(Debug, Clone, Default)]
pub struct QuestionUpdate {
    pub kind: Option<QuestionType>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub required: Option<bool>,
    pub options: Option<Vec<QuestionOption>>,
}

/// The example form every session starts from
pub fn default_form() -> Form {
    Form {
        title: "Anonymous Feedback Form".to_string(),
        description:
            "Your responses are completely anonymous. No identifying information is collected."
                .to_string(),
        questions: vec![
            Question {
                id: "q1".to_string(),
                kind: QuestionType::ShortText,
                title: "What's one thing we're doing well?".to_string(),
                description: None,
                required: true,
                options: None,
            },
            Question {
                id: "q2".to_string(),
                kind: QuestionType::LongText,
                title: "Any suggestions for improvement?".to_string(),
                description: Some("Be as detailed as you'd like".to_string()),
                required: false,
                options: None,
            },
            Question {
                id: "q3".to_string(),
                kind: QuestionType::MultipleChoice,
                title: "How would you rate your overall experience?".to_string(),
                description: None,
                required: true,
                options: Some(vec![
                    option("o1", "Excellent"),
                    option("o2", "Good"),
                    option("o3", "Average"),
                    option("o4", "Poor"),
                ]),
            },
            Question {
                id: "q4".to_string(),
                kind: QuestionType::Checkbox,
                title: "Which areas need the most attention?".to_string(),
                description: Some("Select all that apply".to_string()),
                required: false,
                options: Some(vec![
                    option("o1", "Communication"),
                    option("o2", "Work-life balance"),
                    option("o3", "Career growth"),
                    option("o4", "Team collaboration"),
                    option("o5", "Management"),
                ]),
            },
        ],
    }
}

fn option(id: &str, label: &str) -> QuestionOption {
    QuestionOption {
        id: id.to_string(),
        label: label.to_string(),
    }
}
