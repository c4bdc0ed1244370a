//! Text editing buffer and edit targets

/// A single-value text input buffer
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    value: String,
}

impl InputBuffer {
    pub fn with_value(value: String) -> Self {
        Self { value }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn into_text(self) -> String {
        self.value
    }
}

/// What an active edit session writes back to when committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    FormTitle,
    FormDescription,
    QuestionTitle(String),
    QuestionDescription(String),
    OptionLabel {
        question_id: String,
        option_id: String,
    },
}

/// An in-progress edit: Enter commits through a store operation, Esc drops
/// the buffer without touching the store
#[derive(Debug, Clone)]
pub struct EditState {
    pub target: EditTarget,
    pub buffer: InputBuffer,
}

impl EditState {
    pub fn new(target: EditTarget, initial: String) -> Self {
        Self {
            target,
            buffer: InputBuffer::with_value(initial),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop() {
        let mut buffer = InputBuffer::default();
        buffer.push_char('h');
        buffer.push_char('i');
        assert_eq!(buffer.as_text(), "hi");
        buffer.pop_char();
        assert_eq!(buffer.as_text(), "h");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut buffer = InputBuffer::default();
        buffer.pop_char();
        assert_eq!(buffer.as_text(), "");
    }

    #[test]
    fn test_clear() {
        let mut buffer = InputBuffer::with_value("something".to_string());
        buffer.clear();
        assert_eq!(buffer.as_text(), "");
    }

    #[test]
    fn test_edit_state_starts_from_current_value() {
        let edit = EditState::new(EditTarget::FormTitle, "Current".to_string());
        assert_eq!(edit.buffer.as_text(), "Current");
    }
}
