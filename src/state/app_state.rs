//! Application state definitions

use super::admin_state::AdminState;
use super::fill_state::FillState;
use super::input::EditState;
use crate::store::FormStore;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Entry screen with the two surfaces
    #[default]
    Home,
    /// Respondent view
    Fill,
    /// Post-submit confirmation
    FillSubmitted,
    /// Builder + analytics view
    Admin,
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    pub current_view: View,
    /// The single source of truth for form and responses
    pub store: FormStore,
    pub fill: FillState,
    pub admin: AdminState,
    /// Active text edit session (modal over the current view)
    pub edit: Option<EditState>,
    /// Selected entry button on the home screen (0 = fill, 1 = admin)
    pub home_selected: usize,
    /// Transient message for the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn question_count(&self) -> usize {
        self.store.form().questions.len()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Home);
        assert_eq!(state.question_count(), 4);
        assert!(state.edit.is_none());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_set_status() {
        let mut state = AppState::default();
        state.set_status("done");
        assert_eq!(state.status_message.as_deref(), Some("done"));
    }
}
