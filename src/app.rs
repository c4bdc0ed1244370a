//! Application controller: per-view key handling over the form store

use crate::config::TuiConfig;
use crate::state::{
    AdminFocus, AdminTab, AppState, EditState, EditTarget, View,
};
use crate::store::{
    validate, MoveDirection, Question, QuestionOption, QuestionType, QuestionUpdate,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User preferences loaded at startup
    config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    #[allow(clippy::field_reassign_with_default)]
    pub fn new(config: TuiConfig) -> Self {
        let mut state = AppState::default();
        state.current_view = match config.start_view.as_deref() {
            Some("fill") => View::Fill,
            Some("admin") => View::Admin,
            _ => View::Home,
        };
        Self {
            state,
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn show_hints(&self) -> bool {
        self.config.show_hints()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any transient status message on key press
        self.state.status_message = None;

        // An active edit session is modal
        if self.state.edit.is_some() {
            self.handle_edit_key(key);
            return Ok(());
        }

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Fill => self.handle_fill_key(key),
            View::FillSubmitted => self.handle_submitted_key(key),
            View::Admin => self.handle_admin_key(key),
        }
        Ok(())
    }

    // --- edit session ---

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.edit = None;
            }
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Backspace => {
                if let Some(edit) = &mut self.state.edit {
                    edit.buffer.pop_char();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(edit) = &mut self.state.edit {
                    edit.buffer.push_char(c);
                }
            }
            _ => {}
        }
    }

    fn commit_edit(&mut self) {
        let Some(edit) = self.state.edit.take() else {
            return;
        };
        let text = edit.buffer.into_text();
        match edit.target {
            EditTarget::FormTitle => {
                let mut form = self.state.store.form().clone();
                form.title = text;
                self.state.store.set_form(form);
            }
            EditTarget::FormDescription => {
                let mut form = self.state.store.form().clone();
                form.description = text;
                self.state.store.set_form(form);
            }
            EditTarget::QuestionTitle(id) => {
                self.state.store.update_question(
                    &id,
                    QuestionUpdate {
                        title: Some(text),
                        ..Default::default()
                    },
                );
            }
            EditTarget::QuestionDescription(id) => {
                self.state.store.update_question(
                    &id,
                    QuestionUpdate {
                        description: Some(text),
                        ..Default::default()
                    },
                );
            }
            EditTarget::OptionLabel {
                question_id,
                option_id,
            } => {
                let Some(mut options) = self
                    .state
                    .store
                    .form()
                    .question(&question_id)
                    .and_then(|q| q.options.clone())
                else {
                    return;
                };
                if let Some(option) = options.iter_mut().find(|o| o.id == option_id) {
                    option.label = text;
                }
                self.state.store.update_question(
                    &question_id,
                    QuestionUpdate {
                        options: Some(options),
                        ..Default::default()
                    },
                );
            }
        }
    }

    fn start_edit(&mut self, target: EditTarget, initial: String) {
        self.state.edit = Some(EditState::new(target, initial));
    }

    // --- home ---

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.state.home_selected = 0,
            KeyCode::Down | KeyCode::Char('j') => self.state.home_selected = 1,
            KeyCode::Tab => self.state.home_selected = (self.state.home_selected + 1) % 2,
            KeyCode::Enter => {
                self.state.current_view = if self.state.home_selected == 0 {
                    View::Fill
                } else {
                    View::Admin
                };
            }
            KeyCode::Char('f') => self.state.current_view = View::Fill,
            KeyCode::Char('a') => self.state.current_view = View::Admin,
            _ => {}
        }
    }

    // --- fill view ---

    fn handle_fill_key(&mut self, key: KeyEvent) {
        let question_count = self.state.question_count();

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('l') {
                self.state.fill.clear();
                self.state.set_status("Form cleared");
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                // Draft survives leaving the view
                self.state.current_view = View::Home;
                return;
            }
            KeyCode::Down | KeyCode::Tab => {
                self.state.fill.select_next(question_count);
                return;
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.state.fill.select_prev();
                return;
            }
            _ => {}
        }

        if self.state.fill.on_submit_row(question_count) {
            if key.code == KeyCode::Enter {
                self.submit_response();
            }
            return;
        }

        let Some(question) = self
            .state
            .store
            .form()
            .questions
            .get(self.state.fill.selected)
            .cloned()
        else {
            return;
        };

        match question.kind {
            QuestionType::ShortText | QuestionType::LongText => match key.code {
                KeyCode::Char(c) => self.state.fill.type_char(&question.id, c),
                KeyCode::Backspace => self.state.fill.backspace(&question.id),
                KeyCode::Enter if question.kind == QuestionType::LongText => {
                    self.state.fill.type_char(&question.id, '\n');
                }
                _ => {}
            },
            QuestionType::MultipleChoice | QuestionType::Checkbox => {
                let options = question.options();
                match key.code {
                    KeyCode::Left => self.state.fill.option_cursor_up(),
                    KeyCode::Right => self.state.fill.option_cursor_down(options.len()),
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        let Some(option) = options.get(self.state.fill.option_cursor) else {
                            return;
                        };
                        if question.kind == QuestionType::MultipleChoice {
                            self.state.fill.select_option(&question.id, &option.id);
                        } else {
                            self.state.fill.toggle_option(&question.id, &option.id);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    fn submit_response(&mut self) {
        let invalid =
            validate::invalid_questions(self.state.store.form(), &self.state.fill.draft);
        if invalid.is_empty() {
            let response = self.state.fill.take_draft();
            self.state.store.add_response(response);
            self.state.current_view = View::FillSubmitted;
            tracing::info!(
                total = self.state.store.responses().len(),
                "response submitted"
            );
        } else {
            let count = invalid.len();
            self.state.fill.invalid = invalid;
            self.state
                .set_status(format!("{count} required question(s) unanswered"));
        }
    }

    fn handle_submitted_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => self.state.current_view = View::Fill,
            KeyCode::Esc | KeyCode::Char('q') => self.state.current_view = View::Home,
            _ => {}
        }
    }

    // --- admin view ---

    fn handle_admin_key(&mut self, key: KeyEvent) {
        // Delete confirmation is modal
        if self.state.admin.pending_delete.is_some() {
            self.handle_delete_confirm_key(key);
            return;
        }
        // So is the add-question type picker
        if self.state.admin.pending_add {
            self.handle_add_picker_key(key);
            return;
        }

        match self.state.admin.tab {
            AdminTab::Questions => match self.state.admin.focus {
                AdminFocus::Questions => self.handle_admin_list_key(key),
                AdminFocus::Options => self.handle_admin_options_key(key),
            },
            AdminTab::Responses => self.handle_admin_responses_key(key),
        }
    }

    fn handle_delete_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if let Some(id) = self.state.admin.pending_delete.take() {
                    self.state.store.remove_question(&id);
                    let count = self.state.question_count();
                    self.state.admin.clamp_selection(count);
                    self.state.set_status("Question deleted");
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.state.admin.pending_delete = None;
            }
            _ => {}
        }
    }

    fn handle_add_picker_key(&mut self, key: KeyEvent) {
        let kind = match key.code {
            KeyCode::Char('1') => Some(QuestionType::ShortText),
            KeyCode::Char('2') => Some(QuestionType::LongText),
            KeyCode::Char('3') => Some(QuestionType::MultipleChoice),
            KeyCode::Char('4') => Some(QuestionType::Checkbox),
            KeyCode::Esc => {
                self.state.admin.pending_add = false;
                return;
            }
            _ => None,
        };
        if let Some(kind) = kind {
            self.state.store.add_question(kind);
            self.state.admin.pending_add = false;
            self.state.admin.selected = self.state.question_count() - 1;
            self.state
                .set_status(format!("Added {} question", kind.label()));
        }
    }

    fn handle_admin_list_key(&mut self, key: KeyEvent) {
        let question_count = self.state.question_count();
        match key.code {
            KeyCode::Esc => self.state.current_view = View::Home,
            KeyCode::Tab => self.state.admin.tab.toggle(),
            KeyCode::Up | KeyCode::Char('k') => self.state.admin.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.state.admin.select_next(question_count),
            KeyCode::Char('K') => {
                if self.state.admin.selected > 0 {
                    if let Some(question) = self.selected_question() {
                        self.state
                            .store
                            .move_question(&question.id, MoveDirection::Up);
                        self.state.admin.selected -= 1;
                    }
                }
            }
            KeyCode::Char('J') => {
                if self.state.admin.selected + 1 < question_count {
                    if let Some(question) = self.selected_question() {
                        self.state
                            .store
                            .move_question(&question.id, MoveDirection::Down);
                        self.state.admin.selected += 1;
                    }
                }
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(question) = self.selected_question() {
                    self.start_edit(EditTarget::QuestionTitle(question.id.clone()), question.title);
                }
            }
            KeyCode::Char('i') => {
                if let Some(question) = self.selected_question() {
                    self.start_edit(
                        EditTarget::QuestionDescription(question.id.clone()),
                        question.description.unwrap_or_default(),
                    );
                }
            }
            KeyCode::Char('t') => self.cycle_question_type(),
            KeyCode::Char('r') => {
                if let Some(question) = self.selected_question() {
                    self.state.store.update_question(
                        &question.id,
                        QuestionUpdate {
                            required: Some(!question.required),
                            ..Default::default()
                        },
                    );
                }
            }
            KeyCode::Char('o') => {
                if let Some(question) = self.selected_question() {
                    if question.kind.is_choice() {
                        self.state.admin.focus = AdminFocus::Options;
                        self.state.admin.option_cursor = 0;
                    } else {
                        self.state.set_status("Selected question has no options");
                    }
                }
            }
            KeyCode::Char('a') => self.state.admin.pending_add = true,
            KeyCode::Char('x') | KeyCode::Delete => {
                if let Some(question) = self.selected_question() {
                    if self.config.confirm_delete() {
                        self.state.admin.pending_delete = Some(question.id);
                    } else {
                        self.state.store.remove_question(&question.id);
                        let count = self.state.question_count();
                        self.state.admin.clamp_selection(count);
                        self.state.set_status("Question deleted");
                    }
                }
            }
            KeyCode::Char('T') => {
                let title = self.state.store.form().title.clone();
                self.start_edit(EditTarget::FormTitle, title);
            }
            KeyCode::Char('D') => {
                let description = self.state.store.form().description.clone();
                self.start_edit(EditTarget::FormDescription, description);
            }
            _ => {}
        }
    }

    fn cycle_question_type(&mut self) {
        let Some(question) = self.selected_question() else {
            return;
        };
        let next = question.kind.next();
        let mut updates = QuestionUpdate {
            kind: Some(next),
            ..Default::default()
        };
        // Switching into a choice kind seeds one default option; switching
        // away keeps whatever options are stored
        if next.is_choice() && question.options().is_empty() {
            updates.options = Some(vec![QuestionOption {
                id: self.state.store.next_option_id(),
                label: "Option 1".to_string(),
            }]);
        }
        self.state.store.update_question(&question.id, updates);
        self.state.set_status(format!("Type: {}", next.label()));
    }

    fn handle_admin_options_key(&mut self, key: KeyEvent) {
        let Some(question) = self.selected_question() else {
            self.state.admin.focus = AdminFocus::Questions;
            return;
        };
        let option_count = question.options().len();
        match key.code {
            KeyCode::Esc | KeyCode::Tab => self.state.admin.focus = AdminFocus::Questions,
            KeyCode::Up | KeyCode::Char('k') => self.state.admin.option_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.admin.option_cursor_down(option_count);
            }
            KeyCode::Char('a') => {
                let mut options = question.options().to_vec();
                options.push(QuestionOption {
                    id: self.state.store.next_option_id(),
                    label: format!("Option {}", option_count + 1),
                });
                self.state.store.update_question(
                    &question.id,
                    QuestionUpdate {
                        options: Some(options),
                        ..Default::default()
                    },
                );
                self.state.admin.option_cursor = option_count;
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(option) = question.options().get(self.state.admin.option_cursor) {
                    self.start_edit(
                        EditTarget::OptionLabel {
                            question_id: question.id.clone(),
                            option_id: option.id.clone(),
                        },
                        option.label.clone(),
                    );
                }
            }
            KeyCode::Char('x') | KeyCode::Delete => {
                let cursor = self.state.admin.option_cursor;
                if cursor < option_count {
                    let mut options = question.options().to_vec();
                    options.remove(cursor);
                    // A required choice question may end up with zero
                    // options; the validator reports it, we don't block it
                    let remaining = options.len();
                    self.state.store.update_question(
                        &question.id,
                        QuestionUpdate {
                            options: Some(options),
                            ..Default::default()
                        },
                    );
                    self.state.admin.clamp_option_cursor(remaining);
                }
            }
            _ => {}
        }
    }

    fn handle_admin_responses_key(&mut self, key: KeyEvent) {
        let question_count = self.state.question_count();
        match key.code {
            KeyCode::Esc => self.state.current_view = View::Home,
            KeyCode::Tab => self.state.admin.tab.toggle(),
            KeyCode::Up | KeyCode::Char('k') => self.state.admin.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.admin.scroll_down(question_count),
            _ => {}
        }
    }

    fn selected_question(&self) -> Option<Question> {
        self.state
            .store
            .form()
            .questions
            .get(self.state.admin.selected)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AnswerValue;

    fn app() -> App {
        App::new(TuiConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code)).unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_home_enter_opens_fill_then_admin() {
            let mut app = app();
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.current_view, View::Fill);
            press(&mut app, KeyCode::Esc);
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.current_view, View::Admin);
        }

        #[test]
        fn test_start_view_from_config() {
            let config = TuiConfig {
                start_view: Some("admin".to_string()),
                ..Default::default()
            };
            let app = App::new(config);
            assert_eq!(app.state.current_view, View::Admin);
        }

        #[test]
        fn test_quit_from_home() {
            let mut app = app();
            press(&mut app, KeyCode::Char('q'));
            assert!(app.should_quit());
        }
    }

    mod fill_flow {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_rejected_submit_marks_required_questions() {
            let mut app = app();
            press(&mut app, KeyCode::Char('f'));
            // Jump straight to the submit row (4 questions + submit)
            for _ in 0..4 {
                press(&mut app, KeyCode::Tab);
            }
            press(&mut app, KeyCode::Enter);

            assert_eq!(app.state.current_view, View::Fill);
            assert!(app.state.store.responses().is_empty());
            let invalid: Vec<_> = app.state.fill.invalid.iter().cloned().collect();
            assert_eq!(invalid, ["q1", "q3"]);
        }

        #[test]
        fn test_valid_submit_appends_response_and_confirms() {
            let mut app = app();
            press(&mut app, KeyCode::Char('f'));
            type_str(&mut app, "great docs");
            // q3 is the required multiple choice; select its second option
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Char(' '));
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Enter);

            assert_eq!(app.state.current_view, View::FillSubmitted);
            assert_eq!(app.state.store.responses().len(), 1);
            let response = &app.state.store.responses()[0];
            assert_eq!(
                response.get("q1"),
                Some(&AnswerValue::Text("great docs".to_string()))
            );
            assert_eq!(
                response.get("q3"),
                Some(&AnswerValue::Choice("o2".to_string()))
            );
            // Draft is reset for the next respondent
            assert!(app.state.fill.draft.is_empty());
        }

        #[test]
        fn test_checkbox_space_toggles_membership() {
            let mut app = app();
            press(&mut app, KeyCode::Char('f'));
            // Move to q4 (checkbox)
            for _ in 0..3 {
                press(&mut app, KeyCode::Tab);
            }
            press(&mut app, KeyCode::Char(' '));
            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Char(' '));
            assert_eq!(
                app.state.fill.draft.get("q4"),
                Some(&AnswerValue::Multi(vec![
                    "o1".to_string(),
                    "o2".to_string()
                ]))
            );
            press(&mut app, KeyCode::Char(' '));
            assert_eq!(
                app.state.fill.draft.get("q4"),
                Some(&AnswerValue::Multi(vec!["o1".to_string()]))
            );
        }

        #[test]
        fn test_submit_another_response_loops_back() {
            let mut app = app();
            app.state.current_view = View::FillSubmitted;
            press(&mut app, KeyCode::Char('r'));
            assert_eq!(app.state.current_view, View::Fill);
        }

        #[test]
        fn test_clear_form_drops_draft() {
            let mut app = app();
            press(&mut app, KeyCode::Char('f'));
            type_str(&mut app, "scratch");
            app.handle_key(KeyEvent::new(
                KeyCode::Char('l'),
                KeyModifiers::CONTROL,
            ))
            .unwrap();
            assert!(app.state.fill.draft.is_empty());
        }
    }

    mod admin_flow {
        use super::*;
        use pretty_assertions::assert_eq;

        fn admin_app() -> App {
            let mut app = app();
            press(&mut app, KeyCode::Char('a'));
            app
        }

        #[test]
        fn test_add_question_via_picker() {
            let mut app = admin_app();
            press(&mut app, KeyCode::Char('a'));
            assert!(app.state.admin.pending_add);
            press(&mut app, KeyCode::Char('3'));
            assert_eq!(app.state.question_count(), 5);
            let added = &app.state.store.form().questions[4];
            assert_eq!(added.kind, QuestionType::MultipleChoice);
            assert_eq!(added.options().len(), 1);
            assert_eq!(app.state.admin.selected, 4);
        }

        #[test]
        fn test_delete_requires_confirmation() {
            let mut app = admin_app();
            press(&mut app, KeyCode::Char('x'));
            assert_eq!(app.state.question_count(), 4);
            press(&mut app, KeyCode::Char('y'));
            assert_eq!(app.state.question_count(), 3);
            assert_eq!(app.state.store.form().questions[0].id, "q2");
        }

        #[test]
        fn test_delete_confirmation_can_be_declined() {
            let mut app = admin_app();
            press(&mut app, KeyCode::Char('x'));
            press(&mut app, KeyCode::Char('n'));
            assert_eq!(app.state.question_count(), 4);
        }

        #[test]
        fn test_move_question_follows_selection() {
            let mut app = admin_app();
            press(&mut app, KeyCode::Char('j'));
            press(&mut app, KeyCode::Char('K'));
            let ids: Vec<_> = app
                .state
                .store
                .form()
                .questions
                .iter()
                .map(|q| q.id.as_str())
                .collect();
            assert_eq!(ids, ["q2", "q1", "q3", "q4"]);
            assert_eq!(app.state.admin.selected, 0);
            // Moving the top question up is a no-op
            press(&mut app, KeyCode::Char('K'));
            assert_eq!(app.state.store.form().questions[0].id, "q2");
        }

        #[test]
        fn test_cycle_type_into_choice_seeds_option() {
            let mut app = admin_app();
            // q1 short_text -> long_text -> multiple_choice
            press(&mut app, KeyCode::Char('t'));
            press(&mut app, KeyCode::Char('t'));
            let q1 = app.state.store.form().question("q1").unwrap();
            assert_eq!(q1.kind, QuestionType::MultipleChoice);
            assert_eq!(q1.options().len(), 1);
            assert_eq!(q1.options()[0].label, "Option 1");
        }

        #[test]
        fn test_toggle_required() {
            let mut app = admin_app();
            press(&mut app, KeyCode::Char('r'));
            assert!(!app.state.store.form().question("q1").unwrap().required);
            press(&mut app, KeyCode::Char('r'));
            assert!(app.state.store.form().question("q1").unwrap().required);
        }

        #[test]
        fn test_edit_question_title_commit() {
            let mut app = admin_app();
            press(&mut app, KeyCode::Char('e'));
            assert!(app.state.edit.is_some());
            // Buffer starts from the current title; rewrite it
            for _ in 0.."What's one thing we're doing well?".len() {
                press(&mut app, KeyCode::Backspace);
            }
            type_str(&mut app, "New prompt");
            press(&mut app, KeyCode::Enter);
            assert!(app.state.edit.is_none());
            assert_eq!(
                app.state.store.form().question("q1").unwrap().title,
                "New prompt"
            );
        }

        #[test]
        fn test_edit_cancel_leaves_store_untouched() {
            let mut app = admin_app();
            press(&mut app, KeyCode::Char('e'));
            type_str(&mut app, " scratch");
            press(&mut app, KeyCode::Esc);
            assert_eq!(
                app.state.store.form().question("q1").unwrap().title,
                "What's one thing we're doing well?"
            );
        }

        #[test]
        fn test_edit_form_title() {
            let mut app = admin_app();
            press(&mut app, KeyCode::Char('T'));
            type_str(&mut app, "!");
            press(&mut app, KeyCode::Enter);
            assert_eq!(
                app.state.store.form().title,
                "Anonymous Feedback Form!"
            );
        }

        #[test]
        fn test_options_focus_add_and_remove() {
            let mut app = admin_app();
            // q3 is the multiple choice question
            press(&mut app, KeyCode::Char('j'));
            press(&mut app, KeyCode::Char('j'));
            press(&mut app, KeyCode::Char('o'));
            assert_eq!(app.state.admin.focus, AdminFocus::Options);

            press(&mut app, KeyCode::Char('a'));
            let q3 = app.state.store.form().question("q3").unwrap();
            assert_eq!(q3.options().len(), 5);
            assert_eq!(q3.options()[4].label, "Option 5");

            press(&mut app, KeyCode::Char('x'));
            assert_eq!(
                app.state.store.form().question("q3").unwrap().options().len(),
                4
            );
        }

        #[test]
        fn test_options_focus_rejected_for_text_question() {
            let mut app = admin_app();
            press(&mut app, KeyCode::Char('o'));
            assert_eq!(app.state.admin.focus, AdminFocus::Questions);
        }

        #[test]
        fn test_tab_switches_to_responses() {
            let mut app = admin_app();
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.state.admin.tab, AdminTab::Responses);
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.state.admin.tab, AdminTab::Questions);
        }
    }
}
