//! Admin-side state: tabs, question selection, and pending interactions

/// Which admin tab is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Questions,
    Responses,
}

impl AdminTab {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Questions => Self::Responses,
            Self::Responses => Self::Questions,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Questions => "Questions",
            Self::Responses => "Responses",
        }
    }
}

/// Focus within the Questions tab (question list vs options sub-list)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminFocus {
    #[default]
    Questions,
    Options,
}

/// Editor-side cursor and modal state
#[derive(Debug, Clone, Default)]
pub struct AdminState {
    pub tab: AdminTab,
    pub focus: AdminFocus,
    /// Selected question index within the form
    pub selected: usize,
    /// Cursor within the selected question's options (Options focus)
    pub option_cursor: usize,
    /// First question rendered in the Responses tab
    pub scroll_offset: usize,
    /// Add-question type picker is awaiting a 1-4 keypress
    pub pending_add: bool,
    /// Question id awaiting delete confirmation
    pub pending_delete: Option<String>,
}

impl AdminState {
    pub fn select_next(&mut self, question_count: usize) {
        if question_count > 0 && self.selected + 1 < question_count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Keep the cursor valid after a removal
    pub fn clamp_selection(&mut self, question_count: usize) {
        if question_count == 0 {
            self.selected = 0;
        } else if self.selected >= question_count {
            self.selected = question_count - 1;
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

    pub fn clamp_option_cursor(&mut self, option_count: usize) {
        if option_count == 0 {
            self.option_cursor = 0;
        } else if self.option_cursor >= option_count {
            self.option_cursor = option_count - 1;
        }
    }

    pub fn scroll_down(&mut self, question_count: usize) {
        if question_count > 0 && self.scroll_offset + 1 < question_count {
            self.scroll_offset += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_toggle() {
        let mut tab = AdminTab::default();
        assert_eq!(tab, AdminTab::Questions);
        tab.toggle();
        assert_eq!(tab, AdminTab::Responses);
        tab.toggle();
        assert_eq!(tab, AdminTab::Questions);
    }

    #[test]
    fn test_selection_clamps_at_bounds() {
        let mut admin = AdminState::default();
        admin.select_prev();
        assert_eq!(admin.selected, 0);
        admin.select_next(2);
        admin.select_next(2);
        assert_eq!(admin.selected, 1);
    }

    #[test]
    fn test_clamp_selection_after_removal() {
        let mut admin = AdminState {
            selected: 3,
            ..Default::default()
        };
        admin.clamp_selection(2);
        assert_eq!(admin.selected, 1);
        admin.clamp_selection(0);
        assert_eq!(admin.selected, 0);
    }

    #[test]
    fn test_option_cursor_bounds() {
        let mut admin = AdminState::default();
        admin.option_cursor_down(3);
        admin.option_cursor_down(3);
        admin.option_cursor_down(3);
        assert_eq!(admin.option_cursor, 2);
        admin.option_cursor_up();
        assert_eq!(admin.option_cursor, 1);
        admin.clamp_option_cursor(1);
        assert_eq!(admin.option_cursor, 0);
    }

    #[test]
    fn test_responses_scroll_bounds() {
        let mut admin = AdminState::default();
        admin.scroll_up();
        assert_eq!(admin.scroll_offset, 0);
        admin.scroll_down(2);
        admin.scroll_down(2);
        assert_eq!(admin.scroll_offset, 1);
    }
}
