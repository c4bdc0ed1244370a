//! Layout helpers and the status bar

use crate::app::App;
use crate::state::{AdminFocus, AdminTab, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main content area with the bottom line reserved for the status bar
pub fn content_area(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Center a fixed-size rect within an area, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the bottom status bar: prompts first, then transient messages,
/// then key hints for the current view
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    if app.state.edit.is_some() {
        spans.push(Span::styled(
            " Enter save | Esc cancel",
            Style::default().fg(Color::Cyan),
        ));
    } else if app.state.admin.pending_delete.is_some() {
        spans.push(Span::styled(
            " Delete this question? (y/n)",
            Style::default().fg(Color::Red),
        ));
    } else if app.state.admin.pending_add {
        spans.push(Span::styled(
            " Add question: [1] Short Text  [2] Long Text  [3] Multiple Choice  [4] Checkboxes  (Esc cancel)",
            Style::default().fg(Color::Cyan),
        ));
    } else if app.show_hints() {
        spans.push(Span::styled(
            view_hints(app),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if let Some(message) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(message, Style::default().fg(Color::Green)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}

fn view_hints(app: &App) -> &'static str {
    match app.state.current_view {
        View::Home => " ↑↓ select | Enter open | q quit",
        View::Fill => " ↑↓/Tab move | type to answer | Space select | Ctrl+L clear | Esc back",
        View::FillSubmitted => " Enter submit another | Esc home",
        View::Admin => match (app.state.admin.tab, app.state.admin.focus) {
            (AdminTab::Questions, AdminFocus::Questions) => {
                " ↑↓ select | e title | i desc | t type | r req | o options | a add | x del | K/J move | T/D form | Tab responses | Esc back"
            }
            (AdminTab::Questions, AdminFocus::Options) => {
                " ↑↓ select | e edit | a add | x delete | Esc done"
            }
            (AdminTab::Responses, _) => " ↑↓ scroll | Tab questions | Esc back",
        },
    }
}
