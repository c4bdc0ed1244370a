//! Entry screen with the two surfaces

use super::components::{render_button, BUTTON_HEIGHT};
use super::layout::centered_rect;
use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let card = centered_rect(46, 13, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Title + blurb
            Constraint::Length(BUTTON_HEIGHT), // Fill
            Constraint::Length(BUTTON_HEIGHT), // Admin
        ])
        .margin(1)
        .split(card);

    let header = Paragraph::new(vec![
        Line::styled(
            "Anonymous Form",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(
            "Collect feedback anonymously. No names,",
            Style::default().fg(Color::DarkGray),
        ),
        Line::styled(
            "no emails — just honest answers.",
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    render_button(
        frame,
        chunks[1],
        "Fill Out Form",
        app.state.home_selected == 0,
    );
    render_button(
        frame,
        chunks[2],
        "View Responses",
        app.state.home_selected == 1,
    );
}
