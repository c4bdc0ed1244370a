//! Respondent view: render the form, collect answers, confirm submission

use super::components::{render_button, BUTTON_HEIGHT};
use super::layout::centered_rect;
use crate::app::App;
use crate::state::FillState;
use crate::store::{Question, QuestionType};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Form header
            Constraint::Min(0),                // Questions
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .split(area);

    draw_header(frame, chunks[0], app);
    draw_questions(frame, chunks[1], app);

    let question_count = app.state.question_count();
    render_button(
        frame,
        chunks[2],
        "Submit",
        app.state.fill.on_submit_row(question_count),
    );
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.state.store.form();
    let header = Paragraph::new(vec![
        Line::styled(
            form.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            form.description.clone(),
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(header, area);
}

fn draw_questions(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.state.store.form();
    let fill = &app.state.fill;
    let question_count = form.questions.len();
    if question_count == 0 {
        let message = Paragraph::new("This form has no questions yet.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(message, area);
        return;
    }

    // Keep the selected question and its predecessor in view
    let first = fill
        .selected
        .min(question_count - 1)
        .saturating_sub(1);

    let mut y = area.y;
    for (index, question) in form.questions.iter().enumerate().skip(first) {
        let height = question_height(question, fill);
        if y + height > area.bottom() {
            break;
        }
        let rect = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        draw_question(frame, rect, question, fill, index == fill.selected);
        y += height;
    }
}

fn question_height(question: &Question, fill: &FillState) -> u16 {
    let value_lines = match question.kind {
        QuestionType::ShortText => 1,
        QuestionType::LongText => 3,
        QuestionType::MultipleChoice | QuestionType::Checkbox => {
            question.options().len().max(1) as u16
        }
    };
    let description = u16::from(question.description.is_some());
    let error = u16::from(fill.invalid.contains(&question.id));
    value_lines + description + error + 2
}

fn draw_question(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    fill: &FillState,
    is_active: bool,
) {
    let has_error = fill.invalid.contains(&question.id);
    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut lines: Vec<Line> = Vec::new();
    if let Some(description) = &question.description {
        lines.push(Line::styled(
            description.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    match question.kind {
        QuestionType::ShortText | QuestionType::LongText => {
            lines.extend(text_value_lines(question, fill, is_active));
        }
        QuestionType::MultipleChoice | QuestionType::Checkbox => {
            let options = question.options();
            if options.is_empty() {
                lines.push(Line::styled(
                    "(no options)",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            for (index, option) in options.iter().enumerate() {
                let selected = fill.is_option_selected(question, &option.id);
                let marker = match (question.kind, selected) {
                    (QuestionType::MultipleChoice, true) => "(•)",
                    (QuestionType::MultipleChoice, false) => "( )",
                    (_, true) => "[x]",
                    (_, false) => "[ ]",
                };
                let at_cursor = is_active && index == fill.option_cursor;
                let style = if at_cursor {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                };
                let prefix = if at_cursor { "▸ " } else { "  " };
                lines.push(Line::styled(
                    format!("{prefix}{marker} {}", option.label),
                    style,
                ));
            }
        }
    }

    if has_error {
        lines.push(Line::styled(
            "This question is required",
            Style::default().fg(Color::Red),
        ));
    }

    let required_marker = if question.required { " *" } else { "" };
    let block = Block::default()
        .title(format!(" {}{required_marker} ", question.title))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn text_value_lines<'a>(question: &Question, fill: &'a FillState, is_active: bool) -> Vec<Line<'a>> {
    let value = fill.text_value(&question.id);
    if value.is_empty() && !is_active {
        return vec![Line::styled(
            "Your answer",
            Style::default().fg(Color::DarkGray),
        )];
    }

    let cursor = if is_active { "▌" } else { "" };
    let mut lines: Vec<Line> = value.lines().map(Line::from).collect();
    if let Some(last) = lines.last_mut() {
        last.spans
            .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
    } else {
        lines.push(Line::from(Span::styled(
            cursor,
            Style::default().fg(Color::Cyan),
        )));
    }
    lines
}

/// Post-submit confirmation screen
pub fn draw_submitted(frame: &mut Frame, area: Rect) {
    let card = centered_rect(50, 8, area);

    let content = Paragraph::new(vec![
        Line::raw(""),
        Line::styled(
            "✓ Your response has been recorded",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(
            "Thank you for your anonymous feedback.",
            Style::default().fg(Color::DarkGray),
        ),
        Line::raw(""),
        Line::styled(
            "Press Enter to submit another response",
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(content, card);
}
