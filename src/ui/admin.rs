//! Admin view: question builder and response analytics

use super::layout::centered_rect;
use crate::app::App;
use crate::state::{AdminFocus, AdminTab, EditTarget};
use crate::store::{aggregate, Question, QuestionType};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Form header
            Constraint::Length(1), // Tabs
            Constraint::Min(0),    // Tab content
        ])
        .split(area);

    draw_header(frame, chunks[0], app);
    draw_tabs(frame, chunks[1], app);

    match app.state.admin.tab {
        AdminTab::Questions => draw_questions_tab(frame, chunks[2], app),
        AdminTab::Responses => draw_responses_tab(frame, chunks[2], app),
    }

    if app.state.edit.is_some() {
        draw_edit_dialog(frame, area, app);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.state.store.form();
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                form.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [T] edit", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(form.description.clone(), Style::default().fg(Color::DarkGray)),
            Span::styled("  [D] edit", Style::default().fg(Color::DarkGray)),
        ]),
    ])
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(header, area);
}

fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let response_count = app.state.store.responses().len();
    let active = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(Color::DarkGray);

    let (questions_style, responses_style) = match app.state.admin.tab {
        AdminTab::Questions => (active, inactive),
        AdminTab::Responses => (inactive, active),
    };

    let tabs = Line::from(vec![
        Span::styled(" Questions ", questions_style),
        Span::raw("|"),
        Span::styled(format!(" Responses ({response_count}) "), responses_style),
    ]);
    frame.render_widget(Paragraph::new(tabs), area);
}

fn draw_questions_tab(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.state.store.form();
    let admin = &app.state.admin;

    if form.questions.is_empty() {
        let message = Paragraph::new("No questions.\nPress 'a' to add one.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(message, area);
        return;
    }

    let first = admin
        .selected
        .min(form.questions.len() - 1)
        .saturating_sub(1);

    let mut y = area.y;
    for (index, question) in form.questions.iter().enumerate().skip(first) {
        let height = question_height(question);
        if y + height > area.bottom() {
            break;
        }
        let rect = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        draw_question_card(frame, rect, app, question, index);
        y += height;
    }
}

fn question_height(question: &Question) -> u16 {
    // description + options + borders
    1 + question.options().len() as u16 + 2
}

fn draw_question_card(frame: &mut Frame, area: Rect, app: &App, question: &Question, index: usize) {
    let admin = &app.state.admin;
    let is_selected = index == admin.selected;
    let in_options = is_selected && admin.focus == AdminFocus::Options;

    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let prefix = if is_selected { "▸" } else { " " };
    let required_marker = if question.required { " *" } else { "" };
    let title = format!(
        " {prefix} {}. {}{required_marker} [{}] ",
        index + 1,
        question.title,
        question.kind.label()
    );

    let mut lines: Vec<Line> = Vec::new();
    let description = question.description.as_deref().unwrap_or("");
    lines.push(Line::styled(
        if description.is_empty() {
            "(no description)".to_string()
        } else {
            description.to_string()
        },
        Style::default().fg(Color::DarkGray),
    ));

    let marker = match question.kind {
        QuestionType::MultipleChoice => "( )",
        QuestionType::Checkbox => "[ ]",
        _ => "·",
    };
    for (option_index, option) in question.options().iter().enumerate() {
        let at_cursor = in_options && option_index == admin.option_cursor;
        let option_prefix = if at_cursor { "▸ " } else { "  " };
        let style = if at_cursor {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        lines.push(Line::styled(
            format!("{option_prefix}{marker} {}", option.label),
            style,
        ));
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_responses_tab(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.state.store.form();
    let responses = app.state.store.responses();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Summary
            Constraint::Min(0),    // Per-question breakdown
        ])
        .split(area);

    let summary = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{}", responses.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" total anonymous responses", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(summary, chunks[0]);

    if responses.is_empty() {
        let message = Paragraph::new(
            "No responses yet. Share the form to start collecting anonymous feedback.",
        )
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: false });
        frame.render_widget(message, chunks[1]);
        return;
    }

    let content = chunks[1];
    let mut y = content.y;
    for question in form.questions.iter().skip(app.state.admin.scroll_offset) {
        let height = breakdown_height(question, responses.len());
        if y + height > content.bottom() {
            break;
        }
        let rect = Rect {
            x: content.x,
            y,
            width: content.width,
            height,
        };
        draw_question_breakdown(frame, rect, question, app);
        y += height;
    }
}

fn breakdown_height(question: &Question, response_count: usize) -> u16 {
    let body = if question.kind.is_choice() {
        question.options().len().max(1)
    } else {
        // One line per text answer, capped so one prolific question
        // cannot crowd out the rest
        response_count.min(6).max(1)
    };
    body as u16 + 2
}

fn draw_question_breakdown(frame: &mut Frame, area: Rect, question: &Question, app: &App) {
    let responses = app.state.store.responses();
    let block = Block::default()
        .title(format!(" {} ", question.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if question.kind.is_choice() {
        let table = aggregate::option_counts(question, responses);
        if table.is_empty() {
            frame.render_widget(
                Paragraph::new("(no options)")
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block),
                area,
            );
            return;
        }
        let bars: Vec<Bar> = table
            .iter()
            .map(|(option, count)| {
                Bar::default()
                    .value(*count)
                    .label(Line::from(option.label.clone()))
                    .text_value(count.to_string())
            })
            .collect();
        let chart = BarChart::default()
            .block(block)
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .bar_style(Style::default().fg(Color::Cyan))
            .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
            .data(BarGroup::default().bars(&bars));
        frame.render_widget(chart, area);
    } else {
        let answers: Vec<Line> = aggregate::text_answers(&question.id, responses)
            .map(|answer| Line::from(format!("• {answer}")))
            .collect();
        let content = if answers.is_empty() {
            Paragraph::new("(no text answers)").style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(answers)
        };
        frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
    }
}

fn draw_edit_dialog(frame: &mut Frame, area: Rect, app: &App) {
    let Some(edit) = &app.state.edit else {
        return;
    };
    let title = match &edit.target {
        EditTarget::FormTitle => " Edit Form Title ",
        EditTarget::FormDescription => " Edit Form Description ",
        EditTarget::QuestionTitle(_) => " Edit Question Title ",
        EditTarget::QuestionDescription(_) => " Edit Question Description ",
        EditTarget::OptionLabel { .. } => " Edit Option Label ",
    };

    let dialog = centered_rect(area.width.saturating_sub(10).min(60), 3, area);
    let content = Paragraph::new(Line::from(vec![
        Span::raw(edit.buffer.as_text()),
        Span::styled("▌", Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(ratatui::widgets::Clear, dialog);
    frame.render_widget(content, dialog);
}
