use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::generator::OPTION_COUNT;
use crate::models::{AppState, Round};

const OPTION_LABELS: [char; OPTION_COUNT] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(round) = app.current_round() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(8),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_question_text(frame, chunks[1], &app.language().prompt(&round.question));
    render_options(frame, chunks[2], round, app);
    render_feedback(frame, chunks[3], app);
    render_controls(frame, chunks[5], app);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let [left, right] = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

    let score = format!("{}: {}", app.language().score_label(), app.score());
    frame.render_widget(Paragraph::new(score).fg(Color::White).bold(), left);

    let progress = match app.round_limit() {
        Some(limit) => format!("{}/{}", app.round_number(), limit),
        None => format!("#{}", app.round_number()),
    };
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, right);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

/// Two-by-two grid of option cells.
fn render_options(frame: &mut Frame, area: Rect, round: &Round, app: &App) {
    let rows = Layout::vertical([Constraint::Length(4), Constraint::Length(4)]).split(area);

    for (index, option) in round.options.iter().enumerate() {
        let row = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(rows[index / 2]);
        let style = option_style(index, option, round, app);

        let widget = Paragraph::new(Line::from(vec![
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style),
        );
        frame.render_widget(widget, row[index % 2]);
    }
}

fn option_style(index: usize, option: &str, round: &Round, app: &App) -> Style {
    let is_selected = index == app.selected_option();

    match app.state {
        AppState::Answered { .. } if option == round.question.capital => {
            Style::default().fg(Color::Green).bold()
        }
        AppState::Answered { correct: false } if is_selected => {
            Style::default().fg(Color::Red).bold()
        }
        AppState::Answered { .. } => Style::default().fg(Color::DarkGray),
        _ if is_selected => Style::default().fg(Color::Cyan).bold(),
        _ => Style::default().fg(Color::Gray),
    }
}

fn render_feedback(frame: &mut Frame, area: Rect, app: &App) {
    let Some(message) = app.feedback() else {
        return;
    };
    let (symbol, color) = match app.state {
        AppState::Answered { correct: true } => ("+", Color::Green),
        _ => ("-", Color::Red),
    };

    let widget = Paragraph::new(format!("{} {}", symbol, message))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .fg(color)
        .bold();
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let hint = match app.state {
        AppState::Answered { .. } => app.language().answered_controls(),
        _ => app.language().asking_controls(),
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
