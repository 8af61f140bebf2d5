//! TUI rendering with ratatui
//!
//! Visualizations for the hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{EXTRA_TURNS, Status};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Word and turns
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Word
            Constraint::Length(3),      // Turns gauge
            Constraint::Min(3),         // Guessed letters
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_turns(f, app, chunks[1]);
    render_guessed(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let view = app.session.progress_view();
    let reveal_all = app.session.status() == Status::Lost;

    let spans: Vec<Span> = view
        .cells
        .iter()
        .map(|cell| {
            if cell.revealed {
                Span::styled(
                    format!(" {} ", cell.letter.to_ascii_uppercase()),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else if reveal_all {
                Span::styled(
                    format!(" {} ", cell.letter.to_ascii_uppercase()),
                    Style::default().fg(Color::Black).bg(Color::Red),
                )
            } else {
                Span::styled(" _ ", Style::default().fg(Color::Black).bg(Color::Yellow))
            }
        })
        .flat_map(|span| [span, Span::raw(" ")])
        .collect();

    let content = vec![
        Line::from(""),
        Line::from(spans),
        Line::from(""),
        Line::from(format!("{} letters still hidden", view.unmatched))
            .style(Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(paragraph, area);
}

fn render_turns(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.target().len() + EXTRA_TURNS;
    let remaining = app.session.remaining_turns();
    let pct = (remaining * 100 / total) as u16;

    let color = match pct {
        0..=25 => Color::Red,
        26..=50 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Turns Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(pct)
        .label(format!("{remaining}/{total}"));

    f.render_widget(gauge, area);
}

fn render_guessed(f: &mut Frame, app: &App, area: Rect) {
    let target = app.session.target();
    let spans: Vec<Span> = app
        .session
        .guessed_letters()
        .map(|letter| {
            let hit = target.interior_has(letter as u8);
            Span::styled(
                format!("{} ", letter.to_ascii_uppercase()),
                Style::default().fg(if hit { Color::Green } else { Color::Red }),
            )
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .title(" Guessed ")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match (app.input_mode, app.session.status()) {
        (InputMode::RoundOver, Status::Won) => (
            " CONGRATULATIONS! | Press 'n' for new word or 'q' to quit ",
            "",
            Color::Green,
        ),
        (InputMode::RoundOver, _) => (
            " Out of turns | Press 'n' for new word or 'q' to quit ",
            "",
            Color::Red,
        ),
        (InputMode::Guessing, _) => (
            " Enter a letter (type 'quit' to exit) ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let rounds_text = format!(
        "Rounds: {} | Win Rate: {:.0}%",
        app.stats.rounds,
        app.win_rate()
    );
    let rounds = Paragraph::new(rounds_text).alignment(Alignment::Center);
    f.render_widget(rounds, chunks[0]);

    let catalog_text = format!("Catalog: {} words", app.catalog.len());
    let catalog = Paragraph::new(catalog_text).alignment(Alignment::Center);
    f.render_widget(catalog, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::RoundOver => "q: Quit | n: New Word",
        InputMode::Guessing => "Esc: Quit | Enter: Submit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
