//! TUI rendering with ratatui
//!
//! Board, keyboard and status views for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Verdict;
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui<W: WordSource>(f: &mut Frame, app: &App<W>) {
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
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Verdict::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Verdict::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn cell(letter: char, style: Style) -> [Span<'static>; 2] {
    [
        Span::styled(format!(" {} ", letter.to_uppercase()), style),
        Span::raw(" "),
    ]
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn render_board<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let game = &app.game;
    let length = game.length();
    let history = game.history();
    let typing_row = (!game.is_over()).then_some(history.len());

    let empty = Style::default().fg(Color::DarkGray);
    let typed = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    // One blank line on top, then two lines per row inside the borders
    let visible = (usize::from(area.height.saturating_sub(3)) / 2).max(1);
    let total = game.max_attempts() as usize;
    let current = typing_row.unwrap_or_else(|| history.len().saturating_sub(1));
    let first = (current + 1).saturating_sub(visible);

    let mut lines = vec![Line::default()];
    for row in first..total.min(first + visible) {
        let spans: Vec<Span> = if let Some(result) = history.get(row) {
            result
                .letters()
                .iter()
                .flat_map(|&(letter, verdict)| cell(letter, verdict_style(verdict)))
                .collect()
        } else if typing_row == Some(row) {
            let mut letters = app.input_buffer.chars();
            (0..length)
                .flat_map(|_| match letters.next() {
                    Some(letter) => cell(letter, typed),
                    None => cell('_', empty),
                })
                .collect()
        } else {
            (0..length).flat_map(|_| cell('·', empty)).collect()
        };
        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let states = app.letter_states();
    let unused = Style::default().fg(Color::White);

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| {
                    let style = states.get(&letter).map_or(unused, |&v| verdict_style(v));
                    Span::styled(format!(" {} ", letter.to_uppercase()), style)
                })
                .collect();
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_messages<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
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

fn render_input<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ".to_string(),
            app.game.secret_word().to_uppercase(),
            if app.game.history().last().is_some_and(|r| r.is_winner()) {
                Color::Green
            } else {
                Color::Red
            },
        ),
        InputMode::Guessing => (
            format!(
                " Enter a {}-letter word | Enter: Submit | Ctrl-N: Restart ",
                app.game.length()
            ),
            app.input_buffer.to_uppercase(),
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

fn render_status<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let attempts_text = format!(
        "Attempts left: {}/{}",
        app.game.attempts_remaining(),
        app.game.max_attempts()
    );
    f.render_widget(
        Paragraph::new(attempts_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let length_text = format!("Letters: {}", app.game.length());
    f.render_widget(
        Paragraph::new(length_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | Ctrl-N: Restart",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
