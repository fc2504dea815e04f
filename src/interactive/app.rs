//! TUI application state and logic

use crate::core::Verdict;
use crate::game::{Game, OutcomeKind};
use crate::output::formatters::guesses_word;
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;

/// Application state
///
/// Everything about the board that is pure presentation (typed letters, mode,
/// messages) lives here; the game only sees complete guesses.
pub struct App<W: WordSource> {
    pub game: Game<W>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by number of guesses used
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<W: WordSource> App<W> {
    #[must_use]
    pub fn new(game: Game<W>) -> Self {
        let length = game.length();
        let attempts = game.max_attempts();
        Self {
            game,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!("Guess the {length}-letter word in {attempts} tries."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters and press Enter. Ctrl-N restarts, Esc quits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    /// Add a typed letter to the current row
    pub fn push_letter(&mut self, c: char) {
        if c.is_alphabetic() && self.input_buffer.chars().count() < self.game.length() {
            self.input_buffer.extend(c.to_lowercase());
        }
    }

    /// Submit the current row to the game
    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.clone();
        let outcome = match self.game.submit_guess(&guess) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        match outcome.kind() {
            OutcomeKind::WrongLength => {
                self.add_message(
                    &format!(
                        "Word must be exactly {} letters! No turn used.",
                        self.game.length()
                    ),
                    MessageStyle::Error,
                );
                return;
            }
            OutcomeKind::UnknownWord => {
                self.add_message(
                    &format!("'{}' is not in the word list! No turn used.", guess.to_uppercase()),
                    MessageStyle::Error,
                );
                return;
            }
            OutcomeKind::Scored => {
                let left = self.game.attempts_remaining();
                if left > 0 {
                    self.add_message(&format!("{left} attempts left"), MessageStyle::Info);
                }
            }
            OutcomeKind::Won => {}
        }

        self.input_buffer.clear();

        if self.game.is_over() {
            self.finish_game(outcome.is_winner);
        }
    }

    fn finish_game(&mut self, won: bool) {
        let used = self.game.history().len();
        self.stats.total_games += 1;

        if won {
            self.stats.games_won += 1;
            let dist = &mut self.stats.guess_distribution;
            if dist.len() <= used {
                dist.resize(used + 1, 0);
            }
            dist[used] += 1;
            self.add_message(
                &format!("🎉 Solved in {used} {}!", guesses_word(used)),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!(
                    "Out of attempts! The word was {}.",
                    self.game.secret_word().to_uppercase()
                ),
                MessageStyle::Error,
            );
        }

        self.input_mode = InputMode::GameOver;
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        if let Err(err) = self.game.restart() {
            self.add_message(&err.to_string(), MessageStyle::Error);
            return;
        }
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Best verdict seen so far for every guessed letter
    #[must_use]
    pub fn letter_states(&self) -> FxHashMap<char, Verdict> {
        let mut states: FxHashMap<char, Verdict> = FxHashMap::default();
        for &(letter, verdict) in self.game.history().iter().flat_map(|r| r.letters()) {
            states
                .entry(letter)
                .and_modify(|best| *best = (*best).min(verdict))
                .or_insert(verdict);
        }
        states
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char('n') | KeyCode::Enter => {
                    self.new_game();
                }
                _ => {
                    // Board is frozen until a new game starts
                }
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char(c) => {
                    self.push_letter(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    self.submit_guess();
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource>(app: App<W>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, W>(terminal: &mut Terminal<B>, mut app: App<W>) -> Result<()>
where
    B: ratatui::backend::Backend,
    W: WordSource,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            debug!(
                "Leaving TUI after {} games ({} won)",
                app.stats.total_games, app.stats.games_won
            );
            break;
        }
    }

    Ok(())
}
