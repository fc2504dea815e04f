//! Simple interactive CLI mode
//!
//! Line-oriented game without TUI. Reads guesses from any `BufRead` and writes
//! feedback to any `Write`, so the loop can be driven from tests.

use crate::game::{Game, OutcomeKind};
use crate::output::formatters::{guesses_word, history_emoji, result_tiles};
use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// How a simple session ended
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub games_played: usize,
    pub games_won: usize,
}

/// Run the simple interactive CLI mode
///
/// Plays games until the player declines a rematch, types `:q`, or input
/// runs out.
///
/// # Errors
///
/// Returns an error on I/O failure, or if a new game cannot be started.
pub fn run_simple<W, R, O>(game: &mut Game<W>, mut input: R, mut out: O) -> Result<SessionSummary>
where
    W: WordSource,
    R: BufRead,
    O: Write,
{
    let mut summary = SessionSummary::default();

    writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
    writeln!(out, "{}", "  W O R D L E".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(50).bright_cyan())?;
    writeln!(
        out,
        "\nGuess the {}-letter word in {} tries. Type ':q' to stop.\n",
        game.length(),
        game.max_attempts()
    )?;

    loop {
        let Some(line) = prompt(
            &mut input,
            &mut out,
            &format!("Guess {}/{}", game.attempts_used() + 1, game.max_attempts()),
        )?
        else {
            return Ok(summary);
        };

        // Session commands are ':'-prefixed; anything else is a guess
        if matches!(line.trim().to_lowercase().as_str(), ":q" | ":quit") {
            writeln!(out, "\n👋 The word was {}.", game.secret_word().to_uppercase())?;
            return Ok(summary);
        }

        let outcome = game.submit_guess(&line)?;
        match outcome.kind() {
            OutcomeKind::WrongLength => {
                writeln!(
                    out,
                    "{}\n",
                    format!(
                        "❌ Guesses must have {} letters. That one didn't cost a turn.",
                        game.length()
                    )
                    .red()
                )?;
                continue;
            }
            OutcomeKind::UnknownWord => {
                writeln!(
                    out,
                    "{}\n",
                    format!(
                        "❓ '{}' is not in the word list. Try another.",
                        line.trim().to_lowercase()
                    )
                    .yellow()
                )?;
                continue;
            }
            OutcomeKind::Scored | OutcomeKind::Won => {}
        }

        if let Some(result) = &outcome.result {
            writeln!(out, "  {}   {}", result_tiles(result), result.to_emoji())?;
        }

        if !game.is_over() {
            writeln!(out, "  {} attempts left\n", game.attempts_remaining())?;
            continue;
        }

        summary.games_played += 1;
        let used = game.history().len();
        if outcome.is_winner {
            summary.games_won += 1;
            writeln!(
                out,
                "\n{}",
                format!("🎉 You won in {used} {}!", guesses_word(used))
                    .green()
                    .bold()
            )?;
        } else {
            writeln!(
                out,
                "\n{} The word was {}.",
                "Out of attempts.".red().bold(),
                game.secret_word().to_uppercase().bright_yellow().bold()
            )?;
        }
        writeln!(out, "\n{}\n", history_emoji(game.history()))?;

        let again = prompt(&mut input, &mut out, "Play again? (yes/no)")?
            .map(|answer| answer.trim().to_lowercase());
        if !matches!(again.as_deref(), Some("yes" | "y")) {
            writeln!(out, "\n👋 Thanks for playing!")?;
            return Ok(summary);
        }

        game.restart().context("Failed to start a new game")?;
        writeln!(out, "\n🔄 New game started!\n")?;
    }
}

/// Print a prompt and read one line; `None` at end of input
fn prompt<R: BufRead, O: Write>(input: &mut R, out: &mut O, text: &str) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::Dictionary;
    use std::io::Cursor;

    fn game(secret: &str, attempts: u32) -> Game<Dictionary> {
        let words = Dictionary::from_words(6, ["buffer", "anchor", "basket", "candle"]);
        Game::with_secret(GameConfig::new(6, attempts), words, secret).unwrap()
    }

    fn play(game: &mut Game<Dictionary>, script: &str) -> (SessionSummary, String) {
        let mut out = Vec::new();
        let summary = run_simple(game, Cursor::new(script.to_string()), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn rejected_guesses_then_win() {
        let mut game = game("buffer", 6);
        let (summary, out) = play(&mut game, "xx\nzzzzzz\nbuffer\nno\n");

        assert!(out.contains("must have 6 letters"));
        assert!(out.contains("'zzzzzz' is not in the word list"));
        assert!(out.contains("You won in 1 guess!"));
        assert!(out.contains("🟩🟩🟩🟩🟩🟩"));
        assert_eq!(
            summary,
            SessionSummary {
                games_played: 1,
                games_won: 1
            }
        );
        assert_eq!(game.attempts_remaining(), 5);
    }

    #[test]
    fn loss_reveals_secret() {
        let mut game = game("buffer", 2);
        let (summary, out) = play(&mut game, "anchor\nbasket\nno\n");

        assert!(out.contains("Out of attempts."));
        assert!(out.contains("BUFFER"));
        assert_eq!(summary.games_played, 1);
        assert_eq!(summary.games_won, 0);
    }

    #[test]
    fn attempts_left_reported_after_scored_guess() {
        let mut game = game("buffer", 6);
        let (_, out) = play(&mut game, "anchor\n");
        assert!(out.contains("5 attempts left"));
    }

    #[test]
    fn quit_ends_session_early() {
        let mut game = game("buffer", 6);
        let (summary, out) = play(&mut game, ":q\n");

        assert!(out.contains("The word was BUFFER"));
        assert_eq!(summary, SessionSummary::default());
        assert_eq!(game.attempts_remaining(), 6);
    }

    #[test]
    fn plain_quit_is_a_guess() {
        let words = Dictionary::from_words(4, ["quit", "exit"]);
        let mut game = Game::with_secret(GameConfig::new(4, 6), words, "quit").unwrap();
        let (summary, out) = play(&mut game, "exit\nquit\nno\n");

        assert!(out.contains("You won in 2 guesses!"));
        assert_eq!(summary.games_won, 1);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let mut game = game("buffer", 6);
        let (summary, _) = play(&mut game, "");
        assert_eq!(summary.games_played, 0);
    }

    #[test]
    fn play_again_restarts() {
        let mut game = game("buffer", 1);
        let (summary, out) = play(&mut game, "anchor\nyes\n");

        assert!(out.contains("New game started"));
        assert_eq!(summary.games_played, 1);
        assert!(!game.is_over());
        assert_eq!(game.attempts_remaining(), 1);
    }
}
