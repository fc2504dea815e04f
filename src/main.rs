//! Wordle Game - CLI
//!
//! Wordle-style guessing game with TUI and line-oriented CLI modes.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{run_simple, score_guess},
    game::{Game, GameConfig},
    logging,
    output::print_score_result,
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the secret word: green is right, yellow is elsewhere, gray is absent",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word (built-in lists cover 5, 6 and 7)
    #[arg(short, long, global = true, default_value_t = 6)]
    length: usize,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = 6)]
    attempts: u32,

    /// Directory with one word list per length, named words_<LENGTH>.txt
    #[arg(short = 'w', long, global = true)]
    words_dir: Option<PathBuf>,

    /// Seed for reproducible secret words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-by-line, no TUI)
    Simple,

    /// Score one guess against a given secret
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },
}

/// Build the dictionary from the -w and --seed flags
fn load_dictionary(cli: &Cli) -> Dictionary {
    let words = match &cli.words_dir {
        Some(dir) => Dictionary::from_dir(dir),
        None => Dictionary::embedded(),
    };
    match cli.seed {
        Some(seed) => words.with_seed(seed),
        None => words,
    }
}

fn start_game(cli: &Cli) -> Result<Game<Dictionary>> {
    let config = GameConfig::new(cli.length, cli.attempts);
    Game::new(config, load_dictionary(cli)).context("Failed to start game")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose).context("Failed to initialise logging")?;

    // Default to Play mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Score { secret, guess } => run_score_command(secret, guess),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let game = start_game(cli)?;
    run_tui(App::new(game))
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let mut game = start_game(cli)?;
    let summary = run_simple(&mut game, io::stdin().lock(), io::stdout())?;
    log::info!(
        "Session over: {} of {} games won",
        summary.games_won,
        summary.games_played
    );
    Ok(())
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_guess(secret, guess)?;
    print_score_result(&result, secret);
    Ok(())
}
