// Integration tests for the game engine
// These drive the public API the same way the front ends do

use wordle_game::core::Verdict;
use wordle_game::game::{Game, GameConfig, GameError, GameStatus, OutcomeKind};
use wordle_game::wordlists::{Dictionary, WordSource, WordSourceError};

/// Word source over a fixed list that counts lookups
struct CountingWords {
    words: Vec<&'static str>,
    lookups: usize,
}

impl WordSource for CountingWords {
    fn random_word(&mut self, length: usize) -> Result<String, WordSourceError> {
        self.words
            .iter()
            .find(|w| w.len() == length)
            .map(|w| (*w).to_string())
            .ok_or(WordSourceError::NoWordsAvailable { length })
    }

    fn is_known_word(&mut self, word: &str, length: usize) -> bool {
        self.lookups += 1;
        word.len() == length && self.words.iter().any(|w| *w == word)
    }
}

#[test]
fn test_end_to_end_buffer_scenario() {
    let mut game =
        Game::with_secret(GameConfig::new(6, 6), Dictionary::embedded(), "buffer").unwrap();

    let outcome = game.submit_guess("xx").unwrap();
    assert!(!outcome.length_valid);
    assert_eq!(game.attempts_remaining(), 6);

    let outcome = game.submit_guess("zzzzzz").unwrap();
    assert!(outcome.length_valid);
    assert!(!outcome.known);
    assert_eq!(game.attempts_remaining(), 6);

    let outcome = game.submit_guess("buffer").unwrap();
    assert!(outcome.is_winner);
    assert_eq!(game.attempts_remaining(), 5);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn test_loss_after_all_attempts() {
    let mut game =
        Game::with_secret(GameConfig::new(6, 6), Dictionary::embedded(), "buffer").unwrap();

    for guess in ["anchor", "basket", "candle", "dragon", "empire", "falcon"] {
        let outcome = game.submit_guess(guess).unwrap();
        assert_eq!(outcome.kind(), OutcomeKind::Scored);
    }

    assert_eq!(game.attempts_remaining(), 0);
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.submit_guess("buffer"), Err(GameError::Finished));
}

#[test]
fn test_attempts_track_only_scored_guesses() {
    let mut game =
        Game::with_secret(GameConfig::new(5, 6), Dictionary::embedded(), "slate").unwrap();

    let script = ["crane", "xx", "qqqqq", "house", "toolong", "", "stone"];
    let mut expected = 6;
    for guess in script {
        let outcome = game.submit_guess(guess).unwrap();
        if outcome.length_valid && outcome.known {
            expected -= 1;
        }
        assert_eq!(game.attempts_remaining(), expected, "after '{guess}'");
        assert_eq!(game.history().len() as u32, 6 - expected);
    }
    assert_eq!(expected, 3);
}

#[test]
fn test_scored_results_match_guess() {
    let mut game =
        Game::with_secret(GameConfig::new(7, 6), Dictionary::embedded(), "pattern").unwrap();

    let result = game.submit_guess("Lantern").unwrap().result.unwrap();
    assert_eq!(result.word(), "lantern");
    assert_eq!(result.len(), 7);
    // l-a-n-t-e-r-n vs p-a-t-t-e-r-n
    assert_eq!(
        result.verdicts().collect::<Vec<_>>(),
        vec![
            Verdict::Absent,
            Verdict::Correct,
            Verdict::Absent,
            Verdict::Correct,
            Verdict::Correct,
            Verdict::Correct,
            Verdict::Correct,
        ]
    );
}

#[test]
fn test_custom_word_source() {
    let words = CountingWords {
        words: vec!["aabbcc", "bbaacc"],
        lookups: 0,
    };
    let mut game = Game::new(GameConfig::new(6, 3), words).unwrap();
    assert_eq!(game.secret_word(), "aabbcc");

    // Wrong length never reaches the dictionary
    game.submit_guess("abc").unwrap();
    assert_eq!(game.words().lookups, 0);

    let outcome = game.submit_guess("bbaacc").unwrap();
    assert_eq!(game.words().lookups, 1);
    assert_eq!(outcome.result.unwrap().to_symbols(), "YYYYGG");
}

#[test]
fn test_construction_fails_without_words() {
    let words = CountingWords {
        words: vec!["crane"],
        lookups: 0,
    };
    let err = Game::new(GameConfig::new(6, 6), words).err().unwrap();
    assert_eq!(
        err,
        GameError::NoWords(WordSourceError::NoWordsAvailable { length: 6 })
    );
}

#[test]
fn test_seeded_games_share_secret() {
    let first = Game::new(GameConfig::default(), Dictionary::embedded().with_seed(7)).unwrap();
    let second = Game::new(GameConfig::default(), Dictionary::embedded().with_seed(7)).unwrap();
    assert_eq!(first.secret_word(), second.secret_word());
}
