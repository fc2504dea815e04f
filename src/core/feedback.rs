//! Scored guesses
//!
//! A [`GuessResult`] pairs every letter of a guess with its [`Verdict`].
//! Scoring follows Wordle's duplicate-letter rules: a guessed letter is only
//! marked present as many times as it has unmatched occurrences in the secret.

use super::Verdict;
use rustc_hash::FxHashMap;
use std::fmt;

/// Ordered `(letter, verdict)` pairs for one accepted guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult {
    letters: Vec<(char, Verdict)>,
}

impl GuessResult {
    /// Score `guess` against `secret`
    ///
    /// Both words must already be normalized and have the same number of
    /// characters.
    ///
    /// # Algorithm
    /// 1. First pass: exact position matches become `Correct`; every other
    ///    secret letter is added to a pool of unmatched letters.
    /// 2. Second pass: each remaining guess letter becomes `Present` if the
    ///    pool still holds that letter (consuming one), otherwise `Absent`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GuessResult, Verdict};
    ///
    /// let result = GuessResult::calculate("ffffff", "buffer");
    /// assert_eq!(
    ///     result.verdicts().collect::<Vec<_>>(),
    ///     vec![
    ///         Verdict::Absent,
    ///         Verdict::Absent,
    ///         Verdict::Correct,
    ///         Verdict::Correct,
    ///         Verdict::Absent,
    ///         Verdict::Absent,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &str, secret: &str) -> Self {
        let guess: Vec<char> = guess.chars().collect();
        let secret: Vec<char> = secret.chars().collect();
        debug_assert_eq!(guess.len(), secret.len(), "guess and secret lengths differ");

        let mut verdicts: Vec<Option<Verdict>> = vec![None; guess.len()];
        let mut remaining: FxHashMap<char, usize> = FxHashMap::default();

        // First pass: greens, and count what is left of the secret
        for (i, (&g, &s)) in guess.iter().zip(&secret).enumerate() {
            if g == s {
                verdicts[i] = Some(Verdict::Correct);
            } else {
                *remaining.entry(s).or_insert(0) += 1;
            }
        }

        // Second pass: yellows from the remaining pool, gray otherwise
        let letters = guess
            .iter()
            .zip(verdicts)
            .map(|(&letter, verdict)| {
                let verdict = verdict.unwrap_or_else(|| match remaining.get_mut(&letter) {
                    Some(count) if *count > 0 => {
                        *count -= 1;
                        Verdict::Present
                    }
                    _ => Verdict::Absent,
                });
                (letter, verdict)
            })
            .collect();

        Self { letters }
    }

    /// The scored letters in guess order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[(char, Verdict)] {
        &self.letters
    }

    /// Iterate over the verdicts only
    pub fn verdicts(&self) -> impl Iterator<Item = Verdict> + '_ {
        self.letters.iter().map(|&(_, verdict)| verdict)
    }

    /// The guessed word
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|&(letter, _)| letter).collect()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// True when every letter is `Correct`
    #[must_use]
    pub fn is_winner(&self) -> bool {
        !self.letters.is_empty() && self.verdicts().all(|v| v == Verdict::Correct)
    }

    /// Count the letters carrying `verdict`
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.verdicts().filter(|&v| v == verdict).count()
    }

    /// Render as an emoji row, e.g. `⬜⬜🟩🟩⬜⬜`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.verdicts().map(Verdict::to_emoji).collect()
    }

    /// Render as ASCII symbols, e.g. `--GG--`
    #[must_use]
    pub fn to_symbols(&self) -> String {
        self.verdicts().map(Verdict::symbol).collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (letter, verdict)) in self.letters.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{letter} -> {verdict}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Present};

    fn verdicts(guess: &str, secret: &str) -> Vec<Verdict> {
        GuessResult::calculate(guess, secret).verdicts().collect()
    }

    #[test]
    fn all_correct_for_identical_words() {
        let result = GuessResult::calculate("buffer", "buffer");
        assert!(result.is_winner());
        assert_eq!(result.count(Correct), 6);
    }

    #[test]
    fn all_absent_for_disjoint_words() {
        assert_eq!(verdicts("abcde", "fghij"), vec![Absent; 5]);
    }

    #[test]
    fn repeated_guess_letter_matched_exactly() {
        // Both f's in the secret are consumed by exact hits
        assert_eq!(
            verdicts("ffffff", "buffer"),
            vec![Absent, Absent, Correct, Correct, Absent, Absent]
        );
    }

    #[test]
    fn duplicates_without_exact_hits_all_present() {
        assert_eq!(
            verdicts("bbaacc", "aabbcc"),
            vec![Present, Present, Present, Present, Correct, Correct]
        );
    }

    #[test]
    fn present_limited_by_unmatched_count() {
        // SPEED vs ERASE: s present, both e's present, p and d absent
        assert_eq!(
            verdicts("speed", "erase"),
            vec![Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn exact_hit_takes_priority_over_earlier_present() {
        // ROBOT vs FLOOR: first o yellow, second o green
        assert_eq!(
            verdicts("robot", "floor"),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn extra_copies_beyond_secret_count_are_absent() {
        // Secret has one e; only the first unmatched e is present
        assert_eq!(
            verdicts("eeexx", "abcde"),
            vec![Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn result_preserves_guess_letters() {
        let result = GuessResult::calculate("bbaacc", "aabbcc");
        assert_eq!(result.word(), "bbaacc");
        assert_eq!(result.len(), 6);
    }

    #[test]
    fn renders_symbols_and_emoji() {
        let result = GuessResult::calculate("ffffff", "buffer");
        assert_eq!(result.to_symbols(), "--GG--");
        assert_eq!(result.to_emoji(), "⬜⬜🟩🟩⬜⬜");
    }

    #[test]
    fn display_lists_letters_with_verdicts() {
        let result = GuessResult::calculate("ab", "ba");
        assert_eq!(result.to_string(), "a -> present | b -> present");
    }

    #[test]
    fn scoring_is_deterministic() {
        let first = GuessResult::calculate("stare", "crate");
        let second = GuessResult::calculate("stare", "crate");
        assert_eq!(first, second);
    }
}
