//! Word list loading utilities
//!
//! Word list files are plain newline-delimited lists, one file per word length.

use std::fs;
use std::io;
use std::path::Path;

/// File name holding the words of `length` inside a words directory
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::file_name_for;
///
/// assert_eq!(file_name_for(6), "words_6.txt");
/// ```
#[must_use]
pub fn file_name_for(length: usize) -> String {
    format!("words_{length}.txt")
}

/// Parse newline-delimited words of the given length
///
/// Lines are trimmed and lower-cased; blank lines and words of any other
/// length are skipped. Duplicates are kept, callers deduplicate.
#[must_use]
pub fn parse_words(text: &str, length: usize) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .filter(|word| word.chars().count() == length)
        .collect()
}

/// Load words of the given length from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words_6.txt", 6).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content, length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_normalizes_lines() {
        let words = parse_words("  Buffer\nANCHOR \n\n", 6);
        assert_eq!(words, vec!["buffer", "anchor"]);
    }

    #[test]
    fn parse_words_skips_other_lengths() {
        let words = parse_words("crane\nbuffer\nab\nlantern\n", 6);
        assert_eq!(words, vec!["buffer"]);
    }

    #[test]
    fn parse_words_keeps_duplicates_in_order() {
        let words = parse_words("crane\nslate\ncrane\n", 5);
        assert_eq!(words, vec!["crane", "slate", "crane"]);
    }

    #[test]
    fn parse_words_counts_characters_not_bytes() {
        let words = parse_words("cañón\n", 5);
        assert_eq!(words, vec!["cañón"]);
    }

    #[test]
    fn parse_words_handles_crlf() {
        let words = parse_words("crane\r\nslate\r\n", 5);
        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn load_from_missing_file_is_not_found() {
        let err = load_from_file("definitely/not/here/words_5.txt", 5).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
