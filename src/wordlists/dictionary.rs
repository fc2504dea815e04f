//! Per-length dictionary cache

use super::{WordSource, WordSourceError, embedded, loader};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{RngCore, SeedableRng};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Known words of a single length
///
/// Deduplicated, keeping first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl Partition {
    /// Build a partition, dropping repeated words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut partition = Self::default();
        for word in words {
            let word = word.as_ref().to_lowercase();
            if partition.index.insert(word.clone()) {
                partition.words.push(word);
            }
        }
        partition
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn choose<R: RngCore>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }
}

/// Dictionary partitioned by word length
///
/// Partitions are loaded on first use and kept for the lifetime of the value.
/// Lookup order for a length: `words_<L>.txt` in the words directory (if one
/// was given), then the embedded list for 5, 6 or 7 letters.
pub struct Dictionary {
    words_dir: Option<PathBuf>,
    partitions: FxHashMap<usize, Partition>,
    rng: StdRng,
}

impl Dictionary {
    /// Dictionary backed by the embedded lists only
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            words_dir: None,
            partitions: FxHashMap::default(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Dictionary reading `words_<L>.txt` files from `dir`
    #[must_use]
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            words_dir: Some(dir.into()),
            ..Self::embedded()
        }
    }

    /// Dictionary with a single preloaded partition
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::{Dictionary, WordSource};
    ///
    /// let mut words = Dictionary::from_words(6, ["buffer", "anchor"]);
    /// assert!(words.is_known_word("buffer", 6));
    /// assert!(!words.is_known_word("zzzzzz", 6));
    /// ```
    #[must_use]
    pub fn from_words<I, S>(length: usize, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::embedded().with_partition(length, words)
    }

    /// Replace the partition for `length` with the given words
    #[must_use]
    pub fn with_partition<I, S>(mut self, length: usize, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let partition = Partition::from_words(
            words
                .into_iter()
                .filter(|w| w.as_ref().chars().count() == length),
        );
        self.partitions.insert(length, partition);
        self
    }

    /// Seed the secret-word generator for reproducible games
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Whether the partition for `length` is already resident
    #[must_use]
    pub fn is_loaded(&self, length: usize) -> bool {
        self.partitions.contains_key(&length)
    }

    /// The partition for `length`, loading it if needed
    pub fn partition(&mut self, length: usize) -> &Partition {
        let dir = self.words_dir.as_deref();
        self.partitions
            .entry(length)
            .or_insert_with(|| load_partition(dir, length))
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::embedded()
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("words_dir", &self.words_dir)
            .field("loaded_lengths", &self.partitions.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl WordSource for Dictionary {
    fn random_word(&mut self, length: usize) -> Result<String, WordSourceError> {
        let dir = self.words_dir.as_deref();
        let partition = self
            .partitions
            .entry(length)
            .or_insert_with(|| load_partition(dir, length));

        partition
            .choose(&mut self.rng)
            .map(str::to_string)
            .ok_or(WordSourceError::NoWordsAvailable { length })
    }

    fn is_known_word(&mut self, word: &str, length: usize) -> bool {
        self.partition(length).contains(word)
    }
}

fn load_partition(dir: Option<&Path>, length: usize) -> Partition {
    if let Some(dir) = dir {
        let path = dir.join(loader::file_name_for(length));
        match loader::load_from_file(&path, length) {
            Ok(words) if !words.is_empty() => {
                let partition = Partition::from_words(words);
                info!(
                    "Loaded {} words of length {length} from {}",
                    partition.len(),
                    path.display()
                );
                return partition;
            }
            Ok(_) => warn!("Word list {} has no {length}-letter words", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No word list at {}", path.display());
            }
            Err(e) => warn!("Failed to read word list {}: {e}", path.display()),
        }
    }

    if let Some(words) = embedded::fallback(length) {
        debug!("Using embedded {length}-letter word list");
        Partition::from_words(words.iter().copied())
    } else {
        warn!("No words available for length {length}");
        Partition::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "wordle_game_{name}_{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn partition_dedups_preserving_order() {
        let partition = Partition::from_words(["slate", "crane", "slate", "CRANE", "irate"]);
        assert_eq!(partition.words(), &["slate", "crane", "irate"]);
        assert_eq!(partition.len(), 3);
    }

    #[test]
    fn partitions_load_lazily() {
        let mut words = Dictionary::embedded();
        assert!(!words.is_loaded(6));

        assert!(words.is_known_word("buffer", 6));
        assert!(words.is_loaded(6));
        assert!(!words.is_loaded(5));
    }

    #[test]
    fn embedded_fallback_covers_five_six_seven() {
        let mut words = Dictionary::embedded();
        for length in 5..=7 {
            assert!(!words.partition(length).is_empty(), "length {length}");
        }
    }

    #[test]
    fn unsupported_length_has_no_words() {
        let mut words = Dictionary::embedded();
        assert!(words.partition(12).is_empty());
        assert_eq!(
            words.random_word(12),
            Err(WordSourceError::NoWordsAvailable { length: 12 })
        );
    }

    #[test]
    fn random_word_comes_from_partition() {
        let mut words = Dictionary::from_words(5, ["crane", "slate", "irate"]);
        for _ in 0..20 {
            let word = words.random_word(5).unwrap();
            assert!(["crane", "slate", "irate"].contains(&word.as_str()));
        }
    }

    #[test]
    fn seeded_dictionaries_agree() {
        let mut a = Dictionary::embedded().with_seed(42);
        let mut b = Dictionary::embedded().with_seed(42);
        for _ in 0..5 {
            assert_eq!(a.random_word(6).unwrap(), b.random_word(6).unwrap());
        }
    }

    #[test]
    fn fixture_partition_filters_wrong_lengths() {
        let mut words = Dictionary::from_words(6, ["buffer", "crane"]);
        assert_eq!(words.partition(6).words(), &["buffer"]);
    }

    #[test]
    fn from_dir_reads_per_length_file() {
        let dir = scratch_dir("per_length");
        fs::write(dir.join("words_4.txt"), "Word\nlore\nword\n").unwrap();

        let mut words = Dictionary::from_dir(&dir);
        assert_eq!(words.partition(4).words(), &["word", "lore"]);
        assert!(words.is_known_word("lore", 4));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn from_dir_falls_back_when_file_missing() {
        let dir = scratch_dir("missing");

        let mut words = Dictionary::from_dir(&dir);
        assert!(words.is_known_word("buffer", 6));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn from_dir_falls_back_when_file_has_no_words() {
        let dir = scratch_dir("empty_file");
        fs::write(dir.join("words_5.txt"), "\n\ntoolong\n").unwrap();

        let mut words = Dictionary::from_dir(&dir);
        assert!(words.is_known_word("crane", 5));

        fs::remove_dir_all(&dir).ok();
    }
}
