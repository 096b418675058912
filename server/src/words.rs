//! Word lists loaded once at startup and shared read-only by every session
//!
//! Two files feed the server:
//! - the dictionary of acceptable guesses ([`WordSet`])
//! - the answers played round by round, in file order ([`AnswerList`])
//!
//! Both are plain text with whitespace-separated words. Tokens that do not
//! qualify are logged and skipped rather than aborting startup.

use log::{info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use shared::is_valid_word;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while building the word store
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("answer list contains no playable words")]
    NoAnswers,
}

/// Dictionary of acceptable guesses
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Builds the set from whitespace-separated text.
    ///
    /// Only tokens of exactly five ASCII letters are admitted, lowercased.
    pub fn parse(text: &str) -> Self {
        let mut words = HashSet::new();
        for token in text.split_whitespace() {
            if is_valid_word(token) {
                words.insert(token.to_ascii_lowercase());
            } else {
                warn!("Skipping '{}': not a 5-letter word", token);
            }
        }
        Self { words }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let set = Self::parse(&read_list(path)?);
        info!("Loaded {} valid words from {}", set.len(), path.display());
        Ok(set)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Answers offered to every session, one per round
#[derive(Debug, Clone, Default)]
pub struct AnswerList {
    answers: Vec<String>,
}

impl AnswerList {
    /// Builds the list from whitespace-separated text, keeping file order.
    ///
    /// Tokens are lowercased; anything missing from `words` is dropped with
    /// a warning so every answer is guaranteed to be guessable.
    pub fn parse(text: &str, words: &WordSet) -> Self {
        let mut answers = Vec::new();
        for token in text.split_whitespace() {
            let answer = token.to_ascii_lowercase();
            if words.contains(&answer) {
                answers.push(answer);
            } else {
                warn!("Skipping answer '{}': not in the word list", token);
            }
        }
        Self { answers }
    }

    pub fn load(path: impl AsRef<Path>, words: &WordSet) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let list = Self::parse(&read_list(path)?, words);
        info!("Loaded {} answers from {}", list.len(), path.display());
        Ok(list)
    }

    /// Randomizes the round order
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.answers.shuffle(rng);
    }

    pub fn get(&self, round: usize) -> Option<&str> {
        self.answers.get(round).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.answers.iter().map(String::as_str)
    }
}

/// Word set and answer list bundled for sharing across sessions
#[derive(Debug, Clone)]
pub struct WordStore {
    words: WordSet,
    answers: AnswerList,
}

impl WordStore {
    pub fn new(words: WordSet, answers: AnswerList) -> Result<Self, WordListError> {
        if answers.is_empty() {
            return Err(WordListError::NoAnswers);
        }
        Ok(Self { words, answers })
    }

    pub fn words(&self) -> &WordSet {
        &self.words
    }

    pub fn answers(&self) -> &AnswerList {
        &self.answers
    }
}

fn read_list(path: &Path) -> Result<String, WordListError> {
    fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_word_set_admits_only_five_letters() {
        let set = WordSet::parse("crane\nTRAIN\ncat\nplanet\ncr4ne\n  slate  ");
        assert_eq!(set.len(), 3);
        assert!(set.contains("crane"));
        assert!(set.contains("train"));
        assert!(set.contains("slate"));
        assert!(!set.contains("cat"));
        assert!(!set.contains("planet"));
    }

    #[test]
    fn test_word_set_deduplicates() {
        let set = WordSet::parse("crane crane CRANE");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_answers_must_be_in_word_set() {
        let set = WordSet::parse("apple mango crane");
        let answers = AnswerList::parse("Apple\nlemon\nmango\n", &set);
        assert_eq!(answers.iter().collect::<Vec<_>>(), vec!["apple", "mango"]);
        assert_eq!(answers.get(1), Some("mango"));
        assert_eq!(answers.get(2), None);
    }

    #[test]
    fn test_shuffle_keeps_every_answer() {
        let set = WordSet::parse("apple mango crane train slate");
        let mut answers = AnswerList::parse("apple mango crane train slate", &set);
        answers.shuffle(&mut StdRng::seed_from_u64(7));

        let mut shuffled: Vec<_> = answers.iter().collect();
        shuffled.sort_unstable();
        assert_eq!(shuffled, vec!["apple", "crane", "mango", "slate", "train"]);
    }

    #[test]
    fn test_store_rejects_empty_answers() {
        let set = WordSet::parse("apple");
        let answers = AnswerList::parse("lemon", &set);
        assert!(matches!(
            WordStore::new(set, answers),
            Err(WordListError::NoAnswers)
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = WordSet::load("/definitely/not/here/words.txt");
        match result {
            Err(WordListError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("/definitely/not/here/words.txt"));
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_files() {
        let dir = std::env::temp_dir().join(format!("wordle-words-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let words_path = dir.join("words.txt");
        let answers_path = dir.join("answers.txt");
        fs::write(&words_path, "crane\ntrain\nslate\n").unwrap();
        fs::write(&answers_path, "slate\ncrane\n").unwrap();

        let words = WordSet::load(&words_path).unwrap();
        let answers = AnswerList::load(&answers_path, &words).unwrap();
        let store = WordStore::new(words, answers).unwrap();

        assert_eq!(store.words().len(), 3);
        assert_eq!(store.answers().get(0), Some("slate"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
