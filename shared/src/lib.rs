//! Types and rules shared by the Wordle server and its terminal client.
//!
//! - [`hint`]: per-letter feedback for a guess against an answer
//! - [`protocol`]: every message the server writes to a client

pub mod hint;
pub mod protocol;

pub use hint::{generate_hint, Hint, HintRule, HintSymbol};
pub use protocol::ServerMessage;

/// Number of letters in every guess and answer.
pub const WORD_LENGTH: usize = 5;
/// Attempts a player gets per round unless configured otherwise.
pub const MAX_ATTEMPTS: u32 = 6;
pub const DEFAULT_PORT: u16 = 8080;
/// Largest chunk of client input consumed by a single read.
pub const MAX_INPUT_LEN: usize = 1024;

/// Strips every non-alphabetic character and lowercases the rest.
///
/// `"CrAnE!"` becomes `"crane"`. Only ASCII letters survive, so the result
/// is always safe to index byte-wise.
pub fn normalize_guess(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// True when `word` is exactly [`WORD_LENGTH`] ASCII letters.
pub fn is_valid_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_mixed_case_and_punctuation() {
        assert_eq!(normalize_guess("CrAnE!"), "crane");
        assert_eq!(normalize_guess("  c-r-a-n-e\r\n"), "crane");
    }

    #[test]
    fn test_normalize_drops_digits_and_non_ascii() {
        assert_eq!(normalize_guess("cr4ne"), "crne");
        assert_eq!(normalize_guess("créne"), "crne");
        assert_eq!(normalize_guess(""), "");
    }

    #[test]
    fn test_normalize_keeps_length_beyond_five() {
        assert_eq!(normalize_guess("hello world\n"), "helloworld");
    }

    #[test]
    fn test_is_valid_word() {
        assert!(is_valid_word("crane"));
        assert!(is_valid_word("CRANE"));
        assert!(!is_valid_word("cran"));
        assert!(!is_valid_word("cranes"));
        assert!(!is_valid_word("cr4ne"));
    }
}
