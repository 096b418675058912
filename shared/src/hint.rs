//! Hint computation for a guess against an answer.
//!
//! A hint has one symbol per guessed letter: uppercase for a letter in the
//! right spot, lowercase for a letter found elsewhere in the answer, and `*`
//! for a letter the answer does not offer.

use crate::{is_valid_word, WORD_LENGTH};
use std::fmt;
use std::str::FromStr;

/// Marker rendered for a letter absent from the answer.
pub const ABSENT_MARKER: char = '*';

/// Feedback for a single guessed letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintSymbol {
    /// Letter is in the correct position.
    Exact(char),
    /// Letter occurs at another, unmatched position of the answer.
    Present(char),
    Absent,
}

impl HintSymbol {
    pub fn to_char(self) -> char {
        match self {
            HintSymbol::Exact(c) => c.to_ascii_uppercase(),
            HintSymbol::Present(c) => c.to_ascii_lowercase(),
            HintSymbol::Absent => ABSENT_MARKER,
        }
    }
}

/// Feedback for a whole guess, one symbol per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hint([HintSymbol; WORD_LENGTH]);

impl Hint {
    pub fn symbols(&self) -> &[HintSymbol; WORD_LENGTH] {
        &self.0
    }

    /// True when every position is an exact match.
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|s| matches!(s, HintSymbol::Exact(_)))
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.to_char())?;
        }
        Ok(())
    }
}

/// How repeated letters are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintRule {
    /// A letter is present if any answer position not already matched
    /// exactly holds it. Repeated guess letters may all be reported present
    /// even when the answer holds that letter once.
    #[default]
    Lenient,
    /// Each answer letter justifies at most one exact or present symbol.
    /// Exact matches claim their letters first; the rest are handed out
    /// left to right.
    Canonical,
}

impl HintRule {
    /// Computes the hint for `guess` against `answer`.
    ///
    /// Both words must be exactly [`WORD_LENGTH`] ASCII letters (see
    /// [`is_valid_word`]); the comparison ignores case. Callers normalize and
    /// validate guesses first. Debug builds assert this; release builds score
    /// missing positions as empty.
    pub fn generate(self, guess: &str, answer: &str) -> Hint {
        debug_assert!(is_valid_word(guess), "guess {:?} is not a 5-letter word", guess);
        debug_assert!(is_valid_word(answer), "answer {:?} is not a 5-letter word", answer);

        let guess = letters(guess);
        let answer = letters(answer);

        match self {
            HintRule::Lenient => lenient(&guess, &answer),
            HintRule::Canonical => canonical(&guess, &answer),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HintRule::Lenient => "lenient",
            HintRule::Canonical => "canonical",
        }
    }
}

impl fmt::Display for HintRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HintRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(HintRule::Lenient),
            "canonical" => Ok(HintRule::Canonical),
            other => Err(format!(
                "unknown hint rule '{}' (expected 'lenient' or 'canonical')",
                other
            )),
        }
    }
}

/// Computes the hint using the default [`HintRule::Lenient`] scoring.
///
/// Same preconditions as [`HintRule::generate`].
pub fn generate_hint(guess: &str, answer: &str) -> Hint {
    HintRule::default().generate(guess, answer)
}

/// Lowercased letters of `word`, padded with zero bytes if it is short.
fn letters(word: &str) -> [u8; WORD_LENGTH] {
    let mut out = [0u8; WORD_LENGTH];
    for (slot, byte) in out.iter_mut().zip(word.bytes()) {
        *slot = byte.to_ascii_lowercase();
    }
    out
}

fn lenient(guess: &[u8; WORD_LENGTH], answer: &[u8; WORD_LENGTH]) -> Hint {
    let mut symbols = [HintSymbol::Absent; WORD_LENGTH];

    for i in 0..WORD_LENGTH {
        let letter = guess[i] as char;
        if guess[i] == answer[i] {
            symbols[i] = HintSymbol::Exact(letter);
            continue;
        }

        // An answer letter already matched exactly in place is not up for grabs
        let elsewhere =
            (0..WORD_LENGTH).any(|j| j != i && guess[i] == answer[j] && guess[j] != answer[j]);
        if elsewhere {
            symbols[i] = HintSymbol::Present(letter);
        }
    }

    Hint(symbols)
}

fn canonical(guess: &[u8; WORD_LENGTH], answer: &[u8; WORD_LENGTH]) -> Hint {
    let mut symbols = [HintSymbol::Absent; WORD_LENGTH];
    let mut unmatched = [0u8; 26];

    for i in 0..WORD_LENGTH {
        if guess[i] == answer[i] {
            symbols[i] = HintSymbol::Exact(guess[i] as char);
        } else if answer[i].is_ascii_lowercase() {
            unmatched[(answer[i] - b'a') as usize] += 1;
        }
    }

    for i in 0..WORD_LENGTH {
        if matches!(symbols[i], HintSymbol::Exact(_)) || !guess[i].is_ascii_lowercase() {
            continue;
        }
        let count = &mut unmatched[(guess[i] - b'a') as usize];
        if *count > 0 {
            *count -= 1;
            symbols[i] = HintSymbol::Present(guess[i] as char);
        }
    }

    Hint(symbols)
}
