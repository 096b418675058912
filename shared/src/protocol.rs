//! Text protocol spoken by the server.
//!
//! Prompts are written without a trailing newline so the player types on
//! the same line; every other message ends with `\n`.

use crate::hint::Hint;
use std::fmt;

pub const INVALID_LENGTH: &str = "Invalid input! Please enter exactly 5 letters.\n";
pub const NOT_IN_WORD_LIST: &str = "Word not in word list. Try again\n";
pub const WON: &str = "You Won!\n";
pub const CONTINUE_PROMPT: &str = "Would you like to continue? (y/n) ";
pub const NEW_GAME: &str = "Starting a new game\n";
pub const ALL_COMPLETE: &str = "Congratulations! You have solved all the wordle games\n";

/// A message sent from the server to a single client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerMessage {
    GuessPrompt { attempts_remaining: u32 },
    InvalidLength,
    NotInWordList,
    Hint(Hint),
    Won,
    Lost { answer: String },
    ContinuePrompt,
    NewGame,
    AllComplete,
}

impl fmt::Display for ServerMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerMessage::GuessPrompt { attempts_remaining } => write!(
                f,
                "Please enter 5-letter word ({} attempts remaining): ",
                attempts_remaining
            ),
            ServerMessage::InvalidLength => f.write_str(INVALID_LENGTH),
            ServerMessage::NotInWordList => f.write_str(NOT_IN_WORD_LIST),
            ServerMessage::Hint(hint) => writeln!(f, "{}", hint),
            ServerMessage::Won => f.write_str(WON),
            ServerMessage::Lost { answer } => {
                write!(f, "Game Over!\nThe correct word was {}\n", answer)
            }
            ServerMessage::ContinuePrompt => f.write_str(CONTINUE_PROMPT),
            ServerMessage::NewGame => f.write_str(NEW_GAME),
            ServerMessage::AllComplete => f.write_str(ALL_COMPLETE),
        }
    }
}
