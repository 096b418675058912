//! Per-connection game session
//!
//! A [`Session`] is a pure state machine: it is fed one client input at a
//! time and answers with the [`ServerMessage`]s to send back. [`run_session`]
//! drives it over any async reader/writer pair, which keeps the game rules
//! testable without sockets.
//!
//! A session plays the answers of the shared [`WordStore`] in order. Each
//! round gives the player a fixed number of attempts; after a round is won
//! or lost the player is asked whether to continue, unless it was the last
//! answer, in which case the session ends on its own.

use crate::words::WordStore;
use log::{debug, info, warn};
use shared::{normalize_guess, HintRule, ServerMessage, MAX_ATTEMPTS, MAX_INPUT_LEN, WORD_LENGTH};
use std::io;
use std::sync::Arc;
use std::net::SocketAddr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Game rules applied to every session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Attempts granted at the start of each round
    pub max_attempts: u32,
    pub hint_rule: HintRule,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            hint_rule: HintRule::default(),
        }
    }
}

/// Where a session stands between two inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingGuess {
        round: usize,
        attempts_remaining: u32,
    },
    AwaitingContinue {
        round: usize,
    },
    RoundWon {
        round: usize,
    },
    RoundLost {
        round: usize,
    },
    AllRoundsComplete,
    Closed,
}

/// Why a driven session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every answer was played
    Completed,
    /// The player declined to continue
    Quit,
    /// The client closed its side before the session finished
    Disconnected,
}

/// Game state owned by exactly one connection
#[derive(Debug)]
pub struct Session {
    words: Arc<WordStore>,
    config: SessionConfig,
    state: SessionState,
    quit: bool,
}

impl Session {
    /// Starts at the first round with a full set of attempts.
    pub fn new(words: Arc<WordStore>, config: SessionConfig) -> Self {
        let state = if words.answers().is_empty() {
            SessionState::AllRoundsComplete
        } else {
            SessionState::AwaitingGuess {
                round: 0,
                attempts_remaining: config.max_attempts,
            }
        };

        Self {
            words,
            config,
            state,
            quit: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == SessionState::Closed
    }

    /// Messages owed to the client before any input is read.
    ///
    /// Only non-empty for a session created without answers.
    pub fn start(&mut self) -> Vec<ServerMessage> {
        let mut replies = Vec::new();
        self.settle(&mut replies);
        replies
    }

    /// Prompt to write before reading the next input, if one is due.
    ///
    /// The guess prompt is repeated before every read; the continue prompt
    /// is sent once, when the round ends, and is not repeated.
    pub fn prompt(&self) -> Option<ServerMessage> {
        match self.state {
            SessionState::AwaitingGuess {
                attempts_remaining, ..
            } => Some(ServerMessage::GuessPrompt { attempts_remaining }),
            _ => None,
        }
    }

    /// Applies one client input and returns the replies in send order.
    pub fn handle_input(&mut self, input: &str) -> Vec<ServerMessage> {
        let mut replies = Vec::new();

        match self.state {
            SessionState::AwaitingGuess {
                round,
                attempts_remaining,
            } => self.handle_guess(round, attempts_remaining, input, &mut replies),
            SessionState::AwaitingContinue { round } => {
                self.handle_continue(round, input, &mut replies)
            }
            _ => {}
        }

        self.settle(&mut replies);
        replies
    }

    /// Forces the terminal state, e.g. after the connection failed.
    pub fn close(&mut self) {
        self.state = SessionState::Closed;
    }

    /// How the session ended, if it has.
    pub fn end(&self) -> Option<SessionEnd> {
        match self.state {
            SessionState::Closed if self.quit => Some(SessionEnd::Quit),
            SessionState::Closed => Some(SessionEnd::Completed),
            _ => None,
        }
    }

    fn handle_guess(
        &mut self,
        round: usize,
        attempts_remaining: u32,
        input: &str,
        replies: &mut Vec<ServerMessage>,
    ) {
        let guess = normalize_guess(input);

        if guess.len() != WORD_LENGTH {
            replies.push(ServerMessage::InvalidLength);
            return;
        }
        if !self.words.words().contains(&guess) {
            replies.push(ServerMessage::NotInWordList);
            return;
        }

        let Some(answer) = self.words.answers().get(round) else {
            self.state = SessionState::AllRoundsComplete;
            return;
        };

        let hint = self.config.hint_rule.generate(&guess, answer);
        replies.push(ServerMessage::Hint(hint));

        if guess == answer {
            replies.push(ServerMessage::Won);
            self.state = SessionState::RoundWon { round };
            return;
        }

        let attempts_remaining = attempts_remaining.saturating_sub(1);
        if attempts_remaining == 0 {
            replies.push(ServerMessage::Lost {
                answer: answer.to_string(),
            });
            self.state = SessionState::RoundLost { round };
        } else {
            self.state = SessionState::AwaitingGuess {
                round,
                attempts_remaining,
            };
        }
    }

    fn handle_continue(&mut self, round: usize, input: &str, replies: &mut Vec<ServerMessage>) {
        match input.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('y') => {
                replies.push(ServerMessage::NewGame);
                self.state = SessionState::AwaitingGuess {
                    round: round + 1,
                    attempts_remaining: self.config.max_attempts,
                };
            }
            Some('n') => {
                self.quit = true;
                self.state = SessionState::Closed;
            }
            // Anything else waits silently for a usable answer
            _ => {}
        }
    }

    /// Walks through the transient states until the session waits for input
    /// or is closed.
    fn settle(&mut self, replies: &mut Vec<ServerMessage>) {
        loop {
            match self.state {
                SessionState::RoundWon { round } | SessionState::RoundLost { round } => {
                    if round + 1 >= self.words.answers().len() {
                        self.state = SessionState::AllRoundsComplete;
                    } else {
                        replies.push(ServerMessage::ContinuePrompt);
                        self.state = SessionState::AwaitingContinue { round };
                    }
                }
                SessionState::AllRoundsComplete => {
                    replies.push(ServerMessage::AllComplete);
                    self.state = SessionState::Closed;
                }
                _ => return,
            }
        }
    }
}

/// Plays one session over `reader`/`writer` until it closes.
///
/// Each turn consumes whatever input is available, cut after the first
/// newline and capped at [`MAX_INPUT_LEN`] bytes, so clients that never send
/// a newline are still answered. End of stream or a read error closes the
/// session; read errors are returned to the caller, never retried.
pub async fn run_session<R, W>(
    session_id: u64,
    peer: SocketAddr,
    mut session: Session,
    mut reader: R,
    mut writer: W,
) -> io::Result<SessionEnd>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let greeting = session.start();
    send(&mut writer, &greeting).await?;

    let mut buffer = Vec::with_capacity(MAX_INPUT_LEN);

    while !session.is_closed() {
        if let Some(prompt) = session.prompt() {
            send(&mut writer, &[prompt]).await?;
        }

        buffer.clear();
        match read_input(&mut reader, &mut buffer).await {
            Ok(0) => {
                session.close();
                debug!("Session {} ({}): client closed the connection", session_id, peer);
                return Ok(SessionEnd::Disconnected);
            }
            Ok(_) => {}
            Err(e) => {
                session.close();
                warn!("Session {} ({}): read failed: {}", session_id, peer, e);
                return Err(e);
            }
        }

        let input = String::from_utf8_lossy(&buffer);
        debug!("Session {} ({}): received {:?}", session_id, peer, input.trim_end());

        let replies = session.handle_input(&input);
        send(&mut writer, &replies).await?;

        for reply in &replies {
            match reply {
                ServerMessage::Won => info!("Session {} ({}): round won", session_id, peer),
                ServerMessage::Lost { answer } => info!(
                    "Session {} ({}): round lost, answer was {}",
                    session_id, peer, answer
                ),
                ServerMessage::NewGame => {
                    info!("Session {} ({}): starting next round", session_id, peer)
                }
                _ => {}
            }
        }
    }

    writer.shutdown().await?;
    Ok(session.end().unwrap_or(SessionEnd::Completed))
}

/// Moves the next input into `buffer` and returns its length, 0 at end of
/// stream.
///
/// Takes the bytes already available up to and including the first `\n`,
/// or all of them when there is none. Never waits for a newline.
async fn read_input<R: AsyncBufRead + Unpin>(
    reader: &mut R,
    buffer: &mut Vec<u8>,
) -> io::Result<usize> {
    let available = reader.fill_buf().await?;
    let len = available
        .iter()
        .position(|&b| b == b'\n')
        .map_or(available.len(), |pos| pos + 1)
        .min(MAX_INPUT_LEN);

    buffer.extend_from_slice(&available[..len]);
    reader.consume(len);
    Ok(len)
}

async fn send<W: AsyncWrite + Unpin>(writer: &mut W, messages: &[ServerMessage]) -> io::Result<()> {
    if messages.is_empty() {
        return Ok(());
    }

    let mut out = String::new();
    for message in messages {
        out.push_str(&message.to_string());
    }
    writer.write_all(out.as_bytes()).await?;
    writer.flush().await
}
