//! # Wordle Server Library
//!
//! A TCP server that runs an independent game of Wordle for every connected
//! client. Players guess five-letter words and receive a hint after each
//! valid guess, working through the configured answer list one round at a
//! time.
//!
//! ## Architecture
//!
//! ### Task Per Connection
//! The accept loop in [`network`] never blocks on a player. Every accepted
//! connection is handed to its own tokio task, which owns the socket and a
//! [`session::Session`] for as long as the player stays connected. Sessions
//! never talk to each other.
//!
//! ### Read-Only Word Store
//! Word lists are loaded once by the binary before the first connection is
//! accepted and then shared behind an `Arc`. Nothing mutates them, so no
//! locking is involved. The only shared mutable value is an atomic counter of
//! accepted connections, which doubles as the session id in log lines.
//!
//! ### Line-Oriented Text Protocol
//! The server writes human-readable prompts and notices (see
//! [`shared::protocol`]) and reads one line of input per turn, so any
//! plain TCP client such as `nc` or `telnet` can play.
//!
//! ## Module Organization
//!
//! - [`words`]: word set and answer list loading and validation
//! - [`session`]: per-client game state machine and its I/O driver
//! - [`network`]: listener, accept loop and task spawning
//!
//! ## Failure Handling
//!
//! Invalid guesses are reported to the player and cost nothing. A failed
//! read or write only ends the affected session. A failed `accept` is logged
//! and the loop continues, unless [`network::AcceptErrorPolicy::Exit`] is
//! configured.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use server::network::{Server, ServerConfig};
//! use server::words::{AnswerList, WordSet, WordStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let words = WordSet::load("words.txt")?;
//!     let answers = AnswerList::load("answers.txt", &words)?;
//!     let store = Arc::new(WordStore::new(words, answers)?);
//!
//!     let server = Server::bind("0.0.0.0:8080", store, ServerConfig::default()).await?;
//!     server.run().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod network;
pub mod session;
pub mod words;
