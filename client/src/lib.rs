//! # Wordle Client Library
//!
//! Terminal front-end for the Wordle server. The server drives the whole
//! game and speaks plain text, so the client only relays: every line the
//! player types goes to the server, and everything the server writes is
//! echoed to the terminal as it arrives.
//!
//! Prompts end without a newline, which is why server output is flushed
//! immediately instead of line by line.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use client::network::Client;
//! use tokio::io::BufReader;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::connect("127.0.0.1:8080").await?;
//!     client
//!         .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod network;
