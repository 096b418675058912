//! Server network layer: TCP accept loop and per-connection session tasks

use crate::session::{run_session, Session, SessionConfig, SessionEnd};
use crate::words::WordStore;
use clap::ValueEnum;
use log::{error, info, warn};
use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::BufReader;
use tokio::net::{TcpListener, TcpStream};

/// Pause after a failed accept before trying again
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(10);

/// What the accept loop does when `accept` fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AcceptErrorPolicy {
    /// Log the failure and keep serving other clients
    #[default]
    Continue,
    /// Stop the server and report the error
    Exit,
}

/// Settings handed to the server by the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerConfig {
    pub session: SessionConfig,
    pub accept_error_policy: AcceptErrorPolicy,
}

/// Accepts clients and gives each one its own game session task
pub struct Server {
    listener: TcpListener,
    words: Arc<WordStore>,
    config: ServerConfig,
    sessions_started: Arc<AtomicU64>,
}

impl Server {
    pub async fn bind(addr: &str, words: Arc<WordStore>, config: ServerConfig) -> io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        info!("Server listening on {}", listener.local_addr()?);

        Ok(Server {
            listener,
            words,
            config,
            sessions_started: Arc::new(AtomicU64::new(0)),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Shared handle to the number of connections accepted so far
    pub fn sessions_started(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.sessions_started)
    }

    /// Runs the accept loop.
    ///
    /// Only returns on an accept failure under [`AcceptErrorPolicy::Exit`].
    /// Session tasks are never awaited; each one owns its connection and
    /// drops it when the session closes.
    pub async fn run(self) -> io::Result<()> {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let session_id = self.sessions_started.fetch_add(1, Ordering::Relaxed) + 1;
                    info!("Session {}: client connected from {}", session_id, addr);

                    let session = Session::new(Arc::clone(&self.words), self.config.session);
                    tokio::spawn(serve_client(session_id, session, stream, addr));
                }
                Err(e) => handle_accept_error(self.config.accept_error_policy, e).await?,
            }
        }
    }
}

/// Applies `policy` to a failed accept.
///
/// Returns `Ok` when the accept loop should keep going, after a short pause,
/// and hands the error back when the server should stop.
async fn handle_accept_error(policy: AcceptErrorPolicy, error: io::Error) -> io::Result<()> {
    match policy {
        AcceptErrorPolicy::Continue => {
            error!("Failed to accept connection: {}", error);
            tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
            Ok(())
        }
        AcceptErrorPolicy::Exit => {
            error!("Failed to accept connection, shutting down: {}", error);
            Err(error)
        }
    }
}

/// Plays one session on a freshly accepted connection
async fn serve_client(session_id: u64, session: Session, stream: TcpStream, addr: SocketAddr) {
    let (reader, writer) = stream.into_split();

    match run_session(session_id, addr, session, BufReader::new(reader), writer).await {
        Ok(SessionEnd::Completed) => {
            info!("Session {}: all rounds played by {}", session_id, addr)
        }
        Ok(SessionEnd::Quit) => info!("Session {}: {} quit", session_id, addr),
        Ok(SessionEnd::Disconnected) => {
            info!("Session {}: {} disconnected", session_id, addr)
        }
        Err(e) => warn!("Session {}: closed after I/O error with {}: {}", session_id, addr, e),
    }
}
