use clap::Parser;
use log::{error, info};
use server::network::{AcceptErrorPolicy, Server, ServerConfig};
use server::session::SessionConfig;
use server::words::{AnswerList, WordSet, WordStore};
use shared::{HintRule, DEFAULT_PORT, MAX_ATTEMPTS};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plays Wordle with every client that connects", long_about = None)]
struct Args {
    /// File with the words accepted as guesses
    wordlist: PathBuf,

    /// File with the answers, played one per round in file order
    answers: PathBuf,

    /// Server IP address to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    host: String,

    /// Server port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Scoring of repeated letters: "lenient" or "canonical"
    #[arg(long, default_value = "lenient")]
    hint_rule: HintRule,

    /// Attempts per round
    #[arg(long, default_value_t = MAX_ATTEMPTS, value_parser = clap::value_parser!(u32).range(1..))]
    max_attempts: u32,

    /// Play the answers in random order
    #[arg(long)]
    shuffle: bool,

    /// Behaviour when accepting a connection fails
    #[arg(long, value_enum, default_value_t = AcceptErrorPolicy::Continue)]
    on_accept_error: AcceptErrorPolicy,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let words = WordSet::load(&args.wordlist).map_err(|e| {
        error!("{}", e);
        e
    })?;
    let mut answers = AnswerList::load(&args.answers, &words).map_err(|e| {
        error!("{}", e);
        e
    })?;

    if args.shuffle {
        answers.shuffle(&mut rand::thread_rng());
        info!("Answer order shuffled");
    }

    let store = Arc::new(WordStore::new(words, answers).map_err(|e| {
        error!("{}", e);
        e
    })?);

    let config = ServerConfig {
        session: SessionConfig {
            max_attempts: args.max_attempts,
            hint_rule: args.hint_rule,
        },
        accept_error_policy: args.on_accept_error,
    };
    info!(
        "Starting with {} rounds, {} attempts each, {} hints",
        store.answers().len(),
        config.session.max_attempts,
        config.session.hint_rule
    );

    let address = format!("{}:{}", args.host, args.port);
    let server = Server::bind(&address, store, config).await?;
    server.run().await?;

    Ok(())
}
