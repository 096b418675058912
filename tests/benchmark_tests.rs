//! Performance benchmarks for hint scoring, the session state machine and the accept loop

use server::network::{Server, ServerConfig};
use server::session::{Session, SessionConfig};
use server::words::{AnswerList, WordSet, WordStore};
use shared::{generate_hint, HintRule};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

const WORDS: &str = "crane train slate least apple mango abbey bobby geese creep speed arose";

/// Benchmarks lenient hint generation
#[test]
fn benchmark_lenient_hints() {
    let words: Vec<&str> = WORDS.split_whitespace().collect();
    let iterations = 100_000;
    let start = Instant::now();

    for i in 0..iterations {
        let guess = words[i % words.len()];
        let answer = words[(i / words.len()) % words.len()];
        let _ = generate_hint(guess, answer);
    }

    let duration = start.elapsed();
    println!(
        "Lenient hints: {} iterations in {:?} ({:.2} ns/iter)",
        iterations,
        duration,
        duration.as_nanos() as f64 / iterations as f64
    );

    // Should complete in under 1 second for 100k iterations
    assert!(duration.as_millis() < 1000);
}

/// Benchmarks canonical hint generation
#[test]
fn benchmark_canonical_hints() {
    let words: Vec<&str> = WORDS.split_whitespace().collect();
    let iterations = 100_000;
    let start = Instant::now();

    for i in 0..iterations {
        let guess = words[i % words.len()];
        let answer = words[(i / words.len()) % words.len()];
        let _ = HintRule::Canonical.generate(guess, answer);
    }

    let duration = start.elapsed();
    println!(
        "Canonical hints: {} iterations in {:?} ({:.2} ns/iter)",
        iterations,
        duration,
        duration.as_nanos() as f64 / iterations as f64
    );

    assert!(duration.as_millis() < 1000);
}

/// Benchmarks full sessions through the state machine without sockets
#[test]
fn benchmark_session_state_machine() {
    let store = word_store();
    let iterations = 10_000;
    let start = Instant::now();

    for _ in 0..iterations {
        let mut session = Session::new(Arc::clone(&store), SessionConfig::default());
        for answer in store.answers().iter() {
            session.handle_input("slate\n");
            session.handle_input(answer);
            session.handle_input("y\n");
        }
        assert!(session.is_closed());
    }

    let duration = start.elapsed();
    println!(
        "Session playthroughs: {} sessions in {:?} ({:.2} μs/session)",
        iterations,
        duration,
        duration.as_micros() as f64 / iterations as f64
    );

    assert!(duration.as_millis() < 2000);
}

/// Benchmarks many clients playing concurrently over TCP
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn benchmark_concurrent_sessions() {
    let server = Server::bind("127.0.0.1:0", word_store(), ServerConfig::default())
        .await
        .unwrap();
    let addr = server.local_addr().unwrap();
    let counter = server.sessions_started();
    tokio::spawn(server.run());

    let clients = 50;
    let start = Instant::now();

    let handles: Vec<_> = (0..clients)
        .map(|_| {
            tokio::spawn(async move {
                let mut stream = TcpStream::connect(addr).await.unwrap();
                stream
                    .write_all(b"slate\ncrane\ny\napple\ny\nmango\n")
                    .await
                    .unwrap();

                let mut transcript = String::new();
                stream.read_to_string(&mut transcript).await.unwrap();
                transcript
            })
        })
        .collect();

    for handle in handles {
        let transcript = tokio::time::timeout(Duration::from_secs(10), handle)
            .await
            .expect("client timed out")
            .unwrap();
        assert!(transcript.ends_with(shared::protocol::ALL_COMPLETE));
    }

    let duration = start.elapsed();
    println!(
        "Concurrent sessions: {} clients in {:?}",
        clients, duration
    );

    assert_eq!(counter.load(Ordering::Relaxed), clients);
    assert!(duration.as_secs() < 10);
}

fn word_store() -> Arc<WordStore> {
    let set = WordSet::parse(WORDS);
    let answers = AnswerList::parse("crane apple mango", &set);
    Arc::new(WordStore::new(set, answers).unwrap())
}
