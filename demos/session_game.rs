//! Session Game
//!
//! This example plays a short game through a `GameSession` on the tokio
//! runtime, with every presentation request written to the log.
//!
//! Key concepts:
//! - Building a validated machine with `GameBuilder`
//! - `TracingBroadcaster` as the presentation layer
//! - Following snapshots over the session's `watch` channel
//! - A wrong input, the game-over hold and the automatic reset
//!
//! Run with: cargo run --example session_game

use recall::{GameBuilder, GameSession, GameStatus, Signal, TracingBroadcaster};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Session Game ===\n");

    let machine = GameBuilder::new()
        .seed(2024)
        .broadcaster(TracingBroadcaster)
        .build()
        .expect("default configuration is valid");
    let session = GameSession::spawn(machine);
    let mut updates = session.subscribe();

    session.start().expect("session is running");

    // Win three rounds by repeating the sequence back.
    for _ in 0..3 {
        let state = updates
            .wait_for(|s| s.status() == GameStatus::AwaitingInput && !s.is_busy())
            .await
            .expect("session is running")
            .clone();
        println!(
            "Round {}: sequence {:?}, score {}",
            state.round(),
            state.sequence(),
            state.score()
        );

        let round = state.round();
        for (entered, signal) in state.sequence().iter().copied().enumerate() {
            session.submit_input(signal).expect("session is running");
            updates
                .wait_for(|s| s.input().len() > entered || s.round() > round)
                .await
                .expect("session is running");
            updates
                .wait_for(|s| !s.is_busy())
                .await
                .expect("session is running");
        }
    }

    // Then miss on purpose.
    let state = session.snapshot();
    let expected = state.sequence()[0];
    let wrong = Signal::from_index((expected.index() + 1) % 4).unwrap_or(Signal::Green);
    println!("\nRound {}: pressing {} instead of {}", state.round(), wrong, expected);
    session.submit_input(wrong).expect("session is running");

    let over = updates
        .wait_for(|s| s.status() == GameStatus::GameOver)
        .await
        .expect("session is running")
        .clone();
    println!("Game over with score {}", over.score());

    updates
        .wait_for(|s| s.status() == GameStatus::Idle)
        .await
        .expect("session is running");
    println!("Back to idle, ready for a new game");

    session.shutdown().await;
}
