//! Optimistic Turnstile
//!
//! This example runs the classic coin-operated turnstile through the
//! lock-based machine in optimistic mode.
//!
//! Key concepts:
//! - `BlockingFsm` with optimistic precomputation
//! - `ignore` entries for events that should not move the state
//! - Error handling for events the table rejects
//!
//! Run with: cargo run --example optimistic_turnstile

use stator::{event_enum, state_enum, BlockingFsm, Fsm, TransitionTable};
use std::sync::Arc;
use std::thread;

state_enum! {
    enum Turnstile {
        Locked,
        Unlocked,
    }
}

event_enum! {
    enum Action {
        Coin,
        Push,
    }
}

fn main() {
    println!("=== Optimistic Turnstile ===\n");

    let table = TransitionTable::builder()
        .when(Turnstile::Locked)
            .on(Action::Coin).switch_to(Turnstile::Unlocked)
        .when(Turnstile::Locked).ignore(Action::Push)
        .when(Turnstile::Unlocked)
            .on(Action::Push).switch_to(Turnstile::Locked)
        .when(Turnstile::Unlocked).ignore(Action::Coin)
        .build();

    let gate = Arc::new(BlockingFsm::optimistic(Turnstile::Locked, table));

    // A crowd alternating coins and pushes; every event is defined, so
    // every process call succeeds whatever the interleaving.
    let handles: Vec<_> = (0..4)
        .map(|id| {
            let gate = Arc::clone(&gate);
            thread::spawn(move || {
                for _ in 0..1_000 {
                    gate.process(Action::Coin).unwrap();
                    gate.process(Action::Push).unwrap();
                }
                println!("visitor {id} went through");
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    println!("\nfinal state: {:?}", gate.current_state());
    println!("\n=== Example Complete ===");
}
