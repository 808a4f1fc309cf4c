//! Counter Swarm
//!
//! This example hammers a lock-free machine from many threads at once.
//!
//! Key concepts:
//! - `AtomicFsm` compare-and-swap retry under real contention
//! - A closure as the event processor
//! - No lost updates: the final count is exact
//!
//! Run with: cargo run --example counter_swarm

use serde::{Deserialize, Serialize};
use stator::{event_enum, AtomicFsm, Fsm, State, TransitionError};
use std::sync::Arc;
use std::thread;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
struct Count(u64);

impl State for Count {
    fn name(&self) -> &'static str {
        "Count"
    }
}

event_enum! {
    enum Pulse {
        Increment,
    }
}

const THREADS: u64 = 8;
const STEPS: u64 = 100_000;

fn main() {
    println!("=== Counter Swarm ===\n");

    let machine = Arc::new(AtomicFsm::new(
        Count(0),
        |state: Count, _event: Pulse| -> Result<Count, TransitionError> {
            Ok(Count(state.0 + 1))
        },
    ));

    let handles: Vec<_> = (0..THREADS)
        .map(|id| {
            let machine = Arc::clone(&machine);
            thread::spawn(move || {
                for _ in 0..STEPS {
                    machine.process(Pulse::Increment).unwrap();
                }
                println!("thread {id} done");
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let Count(total) = machine.current_state();
    println!("\nfinal count: {total} (expected {})", THREADS * STEPS);
    assert_eq!(total, THREADS * STEPS);

    println!("\n=== Example Complete ===");
}
