//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic transition table driven by a
//! single-threaded machine.
//!
//! Key concepts:
//! - Fluent table construction with chained `on`
//! - The strict unknown-event policy
//! - Single-threaded `StandardFsm`
//!
//! Run with: cargo run --example traffic_light

use stator::{event_enum, state_enum, Fsm, StandardFsm, TransitionTable};

state_enum! {
    enum TrafficLight {
        Red,
        Green,
        Yellow,
    }
}

event_enum! {
    enum Timer {
        Expired,
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    // Each chained `on` departs from the state just switched to, so one
    // sentence describes the whole cycle.
    let table = TransitionTable::builder()
        .when(TrafficLight::Red)
            .on(Timer::Expired).switch_to(TrafficLight::Green)
                .on(Timer::Expired).switch_to(TrafficLight::Yellow)
                    .on(Timer::Expired).switch_to(TrafficLight::Red)
        .build();

    let light = StandardFsm::new(TrafficLight::Red, table);
    println!("Initial state: {:?}\n", light.current_state());

    for tick in 1..=6 {
        let state = light.process(Timer::Expired).unwrap();
        println!("tick {tick}: light is now {:?}", state);
    }

    println!("\nThe cycle repeats: Red -> Green -> Yellow -> Red -> ...");
    println!("\n=== Example Complete ===");
}
