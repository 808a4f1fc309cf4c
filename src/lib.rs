//! Stator: a concurrency-safe finite state machine engine.
//!
//! A state machine here is a typed current state advanced by typed events.
//! The transition logic lives behind the [`EventProcessor`] contract — a pure
//! `(state, event) -> Result<state, error>` function — and the machines differ
//! only in how they coordinate commits of the new state:
//!
//! - [`StandardFsm`]: single-threaded, no synchronization
//! - [`AtomicFsm`]: lock-free compare-and-swap with retry
//! - [`BlockingFsm`]: reader/writer lock, optionally with optimistic
//!   precomputation outside the lock
//!
//! # Core Concepts
//!
//! - **State / Event**: closed finite sets of named variants, via the
//!   [`State`] and [`Event`] traits
//! - **EventProcessor**: pure, thread-safe transition function
//! - **TransitionTable**: a declarative processor built from a static
//!   `state -> (event -> state)` mapping
//!
//! # Example
//!
//! ```rust
//! use stator::{state_enum, event_enum, Fsm, StandardFsm, TransitionTable};
//!
//! state_enum! {
//!     enum Phase {
//!         Idle,
//!         Running,
//!         Stopped,
//!     }
//! }
//!
//! event_enum! {
//!     enum Command {
//!         Start,
//!         Stop,
//!     }
//! }
//!
//! let table = TransitionTable::builder()
//!     .when(Phase::Idle).on(Command::Start).switch_to(Phase::Running)
//!     .when(Phase::Running).on(Command::Stop).switch_to(Phase::Stopped)
//!     .build();
//!
//! let machine = StandardFsm::new(Phase::Idle, table);
//! assert_eq!(machine.process(Command::Start).unwrap(), Phase::Running);
//! assert_eq!(machine.process(Command::Stop).unwrap(), Phase::Stopped);
//! assert!(machine.process(Command::Stop).is_err());
//! assert_eq!(machine.current_state(), Phase::Stopped);
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod table;

// Re-export commonly used types
pub use crate::core::{Event, EventProcessor, IllegalTransition, State, TransitionError};
pub use builder::TransitionTableBuilder;
pub use machine::{AtomicFsm, BlockingFsm, Fsm, StandardFsm};
pub use table::TransitionTable;
