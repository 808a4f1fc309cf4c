//! Core contracts of the engine.
//!
//! This module contains the pure heart of the machine:
//! - State and Event definitions via the [`State`] and [`Event`] traits
//! - The [`EventProcessor`] transition contract
//! - The transition error taxonomy
//!
//! Everything here is pure (no side effects); the concurrency strategies
//! live in [`crate::machine`].

mod error;
mod processor;
mod state;

pub use error::{IllegalTransition, TransitionError};
pub use processor::EventProcessor;
pub use state::{Event, State};
