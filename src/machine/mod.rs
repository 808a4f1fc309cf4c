//! The machines: a current state plus a commit strategy.
//!
//! Every machine owns exactly one mutable current-state cell and a shared,
//! immutable [`EventProcessor`](crate::EventProcessor). They differ only in
//! the mutation discipline of that cell:
//!
//! - [`StandardFsm`] — plain cell, single-threaded callers only
//! - [`AtomicFsm`] — atomic cell, lock-free compare-and-swap retry
//! - [`BlockingFsm`] — reader/writer lock, optional optimistic evaluation

mod atomic;
mod blocking;
mod standard;

pub use atomic::AtomicFsm;
pub use blocking::BlockingFsm;
pub use standard::StandardFsm;

use crate::core::{Event, IllegalTransition, State};

/// A finite state machine.
///
/// Transition from one state to another is performed by processing an
/// event. The machine has no control-flow states of its own — it is a
/// container for the managed [`State`] value, delegating all transition
/// decisions to its event processor.
pub trait Fsm<S: State, E: Event> {
    /// Get the current state.
    ///
    /// For the concurrent implementations this is safe to call while other
    /// threads are inside [`process`](Fsm::process).
    fn current_state(&self) -> S;

    /// Process an event against the current state.
    ///
    /// On success the machine's current state is durably updated before the
    /// call returns; the returned state may equal the previous one when the
    /// event maps to a no-op. On failure the current state is left
    /// untouched and the processor's error is surfaced as
    /// [`IllegalTransition`].
    fn process(&self, event: E) -> Result<S, IllegalTransition>;
}
