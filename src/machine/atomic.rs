//! Lock-free machine built on compare-and-swap.

use crate::core::{Event, EventProcessor, IllegalTransition, State};
use crate::machine::Fsm;
use crossbeam::atomic::AtomicCell;
use std::marker::PhantomData;

/// A thread-safe machine whose current state lives in an atomic cell.
///
/// `process` never takes a lock. It reads the state, computes the transition
/// against that snapshot, and commits it with a compare-and-swap; if another
/// thread committed first, the whole step restarts against the freshly
/// observed state — a logical retry that recomputes the transition, not a
/// blind replay of the stale result.
///
/// The committed states therefore form a total order: exactly the sequence
/// of winning compare-and-swap operations. The loop is lock-free but not
/// bounded; under sustained contention a thread can retry indefinitely.
///
/// For fieldless enums the cell is a single byte and operations compile to
/// plain atomic instructions.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use stator::{state_enum, event_enum, AtomicFsm, Fsm, TransitionTable};
///
/// state_enum! {
///     enum Conn { Closed, Open }
/// }
///
/// event_enum! {
///     enum Io { Connect, Disconnect }
/// }
///
/// let table = TransitionTable::builder()
///     .when(Conn::Closed).on(Io::Connect).switch_to(Conn::Open)
///     .when(Conn::Open).on(Io::Disconnect).switch_to(Conn::Closed)
///     .build();
///
/// let machine = Arc::new(AtomicFsm::new(Conn::Closed, table));
/// let worker = Arc::clone(&machine);
/// std::thread::spawn(move || {
///     let _ = worker.current_state();
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(machine.process(Io::Connect).unwrap(), Conn::Open);
/// ```
pub struct AtomicFsm<S: State, E: Event, P: EventProcessor<S, E>> {
    current_state: AtomicCell<S>,
    processor: P,
    _event: PhantomData<E>,
}

impl<S: State, E: Event, P: EventProcessor<S, E>> AtomicFsm<S, E, P> {
    /// Create a machine in `initial_state`, delegating transitions to
    /// `processor`.
    pub fn new(initial_state: S, processor: P) -> Self {
        Self {
            current_state: AtomicCell::new(initial_state),
            processor,
            _event: PhantomData,
        }
    }
}

impl<S: State, E: Event, P: EventProcessor<S, E>> Fsm<S, E> for AtomicFsm<S, E, P> {
    fn current_state(&self) -> S {
        self.current_state.load()
    }

    fn process(&self, event: E) -> Result<S, IllegalTransition> {
        loop {
            let state = self.current_state.load();

            // An error is a verdict about a state that was current at some
            // point, not a transient race: fail immediately, no retry.
            let new_state = self.processor.apply(state, event)?;

            // 'ignore' was specified, there is no state transition to make.
            if new_state == state {
                return Ok(state);
            }

            if self
                .current_state
                .compare_exchange(state, new_state)
                .is_ok()
            {
                return Ok(new_state);
            }
            // Lost the race: recompute against the latest observed state.
        }
    }
}
