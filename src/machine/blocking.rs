//! Reader/writer-locked machine with optional optimistic evaluation.

use crate::core::{Event, EventProcessor, IllegalTransition, State};
use crate::machine::Fsm;
use parking_lot::RwLock;
use std::marker::PhantomData;

/// A thread-safe machine whose current state sits behind a reader/writer
/// lock.
///
/// Readers of [`current_state`](Fsm::current_state) proceed concurrently;
/// `process` commits under the exclusive write lock. The lock is
/// `parking_lot`'s: non-poisoning, with eventual fairness — waiters are
/// served roughly first-in-first-out under sustained contention, though
/// that is a best-effort policy, not a hard ordering guarantee.
///
/// # Optimistic evaluation
///
/// With the [`optimistic`](BlockingFsm::optimistic) constructor, `process`
/// computes the transition against a read-locked snapshot *before* taking
/// the write lock. If no other thread changed the state in between, the
/// speculative result is committed as-is, halving the time the exclusive
/// lock is held for computation-heavy processors; if the state did change,
/// the transition is recomputed under the lock, which is never worse than
/// the pessimistic path plus one wasted computation.
///
/// # Example
///
/// ```rust
/// use stator::{state_enum, event_enum, BlockingFsm, Fsm, TransitionTable};
///
/// state_enum! {
///     enum Gate { Locked, Unlocked }
/// }
///
/// event_enum! {
///     enum Coin { Insert, Pass }
/// }
///
/// let table = TransitionTable::builder()
///     .when(Gate::Locked).on(Coin::Insert).switch_to(Gate::Unlocked)
///     .when(Gate::Unlocked).on(Coin::Pass).switch_to(Gate::Locked)
///     .build();
///
/// let machine = BlockingFsm::optimistic(Gate::Locked, table);
/// assert_eq!(machine.process(Coin::Insert).unwrap(), Gate::Unlocked);
/// ```
pub struct BlockingFsm<S: State, E: Event, P: EventProcessor<S, E>> {
    optimistic: bool,
    current_state: RwLock<S>,
    processor: P,
    _event: PhantomData<E>,
}

impl<S: State, E: Event, P: EventProcessor<S, E>> BlockingFsm<S, E, P> {
    /// Create a pessimistic machine: every transition is computed under the
    /// exclusive write lock.
    pub fn new(initial_state: S, processor: P) -> Self {
        Self::with_mode(false, initial_state, processor)
    }

    /// Create an optimistic machine: transitions are precomputed outside
    /// the lock and revalidated once it is held.
    pub fn optimistic(initial_state: S, processor: P) -> Self {
        Self::with_mode(true, initial_state, processor)
    }

    fn with_mode(optimistic: bool, initial_state: S, processor: P) -> Self {
        Self {
            optimistic,
            current_state: RwLock::new(initial_state),
            processor,
            _event: PhantomData,
        }
    }
}

impl<S: State, E: Event, P: EventProcessor<S, E>> Fsm<S, E> for BlockingFsm<S, E, P> {
    fn current_state(&self) -> S {
        *self.current_state.read()
    }

    fn process(&self, event: E) -> Result<S, IllegalTransition> {
        // Speculative computation without holding any lock; readers and
        // other speculative computations proceed concurrently.
        let speculation = if self.optimistic {
            let snapshot = self.current_state();
            Some((snapshot, self.processor.apply(snapshot, event)))
        } else {
            None
        };

        let mut current = self.current_state.write();

        // Reuse the speculative result only if no other thread mutated the
        // state between the snapshot and acquiring the write lock.
        let result = match speculation {
            Some((snapshot, result)) if snapshot == *current => result,
            _ => self.processor.apply(*current, event),
        };

        // An error releases the lock on return, leaving the state untouched.
        let new_state = result?;

        // Skip the write for 'ignore' transitions.
        if new_state != *current {
            *current = new_state;
        }

        Ok(*current)
    }
}
