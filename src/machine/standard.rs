//! Single-threaded machine with no concurrency control.

use crate::core::{Event, EventProcessor, IllegalTransition, State};
use crate::machine::Fsm;
use std::cell::Cell;
use std::marker::PhantomData;

/// A machine for single-threaded callers.
///
/// The current state lives in a [`Cell`], which keeps `process` callable
/// through a shared reference but makes the machine `!Sync` — the compiler
/// rejects any attempt to share it across threads, rather than documenting
/// the restriction and hoping.
///
/// # Example
///
/// ```rust
/// use stator::{state_enum, event_enum, Fsm, StandardFsm, TransitionTable};
///
/// state_enum! {
///     enum Job { Queued, Active, Done }
/// }
///
/// event_enum! {
///     enum Step { Claim, Finish }
/// }
///
/// let table = TransitionTable::builder()
///     .when(Job::Queued).on(Step::Claim).switch_to(Job::Active)
///     .when(Job::Active).on(Step::Finish).switch_to(Job::Done)
///     .build();
///
/// let machine = StandardFsm::new(Job::Queued, table);
/// assert_eq!(machine.process(Step::Claim).unwrap(), Job::Active);
/// assert_eq!(machine.current_state(), Job::Active);
/// ```
pub struct StandardFsm<S: State, E: Event, P: EventProcessor<S, E>> {
    current_state: Cell<S>,
    processor: P,
    _event: PhantomData<E>,
}

impl<S: State, E: Event, P: EventProcessor<S, E>> StandardFsm<S, E, P> {
    /// Create a machine in `initial_state`, delegating transitions to
    /// `processor`.
    pub fn new(initial_state: S, processor: P) -> Self {
        Self {
            current_state: Cell::new(initial_state),
            processor,
            _event: PhantomData,
        }
    }
}

impl<S: State, E: Event, P: EventProcessor<S, E>> Fsm<S, E> for StandardFsm<S, E, P> {
    fn current_state(&self) -> S {
        self.current_state.get()
    }

    fn process(&self, event: E) -> Result<S, IllegalTransition> {
        let new_state = self.processor.apply(self.current_state.get(), event)?;
        self.current_state.set(new_state);
        Ok(new_state)
    }
}
