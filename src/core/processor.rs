//! The EventProcessor contract: pure transition computation.

use crate::core::error::TransitionError;
use crate::core::state::{Event, State};
use std::sync::Arc;

/// Computes the outcome of applying an event to a state.
///
/// An event processor is really just a function
/// `(current_state, event) -> Result<new_state, error>`. It must be pure and
/// side-effect free: it may be invoked concurrently by multiple machines, or
/// by the same machine's concurrent retries, without any coordination, and
/// the result depends only on its two inputs.
///
/// An ordinary "transition not defined" case is expressed as `Err`, never as
/// a panic; panics are reserved for genuine programmer errors.
///
/// One implementation is [`TransitionTable`](crate::TransitionTable), based
/// on a static transition table. Any
/// `Fn(S, E) -> Result<S, TransitionError> + Send + Sync` closure also
/// implements this trait.
///
/// # Example
///
/// ```rust
/// use stator::{state_enum, event_enum, EventProcessor, TransitionError};
///
/// state_enum! {
///     enum Door {
///         Open,
///         Closed,
///     }
/// }
///
/// event_enum! {
///     enum Push {
///         Toggle,
///     }
/// }
///
/// let toggle = |state: Door, _event: Push| match state {
///     Door::Open => Ok(Door::Closed),
///     Door::Closed => Ok(Door::Open),
/// };
///
/// assert_eq!(toggle.apply(Door::Open, Push::Toggle), Ok(Door::Closed));
/// ```
pub trait EventProcessor<S: State, E: Event>: Send + Sync {
    /// Given the current state and an event acting upon it, return the new
    /// state, or an error if no transition can be identified.
    ///
    /// The new state may equal `current` — that is an explicit "stay put"
    /// outcome, not an error.
    fn apply(&self, current: S, event: E) -> Result<S, TransitionError>;
}

impl<S, E, F> EventProcessor<S, E> for F
where
    S: State,
    E: Event,
    F: Fn(S, E) -> Result<S, TransitionError> + Send + Sync,
{
    fn apply(&self, current: S, event: E) -> Result<S, TransitionError> {
        self(current, event)
    }
}

/// A processor is stateless, so one instance may be shared read-only across
/// arbitrarily many machines.
impl<S, E, P> EventProcessor<S, E> for Arc<P>
where
    S: State,
    E: Event,
    P: EventProcessor<S, E>,
{
    fn apply(&self, current: S, event: E) -> Result<S, TransitionError> {
        (**self).apply(current, event)
    }
}
