//! Declarative transition tables.
//!
//! A [`TransitionTable`] is an [`EventProcessor`] backed by a static mapping
//! `state -> (event -> state)`, plus a policy flag deciding what happens for
//! pairs absent from the mapping.

use crate::builder::TransitionTableBuilder;
use crate::core::{Event, EventProcessor, State, TransitionError};
use std::collections::HashMap;

/// An [`EventProcessor`] which uses a static table of possible state
/// transitions.
///
/// The table owns a nested mapping `current_state -> (event -> new_state)`
/// and an `ignore_unknown_events` flag. For a `(state, event)` pair present
/// in the mapping, `apply` returns the mapped state. For an absent pair the
/// flag decides: when `false` (the strict default) the lookup is an error;
/// when `true` the current state is returned unchanged, as an explicit no-op.
///
/// A transition mapped to the very state it starts from is semantically
/// identical to that no-op — callers cannot tell the two apart, and no
/// machine performs a state write for either.
///
/// The mapping and the flag are deliberately private: the only way to
/// observe them is through [`apply`](EventProcessor::apply).
///
/// # Example
///
/// ```rust
/// use stator::{state_enum, event_enum, EventProcessor, TransitionTable};
///
/// state_enum! {
///     enum Phase {
///         Idle,
///         Running,
///     }
/// }
///
/// event_enum! {
///     enum Command {
///         Start,
///         Pause,
///     }
/// }
///
/// let table = TransitionTable::builder()
///     .when(Phase::Idle).on(Command::Start).switch_to(Phase::Running)
///     .build();
///
/// assert_eq!(table.apply(Phase::Idle, Command::Start), Ok(Phase::Running));
/// assert!(table.apply(Phase::Running, Command::Pause).is_err());
/// ```
pub struct TransitionTable<S: State, E: Event> {
    transitions: HashMap<S, HashMap<E, S>>,
    ignore_unknown_events: bool,
}

impl<S: State, E: Event> TransitionTable<S, E> {
    /// Construct a strict table directly from a nested mapping.
    ///
    /// Unknown `(state, event)` pairs yield an error. The
    /// [`transition_map!`](crate::transition_map) macro builds the nested
    /// mapping from a literal.
    pub fn new(transitions: HashMap<S, HashMap<E, S>>) -> Self {
        Self::with_policy(false, transitions)
    }

    /// Construct a table with an explicit unknown-event policy.
    ///
    /// When `ignore_unknown_events` is true, an event with no entry for the
    /// current state returns the current state unchanged instead of an error.
    pub fn with_policy(ignore_unknown_events: bool, transitions: HashMap<S, HashMap<E, S>>) -> Self {
        Self {
            transitions,
            ignore_unknown_events,
        }
    }

    /// Create a [`TransitionTableBuilder`] for fluent construction.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stator::{state_enum, event_enum, TransitionTable};
    ///
    /// state_enum! {
    ///     enum S { A, B, C }
    /// }
    ///
    /// event_enum! {
    ///     enum E { ToB, ToC }
    /// }
    ///
    /// let table = TransitionTable::builder()
    ///     .when(S::A).on(E::ToB).switch_to(S::B)
    ///         .on(E::ToC).switch_to(S::C)
    ///     .build();
    /// ```
    pub fn builder() -> TransitionTableBuilder<S, E> {
        TransitionTableBuilder::new()
    }
}

impl<S: State, E: Event> EventProcessor<S, E> for TransitionTable<S, E> {
    fn apply(&self, current: S, event: E) -> Result<S, TransitionError> {
        let transitions = self.transitions.get(&current);

        if transitions.is_none() && !self.ignore_unknown_events {
            return Err(TransitionError::UndefinedStateTransitions {
                state: current.name(),
            });
        }

        match transitions.and_then(|t| t.get(&event)) {
            Some(new_state) => Ok(*new_state),
            None if self.ignore_unknown_events => Ok(current),
            None => Err(TransitionError::UndefinedEventTransition {
                state: current.name(),
                event: event.name(),
            }),
        }
    }
}
