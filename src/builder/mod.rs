//! Fluent construction of transition tables.
//!
//! The builder accumulates `(from_state, event, to_state)` triples through a
//! chain of clause values and finalizes them into an immutable
//! [`TransitionTable`]. Each clause type exposes only the calls that are
//! legal at that point in the sentence, so an ill-formed chain does not
//! compile:
//!
//! ```text
//! builder()
//!     .when(state).on(event).switch_to(state)
//!         .on(event).switch_to(state)   // chains from the switched-to state
//!     .when(state).ignore(event)        // sugar for a self-loop
//!     .build()                          // strict unknown-event policy
//! ```

pub mod macros;

use crate::core::{Event, State};
use crate::table::TransitionTable;
use std::collections::HashMap;

/// Builder for a [`TransitionTable`], entered via
/// [`TransitionTable::builder`].
pub struct TransitionTableBuilder<S: State, E: Event> {
    transitions: HashMap<S, HashMap<E, S>>,
}

impl<S: State, E: Event> TransitionTableBuilder<S, E> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            transitions: HashMap::new(),
        }
    }

    /// When the current state is...
    pub fn when(self, current_state: S) -> WhenClause<S, E> {
        WhenClause {
            builder: self,
            current_state,
        }
    }

    fn insert(&mut self, from: S, event: E, to: S) {
        self.transitions.entry(from).or_default().insert(event, to);
    }
}

impl<S: State, E: Event> Default for TransitionTableBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// A `when(state)` clause awaiting its event.
pub struct WhenClause<S: State, E: Event> {
    builder: TransitionTableBuilder<S, E>,
    current_state: S,
}

impl<S: State, E: Event> WhenClause<S, E> {
    /// On the event...
    pub fn on(self, event: E) -> OnClause<S, E> {
        OnClause {
            builder: self.builder,
            current_state: self.current_state,
            event,
        }
    }

    /// Ignore the event in this state.
    ///
    /// Sugar for `on(event).switch_to(current_state)` — a self-loop, which
    /// downstream machines treat as a no-op.
    pub fn ignore(mut self, event: E) -> ChainClause<S, E> {
        self.builder
            .insert(self.current_state, event, self.current_state);
        ChainClause {
            builder: self.builder,
            prev_state: self.current_state,
        }
    }
}

/// A `when(state).on(event)` clause awaiting its target state.
pub struct OnClause<S: State, E: Event> {
    builder: TransitionTableBuilder<S, E>,
    current_state: S,
    event: E,
}

impl<S: State, E: Event> OnClause<S, E> {
    /// Then switch to the new state.
    pub fn switch_to(mut self, new_state: S) -> ChainClause<S, E> {
        self.builder.insert(self.current_state, self.event, new_state);
        ChainClause {
            builder: self.builder,
            prev_state: new_state,
        }
    }
}

/// A completed transition, ready to chain further clauses or build.
///
/// `prev_state` is the state just switched to, so that
/// `when(x).on(y).switch_to(z).on(a).switch_to(b)` records
/// `(x, y) -> z` and then `(z, a) -> b`.
pub struct ChainClause<S: State, E: Event> {
    builder: TransitionTableBuilder<S, E>,
    prev_state: S,
}

impl<S: State, E: Event> ChainClause<S, E> {
    /// Add another transition departing from the state just switched to.
    pub fn on(self, event: E) -> OnClause<S, E> {
        OnClause {
            builder: self.builder,
            current_state: self.prev_state,
            event,
        }
    }

    /// When the current state is...
    pub fn when(self, current_state: S) -> WhenClause<S, E> {
        self.builder.when(current_state)
    }

    /// Build the table with the strict policy: unknown `(state, event)`
    /// pairs are errors.
    pub fn build(self) -> TransitionTable<S, E> {
        self.build_with(false)
    }

    /// Build the table with an explicit unknown-event policy.
    pub fn build_with(self, ignore_unknown_events: bool) -> TransitionTable<S, E> {
        TransitionTable::with_policy(ignore_unknown_events, self.builder.transitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EventProcessor, TransitionError};
    use crate::{event_enum, state_enum, transition_map};

    state_enum! {
        enum TestState {
            A,
            B,
            C,
        }
    }

    event_enum! {
        enum TestEvent {
            ToA,
            ToB,
            ToC,
        }
    }

    // All (state, event) pairs, for exhaustive comparison through apply.
    fn all_pairs() -> Vec<(TestState, TestEvent)> {
        let states = [TestState::A, TestState::B, TestState::C];
        let events = [TestEvent::ToA, TestEvent::ToB, TestEvent::ToC];
        states
            .iter()
            .flat_map(|s| events.iter().map(move |e| (*s, *e)))
            .collect()
    }

    #[test]
    fn fluent_builder_matches_literal_map() {
        let built = TransitionTable::builder()
            .when(TestState::A).on(TestEvent::ToB).switch_to(TestState::B)
            .when(TestState::B).on(TestEvent::ToC).switch_to(TestState::C)
            .when(TestState::B).on(TestEvent::ToA).switch_to(TestState::A)
            .when(TestState::C).on(TestEvent::ToA).switch_to(TestState::A)
            .build();

        let literal = TransitionTable::new(transition_map! {
            TestState::A => { TestEvent::ToB => TestState::B },
            TestState::B => {
                TestEvent::ToC => TestState::C,
                TestEvent::ToA => TestState::A,
            },
            TestState::C => { TestEvent::ToA => TestState::A },
        });

        for (state, event) in all_pairs() {
            assert_eq!(built.apply(state, event), literal.apply(state, event));
        }
    }

    #[test]
    fn chained_on_departs_from_switched_to_state() {
        // when(A).on(ToB).switch_to(B).on(ToC).switch_to(C).on(ToA).switch_to(A)
        // records (A, ToB) -> B, (B, ToC) -> C, (C, ToA) -> A.
        let table = TransitionTable::builder()
            .when(TestState::A)
                .on(TestEvent::ToB).switch_to(TestState::B)
                    .on(TestEvent::ToC).switch_to(TestState::C)
                        .on(TestEvent::ToA).switch_to(TestState::A)
            .when(TestState::B).on(TestEvent::ToA).switch_to(TestState::A)
            .build();

        assert_eq!(table.apply(TestState::A, TestEvent::ToB), Ok(TestState::B));
        assert_eq!(table.apply(TestState::B, TestEvent::ToC), Ok(TestState::C));
        assert_eq!(table.apply(TestState::C, TestEvent::ToA), Ok(TestState::A));
        assert_eq!(table.apply(TestState::B, TestEvent::ToA), Ok(TestState::A));

        // Nothing else was recorded.
        assert_eq!(
            table.apply(TestState::A, TestEvent::ToC),
            Err(TransitionError::UndefinedEventTransition {
                state: "A",
                event: "ToC",
            })
        );
    }

    #[test]
    fn ignore_records_a_self_loop() {
        let table = TransitionTable::builder()
            .when(TestState::A).on(TestEvent::ToB).switch_to(TestState::B)
            .when(TestState::A).ignore(TestEvent::ToA)
            .build();

        assert_eq!(table.apply(TestState::A, TestEvent::ToA), Ok(TestState::A));
        assert_eq!(table.apply(TestState::A, TestEvent::ToB), Ok(TestState::B));
    }

    #[test]
    fn ignore_is_equivalent_to_explicit_self_loop() {
        let sugared = TransitionTable::builder()
            .when(TestState::A).ignore(TestEvent::ToA)
            .build();
        let spelled = TransitionTable::builder()
            .when(TestState::A).on(TestEvent::ToA).switch_to(TestState::A)
            .build();

        for (state, event) in all_pairs() {
            assert_eq!(sugared.apply(state, event), spelled.apply(state, event));
        }
    }

    #[test]
    fn chaining_after_ignore_departs_from_same_state() {
        let table = TransitionTable::builder()
            .when(TestState::A).ignore(TestEvent::ToA)
                .on(TestEvent::ToB).switch_to(TestState::B)
            .build();

        assert_eq!(table.apply(TestState::A, TestEvent::ToA), Ok(TestState::A));
        assert_eq!(table.apply(TestState::A, TestEvent::ToB), Ok(TestState::B));
    }

    #[test]
    fn build_defaults_to_strict_policy() {
        let table = TransitionTable::builder()
            .when(TestState::A).on(TestEvent::ToB).switch_to(TestState::B)
            .build();

        assert!(table.apply(TestState::C, TestEvent::ToA).is_err());
    }

    #[test]
    fn build_with_honors_ignore_policy() {
        let table = TransitionTable::builder()
            .when(TestState::A).on(TestEvent::ToB).switch_to(TestState::B)
            .build_with(true);

        assert_eq!(table.apply(TestState::C, TestEvent::ToA), Ok(TestState::C));
        assert_eq!(table.apply(TestState::A, TestEvent::ToC), Ok(TestState::A));
    }

    #[test]
    fn later_entries_overwrite_earlier_ones() {
        let table = TransitionTable::builder()
            .when(TestState::A).on(TestEvent::ToB).switch_to(TestState::B)
            .when(TestState::A).on(TestEvent::ToB).switch_to(TestState::C)
            .build();

        assert_eq!(table.apply(TestState::A, TestEvent::ToB), Ok(TestState::C));
    }
}
