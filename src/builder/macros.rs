//! Macros for ergonomic state machine construction.

/// Generate a [`State`](crate::State) implementation for a simple enum.
///
/// Derives `Copy`, `Eq`, `Hash`, `Debug` and the serde traits, and
/// implements `name()` from the variant identifiers.
///
/// # Example
///
/// ```
/// use stator::{state_enum, State};
///
/// state_enum! {
///     pub enum WorkflowState {
///         Start,
///         Processing,
///         Done,
///     }
/// }
///
/// assert_eq!(WorkflowState::Processing.name(), "Processing");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate an [`Event`](crate::Event) implementation for a simple enum.
///
/// The event-side twin of [`state_enum!`](crate::state_enum).
///
/// # Example
///
/// ```
/// use stator::{event_enum, Event};
///
/// event_enum! {
///     pub enum WorkflowEvent {
///         Submit,
///         Cancel,
///     }
/// }
///
/// assert_eq!(WorkflowEvent::Cancel.name(), "Cancel");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Build the nested `state -> (event -> state)` mapping from a literal.
///
/// Feeds the direct constructors of
/// [`TransitionTable`](crate::TransitionTable).
///
/// # Example
///
/// ```
/// use stator::{state_enum, event_enum, transition_map, TransitionTable};
///
/// state_enum! {
///     enum S { Idle, Running }
/// }
///
/// event_enum! {
///     enum E { Start }
/// }
///
/// let table = TransitionTable::new(transition_map! {
///     S::Idle => { E::Start => S::Running },
/// });
/// ```
#[macro_export]
macro_rules! transition_map {
    (
        $(
            $from:expr => {
                $( $event:expr => $to:expr ),* $(,)?
            }
        ),* $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut outer = ::std::collections::HashMap::new();
        $(
            #[allow(unused_mut)]
            let mut inner = ::std::collections::HashMap::new();
            $( inner.insert($event, $to); )*
            outer.insert($from, inner);
        )*
        outer
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, EventProcessor, State};
    use crate::table::TransitionTable;

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
    }

    event_enum! {
        enum TestEvent {
            Begin,
            Finish,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn event_enum_macro_generates_trait() {
        assert_eq!(TestEvent::Begin.name(), "Begin");
        assert_eq!(TestEvent::Finish.name(), "Finish");
    }

    #[test]
    fn generated_enums_serialize() {
        let json = serde_json::to_string(&TestState::Processing).unwrap();
        let back: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TestState::Processing);
    }

    #[test]
    fn macros_support_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        event_enum! {
            pub enum PublicEvent {
                Go,
            }
        }

        assert_eq!(PublicState::A.name(), "A");
        assert_eq!(PublicEvent::Go.name(), "Go");
    }

    #[test]
    fn transition_map_builds_nested_mapping() {
        let table = TransitionTable::new(transition_map! {
            TestState::Initial => { TestEvent::Begin => TestState::Processing },
            TestState::Processing => { TestEvent::Finish => TestState::Complete },
        });

        assert_eq!(
            table.apply(TestState::Initial, TestEvent::Begin),
            Ok(TestState::Processing)
        );
        assert_eq!(
            table.apply(TestState::Processing, TestEvent::Finish),
            Ok(TestState::Complete)
        );
        assert!(table.apply(TestState::Complete, TestEvent::Begin).is_err());
    }
}
