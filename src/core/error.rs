//! Transition error types.

use thiserror::Error;

/// Errors a transition computation can report.
///
/// Both variants mean the event is not valid in the current state. They are
/// protocol violations surfaced to the caller, never retried or recovered
/// internally.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The table holds no entries at all for the current state.
    #[error("no known transitions from current state '{state}'")]
    UndefinedStateTransitions { state: &'static str },

    /// The table holds entries for the current state, but none for this event.
    #[error("no known transition from current state '{state}' for event '{event}'")]
    UndefinedEventTransition {
        state: &'static str,
        event: &'static str,
    },
}

/// Failure of an [`Fsm::process`](crate::Fsm::process) call.
///
/// Raised when the machine's event processor rejects the event; carries the
/// processor's error payload. The machine's current state is left unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("illegal transition: {0}")]
pub struct IllegalTransition(#[from] pub TransitionError);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_state_message_names_the_state() {
        let err = TransitionError::UndefinedStateTransitions { state: "Stopped" };
        assert_eq!(
            err.to_string(),
            "no known transitions from current state 'Stopped'"
        );
    }

    #[test]
    fn undefined_event_message_names_state_and_event() {
        let err = TransitionError::UndefinedEventTransition {
            state: "Running",
            event: "Start",
        };
        assert_eq!(
            err.to_string(),
            "no known transition from current state 'Running' for event 'Start'"
        );
    }

    #[test]
    fn illegal_transition_carries_the_payload() {
        let cause = TransitionError::UndefinedStateTransitions { state: "Stopped" };
        let err = IllegalTransition::from(cause.clone());
        assert_eq!(err.0, cause);
        assert!(err.to_string().contains("Stopped"));
    }
}
