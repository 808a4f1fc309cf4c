//! Core State and Event traits for state machine types.
//!
//! States and events are values drawn from closed, finite sets of named
//! variants — in practice, fieldless enums. Both traits carry the same
//! bounds; a machine is generic over one of each.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// States are immutable values describing the current position of a machine.
/// Two distinct variants never compare equal; equality is by value.
///
/// # Required Traits
///
/// - `Copy + Eq + Hash`: states are machine-word values, used as table keys
///   and swapped through an atomic cell by the lock-free machine
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable
/// - `Send + Sync`: machines holding states are shared across threads
///
/// The [`state_enum!`](crate::state_enum) macro derives all of this for a
/// plain enum.
///
/// # Example
///
/// ```rust
/// use stator::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum TaskState {
///     Pending,
///     Running,
///     Complete,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Running => "Running",
///             Self::Complete => "Complete",
///         }
///     }
/// }
///
/// assert_eq!(TaskState::Pending.name(), "Pending");
/// ```
pub trait State:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the state's name for display and error messages.
    fn name(&self) -> &'static str;
}

/// Trait for state machine events.
///
/// Events are the triggers that may move a machine from one state to
/// another. The bounds mirror [`State`]; the
/// [`event_enum!`](crate::event_enum) macro derives them for a plain enum.
///
/// # Example
///
/// ```rust
/// use stator::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum TaskEvent {
///     Dispatch,
///     Finish,
/// }
///
/// impl Event for TaskEvent {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Dispatch => "Dispatch",
///             Self::Finish => "Finish",
///         }
///     }
/// }
///
/// assert_eq!(TaskEvent::Finish.name(), "Finish");
/// ```
pub trait Event:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the event's name for display and error messages.
    fn name(&self) -> &'static str;
}
