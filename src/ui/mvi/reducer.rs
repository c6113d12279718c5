//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen: `(State, Intent) -> State`.
///
/// Reducers do no I/O. Network calls, file reads and clipboard writes live
/// in the controller that dispatches to them.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
