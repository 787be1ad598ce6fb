use super::intent::Intent;
use super::state::StoreState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where store state changes.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    type State: StoreState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
