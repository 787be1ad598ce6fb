use super::intent::SessionIntent;
use super::state::SessionState;
use crate::store::mvi::Reducer;
use crate::store::status::RequestStatus;

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::AuthStarted => SessionState {
                auth: RequestStatus::Loading,
                ..state
            },
            SessionIntent::AuthSucceeded(session) => SessionState {
                session: Some(session),
                auth: RequestStatus::Succeeded,
            },
            // Failure never touches the session: no partial login is visible.
            SessionIntent::AuthFailed(message) => SessionState {
                auth: RequestStatus::Failed(message),
                ..state
            },
            SessionIntent::Restored(session) => SessionState {
                session: Some(session),
                ..state
            },
            SessionIntent::LoggedOut => SessionState::default(),
        }
    }
}
