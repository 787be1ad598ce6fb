use roster_client::api::Token;
use roster_client::store::mvi::Reducer;
use roster_client::store::session::{SessionIntent, SessionReducer};
use roster_client::store::{Identity, RequestStatus, Session, SessionState};

fn session(token: &str) -> Session {
    Session {
        token: Token::new(token),
        identity: Identity {
            id: "t-1".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane@school.edu".to_string(),
            username: "jsmith".to_string(),
        },
    }
}

fn logged_in() -> SessionState {
    SessionReducer::reduce(
        SessionState::default(),
        SessionIntent::AuthSucceeded(session("tok")),
    )
}

#[test]
fn auth_started_sets_loading_and_keeps_session() {
    let state = SessionReducer::reduce(logged_in(), SessionIntent::AuthStarted);
    assert!(state.auth.is_loading());
    assert!(state.is_authenticated());
}

#[test]
fn auth_succeeded_stores_session() {
    let state = logged_in();
    assert_eq!(state.session, Some(session("tok")));
    assert_eq!(state.auth, RequestStatus::Succeeded);
    assert_eq!(state.error(), None);
}

#[test]
fn auth_failed_from_logged_out_stays_logged_out() {
    let loading = SessionReducer::reduce(SessionState::default(), SessionIntent::AuthStarted);
    let state = SessionReducer::reduce(
        loading,
        SessionIntent::AuthFailed("Invalid credentials".to_string()),
    );
    assert!(!state.is_authenticated());
    assert!(!state.auth.is_loading());
    assert_eq!(state.error(), Some("Invalid credentials"));
}

#[test]
fn auth_failed_never_clears_existing_session() {
    let state = SessionReducer::reduce(logged_in(), SessionIntent::AuthFailed("x".to_string()));
    assert_eq!(state.session, Some(session("tok")));
}

#[test]
fn restored_keeps_auth_status() {
    let state = SessionReducer::reduce(
        SessionState::default(),
        SessionIntent::Restored(session("saved")),
    );
    assert!(state.is_authenticated());
    assert_eq!(state.auth, RequestStatus::Idle);
}

#[test]
fn logged_out_resets_everything() {
    let failed = SessionReducer::reduce(logged_in(), SessionIntent::AuthFailed("x".to_string()));
    let state = SessionReducer::reduce(failed, SessionIntent::LoggedOut);
    assert_eq!(state, SessionState::default());
}

#[test]
fn logged_out_twice_is_a_no_op() {
    let once = SessionReducer::reduce(logged_in(), SessionIntent::LoggedOut);
    let twice = SessionReducer::reduce(once.clone(), SessionIntent::LoggedOut);
    assert_eq!(once, twice);
}
