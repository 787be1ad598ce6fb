use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use super::intent::SessionIntent;
use super::reducer::SessionReducer;
use super::state::{Identity, Session, SessionState};
use crate::api::{
    ApiClient, AuthResponse, LoginRequest, RegisterRequest, Token, LOGIN_PATH, REGISTER_PATH,
};
use crate::error::{Error, Result};
use crate::storage::{KeyValueStorage, IDENTITY_KEY, TOKEN_KEY};
use crate::store::mvi::Reducer;

const LOGIN_FALLBACK: &str = "Login failed";
const REGISTER_FALLBACK: &str = "Registration failed";

/// Session Store: owns the authenticated identity and, through the
/// client's [`AuthContext`](crate::api::AuthContext), the bearer header.
///
/// After every transition the header is rederived from the new state, so a
/// session is held exactly when the header is attached.
pub struct SessionStore {
    client: ApiClient,
    storage: Arc<dyn KeyValueStorage>,
    state: Mutex<SessionState>,
}

impl SessionStore {
    pub fn new(client: ApiClient, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            client,
            storage,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.lock().clone()
    }

    pub fn current(&self) -> Option<Session> {
        self.state.lock().session.clone()
    }

    /// Validate, then `POST api/auth/login`.
    ///
    /// # Errors
    /// [`Error::Validation`](crate::Error::Validation) without touching the
    /// network or the state; otherwise whatever the request produced, with
    /// the session left as it was.
    pub async fn login(&self, request: LoginRequest) -> Result<Session> {
        request.validate()?;
        self.authenticate(LOGIN_PATH, &request, LOGIN_FALLBACK).await
    }

    /// Validate, then `POST api/auth/register`. Same contract as `login`.
    pub async fn register(&self, request: RegisterRequest) -> Result<Session> {
        request.validate()?;
        self.authenticate(REGISTER_PATH, &request, REGISTER_FALLBACK)
            .await
    }

    /// Clear the session, the header and the persisted token.
    ///
    /// Safe to call without a session. Storage failures are logged only.
    pub fn logout(&self) {
        let was_authenticated = self.state.lock().is_authenticated();
        self.dispatch(SessionIntent::LoggedOut);

        for key in [TOKEN_KEY, IDENTITY_KEY] {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!(key, error = %e, "Failed to clear persisted session");
            }
        }

        if was_authenticated {
            tracing::info!("Logged out");
        }
    }

    /// Rebuild the session persisted by an earlier run.
    ///
    /// A stored token without a stored identity is not enough, and neither
    /// is a token that cannot form a header: the state stays logged out and
    /// the user has to log in again.
    pub fn restore(&self) -> Result<Option<Session>> {
        let Some(token) = self.storage.get(TOKEN_KEY)? else {
            return Ok(None);
        };

        let identity = self
            .storage
            .get(IDENTITY_KEY)?
            .and_then(|raw| serde_json::from_str::<Identity>(&raw).ok());
        let Some(identity) = identity else {
            tracing::warn!("Stored token has no usable identity, login required");
            return Ok(None);
        };

        let token = Token::new(token);
        if token.bearer_value().is_none() {
            tracing::warn!("Stored token cannot form a header, login required");
            return Ok(None);
        }

        let session = Session { token, identity };
        self.dispatch(SessionIntent::Restored(session.clone()));
        tracing::debug!(username = %session.identity.username, "Session restored");
        Ok(Some(session))
    }

    async fn authenticate<B>(&self, path: &str, body: &B, fallback: &str) -> Result<Session>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(SessionIntent::AuthStarted);

        match self
            .client
            .post_json::<_, AuthResponse>(path, body, fallback)
            .await
        {
            Ok(response) => {
                let session = Session::from(response);
                if session.token.bearer_value().is_none() {
                    let e = Error::Auth {
                        message: fallback.to_string(),
                    };
                    tracing::warn!("Server issued a token that cannot form a header");
                    self.dispatch(SessionIntent::AuthFailed(e.user_message()));
                    return Err(e);
                }
                self.persist(&session);
                self.dispatch(SessionIntent::AuthSucceeded(session.clone()));
                tracing::info!(username = %session.identity.username, "Authenticated");
                Ok(session)
            }
            Err(e) => {
                tracing::warn!(kind = e.kind(), error = %e, "Authentication failed");
                self.dispatch(SessionIntent::AuthFailed(e.user_message()));
                Err(e)
            }
        }
    }

    fn persist(&self, session: &Session) {
        if let Err(e) = self.storage.set(TOKEN_KEY, session.token.expose()) {
            tracing::warn!(error = %e, "Failed to persist token");
        }
        match serde_json::to_string(&session.identity) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(IDENTITY_KEY, &raw) {
                    tracing::warn!(error = %e, "Failed to persist identity");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Failed to encode identity"),
        }
    }

    fn dispatch(&self, intent: SessionIntent) {
        let mut state = self.state.lock();
        *state = SessionReducer::reduce(std::mem::take(&mut *state), intent);
        self.client
            .auth()
            .set(state.session.as_ref().map(|s| s.token.clone()));
    }
}
