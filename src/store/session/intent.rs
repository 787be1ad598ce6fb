use super::state::Session;
use crate::store::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// Login or register request issued.
    AuthStarted,
    AuthSucceeded(Session),
    AuthFailed(String),
    /// Session rebuilt from storage at startup. Does not touch `auth`.
    Restored(Session),
    LoggedOut,
}

impl Intent for SessionIntent {}
