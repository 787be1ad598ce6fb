use serde::{Deserialize, Serialize};

use crate::api::{AuthResponse, Teacher, Token};
use crate::store::mvi::StoreState;
use crate::store::status::RequestStatus;

/// Who is logged in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
}

impl From<Teacher> for Identity {
    fn from(teacher: Teacher) -> Self {
        Self {
            id: teacher.id,
            first_name: teacher.first_name,
            last_name: teacher.last_name,
            email: teacher.email,
            username: teacher.username,
        }
    }
}

/// Authenticated identity plus its bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: Token,
    pub identity: Identity,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Self {
            token: Token::new(response.token),
            identity: response.teacher.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub session: Option<Session>,
    /// Shared by login and register.
    pub auth: RequestStatus,
}

impl StoreState for SessionState {}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.auth.error()
    }
}
