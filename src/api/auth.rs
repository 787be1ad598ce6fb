//! Bearer token handling for API requests.
//!
//! The token is kept behind [`AuthContext`], a shared handle the session
//! store writes and the HTTP client reads. No global header state exists.

use std::sync::Arc;

use parking_lot::RwLock;
use reqwest::header::{HeaderName, HeaderValue, AUTHORIZATION};

/// Bearer token that never appears in logs.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when sending or persisting it.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// `Bearer <token>` as a sensitive header value, or `None` if the token
    /// holds bytes a header cannot carry.
    pub fn bearer_value(&self) -> Option<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0)).ok()?;
        value.set_sensitive(true);
        Some(value)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token(••••••••)")
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Shared authorization state for one API client.
///
/// Cloning yields another handle to the same slot.
#[derive(Clone, Default)]
pub struct AuthContext {
    token: Arc<RwLock<Option<Token>>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current token. `None` removes the header.
    pub(crate) fn set(&self, token: Option<Token>) {
        *self.token.write() = token;
    }

    pub fn token(&self) -> Option<Token> {
        self.token.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// `Authorization: Bearer <token>` when a token is held.
    ///
    /// Returns `None` if no session is active. The session store never
    /// installs a token without a valid [`Token::bearer_value`].
    pub fn header(&self) -> Option<(HeaderName, HeaderValue)> {
        let value = self.token.read().as_ref()?.bearer_value()?;
        Some((AUTHORIZATION, value))
    }
}

impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
