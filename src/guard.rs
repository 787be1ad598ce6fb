//! Route guard: which views need a session.

use crate::store::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Teachers,
    Students,
}

impl Route {
    /// Map a path to a route. `/` lands on the dashboard.
    pub fn parse(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" | "/dashboard" => Some(Self::Dashboard),
            "/login" => Some(Self::Login),
            "/register" => Some(Self::Register),
            "/teachers" => Some(Self::Teachers),
            "/students" => Some(Self::Students),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Teachers => "/teachers",
            Self::Students => "/students",
        }
    }

    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Login | Self::Register)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Allow,
    RedirectTo(Route),
}

/// Admit a protected view only with a session.
pub fn guard(session: Option<&Session>) -> Guard {
    match session {
        Some(_) => Guard::Allow,
        None => Guard::RedirectTo(Route::Login),
    }
}

/// Guard decision for navigating to `route`.
pub fn resolve(route: Route, session: Option<&Session>) -> Guard {
    if route.is_protected() {
        guard(session)
    } else {
        Guard::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Token;
    use crate::store::Identity;

    fn session() -> Session {
        Session {
            token: Token::new("t"),
            identity: Identity {
                id: "1".to_string(),
                first_name: "Jane".to_string(),
                last_name: "Smith".to_string(),
                email: "j@s.io".to_string(),
                username: "jsmith".to_string(),
            },
        }
    }

    #[test]
    fn redirects_without_session() {
        assert_eq!(guard(None), Guard::RedirectTo(Route::Login));
        assert_eq!(
            resolve(Route::Students, None),
            Guard::RedirectTo(Route::Login)
        );
    }

    #[test]
    fn allows_with_session() {
        let s = session();
        assert_eq!(guard(Some(&s)), Guard::Allow);
        assert_eq!(resolve(Route::Teachers, Some(&s)), Guard::Allow);
    }

    #[test]
    fn public_routes_always_allowed() {
        assert_eq!(resolve(Route::Login, None), Guard::Allow);
        assert_eq!(resolve(Route::Register, None), Guard::Allow);
    }

    #[test]
    fn parses_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Dashboard));
        assert_eq!(Route::parse("/students/"), Some(Route::Students));
        assert_eq!(Route::parse("/nope"), None);
        assert_eq!(Route::parse(Route::Teachers.path()), Some(Route::Teachers));
    }
}
