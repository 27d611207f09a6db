//! Auth Gate
//!
//! Two-state authorization machine seeded from the session store at
//! startup, plus the route guard built on it.

use tracing::{info, warn};

use crate::client::ApiClient;
use crate::domain::Session;
use crate::error::ApiError;
use crate::session_store::SessionStore;
use crate::storage::KeyValueStorage;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    UserManagement,
    NotAuthorized,
    SignIn,
    SignUp,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::UserManagement => "/user-management",
            Route::NotAuthorized => "/not-authorized",
            Route::SignIn => "/signin",
            Route::SignUp => "/signup",
        }
    }

    /// Unknown paths land on the dashboard (and from there on sign-in if needed).
    pub fn from_path(path: &str) -> Self {
        let path = path.split(|c| c == '?' || c == '#').next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "/user-management" => Route::UserManagement,
            "/not-authorized" => Route::NotAuthorized,
            "/signin" => Route::SignIn,
            "/signup" => Route::SignUp,
            _ => Route::Dashboard,
        }
    }

    pub fn is_protected(self) -> bool {
        !matches!(self, Route::SignIn | Route::SignUp)
    }

    pub fn is_admin_only(self) -> bool {
        self == Route::UserManagement
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Authenticated(Session),
    Unauthenticated,
}

/// Outcome of guarding a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(Route),
}

#[derive(Debug, Clone)]
pub struct AuthGate<S> {
    store: SessionStore<S>,
    state: AuthState,
}

impl<S: KeyValueStorage> AuthGate<S> {
    /// Compute the initial state from durable storage
    pub fn new(store: SessionStore<S>) -> Self {
        let state = match store.load() {
            Some(session) => {
                info!(user = %session.user.email, "restored session");
                AuthState::Authenticated(session)
            }
            None => AuthState::Unauthenticated,
        };
        Self { store, state }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            AuthState::Authenticated(session) => Some(session),
            AuthState::Unauthenticated => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.session().map(|session| session.token.as_str())
    }

    pub fn is_admin(&self) -> bool {
        self.session().is_some_and(Session::is_admin)
    }

    /// Persist the session and become authenticated.
    /// A tokenless session is treated as a sign-out.
    pub fn sign_in(&mut self, session: Session) {
        if !session.has_token() {
            warn!("refusing to sign in with an empty token");
            self.sign_out();
            return;
        }
        info!(user = %session.user.email, "signed in");
        self.store.save(&session);
        self.state = AuthState::Authenticated(session);
    }

    /// Clear the stored session and become unauthenticated.
    /// Returns the session that was active, if any.
    pub fn sign_out(&mut self) -> Option<Session> {
        self.store.clear();
        match std::mem::replace(&mut self.state, AuthState::Unauthenticated) {
            AuthState::Authenticated(session) => {
                info!(user = %session.user.email, "signed out");
                Some(session)
            }
            AuthState::Unauthenticated => None,
        }
    }

    pub fn guard(&self, route: Route) -> RouteDecision {
        match &self.state {
            AuthState::Unauthenticated if route.is_protected() => RouteDecision::Redirect(Route::SignIn),
            AuthState::Unauthenticated => RouteDecision::Allow,
            AuthState::Authenticated(_) if !route.is_protected() => {
                RouteDecision::Redirect(Route::Dashboard)
            }
            AuthState::Authenticated(session) if route.is_admin_only() && !session.is_admin() => {
                RouteDecision::Redirect(Route::NotAuthorized)
            }
            AuthState::Authenticated(_) => RouteDecision::Allow,
        }
    }

    /// The route actually shown for `route`, after redirects
    pub fn resolve(&self, route: Route) -> Route {
        let mut current = route;
        // Redirect chains are at most two hops long.
        for _ in 0..3 {
            match self.guard(current) {
                RouteDecision::Allow => return current,
                RouteDecision::Redirect(next) => current = next,
            }
        }
        current
    }
}

/// Tell the server the session is over, then run `end_session` whatever it
/// answered. Without a token no request is sent.
pub async fn sign_out_remote(
    api: &ApiClient,
    token: Option<&str>,
    end_session: impl FnOnce(),
) -> Result<(), ApiError> {
    let result = match token {
        Some(token) => api.signout(token).await,
        None => Err(ApiError::Auth),
    };
    if let Err(err) = &result {
        warn!(%err, "sign out request failed; clearing the session anyway");
    }
    end_session();
    result
}
