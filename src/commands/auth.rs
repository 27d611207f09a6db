//! Auth Commands
//!
//! Sign-in, sign-up and sign-out against `/auth/*`. Failures come back as
//! the text to show the user.

use todo_core::domain::{Credentials, Session, SignUpRequest};
use todo_core::ApiClient;
use tracing::{info, warn};

const GENERIC_FAILURE: &str = "An error occurred";

pub async fn login(api: &ApiClient, credentials: &Credentials) -> Result<Session, String> {
    match api.login(credentials).await {
        Ok(session) => Ok(session),
        Err(err) => {
            warn!(%err, "login failed");
            Err(err.user_message(GENERIC_FAILURE))
        }
    }
}

pub async fn signup(api: &ApiClient, request: &SignUpRequest) -> Result<(), String> {
    api.signup(request).await.map_err(|err| {
        warn!(%err, "signup failed");
        err.user_message(GENERIC_FAILURE)
    })?;
    info!(email = %request.email, "account created");
    Ok(())
}

/// Sign out on the server, then run `end_session` whatever it answered
pub async fn signout(api: &ApiClient, token: Option<&str>, end_session: impl FnOnce()) {
    if todo_core::sign_out_remote(api, token, end_session).await.is_ok() {
        info!("signed out on the server");
    }
}
