//! # Auth Operations
//!
//! Login and logout against the session store.
//!
//! Credentials are validated before any network round trip: an empty
//! username or password becomes a stored error message without a request
//! ever being sent. On success the session token is persisted so the next
//! launch can restore it; a persistence failure is logged but never fails
//! the login itself.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use shopfront_api::{ApiClient, TokenStore};
use shopfront_core::types::{Credentials, User};
use shopfront_core::Session;

use crate::state::SessionState;

/// Shown when a login fails without a server-provided message.
const LOGIN_FALLBACK: &str = "Login failed. Please try again.";

/// Session view for the account header and login form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        SessionView {
            user: session.user().cloned(),
            loading: session.is_loading(),
            error: session.error().map(str::to_string),
        }
    }
}

/// Attempts a login and records the outcome in the session store.
///
/// ## Behavior
/// - Blank username or password: fails locally, no request sent
/// - Rejected by the server: the server's own message is stored
/// - Success: user recorded, token persisted for the next launch
/// - A failed attempt leaves any previously signed-in user untouched
pub async fn login(
    session: &SessionState,
    api: &ApiClient,
    tokens: &TokenStore,
    credentials: Credentials,
) -> SessionView {
    if let Err(err) = credentials.validate() {
        debug!(error = %err, "login rejected before request");
        return session.with_mut(|s| {
            s.login_failed(err.to_string());
            SessionView::from(&*s)
        });
    }

    session.with_mut(Session::begin_login);

    match api.login(&credentials).await {
        Ok(response) => {
            if let Err(err) = tokens.save(&response.token) {
                warn!(error = %err, "failed to persist session token");
            }
            debug!(user_id = response.user.id, "login succeeded");
            session.with_mut(|s| {
                s.login_succeeded(response.user);
                SessionView::from(&*s)
            })
        }
        Err(err) => {
            warn!(error = %err, "login failed");
            let message = err.server_message().unwrap_or(LOGIN_FALLBACK).to_string();
            session.with_mut(|s| {
                s.login_failed(message);
                SessionView::from(&*s)
            })
        }
    }
}

/// Signs out: clears the session store and the persisted token.
pub fn logout(session: &SessionState, tokens: &TokenStore) -> SessionView {
    debug!("logout");

    if let Err(err) = tokens.clear() {
        warn!(error = %err, "failed to clear persisted session token");
    }

    session.with_mut(|s| {
        s.logout();
        SessionView::from(&*s)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_api::ApiConfig;

    fn offline_client() -> ApiClient {
        // Reserved TEST-NET-1 address; no request should reach it anyway
        ApiClient::new(ApiConfig::from_env_or(Some(
            "http://192.0.2.1:9".to_string(),
        )))
        .unwrap()
    }

    fn token_store(dir: &tempfile::TempDir) -> TokenStore {
        TokenStore::at_path(dir.path().join("session-token"))
    }

    #[tokio::test]
    async fn test_blank_credentials_fail_without_request() {
        let session = SessionState::new();
        let api = offline_client();
        let dir = tempfile::tempdir().unwrap();
        let tokens = token_store(&dir);

        let view = login(&session, &api, &tokens, Credentials::new("", "pass")).await;

        assert!(view.user.is_none());
        assert!(!view.loading);
        assert_eq!(view.error.as_deref(), Some("username is required"));
        // The store was never marked pending, so no token was written
        assert_eq!(tokens.load().unwrap(), None);
    }

    #[tokio::test]
    async fn test_blank_password_fails_without_request() {
        let session = SessionState::new();
        let api = offline_client();
        let dir = tempfile::tempdir().unwrap();
        let tokens = token_store(&dir);

        let view = login(&session, &api, &tokens, Credentials::new("emilys", "")).await;
        assert_eq!(view.error.as_deref(), Some("password is required"));
    }

    #[test]
    fn test_logout_clears_session_and_token() {
        let session = SessionState::new();
        let dir = tempfile::tempdir().unwrap();
        let tokens = token_store(&dir);
        tokens.save("abc123").unwrap();

        session.with_mut(|s| {
            s.login_succeeded(User {
                id: 1,
                username: "emilys".to_string(),
                email: None,
                first_name: None,
                last_name: None,
                image: None,
            })
        });

        let view = logout(&session, &tokens);

        assert!(view.user.is_none());
        assert_eq!(view.error, None);
        assert_eq!(tokens.load().unwrap(), None);
    }
}
