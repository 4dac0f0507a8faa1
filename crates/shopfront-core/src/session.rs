//! # Session Store
//!
//! The auth slice: current user, login lifecycle flags, and the last
//! login error.
//!
//! ## Login Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐  begin_login()   ┌──────────┐  login_succeeded(user)     │
//! │  │ Signed   │─────────────────►│ Pending  │───────────────────────┐    │
//! │  │ Out      │                  │ loading  │                       ▼    │
//! │  └──────────┘                  └────┬─────┘                 ┌─────────┐│
//! │       ▲                             │ login_failed(msg)     │ Signed  ││
//! │       │                             ▼                       │ In      ││
//! │       │                        ┌──────────┐                 └────┬────┘│
//! │       │                        │ Error    │                      │     │
//! │       │                        │ shown    │                      │     │
//! │       │                        └──────────┘                      │     │
//! │       └──────────────────────── logout() ◄───────────────────────┘     │
//! │                                                                         │
//! │  A failed login leaves any previously signed-in user untouched.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::User;

/// The auth store.
///
/// One login attempt per invocation, no automatic retry. Errors are held
/// as a user-facing message, never thrown past the store.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
    loading: bool,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Marks a login attempt as pending and clears the previous error.
    pub fn begin_login(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Records a successful login.
    pub fn login_succeeded(&mut self, user: User) {
        self.loading = false;
        self.error = None;
        self.user = Some(user);
    }

    /// Records a failed login. The current user, if any, is unchanged.
    pub fn login_failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Clears the session.
    pub fn logout(&mut self) {
        self.user = None;
        self.error = None;
        self.loading = false;
    }
}
