//! # Session State Wrapper
//!
//! Shared handle to the auth store.

use std::sync::{Arc, Mutex};

use shopfront_core::Session;

/// Shared, mutex-guarded session store.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState::default()
    }

    /// Executes a function with read access to the session.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}
