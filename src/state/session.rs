//! Session manager — the single source of truth for authentication state.
//!
//! ARCHITECTURE
//! ============
//! `SessionManager` owns the observable state (`user`, `loading`) behind a
//! shared lock and bridges it to persisted storage. Pages hold clones of the
//! manager, read state through the accessors, and call the three operations;
//! navigation and rendering stay in the presentation layer. The access token
//! never enters the observable state — it lives in the store only.
//!
//! TRADE-OFFS
//! ==========
//! Overlapping sign-in/sign-up calls are not serialized: both requests run
//! and whichever completes last determines the final state. Callers are
//! expected to disable their submit control while a call is outstanding.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::ApiConfig;
use crate::net::auth::{self, AuthError};
use crate::net::types::{AuthSuccess, User};
use crate::storage::{KEY_TOKEN, KEY_USER, SessionStore};

/// Observable authentication state: current user and startup-loading flag.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

/// Owns the session state and mediates authentication against the API.
#[derive(Clone)]
pub struct SessionManager {
    state: Arc<RwLock<SessionState>>,
    config: ApiConfig,
    store: SessionStore,
}

impl SessionManager {
    /// Construct the manager and restore any persisted session.
    ///
    /// Runs once per process start. A session is adopted only when both
    /// persisted keys are present and the stored user record parses; a
    /// partial or malformed record yields "no session" without failing
    /// construction. The stored token is kept for later authenticated use
    /// and is not re-validated here. `loading` is false by the time this
    /// returns and never changes again.
    #[must_use]
    pub fn restore(config: ApiConfig, store: SessionStore) -> Self {
        let manager = Self {
            state: Arc::new(RwLock::new(SessionState { user: None, loading: true })),
            config,
            store,
        };

        let restored = match (manager.store.get(KEY_USER), manager.store.get(KEY_TOKEN)) {
            (Some(raw_user), Some(_token)) => match serde_json::from_str::<User>(&raw_user) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(error = %e, "persisted user record is malformed, dropping session");
                    None
                }
            },
            _ => None,
        };

        {
            let mut state = manager.write();
            state.user = restored;
            state.loading = false;
        }

        manager
    }

    /// Current user, or `None` when signed out.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    /// Whether startup restoration is still in progress.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.read().loading
    }

    /// Create an account and establish a session.
    ///
    /// # Errors
    ///
    /// Returns the classified [`AuthError`]; state and storage are left
    /// untouched on every failure path.
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let success = auth::sign_up(self.config.origin(), name, email, password).await?;
        self.adopt(success)
    }

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns the classified [`AuthError`]; state and storage are left
    /// untouched on every failure path.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let success = auth::sign_in(self.config.origin(), email, password).await?;
        self.adopt(success)
    }

    /// Clear the session from storage and memory. Idempotent.
    pub fn sign_out(&self) {
        self.store.remove(KEY_USER);
        self.store.remove(KEY_TOKEN);
        self.write().user = None;
    }

    /// Persist an established session, then publish it to observers.
    ///
    /// Both keys are written before the in-memory update so no observer can
    /// see a user without a persisted token; a failed write leaves the
    /// in-memory state untouched. A new session replaces any prior one.
    fn adopt(&self, success: AuthSuccess) -> Result<(), AuthError> {
        let serialized = serde_json::to_string(&success.user).map_err(std::io::Error::other)?;
        self.store.set(KEY_USER, &serialized)?;
        self.store.set(KEY_TOKEN, &success.access_token)?;
        self.write().user = Some(success.user);
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().expect("session state lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().expect("session state lock poisoned")
    }
}
