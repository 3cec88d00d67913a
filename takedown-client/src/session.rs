//! Authentication session
//!
//! One explicit session value with a defined lifecycle: set at login,
//! cleared on logout or on any 401 observed by the transport. The transport
//! is the only reader of the token; nothing else touches auth state.

use std::sync::{Arc, RwLock};

use shared::client::UserInfo;

#[derive(Debug, Clone)]
struct SessionState {
    token: String,
    user: Option<UserInfo>,
}

/// Shared handle to the current authentication state.
///
/// Cheap to clone; all clones observe the same session.
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    inner: Arc<RwLock<Option<SessionState>>>,
}

impl AuthSession {
    /// Create an empty (logged-out) session
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a token (and user info, when known). Called at login.
    pub fn set(&self, token: impl Into<String>, user: Option<UserInfo>) {
        let mut guard = self.inner.write().expect("session lock poisoned");
        *guard = Some(SessionState {
            token: token.into(),
            user,
        });
    }

    /// Drop the session. Called at logout and on 401.
    pub fn clear(&self) {
        let mut guard = self.inner.write().expect("session lock poisoned");
        if guard.take().is_some() {
            tracing::debug!("auth session cleared");
        }
    }

    /// Current bearer token, if logged in
    pub fn token(&self) -> Option<String> {
        let guard = self.inner.read().expect("session lock poisoned");
        guard.as_ref().map(|s| s.token.clone())
    }

    /// `Authorization` header value, if logged in
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }

    /// Logged-in user info, if known
    pub fn user(&self) -> Option<UserInfo> {
        let guard = self.inner.read().expect("session lock poisoned");
        guard.as_ref().and_then(|s| s.user.clone())
    }

    /// Whether a token is currently installed
    pub fn is_authenticated(&self) -> bool {
        let guard = self.inner.read().expect("session lock poisoned");
        guard.is_some()
    }
}
