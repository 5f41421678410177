//! Session provider: the single source of truth for who is signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `Session` and provides it through context. Pages and the
//! route guard observe `AuthState` read-only; every mutation goes through
//! `initialize`, `login`, `register`, `logout`, or `update_current_user`.
//!
//! LIFECYCLE
//! =========
//! `Initializing` is the start phase and resolves exactly once, to
//! `Anonymous` or `Authenticated`. Afterwards the session moves between those
//! two through login/logout, and drops to `Anonymous` on its own whenever an
//! authenticated call reports the token as expired.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;

use crate::net::api::{CredentialStore, HttpCredentialStore};
use crate::net::error::AuthError;
use crate::net::token::{LocalStorageTokenHolder, TokenHolder};
use crate::net::types::{LoginRequest, Registration, TokenResponse, User, UserPatch};

/// Observable session record.
///
/// `loading` is true only while the start-up restore is running.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    /// A fresh process starts in the `Initializing` phase.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (self.loading, &self.user) {
            (true, _) => SessionPhase::Initializing,
            (false, None) => SessionPhase::Anonymous,
            (false, Some(_)) => SessionPhase::Authenticated,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Initializing,
    Anonymous,
    Authenticated,
}

/// Session provider over a credential store `C` and token holder `T`.
///
/// Clones share the same state, store and holder.
pub struct Session<C, T> {
    state: ArcRwSignal<AuthState>,
    credentials: Arc<C>,
    tokens: Arc<T>,
}

/// The browser composition: HTTP credential store + `localStorage` token.
pub type AppSession = Session<HttpCredentialStore, LocalStorageTokenHolder>;

impl<C, T> Clone for Session<C, T> {
    fn clone(&self) -> Self {
        Self { state: self.state.clone(), credentials: Arc::clone(&self.credentials), tokens: Arc::clone(&self.tokens) }
    }
}

impl<C, T> Session<C, T>
where
    C: CredentialStore,
    T: TokenHolder,
{
    #[must_use]
    pub fn new(credentials: C, tokens: T) -> Self {
        Self { state: ArcRwSignal::new(AuthState::default()), credentials: Arc::new(credentials), tokens: Arc::new(tokens) }
    }

    /// Read-only handle for reactive observers.
    #[must_use]
    pub fn watch(&self) -> ArcReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Current user, tracked when read inside a reactive scope.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.with(AuthState::phase)
    }

    /// The credential store this session talks to.
    #[must_use]
    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    /// Restore a prior session from the persisted token.
    ///
    /// Never fails: any problem resolves into the signed-out state. Runs at
    /// most once; later calls return immediately.
    pub async fn initialize(&self) {
        if !self.state.with_untracked(|s| s.loading) {
            return;
        }

        let restored = match self.tokens.read() {
            None => None,
            Some(token) => match self.credentials.fetch_me(&token).await {
                Ok(user) => Some(user),
                Err(AuthError::SessionExpired) => {
                    leptos::logging::log!("stored session rejected; starting signed out");
                    // A login may have stored a fresh token meanwhile.
                    if self.tokens.read().as_deref() == Some(token.as_str()) {
                        self.tokens.clear();
                    }
                    None
                }
                Err(e) => {
                    leptos::logging::warn!("session restore failed: {e}");
                    None
                }
            },
        };

        self.state.update(|s| {
            // A login that finished while restoring wins.
            if s.user.is_none() {
                s.user = restored;
            }
            s.loading = false;
        });
    }

    /// Authenticate with email and password.
    ///
    /// # Errors
    ///
    /// Returns the credential store's failure. The existing session, if any,
    /// is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let request = LoginRequest { email: email.trim().to_owned(), password: password.to_owned() };
        let issued = self.credentials.login(&request).await?;
        self.establish(issued).await
    }

    /// Create an account and sign straight into it.
    ///
    /// # Errors
    ///
    /// Same contract as [`Session::login`].
    pub async fn register(&self, registration: &Registration) -> Result<User, AuthError> {
        let issued = self.credentials.register(registration).await?;
        self.establish(issued).await
    }

    async fn establish(&self, issued: TokenResponse) -> Result<User, AuthError> {
        let user = match issued.user {
            Some(user) => user,
            None => self.credentials.fetch_me(&issued.access_token).await?,
        };
        self.tokens.save(&issued.access_token);
        self.state.set(AuthState { user: Some(user.clone()), loading: false });
        leptos::logging::log!("signed in: user={} role={}", user.id, user.account_type);
        Ok(user)
    }

    /// Drop the session and the persisted token. Always succeeds.
    pub fn logout(&self) {
        self.tokens.clear();
        self.state.update(|s| s.user = None);
    }

    /// Persist a profile edit through `PATCH /me` and merge the result.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a session; otherwise the API failure.
    /// `SessionExpired` also signs the user out.
    pub async fn update_current_user(&self, patch: &UserPatch) -> Result<User, AuthError> {
        let Some(current) = self.state.with_untracked(|s| s.user.clone()) else {
            return Err(AuthError::NotAuthenticated);
        };

        let mut user = if patch.is_empty() {
            current.clone()
        } else {
            self.authorized(|token| async move { self.credentials.update_me(&token, patch).await })
                .await?
        };
        if user.account_type != current.account_type {
            leptos::logging::warn!("ignoring account type change from profile update: user={}", user.id);
            user.account_type = current.account_type;
        }

        let merged = self.state.try_update(|s| {
            let same_user = s.user.as_ref().is_some_and(|signed_in| signed_in.id == current.id);
            if same_user {
                s.user = Some(user.clone());
            }
            same_user
        });
        if merged != Some(true) {
            leptos::logging::warn!("dropping profile update for a session that has ended: user={}", user.id);
        }
        Ok(user)
    }

    /// Run an authenticated API call with the held bearer token.
    ///
    /// A `SessionExpired` outcome signs the user out before it is returned,
    /// which sends guarded pages back to the login route. A reply for a token
    /// that has since been replaced leaves the newer session alone.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without a signed-in user, `SessionExpired` when the
    /// token is gone or rejected, otherwise whatever `call` returns.
    pub async fn authorized<F, Fut, R>(&self, call: F) -> Result<R, AuthError>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<R, AuthError>>,
    {
        if self.state.with_untracked(|s| s.user.is_none()) {
            return Err(AuthError::NotAuthenticated);
        }
        let Some(token) = self.tokens.read() else {
            self.expire();
            return Err(AuthError::SessionExpired);
        };

        let result = call(token.clone()).await;
        if matches!(result, Err(AuthError::SessionExpired)) && self.tokens.read().as_deref() == Some(token.as_str()) {
            self.expire();
        }
        result
    }

    fn expire(&self) {
        leptos::logging::warn!("session expired; signing out");
        self.logout();
    }
}
