//! Bearer-token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only thing the front-end persists. The browser holder
//! keeps it in `localStorage` so a reload restores the session; expiry is
//! never tracked locally and is only discovered when the API rejects it.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::sync::{Arc, Mutex, PoisonError};

/// `localStorage` key holding the access token.
pub const TOKEN_STORAGE_KEY: &str = "kokmaisa.access_token";

/// Durable home of the bearer token. Exclusively owned by the session provider.
pub trait TokenHolder {
    fn save(&self, token: &str);
    fn read(&self) -> Option<String>;
    fn clear(&self);
}

/// Blank tokens are treated as absent.
fn normalize(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.trim().is_empty())
}

/// Browser holder backed by `window.localStorage`. Inert outside the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalStorageTokenHolder;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenHolder for LocalStorageTokenHolder {
    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                leptos::logging::warn!("localStorage unavailable; session will not survive reload");
                return;
            };
            let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            normalize(local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            normalize(None)
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
    }
}

/// In-process holder. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenHolder {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenHolder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Holder pre-loaded with `token`, as if saved by an earlier page load.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let holder = Self::new();
        holder.save(token);
        holder
    }
}

impl TokenHolder for MemoryTokenHolder {
    fn save(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn read(&self) -> Option<String> {
        normalize(self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
