//! Persisted client-side state in browser storage.
//!
//! Durable (`localStorage`): the bearer credential and a cached copy of the
//! authenticated user, both cleared on explicit logout. Session-scoped
//! (`sessionStorage`): the reload-once flag for the home screen and a
//! best-effort cache of recent chat messages. Requires a browser
//! environment; every helper degrades to a no-op on the server.

use crate::net::types::User;
use crate::state::chat::ChatEntry;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "searchifi_token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "searchifi_user";
#[cfg(feature = "hydrate")]
const HOME_RELOADED_KEY: &str = "searchifi_home_reloaded";
#[cfg(feature = "hydrate")]
const RECENT_MESSAGES_KEY: &str = "searchifi_recent_messages";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Read the stored bearer credential. Stays until explicit overwrite or
/// logout; there is no expiry handling on the client.
#[must_use]
pub fn token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the bearer credential returned by login/register.
pub fn set_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Persist the authenticated user so the session survives a reload.
pub fn save_user(user: &User) {
    #[cfg(feature = "hydrate")]
    {
        if let (Some(storage), Ok(json)) = (local_storage(), serde_json::to_string(user)) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

/// Restore the cached authenticated user, if any.
#[must_use]
pub fn load_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let json = local_storage()?.get_item(USER_KEY).ok().flatten()?;
        serde_json::from_str(&json).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Explicit logout: drop the credential and the cached user.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

/// Whether the home screen already forced its once-per-session reload.
#[must_use]
pub fn home_reloaded() -> bool {
    #[cfg(feature = "hydrate")]
    {
        session_storage()
            .and_then(|s| s.get_item(HOME_RELOADED_KEY).ok().flatten())
            .is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}

pub fn mark_home_reloaded() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = session_storage() {
            let _ = storage.set_item(HOME_RELOADED_KEY, "true");
        }
    }
}

/// Force a full page reload.
pub fn reload() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

/// Best-effort session cache of the displayed message sequence. Failures
/// are ignored; the cache is advisory only.
pub fn cache_recent_messages(entries: &[ChatEntry]) {
    #[cfg(feature = "hydrate")]
    {
        if let (Some(storage), Ok(json)) = (session_storage(), serde_json::to_string(entries)) {
            let _ = storage.set_item(RECENT_MESSAGES_KEY, &json);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = entries;
    }
}
