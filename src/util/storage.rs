//! Durable session storage backed by `localStorage`.
//!
//! Two independent keys survive page reloads: `token` (the opaque session
//! credential) and `username` (display name only, never re-validated against
//! the server). Requires a browser environment; all functions are no-ops or
//! `None` on the server.

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";
#[cfg(feature = "hydrate")]
const USERNAME_KEY: &str = "username";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(feature = "hydrate")]
fn read_key(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

#[cfg(feature = "hydrate")]
fn write_key(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(feature = "hydrate")]
fn remove_key(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Read the stored session token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        read_key(TOKEN_KEY)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session token verbatim as returned by the backend.
pub fn write_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        write_key(TOKEN_KEY, token);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        remove_key(TOKEN_KEY);
    }
}

/// Read the stored display name, if any.
pub fn read_username() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        read_key(USERNAME_KEY)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the display name shown in the header.
pub fn write_username(username: &str) {
    #[cfg(feature = "hydrate")]
    {
        write_key(USERNAME_KEY, username);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
    }
}

pub fn clear_username() {
    #[cfg(feature = "hydrate")]
    {
        remove_key(USERNAME_KEY);
    }
}
