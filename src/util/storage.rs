//! Browser localStorage wrapper for the persisted session record.
//!
//! SYSTEM CONTEXT
//! ==============
//! Durable storage holds exactly two keys: the bearer credential and the
//! serialized user record. Only the session store (and the wired forced-
//! logout path) writes them; everything else reads. Off-browser builds
//! see an empty store and all writes no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;

/// Key under which the bearer credential is stored.
pub const TOKEN_KEY: &str = "streetsaver_token";

/// Key under which the serialized user record is stored.
pub const USER_KEY: &str = "streetsaver_user";

/// Read a string value from `localStorage`.
pub fn read(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a string value to `localStorage`. Best-effort; quota or privacy
/// errors are swallowed.
pub fn write(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove a key from `localStorage`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Serialize and store a JSON value under `key`.
pub fn write_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    write(key, &raw);
}
