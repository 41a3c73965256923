//! Bearer-token persistence.
//!
//! The session token lives in `localStorage` so a signed-in user survives
//! a reload; the profile itself is re-fetched at startup. Logout wipes the
//! stored token. Requires a browser environment.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "ndarehe_token";

/// Read the persisted session token, if any.
#[must_use]
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage
            .get_item(STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session token after a successful login.
pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted token on logout or when it turns out to be stale.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
