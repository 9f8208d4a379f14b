//! Durable browser storage for the session and page drafts.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives reloads through three `localStorage` entries
//! (raw token, claims JSON, profile JSON) keyed separately but always
//! written and cleared together. A half-readable set is treated the same
//! as an absent one: `restore` wipes the entries and reports nothing
//! rather than producing a partial session.
//!
//! All web-sys access is hydrate-gated; the entry-parsing rules are pure
//! so they test natively.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::types::UserProfile;
use crate::util::claims::Claims;

const TOKEN_KEY: &str = "staffboard_token";
const CLAIMS_KEY: &str = "staffboard_claims";
const PROFILE_KEY: &str = "staffboard_profile";

/// The persisted session as read back from durable storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredSession {
    pub token: String,
    pub claims: Claims,
    pub profile: Option<UserProfile>,
}

/// Combine raw storage entries into a session, all-or-nothing.
///
/// Missing token or claims means no session. A present-but-unparsable
/// claims or profile entry also means no session; the caller must then
/// clear the store so no partial state lingers.
#[cfg(any(test, feature = "hydrate"))]
fn parse_entries(token: Option<String>, claims_raw: Option<String>, profile_raw: Option<String>) -> Option<StoredSession> {
    let token = token.filter(|t| !t.is_empty())?;
    let claims: Claims = serde_json::from_str(&claims_raw?).ok()?;
    let profile = match profile_raw {
        None => None,
        Some(raw) => Some(serde_json::from_str::<UserProfile>(&raw).ok()?),
    };
    Some(StoredSession { token, claims, profile })
}

/// Persist token, claims, and (when known) profile in one call.
///
/// Written together so a reload never observes a token without claims.
pub fn save(token: &str, claims: &Claims, profile: Option<&UserProfile>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else { return };
        let Ok(claims_raw) = serde_json::to_string(claims) else { return };
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(CLAIMS_KEY, &claims_raw);
        match profile.and_then(|p| serde_json::to_string(p).ok()) {
            Some(profile_raw) => {
                let _ = storage.set_item(PROFILE_KEY, &profile_raw);
            }
            None => {
                let _ = storage.remove_item(PROFILE_KEY);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, claims, profile);
    }
}

/// Read the persisted session, clearing the store when it is malformed.
pub fn restore() -> Option<StoredSession> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let claims_raw = storage.get_item(CLAIMS_KEY).ok().flatten();
        let profile_raw = storage.get_item(PROFILE_KEY).ok().flatten();
        let had_any = token.is_some() || claims_raw.is_some() || profile_raw.is_some();
        let session = parse_entries(token, claims_raw, profile_raw);
        if session.is_none() && had_any {
            clear();
        }
        session
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove all three session entries.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(CLAIMS_KEY);
            let _ = storage.remove_item(PROFILE_KEY);
        }
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else { return };
        let Ok(raw) = serde_json::to_string(value) else { return };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
