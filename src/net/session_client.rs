//! Session lifecycle client: startup restore, login, registration,
//! logout.
//!
//! ARCHITECTURE
//! ============
//! This module is the single writer of `SessionState`. Every transition
//! follows the same order: durable storage first, then the outbound
//! bearer slot, then the in-memory signal. A reload at any point
//! observes either the old session or the new one, never a mix, and no
//! request ever carries a token the store no longer holds.
//!
//! TRADE-OFFS
//! ==========
//! The profile refresh after login is best-effort: a failed fetch is
//! logged and the session stays authenticated on claims alone. UI
//! surfaces fall back to claims-derived naming until a later fetch
//! succeeds.

#[cfg(test)]
#[path = "session_client_test.rs"]
mod session_client_test;

use leptos::prelude::{RwSignal, Update};

use super::api::{self, ApiError};
use super::bearer;
use super::types::{RegistrationPayload, UserProfile};
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;
use crate::util::claims::{self, Claims};
use crate::util::storage::{self, StoredSession};

/// What startup restoration concluded from durable storage.
#[derive(Debug, PartialEq)]
enum RestoreOutcome {
    /// A stored token decoded cleanly; resume the session.
    Authenticated {
        token: String,
        claims: Claims,
        profile: Option<UserProfile>,
    },
    /// No usable session; `wipe` when leftover entries must be cleared.
    Anonymous { wipe: bool },
}

/// Decide the post-restore session from whatever storage held.
///
/// Claims are re-decoded from the stored token rather than trusted from
/// their stored copy, so token and identity can never diverge.
fn resolve_restore(stored: Option<StoredSession>) -> RestoreOutcome {
    match stored {
        None => RestoreOutcome::Anonymous { wipe: false },
        Some(stored) => match claims::decode(&stored.token) {
            Ok(claims) => RestoreOutcome::Authenticated {
                token: stored.token,
                claims,
                profile: stored.profile,
            },
            Err(_) => RestoreOutcome::Anonymous { wipe: true },
        },
    }
}

/// Toast wording for a failed login.
fn login_failure_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::Rejected(_) => "Invalid email or password",
        ApiError::Network(_) | ApiError::Malformed(_) => "Server error occurred",
    }
}

/// Toast wording for a failed registration.
fn register_failure_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::Rejected(_) => "Registration was declined. Check your details",
        ApiError::Network(_) | ApiError::Malformed(_) => "Server error occurred",
    }
}

/// Restore the persisted session once at startup.
///
/// Terminates with `loading = false` on every path (found, absent, or
/// malformed) so route guards can stop rendering their pending state.
pub fn restore_on_startup(session: RwSignal<SessionState>) {
    match resolve_restore(storage::restore()) {
        RestoreOutcome::Authenticated { token, claims, profile } => {
            bearer::set(&token);
            session.update(|s| {
                s.establish(token.clone(), claims);
                if let Some(profile) = profile {
                    s.apply_profile(&token, profile);
                }
                s.finish_restore();
            });
        }
        RestoreOutcome::Anonymous { wipe } => {
            if wipe {
                leptos::logging::warn!("stored session failed to decode; clearing it");
                storage::clear();
            }
            bearer::clear();
            session.update(|s| {
                s.clear();
                s.finish_restore();
            });
        }
    }
}

/// Exchange credentials for a session.
///
/// On success the session is persisted, the bearer slot installed, and
/// the profile refreshed best-effort. On failure the session is left
/// exactly as it was. A call while another attempt is pending is
/// ignored and reports failure without a toast.
pub async fn login(
    session: RwSignal<SessionState>,
    notify: RwSignal<NotifyState>,
    email: &str,
    password: &str,
) -> bool {
    if !session.try_update(SessionState::begin_attempt).unwrap_or(false) {
        return false;
    }
    match api::login(email, password).await {
        Ok(token) => establish_session(session, notify, token, "Login successful").await,
        Err(error) => {
            leptos::logging::warn!("login failed: {error}");
            notify.update(|n| {
                n.warning(login_failure_message(&error));
            });
            session.update(SessionState::finish_attempt);
            false
        }
    }
}

/// Create an account and treat the caller as freshly authenticated.
///
/// Same post-conditions as [`login`].
pub async fn register_user(
    session: RwSignal<SessionState>,
    notify: RwSignal<NotifyState>,
    payload: &RegistrationPayload,
) -> bool {
    if !session.try_update(SessionState::begin_attempt).unwrap_or(false) {
        return false;
    }
    match api::register(payload).await {
        Ok(token) => establish_session(session, notify, token, "Signup successful").await,
        Err(error) => {
            leptos::logging::warn!("registration failed: {error}");
            notify.update(|n| {
                n.warning(register_failure_message(&error));
            });
            session.update(SessionState::finish_attempt);
            false
        }
    }
}

/// Clear the session everywhere: durable storage, bearer slot, memory.
pub fn logout(session: RwSignal<SessionState>, notify: RwSignal<NotifyState>) {
    storage::clear();
    bearer::clear();
    session.update(SessionState::clear);
    notify.update(|n| {
        n.success("Logout successful");
    });
}

/// Adopt a freshly issued token: decode, persist, install, refresh.
async fn establish_session(
    session: RwSignal<SessionState>,
    notify: RwSignal<NotifyState>,
    token: String,
    success_message: &str,
) -> bool {
    let claims = match claims::decode(&token) {
        Ok(claims) => claims,
        Err(error) => {
            // The backend issued something unreadable; fail closed.
            leptos::logging::warn!("issued token failed to decode: {error}");
            storage::clear();
            bearer::clear();
            session.update(|s| {
                s.clear();
                s.finish_attempt();
            });
            notify.update(|n| {
                n.warning("Server error occurred");
            });
            return false;
        }
    };

    storage::save(&token, &claims, None);
    bearer::set(&token);
    session.update(|s| {
        s.establish(token.clone(), claims.clone());
        s.finish_attempt();
    });
    notify.update(|n| {
        n.success(success_message);
    });

    match api::fetch_profile().await {
        Some(profile) => {
            // Skipped if the session moved on while the fetch was out.
            let applied = session
                .try_update(|s| s.apply_profile(&token, profile.clone()))
                .unwrap_or(false);
            if applied {
                storage::save(&token, &claims, Some(&profile));
            }
        }
        None => leptos::logging::warn!("profile fetch failed; continuing on claims"),
    }
    true
}
