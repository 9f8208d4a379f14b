//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionState>` is provided from the app root; the
//! session client (`net::session_client`) is its only writer, while
//! route guards and user-aware components read it to coordinate login
//! redirects and identity-dependent rendering.
//!
//! All transitions live here as plain methods so the lifecycle rules
//! test without a browser.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashSet;

use crate::net::types::UserProfile;
use crate::util::claims::Claims;

/// Composite session: token + claims + profile + restoration flag.
///
/// `token` present with `user` absent is a valid transient state; the
/// profile fetch is asynchronous and allowed to fail without demoting
/// the session.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// Opaque bearer credential, if authenticated.
    pub token: Option<String>,
    /// Identity claims decoded from `token`; never diverges from it.
    pub claims: Option<Claims>,
    /// Full profile fetched from the backend, when available.
    pub user: Option<UserProfile>,
    /// True only while the persisted session is being restored at
    /// startup; never re-enters true afterward.
    pub loading: bool,
    /// True while a login/registration attempt is in flight.
    pub login_pending: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            token: None,
            claims: None,
            user: None,
            loading: true,
            login_pending: false,
        }
    }
}

impl SessionState {
    /// True iff identity claims are present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.claims.is_some()
    }

    /// Uppercased role set from claims plus the profile role, for
    /// authorization checks.
    #[must_use]
    pub fn role_set(&self) -> HashSet<String> {
        let mut roles: HashSet<String> = self
            .claims
            .iter()
            .flat_map(|c| c.roles.iter())
            .map(|role| role.to_ascii_uppercase())
            .collect();
        if let Some(role) = self.user.as_ref().and_then(|u| u.role.as_deref()) {
            if !role.trim().is_empty() {
                roles.insert(role.to_ascii_uppercase());
            }
        }
        roles
    }

    /// Name to show in the navbar and greetings.
    ///
    /// Falls back to the claims email's local part while no profile is
    /// loaded, so an authenticated session always has something to show.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(user) = &self.user {
            let full = format!("{} {}", user.first_name, user.last_name).trim().to_owned();
            if !full.is_empty() {
                return full;
            }
        }
        self.claims
            .as_ref()
            .map(|c| c.email.split('@').next().unwrap_or_default().to_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_default()
    }

    /// One- or two-letter initials for the avatar fallback.
    #[must_use]
    pub fn initials(&self) -> String {
        let name = self.display_name();
        let mut parts = name.split_whitespace();
        let first = parts.next().and_then(|p| p.chars().next());
        let second = parts.next().and_then(|p| p.chars().next());
        match (first, second) {
            (Some(a), Some(b)) => format!("{a}{b}").to_uppercase(),
            (Some(a), None) => a.to_uppercase().to_string(),
            _ => String::new(),
        }
    }

    /// Claim the single in-flight login/registration slot.
    ///
    /// Returns false when another attempt is already pending; the caller
    /// must then ignore the submit entirely.
    pub fn begin_attempt(&mut self) -> bool {
        if self.login_pending {
            return false;
        }
        self.login_pending = true;
        true
    }

    /// Release the in-flight slot after an attempt resolves.
    pub fn finish_attempt(&mut self) {
        self.login_pending = false;
    }

    /// Adopt a freshly issued token and its decoded claims.
    ///
    /// The previous profile is dropped; the follow-up fetch repopulates
    /// it for the new identity.
    pub fn establish(&mut self, token: String, claims: Claims) {
        self.token = Some(token);
        self.claims = Some(claims);
        self.user = None;
    }

    /// Apply a fetched profile, unless the session has moved on.
    ///
    /// A stale response, fetched for a token that is no longer the
    /// current one, is discarded. Returns whether it was applied.
    pub fn apply_profile(&mut self, fetched_for: &str, profile: UserProfile) -> bool {
        if self.token.as_deref() != Some(fetched_for) {
            return false;
        }
        self.user = Some(profile);
        true
    }

    /// Drop token, claims, and profile together.
    pub fn clear(&mut self) {
        self.token = None;
        self.claims = None;
        self.user = None;
    }

    /// Mark startup restoration as finished.
    pub fn finish_restore(&mut self) {
        self.loading = false;
    }
}
