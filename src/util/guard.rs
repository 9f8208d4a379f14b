//! Role-based route authorization.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components wrap their content in `components::guard::RequireRole`,
//! which defers to [`authorize`] for the actual decision. Keeping the
//! decision pure means every gating rule tests without a router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::SessionState;

/// Outcome of an authorization check for a protected view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Session restoration has not resolved; render a loading indicator
    /// and make no redirect.
    Pending,
    /// The session may see the view.
    Allow,
    /// The session may not see the view; notify once and navigate away.
    Deny,
}

/// Gate a protected view given the roles allowed to see it.
///
/// While the session is restoring the decision is [`Decision::Pending`].
/// Afterwards an empty `required` list means "any authenticated
/// session"; otherwise the session's uppercased role set must intersect
/// `required`.
#[must_use]
pub fn authorize(required: &[&str], session: &SessionState) -> Decision {
    if session.loading {
        return Decision::Pending;
    }
    if !session.is_authenticated() {
        return Decision::Deny;
    }
    if required.is_empty() {
        return Decision::Allow;
    }
    let roles = session.role_set();
    if required.iter().any(|r| roles.contains(&r.to_ascii_uppercase())) {
        Decision::Allow
    } else {
        Decision::Deny
    }
}
