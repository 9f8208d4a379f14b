//! Process-wide outbound `Authorization` header slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated requests read the current token from here instead of
//! threading it through every call site. The session client mutates the
//! slot strictly after the corresponding credential-store write, and
//! clears it on logout so no later request leaks a stale token.
//!
//! The app runs on the single-threaded browser event loop; thread-local
//! storage is the whole synchronization story.

#[cfg(test)]
#[path = "bearer_test.rs"]
mod bearer_test;

use std::cell::RefCell;

thread_local! {
    static TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Install the token used for subsequent authenticated requests.
pub fn set(token: &str) {
    TOKEN.with(|slot| *slot.borrow_mut() = Some(token.to_owned()));
}

/// Remove the token; subsequent requests go out unauthenticated.
pub fn clear() {
    TOKEN.with(|slot| *slot.borrow_mut() = None);
}

/// The current token, if any.
#[must_use]
pub fn get() -> Option<String> {
    TOKEN.with(|slot| slot.borrow().clone())
}

/// The header value for the current token, e.g. `Bearer tok123`.
#[must_use]
pub fn header_value() -> Option<String> {
    get().map(|token| format!("Bearer {token}"))
}
