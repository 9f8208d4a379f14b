use super::*;
use crate::util::claims::Claims;

fn session_with_roles(roles: &[&str]) -> SessionState {
    let mut state = SessionState::default();
    state.establish(
        "tok123".to_owned(),
        Claims {
            email: "a@b.com".to_owned(),
            roles: roles.iter().map(|r| (*r).to_owned()).collect(),
        },
    );
    state.finish_restore();
    state
}

// =============================================================
// Pending while restoring
// =============================================================

#[test]
fn pending_while_session_is_loading() {
    let state = SessionState::default();
    assert_eq!(authorize(&["ADMIN"], &state), Decision::Pending);
    assert_eq!(authorize(&[], &state), Decision::Pending);
}

// =============================================================
// Role intersection
// =============================================================

#[test]
fn allow_when_role_sets_intersect() {
    let state = session_with_roles(&["EMPLOYEE", "HR"]);
    assert_eq!(authorize(&["HR", "ADMIN"], &state), Decision::Allow);
}

#[test]
fn deny_when_role_sets_are_disjoint() {
    let state = session_with_roles(&["EMPLOYEE"]);
    assert_eq!(authorize(&["ADMIN"], &state), Decision::Deny);
}

#[test]
fn comparison_is_case_insensitive() {
    let state = session_with_roles(&["employee"]);
    assert_eq!(authorize(&["Employee"], &state), Decision::Allow);
}

#[test]
fn empty_required_means_any_authenticated_session() {
    let state = session_with_roles(&[]);
    assert_eq!(authorize(&[], &state), Decision::Allow);
    assert_eq!(authorize(&["ADMIN"], &state), Decision::Deny);
}

// =============================================================
// Unauthenticated sessions
// =============================================================

#[test]
fn deny_after_logout() {
    let mut state = session_with_roles(&["ADMIN"]);
    state.clear();
    assert_eq!(authorize(&["ADMIN"], &state), Decision::Deny);
    assert_eq!(authorize(&[], &state), Decision::Deny);
}
