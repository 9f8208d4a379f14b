use super::*;

fn claims(email: &str, roles: &[&str]) -> Claims {
    Claims {
        email: email.to_owned(),
        roles: roles.iter().map(|r| (*r).to_owned()).collect(),
    }
}

fn profile(first: &str, last: &str) -> UserProfile {
    UserProfile {
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: "a@b.com".to_owned(),
        ..UserProfile::default()
    }
}

// =============================================================
// Defaults and queries
// =============================================================

#[test]
fn default_session_is_loading_and_anonymous() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
}

#[test]
fn authenticated_requires_claims_not_profile() {
    let mut state = SessionState::default();
    state.establish("tok123".to_owned(), claims("a@b.com", &["EMPLOYEE"]));
    assert!(state.is_authenticated());
    assert_eq!(state.user, None);
}

#[test]
fn role_set_uppercases_and_merges_profile_role() {
    let mut state = SessionState::default();
    state.establish("tok123".to_owned(), claims("a@b.com", &["employee"]));
    state.apply_profile("tok123", UserProfile {
        role: Some("Admin".to_owned()),
        ..profile("Jo", "Li")
    });
    let roles = state.role_set();
    assert!(roles.contains("EMPLOYEE"));
    assert!(roles.contains("ADMIN"));
    assert_eq!(roles.len(), 2);
}

#[test]
fn display_name_prefers_profile_then_email_local_part() {
    let mut state = SessionState::default();
    state.establish("tok123".to_owned(), claims("jo.li@corp.example", &[]));
    assert_eq!(state.display_name(), "jo.li");

    state.apply_profile("tok123", profile("Jo", "Li"));
    assert_eq!(state.display_name(), "Jo Li");
}

#[test]
fn initials_come_from_display_name() {
    let mut state = SessionState::default();
    state.establish("tok123".to_owned(), claims("a@b.com", &[]));
    state.apply_profile("tok123", profile("Jo", "Li"));
    assert_eq!(state.initials(), "JL");

    state.user = None;
    assert_eq!(state.initials(), "A");

    state.clear();
    assert_eq!(state.initials(), "");
}

// =============================================================
// Login attempt slot
// =============================================================

#[test]
fn second_attempt_is_ignored_while_first_is_pending() {
    let mut state = SessionState::default();
    assert!(state.begin_attempt());
    assert!(!state.begin_attempt());
    state.finish_attempt();
    assert!(state.begin_attempt());
}

// =============================================================
// Establish / profile / clear lifecycle
// =============================================================

#[test]
fn establish_drops_previous_profile() {
    let mut state = SessionState::default();
    state.establish("tok1".to_owned(), claims("a@b.com", &[]));
    state.apply_profile("tok1", profile("Jo", "Li"));
    state.establish("tok2".to_owned(), claims("a@b.com", &[]));
    assert_eq!(state.user, None);
}

#[test]
fn stale_profile_response_is_discarded() {
    let mut state = SessionState::default();
    state.establish("tok1".to_owned(), claims("a@b.com", &[]));
    state.clear();
    assert!(!state.apply_profile("tok1", profile("Jo", "Li")));
    assert_eq!(state.user, None);
}

#[test]
fn profile_for_current_token_is_applied() {
    let mut state = SessionState::default();
    state.establish("tok1".to_owned(), claims("a@b.com", &[]));
    assert!(state.apply_profile("tok1", profile("Jo", "Li")));
    assert_eq!(state.user.as_ref().map(|u| u.first_name.as_str()), Some("Jo"));
}

#[test]
fn clear_removes_token_claims_and_profile_together() {
    let mut state = SessionState::default();
    state.establish("tok1".to_owned(), claims("a@b.com", &["ADMIN"]));
    state.apply_profile("tok1", profile("Jo", "Li"));
    state.clear();
    assert_eq!(state.token, None);
    assert_eq!(state.claims, None);
    assert_eq!(state.user, None);
    assert!(!state.is_authenticated());
}

#[test]
fn finish_restore_clears_loading_only() {
    let mut state = SessionState::default();
    state.finish_restore();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}
