use super::*;

fn claims_json() -> String {
    serde_json::json!({ "email": "a@b.com", "roles": ["EMPLOYEE"] }).to_string()
}

fn profile_json() -> String {
    serde_json::json!({
        "firstName": "Jo",
        "lastName": "Li",
        "email": "a@b.com",
        "role": "Employee",
    })
    .to_string()
}

// =============================================================
// parse_entries: all-or-nothing rules
// =============================================================

#[test]
fn parse_entries_restores_full_session() {
    let session = parse_entries(Some("tok123".to_owned()), Some(claims_json()), Some(profile_json())).expect("session");
    assert_eq!(session.token, "tok123");
    assert_eq!(session.claims.email, "a@b.com");
    let profile = session.profile.expect("profile");
    assert_eq!(profile.first_name, "Jo");
    assert_eq!(profile.last_name, "Li");
}

#[test]
fn parse_entries_allows_absent_profile() {
    let session = parse_entries(Some("tok123".to_owned()), Some(claims_json()), None).expect("session");
    assert_eq!(session.profile, None);
}

#[test]
fn parse_entries_requires_token() {
    assert_eq!(parse_entries(None, Some(claims_json()), Some(profile_json())), None);
    assert_eq!(parse_entries(Some(String::new()), Some(claims_json()), None), None);
}

#[test]
fn parse_entries_requires_claims() {
    assert_eq!(parse_entries(Some("tok123".to_owned()), None, None), None);
}

#[test]
fn parse_entries_treats_malformed_claims_as_absent() {
    assert_eq!(parse_entries(Some("tok123".to_owned()), Some("{not json".to_owned()), None), None);
}

#[test]
fn parse_entries_rejects_malformed_profile_entirely() {
    // Never a half-restored session: a corrupt profile entry invalidates
    // the whole set even though token and claims parse.
    assert_eq!(
        parse_entries(Some("tok123".to_owned()), Some(claims_json()), Some("<corrupt>".to_owned())),
        None
    );
}

// =============================================================
// Non-hydrate stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn restore_reports_nothing_without_a_browser() {
    assert_eq!(restore(), None);
    clear();
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_json_reports_nothing_without_a_browser() {
    assert_eq!(load_json::<Vec<String>>("staffboard_employees"), None);
}
