use super::*;

// =============================================================
// UserProfile wire format
// =============================================================

#[test]
fn user_profile_round_trips_all_fields() {
    let profile = UserProfile {
        first_name: "Jo".to_owned(),
        last_name: "Li".to_owned(),
        email: "jo@corp.example".to_owned(),
        image_url: Some("https://cdn.example/jo.png".to_owned()),
        lang_key: Some("en".to_owned()),
        mobile_number: Some("5551234".to_owned()),
        date_of_birth: Some("1990-04-01".to_owned()),
        role: Some("Admin".to_owned()),
        department: Some("Engineering".to_owned()),
    };
    let raw = serde_json::to_string(&profile).expect("serialize");
    let back: UserProfile = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(back, profile);
}

#[test]
fn user_profile_uses_camel_case_keys() {
    let raw = serde_json::json!({
        "firstName": "Jo",
        "lastName": "Li",
        "email": "jo@corp.example",
    });
    let profile: UserProfile = serde_json::from_value(raw).expect("deserialize");
    assert_eq!(profile.first_name, "Jo");
    assert_eq!(profile.last_name, "Li");
    assert_eq!(profile.role, None);
}

// =============================================================
// Employees and teams
// =============================================================

#[test]
fn employee_full_name_joins_and_trims() {
    let employee = Employee {
        id: "e-1".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: String::new(),
        email: "ada@corp.example".to_owned(),
        role: None,
        department: None,
    };
    assert_eq!(employee.full_name(), "Ada");
}

#[test]
fn team_members_default_to_empty() {
    let raw = serde_json::json!({
        "id": "7f9c41d4-4f7c-4cb2-9a2b-0d3a6f2a9b11",
        "name": "Designing",
    });
    let team: Team = serde_json::from_value(raw).expect("deserialize");
    assert!(team.members.is_empty());
}

// =============================================================
// User count body shapes
// =============================================================

#[test]
fn parse_user_count_accepts_bare_number() {
    assert_eq!(parse_user_count(&serde_json::json!(42)), Some(42));
}

#[test]
fn parse_user_count_accepts_count_object() {
    assert_eq!(parse_user_count(&serde_json::json!({ "count": 7 })), Some(7));
}

#[test]
fn parse_user_count_rejects_other_shapes() {
    assert_eq!(parse_user_count(&serde_json::json!("42")), None);
    assert_eq!(parse_user_count(&serde_json::json!({ "total": 7 })), None);
    assert_eq!(parse_user_count(&serde_json::json!(-3)), None);
}
