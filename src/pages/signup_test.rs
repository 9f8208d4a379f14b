use super::*;

fn complete_input() -> SignupInput {
    SignupInput {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@corp.example".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
        mobile_number: "5551234".to_owned(),
        date_of_birth: "1990-04-01".to_owned(),
        department_uuid: "dep-1".to_owned(),
        role_uuid: "role-1".to_owned(),
    }
}

#[test]
fn complete_input_builds_the_payload() {
    let payload = validate_signup(&complete_input()).expect("payload");
    assert_eq!(payload.first_name, "Ada");
    assert_eq!(payload.password_hash, "secret1");
    assert_eq!(payload.lang_key, "en");
    assert_eq!(payload.department_uuid, "dep-1");
}

#[test]
fn names_must_be_at_least_three_characters() {
    let mut input = complete_input();
    input.first_name = "Al".to_owned();
    assert_eq!(validate_signup(&input), Err("Names must be at least 3 characters."));

    let mut input = complete_input();
    input.last_name = "  X  ".to_owned();
    assert_eq!(validate_signup(&input), Err("Names must be at least 3 characters."));
}

#[test]
fn email_must_look_like_an_address() {
    let mut input = complete_input();
    input.email = "not-an-email".to_owned();
    assert_eq!(validate_signup(&input), Err("Please enter a valid email address."));
}

#[test]
fn password_must_be_six_chars_and_match() {
    let mut input = complete_input();
    input.password = "short".to_owned();
    input.confirm_password = "short".to_owned();
    assert_eq!(validate_signup(&input), Err("Password must be at least 6 characters."));

    let mut input = complete_input();
    input.confirm_password = "secret2".to_owned();
    assert_eq!(validate_signup(&input), Err("Passwords don't match."));
}

#[test]
fn mobile_number_and_birth_date_are_required() {
    let mut input = complete_input();
    input.mobile_number = "123".to_owned();
    assert_eq!(validate_signup(&input), Err("Please enter a valid phone number."));

    let mut input = complete_input();
    input.date_of_birth = "  ".to_owned();
    assert_eq!(validate_signup(&input), Err("Please select a date of birth."));
}

#[test]
fn department_and_role_selections_are_required() {
    let mut input = complete_input();
    input.department_uuid = String::new();
    assert_eq!(validate_signup(&input), Err("Please select a department and a role."));

    let mut input = complete_input();
    input.role_uuid = String::new();
    assert_eq!(validate_signup(&input), Err("Please select a department and a role."));
}
