use super::*;

fn token_for(payload: &serde_json::Value) -> String {
    let encoded = Base64UrlUnpadded::encode_string(payload.to_string().as_bytes());
    format!("eyJhbGciOiJIUzI1NiJ9.{encoded}.sig")
}

// =============================================================
// Well-formed tokens
// =============================================================

#[test]
fn decode_reads_email_and_role_list() {
    let token = token_for(&serde_json::json!({
        "email": "a@b.com",
        "roles": ["EMPLOYEE", "ADMIN"],
    }));
    let claims = decode(&token).expect("claims");
    assert_eq!(claims.email, "a@b.com");
    assert_eq!(claims.roles, vec!["EMPLOYEE".to_owned(), "ADMIN".to_owned()]);
}

#[test]
fn decode_normalizes_single_role_string_to_list() {
    let token = token_for(&serde_json::json!({
        "email": "a@b.com",
        "roles": "EMPLOYEE",
    }));
    let claims = decode(&token).expect("claims");
    assert_eq!(claims.roles, vec!["EMPLOYEE".to_owned()]);
}

#[test]
fn decode_is_deterministic() {
    let token = token_for(&serde_json::json!({
        "email": "a@b.com",
        "roles": ["HR"],
    }));
    let first = decode(&token).expect("claims");
    let second = decode(&token).expect("claims");
    assert_eq!(first, second);
}

#[test]
fn decode_defaults_missing_fields() {
    let token = token_for(&serde_json::json!({ "sub": "u-1" }));
    let claims = decode(&token).expect("claims");
    assert_eq!(claims.email, "");
    assert!(claims.roles.is_empty());
}

#[test]
fn decode_drops_blank_role_entries() {
    let token = token_for(&serde_json::json!({
        "email": "a@b.com",
        "roles": ["", "  ", "ADMIN"],
    }));
    let claims = decode(&token).expect("claims");
    assert_eq!(claims.roles, vec!["ADMIN".to_owned()]);

    let token = token_for(&serde_json::json!({ "email": "a@b.com", "roles": "" }));
    assert!(decode(&token).expect("claims").roles.is_empty());
}

// =============================================================
// Malformed tokens
// =============================================================

#[test]
fn decode_rejects_wrong_segment_count() {
    assert_eq!(decode("<malformed>"), Err(DecodeError::Shape));
    assert_eq!(decode("only.two"), Err(DecodeError::Shape));
    assert_eq!(decode("a.b.c.d"), Err(DecodeError::Shape));
    assert_eq!(decode(""), Err(DecodeError::Shape));
}

#[test]
fn decode_rejects_bad_base64_payload() {
    assert_eq!(decode("head.!!!not-base64!!!.sig"), Err(DecodeError::Encoding));
}

#[test]
fn decode_rejects_non_object_payload() {
    let encoded = Base64UrlUnpadded::encode_string(b"not json at all");
    let err = decode(&format!("head.{encoded}.sig")).expect_err("must fail");
    assert!(matches!(err, DecodeError::Payload(_)));
}
