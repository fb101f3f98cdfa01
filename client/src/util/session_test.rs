use serde_json::json;

use super::*;

#[test]
fn decode_reads_identifier_and_role() {
    let token = unsigned_token(&json!({ "user_id": "u-42", "peran": "teacher" }));
    let identity = decode(&token).unwrap();
    assert_eq!(identity.identifier, "u-42");
    assert_eq!(identity.role, Role::Teacher);
    assert_eq!(identity.expires_at, None);
}

#[test]
fn decode_exposes_but_does_not_enforce_expiry() {
    // Expired long ago; still decodes.
    let token = unsigned_token(&json!({ "user_id": "u-1", "peran": "superadmin", "exp": 1 }));
    let identity = decode(&token).unwrap();
    assert_eq!(identity.role, Role::Superadmin);
    assert_eq!(identity.expires_at, Some(1));
}

#[test]
fn decode_truncates_fractional_expiry() {
    let token = unsigned_token(&json!({ "user_id": "u-2", "peran": "teacher", "exp": 1_900_000_000.5 }));
    let identity = decode(&token).unwrap();
    assert_eq!(identity.role, Role::Teacher);
    assert_eq!(identity.expires_at, Some(1_900_000_000));
}

#[test]
fn decode_ignores_non_numeric_expiry() {
    for exp in [json!("1900000000"), json!(null), json!({ "at": 1 }), json!(true)] {
        let token = unsigned_token(&json!({ "user_id": "u-3", "peran": "student", "exp": exp }));
        let identity = decode(&token).unwrap();
        assert_eq!(identity.identifier, "u-3");
        assert_eq!(identity.expires_at, None);
    }
}

#[test]
fn decode_tolerates_padded_payload() {
    let payload = base64::engine::general_purpose::URL_SAFE
        .encode(json!({ "user_id": "u-7", "peran": "student" }).to_string());
    let token = format!("e30.{payload}.sig");
    assert_eq!(decode(&token).unwrap().identifier, "u-7");
}

#[test]
fn decode_rejects_wrong_segment_count() {
    assert_eq!(decode("abc"), Err(DecodeError::Malformed));
    assert_eq!(decode("a.b"), Err(DecodeError::Malformed));
    assert_eq!(decode("a.b.c.d"), Err(DecodeError::Malformed));
    assert_eq!(decode(""), Err(DecodeError::Malformed));
}

#[test]
fn decode_rejects_empty_payload() {
    assert_eq!(decode("header..sig"), Err(DecodeError::Malformed));
}

#[test]
fn decode_rejects_non_base64_payload() {
    assert!(matches!(decode("e30.!!!.sig"), Err(DecodeError::Base64(_))));
}

#[test]
fn decode_rejects_non_json_payload() {
    let payload = URL_SAFE_NO_PAD.encode("not json");
    assert!(matches!(decode(&format!("e30.{payload}.sig")), Err(DecodeError::Json(_))));
}

#[test]
fn decode_rejects_missing_claims() {
    let no_id = unsigned_token(&json!({ "peran": "teacher" }));
    assert_eq!(decode(&no_id), Err(DecodeError::MissingClaim("user_id")));

    let no_role = unsigned_token(&json!({ "user_id": "u-1" }));
    assert_eq!(decode(&no_role), Err(DecodeError::MissingClaim("peran")));

    let empty_id = unsigned_token(&json!({ "user_id": "", "peran": "teacher" }));
    assert_eq!(decode(&empty_id), Err(DecodeError::MissingClaim("user_id")));
}

#[test]
fn decode_rejects_unknown_role() {
    let token = unsigned_token(&json!({ "user_id": "u-1", "peran": "admin" }));
    assert_eq!(decode(&token), Err(DecodeError::UnknownRole("admin".to_owned())));
}

#[test]
fn decode_ignores_signature_contents() {
    let token = unsigned_token(&json!({ "user_id": "u-1", "peran": "teacher" }));
    let (head, _) = token.rsplit_once('.').unwrap();
    let forged = format!("{head}.forged");
    assert_eq!(decode(&forged).unwrap().role, Role::Teacher);
}
