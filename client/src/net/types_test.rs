use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_from_wire_accepts_closed_set() {
    assert_eq!(Role::from_wire("student"), Some(Role::Student));
    assert_eq!(Role::from_wire("teacher"), Some(Role::Teacher));
    assert_eq!(Role::from_wire("superadmin"), Some(Role::Superadmin));
}

#[test]
fn role_from_wire_rejects_other_spellings() {
    assert_eq!(Role::from_wire("admin"), None);
    assert_eq!(Role::from_wire("Teacher"), None);
    assert_eq!(Role::from_wire(""), None);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Superadmin).unwrap(), "\"superadmin\"");
    assert_eq!(Role::Teacher.to_string(), "teacher");
}

// =============================================================
// Resource records
// =============================================================

#[test]
fn teacher_deserializes_without_username() {
    let t: Teacher = serde_json::from_value(serde_json::json!({
        "id": "t-1",
        "nama_lengkap": "Budi Santoso",
        "email": "budi@example.com"
    }))
    .unwrap();
    assert_eq!(t.id, "t-1");
    assert_eq!(t.nama_lengkap, "Budi Santoso");
    assert_eq!(t.username, None);
}

#[test]
fn class_tolerates_missing_optional_fields() {
    let c: Class = serde_json::from_value(serde_json::json!({
        "id": "c-1",
        "nama_kelas": "Bahasa Indonesia XI"
    }))
    .unwrap();
    assert_eq!(c.nama_kelas, "Bahasa Indonesia XI");
    assert_eq!(c.deskripsi, None);
    assert_eq!(c.guru_id, None);
}

#[test]
fn registration_sends_student_role() {
    let body = Registration {
        nama_lengkap: "Siti".to_owned(),
        username: "siti".to_owned(),
        email: "siti@example.com".to_owned(),
        password: "rahasia".to_owned(),
        peran: Role::Student,
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["peran"], "student");
    assert_eq!(json["nama_lengkap"], "Siti");
}

#[test]
fn api_message_reads_user_id_field() {
    let msg: ApiMessage =
        serde_json::from_str(r#"{"message":"Akun berhasil dibuat!","userID":"u-9"}"#).unwrap();
    assert_eq!(msg.message.as_deref(), Some("Akun berhasil dibuat!"));
    assert_eq!(msg.user_id.as_deref(), Some("u-9"));
}

#[test]
fn api_message_defaults_when_empty_object() {
    let msg: ApiMessage = serde_json::from_str("{}").unwrap();
    assert_eq!(msg, ApiMessage::default());
}
