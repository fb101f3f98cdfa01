use super::*;

#[test]
fn teacher_path_formats_expected_path() {
    assert_eq!(teacher_path("t-123"), "/api/admin/teachers/t-123");
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn status_error_prefers_server_message() {
    let err = status_error(409, r#"{"message":"Email sudah terdaftar"}"#, "Gagal menambah guru.");
    assert_eq!(err, ApiError::Status { status: 409, message: "Email sudah terdaftar".to_owned() });
    assert_eq!(err.to_string(), "Email sudah terdaftar");
}

#[test]
fn status_error_falls_back_when_body_unusable() {
    let not_json = status_error(500, "<html>oops</html>", "Gagal mengambil daftar guru.");
    assert_eq!(not_json.to_string(), "Gagal mengambil daftar guru.");

    let blank = status_error(500, r#"{"message":"  "}"#, "Gagal membuat kelas.");
    assert_eq!(blank.to_string(), "Gagal membuat kelas.");
}

#[test]
fn unauthorized_is_detected_from_status() {
    assert!(status_error(401, "{}", "x").is_unauthorized());
    assert!(!status_error(403, "{}", "x").is_unauthorized());
    assert!(!ApiError::MissingToken.is_unauthorized());
}

#[test]
fn parse_class_list_treats_null_as_empty() {
    assert_eq!(parse_class_list("null").unwrap(), Vec::new());
}

#[test]
fn parse_class_list_reads_items() {
    let body = r#"[{"id":"c1","guru_id":"g1","nama_kelas":"XI IPA 1","deskripsi":"Esai argumentatif","created_at":"2024-08-01T00:00:00Z"}]"#;
    let classes = parse_class_list(body).unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0].nama_kelas, "XI IPA 1");
    assert_eq!(classes[0].deskripsi.as_deref(), Some("Esai argumentatif"));
}

#[test]
fn parse_body_reports_shape_mismatch() {
    assert!(matches!(parse_body::<Vec<Teacher>>(r#"{"message":"x"}"#), Err(ApiError::Body(_))));
}

#[test]
fn session_error_converts_into_api_error() {
    let err: ApiError = DecodeError::Malformed.into();
    assert!(matches!(err, ApiError::Session(DecodeError::Malformed)));
}

#[tokio::test]
async fn authenticated_calls_without_token_fail_before_sending() {
    let cfg = ApiConfig::default();
    assert_eq!(fetch_teachers(&cfg, None).await, Err(ApiError::MissingToken));
    assert_eq!(fetch_classes(&cfg, Some("")).await, Err(ApiError::MissingToken));
    assert_eq!(delete_teacher(&cfg, None, "t-1").await, Err(ApiError::MissingToken));
    let class = NewClass { nama_kelas: "X".to_owned(), deskripsi: String::new() };
    assert_eq!(create_class(&cfg, None, &class).await, Err(ApiError::MissingToken));
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn server_side_calls_are_unavailable() {
    let cfg = ApiConfig::default();
    assert_eq!(fetch_hello(&cfg).await, Err(ApiError::Unavailable));
    assert_eq!(fetch_teachers(&cfg, Some("tok")).await, Err(ApiError::Unavailable));
}
