use super::*;

#[test]
fn validate_new_class_accepts_empty_description() {
    assert_eq!(
        validate_new_class("  Kelas 7A ", ""),
        Ok(NewClass { nama_kelas: "Kelas 7A".to_owned(), deskripsi: String::new() })
    );
}

#[test]
fn validate_new_class_keeps_description_text() {
    let class = validate_new_class("Biologi", " Praktikum mingguan ").unwrap();
    assert_eq!(class.deskripsi, "Praktikum mingguan");
}

#[test]
fn validate_new_class_requires_name() {
    assert_eq!(validate_new_class("   ", "deskripsi"), Err(MISSING_NAME));
}

#[test]
fn feedback_messages_match_copy() {
    assert_eq!(CLASS_CREATED, "Kelas berhasil dibuat!");
    assert_eq!(EMPTY_LIST, "Anda belum memiliki kelas.");
}
