use super::*;

#[test]
fn validate_login_input_trims_identifier() {
    assert_eq!(
        validate_login_input("  guru@sekolah.id ", "rahasia"),
        Ok(("guru@sekolah.id".to_owned(), "rahasia".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("budi", " spasi "),
        Ok(("budi".to_owned(), " spasi ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "rahasia"), Err(MISSING_FIELDS));
    assert_eq!(validate_login_input("budi", ""), Err(MISSING_FIELDS));
}
