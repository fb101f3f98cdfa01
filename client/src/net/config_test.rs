use super::*;

#[test]
fn default_points_at_local_backend() {
    assert_eq!(ApiConfig::default().base_url(), DEFAULT_API_URL);
}

#[test]
fn new_trims_trailing_slashes_and_whitespace() {
    assert_eq!(ApiConfig::new(" https://api.sage.test// ").base_url(), "https://api.sage.test");
}

#[test]
fn new_blank_falls_back_to_default() {
    assert_eq!(ApiConfig::new("   "), ApiConfig::default());
    assert_eq!(ApiConfig::new("/"), ApiConfig::default());
}

#[test]
fn endpoint_joins_with_single_slash() {
    let cfg = ApiConfig::new("https://api.sage.test/");
    assert_eq!(cfg.endpoint("/api/classes"), "https://api.sage.test/api/classes");
    assert_eq!(cfg.endpoint("api/hello"), "https://api.sage.test/api/hello");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_document_outside_browser_is_default() {
    assert_eq!(ApiConfig::from_document(), ApiConfig::default());
}
