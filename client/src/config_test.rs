use super::*;

#[test]
fn default_points_at_local_services() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.books_api_url, "http://localhost:8000/api/v1/books");
    assert_eq!(cfg.backend_api_url, "http://localhost:8001/api/v1");
}

#[test]
fn new_trims_trailing_slash_from_backend() {
    let cfg = ApiConfig::new("http://books/api", "http://users/api/v1///");
    assert_eq!(cfg.backend_api_url, "http://users/api/v1");
    assert_eq!(cfg.token_endpoint(), "http://users/api/v1/token");
}

#[test]
fn books_url_is_kept_verbatim() {
    let cfg = ApiConfig::new("http://books/api/v1/books/", "http://users");
    assert_eq!(cfg.books_api_url, "http://books/api/v1/books/");
}

#[test]
fn profile_endpoint_joins_backend_base() {
    let cfg = ApiConfig::new("http://b", "https://users.example.com/api/v1");
    assert_eq!(cfg.profile_endpoint(), "https://users.example.com/api/v1/users/profile");
}

#[test]
fn from_parts_falls_back_on_missing_or_blank() {
    let cfg = ApiConfig::from_parts(None, Some("   "));
    assert_eq!(cfg, ApiConfig::default());
}

#[test]
fn from_parts_uses_trimmed_values() {
    let cfg = ApiConfig::from_parts(Some(" http://books "), Some("http://users/"));
    assert_eq!(cfg.books_api_url, "http://books");
    assert_eq!(cfg.backend_api_url, "http://users");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_document_is_default_outside_browser() {
    assert_eq!(ApiConfig::from_document(), ApiConfig::default());
}
