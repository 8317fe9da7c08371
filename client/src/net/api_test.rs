use super::*;

use futures::executor::block_on;

#[test]
fn login_form_body_has_password_grant_fields_in_order() {
    assert_eq!(
        login_form_body("alice", "secret"),
        "grant_type=password&username=alice&password=secret&scope="
    );
}

#[test]
fn login_form_body_encodes_reserved_characters() {
    assert_eq!(
        login_form_body("a b@x.com", "p&ss=w+rd"),
        "grant_type=password&username=a+b%40x.com&password=p%26ss%3Dw%2Brd&scope="
    );
}

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("tok123"), "Bearer tok123");
}

#[test]
fn status_error_extracts_detail_message() {
    let err = status_error(401, r#"{"detail":"Incorrect username or password"}"#);
    assert_eq!(
        err,
        ApiError::Status { status: 401, message: Some("Incorrect username or password".to_owned()) }
    );
}

#[test]
fn status_error_tolerates_non_json_body() {
    let err = status_error(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502, message: None });
}

#[test]
fn require_token_rejects_missing_and_blank() {
    assert_eq!(require_token(None), Err(ApiError::MissingToken));
    assert_eq!(require_token(Some("  ")), Err(ApiError::MissingToken));
    assert_eq!(require_token(Some("abc")), Ok("abc"));
}

#[test]
fn fetch_books_without_token_short_circuits() {
    let cfg = ApiConfig::default();
    assert_eq!(block_on(fetch_books(&cfg, None)), Err(ApiError::MissingToken));
}

#[test]
fn fetch_profile_without_token_short_circuits() {
    let cfg = ApiConfig::default();
    assert_eq!(block_on(fetch_profile(&cfg, Some(""))), Err(ApiError::MissingToken));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn network_calls_are_unavailable_outside_browser() {
    let cfg = ApiConfig::default();
    assert_eq!(block_on(login(&cfg, "u", "p")), Err(ApiError::Unavailable));
    assert_eq!(block_on(fetch_books(&cfg, Some("t"))), Err(ApiError::Unavailable));
}
